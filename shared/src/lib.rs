//! Shared types for DeliverUS
//!
//! Domain models and the unified error system used by both the
//! server and the API client.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use http;

pub use error::{AppError, AppResult, ErrorCode};
