//! Data models
//!
//! Shared between deliverus-server and deliverus-client (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY), timestamps are Unix millis.

pub mod order;
pub mod product;
pub mod restaurant;
pub mod restaurant_category;

// Re-exports
pub use order::*;
pub use product::*;
pub use restaurant::*;
pub use restaurant_category::*;
