//! HTTP middleware

mod trace;

pub use trace::{REQUEST_ID_HEADER, RequestSpan};
