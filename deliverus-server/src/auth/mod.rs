//! Caller identity: JWT validation and the `CurrentUser` extractor

mod extractor;
pub mod jwt;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
