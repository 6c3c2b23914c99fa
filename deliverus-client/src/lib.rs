//! DeliverUS Client - HTTP client for the restaurant API
//!
//! ```ignore
//! let http = ClientConfig::new("http://localhost:3000")
//!     .with_token(token)
//!     .build_http_client()?;
//! let mine = http.restaurants().get_all().await?;
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod restaurant;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use restaurant::RestaurantClient;

// Re-export shared types for convenience
pub use shared::models;
