//! DeliverUS restaurant server
//!
//! # Modules
//!
//! ```text
//! deliverus-server/src/
//! ├── core/        # config, state, HTTP server
//! ├── auth/        # JWT validation, CurrentUser extractor
//! ├── db/          # SQLite pool, migrations, repositories
//! ├── api/         # routes and handlers
//! ├── middleware/  # per-request trace span
//! └── utils/       # logger, input validation
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod middleware;
pub mod utils;

pub use api::{build_app, build_router};
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use db::DbService;
pub use shared::{AppError, AppResult};

pub use utils::logger::init_logger_with_file;

// Security logging macro
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

pub fn print_banner() {
    println!(
        r#"
    ____       ___                 __  _______
   / __ \___  / (_)   _____  _____/ / / / ___/
  / / / / _ \/ / / | / / _ \/ ___/ / / /\__ \
 / /_/ /  __/ / /| |/ /  __/ /  / /_/ /___/ /
/_____/\___/_/_/ |___/\___/_/   \____//____/
    "#
    );
}
