use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;

/// Shared application state, cloned into every handler
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
    pub jwt_service: JwtService,
}

impl ServerState {
    pub fn new(config: Config, db: DbService) -> Self {
        let jwt_service = JwtService::with_config(config.jwt.clone());
        Self {
            config,
            pool: db.pool,
            jwt_service,
        }
    }

    /// Open the configured database (running migrations) and build the state
    pub async fn initialize(config: &Config) -> Result<Self, shared::AppError> {
        let db = DbService::new(&config.database_url).await?;
        Ok(Self::new(config.clone(), db))
    }

    pub fn get_jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }
}
