use crate::auth::JwtConfig;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Notes |
/// |----------|---------|-------|
/// | HTTP_PORT | 3000 | HTTP API port |
/// | DATABASE_URL | sqlite:deliverus.db | SQLite database |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | LOG_LEVEL | info | overridden by RUST_LOG |
/// | LOG_JSON | false | JSON log lines |
/// | LOG_DIR | (unset) | daily rotating log files |
/// | JWT_SECRET | dev fallback | required outside development |
/// | JWT_ISSUER | deliverus | |
/// | JWT_AUDIENCE | deliverus-clients | |
/// | JWT_EXPIRATION_MINUTES | 1440 | |
///
/// ```ignore
/// DATABASE_URL=sqlite:/data/deliverus.db HTTP_PORT=8080 cargo run -p deliverus-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub database_url: String,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    pub jwt: JwtConfig,
}

impl Config {
    /// Require a secret env var: must be set and non-empty in non-development environments.
    pub(crate) fn require_secret(name: &str, environment: &str) -> Result<String, BoxError> {
        let val = match std::env::var(name) {
            Ok(v) => v,
            Err(_) => {
                if environment != "development" {
                    return Err(format!("{name} must be set in {environment} environment").into());
                }
                format!("dev-{name}-not-for-production")
            }
        };
        if val.is_empty() && environment != "development" {
            return Err(format!("{name} must not be empty in {environment} environment").into());
        }
        Ok(val)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        Ok(Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:deliverus.db".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            jwt: JwtConfig::from_env(&environment)?,
            environment,
        })
    }

    /// Override the port and database, keeping everything else from the environment
    ///
    /// Used by tests.
    pub fn with_overrides(database_url: impl Into<String>, http_port: u16) -> Result<Self, BoxError> {
        let mut config = Self::from_env()?;
        config.database_url = database_url.into();
        config.http_port = http_port;
        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_secret_dev_fallback() {
        let secret = Config::require_secret("DELIVERUS_TEST_UNSET_SECRET", "development").unwrap();
        assert_eq!(secret, "dev-DELIVERUS_TEST_UNSET_SECRET-not-for-production");
    }

    #[test]
    fn test_require_secret_rejected_in_production() {
        let err = Config::require_secret("DELIVERUS_TEST_UNSET_SECRET", "production").unwrap_err();
        assert!(err.to_string().contains("must be set in production"));
    }
}
