use anyhow::anyhow;
use deliverus_server::{Config, Server, ServerState, init_logger_with_file, print_banner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load .env (missing file is fine)
    let _ = dotenv::dotenv();

    // 2. Configuration
    let config = Config::from_env().map_err(|e| anyhow!("Invalid configuration: {e}"))?;

    // 3. Logging (guard flushes file output on exit)
    let _log_guard = init_logger_with_file(
        Some(config.log_level.as_str()),
        config.log_json,
        config.log_dir.as_deref(),
    );

    print_banner();
    tracing::info!("DeliverUS server starting (env: {})", config.environment);
    if config.is_development() && config.jwt.secret.starts_with("dev-") {
        tracing::warn!("JWT_SECRET not set, using development secret");
    }

    // 4. Database + state
    let state = ServerState::initialize(&config).await?;

    // 5. Serve
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
