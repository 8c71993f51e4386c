use fripe_server::{AppState, Config, Server, init_logger_with_file};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(
        std::env::var("LOG_LEVEL").ok().as_deref(),
        config.log_dir.as_deref(),
    );

    tracing::info!("Fripe server starting...");

    let state = AppState::initialize(&config).await?;

    let server = Server::with_state(config, state);
    server.run().await?;

    Ok(())
}
