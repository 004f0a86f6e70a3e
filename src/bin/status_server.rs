use http_fixtures::{app, config::Config, server, telemetry};

const DEFAULT_PORT: u16 = 5000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init();

    tracing::info!("status fixture server starting");

    let config = Config::from_env("STATUS_SERVER", DEFAULT_PORT)?;
    config.log_startup();

    server::run(&config, app::status_router()).await
}
