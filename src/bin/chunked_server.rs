use http_fixtures::{app, config::Config, server, telemetry};

const DEFAULT_PORT: u16 = 5001;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init();

    tracing::info!("chunked fixture server starting");

    let config = Config::from_env("CHUNKED_SERVER", DEFAULT_PORT)?;
    config.log_startup();

    server::run(&config, app::chunked_router()).await
}
