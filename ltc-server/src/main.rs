use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

use ltc_server::config::AppConfig;
use ltc_server::web::{AppState, create_router};
use ltc_server::webwatch::WebWatchClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    // RUST_LOG wins; DEBUG only raises the default level.
    let default_level = if config.debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(env_filter)
        .init();

    info!(base_url = %config.webwatch.base_url, "using WebWatch upstream");

    let client = WebWatchClient::new(config.webwatch)?;
    let app = create_router(AppState::new(client));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "listening");
    info!("endpoints: GET /, /health, /routes, /routes/:route?direction=&stop=&latitude=&longitude=");

    axum::serve(listener, app).await?;
    Ok(())
}
