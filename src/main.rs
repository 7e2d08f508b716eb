use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tradedesk::config::Config;
use tradedesk::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tradedesk=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!("Starting TradeDesk server on {}:{}", config.host, config.port);

    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState::new(config);

    let simulation = tradedesk::spawn_simulation(state.clone());

    let app = tradedesk::app(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("TradeDesk server listening on {}", addr);

    axum::serve(listener, app).await?;

    simulation.abort();
    Ok(())
}
