use std::net::SocketAddr;

use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use concordance_core::{Aggregator, FetchConfig, QueryService, SiteFetcher};
use concordance_web::api;
use concordance_web::config::ServerConfig;
use concordance_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "concordance_web=debug,concordance_core=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    let fetcher = SiteFetcher::new(FetchConfig::default())?;
    let service = QueryService::new(Aggregator::new(fetcher));
    let state = AppState::new(service);

    let app = api::router()
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(api::handle_panic))
        .with_state(state);

    let addr: SocketAddr = config.socket_addr()?;
    tracing::info!("Starting sentence-scraper on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
