//! Carmate API: shopper-facing REST server.
//!
//! Serves catalog queries, the conversational assistant, and a
//! per-session garage over an immutable catalog snapshot.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use cm_api::config::ApiConfig;
use cm_api::garage::GarageStore;
use cm_api::routes;
use cm_api::state::AppState;
use cm_catalog::FileCatalogSource;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "cm-api starting");

    let config = ApiConfig::load()?;

    let state = match &config.catalog_path {
        Some(path) => {
            tracing::info!(path = %path, "loading catalog");
            AppState::from_source(&FileCatalogSource::new(path)).await?
        }
        None => {
            tracing::warn!("no catalog path configured, serving bundled sample catalog");
            AppState::with_sample_data()
        }
    };

    let state = state.with_garage(GarageStore::with_max_sessions(config.max_garage_sessions));
    let app = routes::build_router(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
