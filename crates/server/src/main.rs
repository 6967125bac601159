use std::{net::SocketAddr, path::Path, sync::Arc};

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use shared::{
    domain::Talk,
    error::{ApiError, ApiException},
    protocol::TALKS_ROUTE,
};
use storage::JsonTalkStore;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod app_state;
mod config;

use api::ApiContext;
use app_state::AppState;
use config::load_settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = load_settings();
    let state = AppState {
        api: ApiContext {
            talks: Arc::new(JsonTalkStore::new(&settings.talks_path)),
        },
    };
    let app = build_router(Arc::new(state), &settings.static_dir);

    let addr: SocketAddr = settings.bind_addr.parse()?;
    info!(
        %addr,
        talks_path = %settings.talks_path.display(),
        static_dir = %settings.static_dir.display(),
        "server listening"
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

fn build_router(state: Arc<AppState>, static_dir: &Path) -> Router {
    Router::new()
        .route(TALKS_ROUTE, get(http_list_talks))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn http_list_talks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Talk>>, (StatusCode, Json<ApiError>)> {
    api::list_talks(&state.api)
        .await
        .map(Json)
        .map_err(error_response)
}

fn error_response(err: ApiException) -> (StatusCode, Json<ApiError>) {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ApiError::from(err)))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
