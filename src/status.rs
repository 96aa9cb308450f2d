use crate::goal::is_notification_worthy;
use crate::store::StateStore;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Status endpoint response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub stars: u64,
    pub goal: u64,
    pub in_worthy_window: bool,
    pub poll_interval_seconds: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Liveness probe response (minimal, just indicates the process is running)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub status: String,
}

/// Application state for the status endpoint
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<StateStore>,
    pub goal: u64,
}

/// Start the status HTTP server
pub async fn start_status_server(app_state: AppState, port: u16) -> anyhow::Result<()> {
    let app = Router::new()
        .route("/status", get(status))
        .route("/livez", get(liveness_check))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Status server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Current progress towards the goal, read from the shared store. The poll
/// loop stays the store's only writer; this handler only reads.
async fn status(State(state): State<AppState>) -> impl IntoResponse {
    let stars = state.store.star_count();

    let response = StatusResponse {
        stars,
        goal: state.goal,
        in_worthy_window: is_notification_worthy(stars, state.goal),
        poll_interval_seconds: state.store.poll_interval().as_secs(),
        updated_at: state.store.updated_at(),
    };

    (StatusCode::OK, Json(response))
}

/// Liveness probe - just checks if the process is alive
async fn liveness_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(LivenessResponse {
            status: "alive".to_string(),
        }),
    )
}
