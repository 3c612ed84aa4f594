use axum::{extract::State, routing::get, Json, Router};
use jetway_order::SystemStats;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/stats", get(get_stats))
}

/// GET /v1/stats
async fn get_stats(State(state): State<AppState>) -> Json<SystemStats> {
    Json(state.registry.statistics())
}
