use axum::{routing::get, Json, Router};

use crate::api_models::health::HealthResponse;
use crate::app::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

// Liveness only, never touches the item store.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
