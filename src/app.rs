use std::sync::Arc;

use axum::Router;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

use crate::repositories::ItemRepository;
use crate::routes;
use crate::utils::middleware::{self, AllowedOrigins};

#[derive(Clone)]
pub struct AppState {
    pub items: Arc<dyn ItemRepository>,
}

pub fn build_app(items: Arc<dyn ItemRepository>, allowed_origins: &AllowedOrigins) -> Router {
    let state = AppState { items };

    routes::build_routes()
        .with_state(state)
        .layer(middleware::cors_layer(allowed_origins))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
