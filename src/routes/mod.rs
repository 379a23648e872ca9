use axum::Router;

use crate::app::AppState;

mod item;
mod root;

pub fn build_routes() -> Router<AppState> {
    Router::new()
        .merge(root::router())
        .merge(item::router())
}
