use axum::{routing::get, Router};

use crate::app::AppState;
use crate::handler::item::{create_item, delete_item, get_item, list_items, update_item};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
}
