use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    Json,
};

use crate::api_models::body::JsonObject;
use crate::api_models::item::{CreateItem, DeleteItemResponse, ItemResponse, UpdateItem};
use crate::app::AppState;
use crate::handler::error::AppError;
use crate::models::{Item, ItemChanges, NewItem};

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            code: item.code,
            name: item.name,
            description: item.description,
            quantity: item.quantity,
            location: item.location,
            created_at: item.created_at,
        }
    }
}

impl From<CreateItem> for NewItem {
    fn from(payload: CreateItem) -> Self {
        Self {
            code: payload.code,
            name: payload.name,
            description: payload.description,
            quantity: payload.quantity,
            location: payload.location,
        }
    }
}

impl From<UpdateItem> for ItemChanges {
    fn from(payload: UpdateItem) -> Self {
        Self {
            code: payload.code,
            name: payload.name,
            description: payload.description,
            quantity: payload.quantity,
            location: payload.location,
        }
    }
}

/// Ids outside the `i32` column range cannot exist and read as not found.
fn parse_item_id(path: Result<Path<i64>, PathRejection>) -> Result<i32, AppError> {
    let Path(raw) = path?;
    i32::try_from(raw).map_err(|_| AppError::NotFound)
}

/// POST /items
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<JsonObject<CreateItem>>, JsonRejection>,
) -> Result<Json<ItemResponse>, AppError> {
    let Json(JsonObject(payload)) = payload?;
    let created = state.items.create(&payload.into())?;
    tracing::info!(item_id = created.id, code = %created.code, "item created");
    Ok(Json(created.into()))
}

/// GET /items
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<ItemResponse>>, AppError> {
    let items = state.items.list()?;
    let response: Vec<ItemResponse> = items.into_iter().map(Into::into).collect();
    Ok(Json(response))
}

/// GET /items/{id}
pub async fn get_item(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<ItemResponse>, AppError> {
    let item_id = parse_item_id(path)?;
    let found = state.items.get(item_id)?.ok_or(AppError::NotFound)?;
    Ok(Json(found.into()))
}

/// PUT /items/{id}, only the fields present in the body are written.
pub async fn update_item(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<JsonObject<UpdateItem>>, JsonRejection>,
) -> Result<Json<ItemResponse>, AppError> {
    let item_id = parse_item_id(path)?;
    let Json(JsonObject(payload)) = payload?;
    let changes: ItemChanges = payload.into();
    let updated = state
        .items
        .update(item_id, &changes)?
        .ok_or(AppError::NotFound)?;
    tracing::info!(item_id, "item updated");
    Ok(Json(updated.into()))
}

/// DELETE /items/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteItemResponse>, AppError> {
    let item_id = parse_item_id(path)?;
    if !state.items.delete(item_id)? {
        return Err(AppError::NotFound);
    }
    tracing::info!(item_id, "item deleted");
    Ok(Json(DeleteItemResponse { ok: true }))
}
