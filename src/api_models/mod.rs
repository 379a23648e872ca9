pub mod body;
pub mod health;
pub mod item;

pub use body::JsonObject;
pub use health::HealthResponse;
pub use item::{CreateItem, DeleteItemResponse, ItemResponse, UpdateItem};
