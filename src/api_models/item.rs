use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateItem {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub quantity: i32,
    pub location: Option<String>,
}

/// Body of `PUT /items/{id}`.
///
/// Omitted fields stay `None` and are left unchanged. `code`, `name` and
/// `quantity` reject an explicit `null`; `description` and `location` accept
/// it and clear the column.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateItem {
    #[serde(default, deserialize_with = "present")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub quantity: Option<i32>,
    #[serde(default, deserialize_with = "nullable")]
    pub location: Option<Option<String>>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct DeleteItemResponse {
    pub ok: bool,
}
