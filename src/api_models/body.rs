use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Request body that must be a JSON object.
///
/// serde also lets a struct be filled positionally from an array; wrapping a
/// request type in `JsonObject` refuses that form.
#[derive(Debug)]
pub struct JsonObject<T>(pub T);

impl<'de, T> Deserialize<'de> for JsonObject<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = Map::<String, Value>::deserialize(deserializer)?;
        serde_json::from_value(Value::Object(fields))
            .map(JsonObject)
            .map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_models::item::{CreateItem, UpdateItem};
    use serde_json::json;

    #[test]
    fn accepts_objects() {
        let JsonObject(body) =
            serde_json::from_value::<JsonObject<CreateItem>>(json!({"code": "A1", "name": "Widget"}))
                .unwrap();
        assert_eq!(body.code, "A1");
    }

    #[test]
    fn rejects_positional_arrays() {
        assert!(serde_json::from_value::<JsonObject<CreateItem>>(json!(["A1", "Widget", null, 5, null])).is_err());
        assert!(serde_json::from_value::<JsonObject<UpdateItem>>(json!([])).is_err());
    }

    #[test]
    fn field_errors_still_surface() {
        let err = serde_json::from_value::<JsonObject<CreateItem>>(json!({"name": "Widget"})).unwrap_err();
        assert!(err.to_string().contains("code"));
    }
}
