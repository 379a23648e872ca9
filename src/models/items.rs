use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::schema::items;

#[derive(Queryable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Item {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = items)]
pub struct NewItem {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub location: Option<String>,
}

/// Partial update of an item.
///
/// `None` leaves a column untouched. For the nullable columns the inner
/// option distinguishes "set to NULL" (`Some(None)`) from "set to value".
#[derive(AsChangeset, Debug, Default, Clone, PartialEq)]
#[diesel(table_name = items)]
pub struct ItemChanges {
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub quantity: Option<i32>,
    pub location: Option<Option<String>>,
}

impl ItemChanges {
    pub fn is_empty(&self) -> bool {
        self.code.is_none()
            && self.name.is_none()
            && self.description.is_none()
            && self.quantity.is_none()
            && self.location.is_none()
    }

    /// Applies the present fields to `item` in place.
    pub fn apply_to(&self, item: &mut Item) {
        if let Some(code) = &self.code {
            item.code = code.clone();
        }
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(description) = &self.description {
            item.description = description.clone();
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
        if let Some(location) = &self.location {
            item.location = location.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Item {
        Item {
            id: 1,
            code: "A1".to_string(),
            name: "Widget".to_string(),
            description: Some("blue".to_string()),
            quantity: 5,
            location: Some("shelf 3".to_string()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn empty_changes_leave_item_untouched() {
        let changes = ItemChanges::default();
        assert!(changes.is_empty());

        let original = widget();
        let mut item = original.clone();
        changes.apply_to(&mut item);
        assert_eq!(item, original);
    }

    #[test]
    fn apply_only_touches_present_fields() {
        let changes = ItemChanges {
            quantity: Some(9),
            description: Some(None),
            ..Default::default()
        };
        assert!(!changes.is_empty());

        let original = widget();
        let mut item = original.clone();
        changes.apply_to(&mut item);

        assert_eq!(item.quantity, 9);
        assert_eq!(item.description, None);
        assert_eq!(item.code, original.code);
        assert_eq!(item.name, original.name);
        assert_eq!(item.location, original.location);
        assert_eq!(item.created_at, original.created_at);
    }
}
