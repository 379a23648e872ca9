use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;

use super::{ItemRepository, RepoError};
use crate::models::{Item, ItemChanges, NewItem};

/// Process-local item store with the same semantics as the Postgres one.
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    state: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    rows: BTreeMap<i32, Item>,
    last_id: i32,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryState>, RepoError> {
        self.state.lock().map_err(|_| RepoError::Poisoned)
    }
}

impl ItemRepository for InMemoryItemRepository {
    fn init_schema(&self) -> Result<(), RepoError> {
        Ok(())
    }

    fn create(&self, new_item: &NewItem) -> Result<Item, RepoError> {
        let mut state = self.lock()?;
        state.last_id += 1;
        let item = Item {
            id: state.last_id,
            code: new_item.code.clone(),
            name: new_item.name.clone(),
            description: new_item.description.clone(),
            quantity: new_item.quantity,
            location: new_item.location.clone(),
            created_at: Utc::now(),
        };
        state.rows.insert(item.id, item.clone());
        Ok(item)
    }

    fn get(&self, item_id: i32) -> Result<Option<Item>, RepoError> {
        Ok(self.lock()?.rows.get(&item_id).cloned())
    }

    fn list(&self) -> Result<Vec<Item>, RepoError> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }

    fn update(&self, item_id: i32, changes: &ItemChanges) -> Result<Option<Item>, RepoError> {
        let mut state = self.lock()?;
        Ok(state.rows.get_mut(&item_id).map(|item| {
            changes.apply_to(item);
            item.clone()
        }))
    }

    fn delete(&self, item_id: i32) -> Result<bool, RepoError> {
        Ok(self.lock()?.rows.remove(&item_id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_item(code: &str, name: &str) -> NewItem {
        NewItem {
            code: code.to_string(),
            name: name.to_string(),
            description: None,
            quantity: 0,
            location: None,
        }
    }

    #[test]
    fn ids_are_assigned_sequentially_and_not_reused() {
        let repo = InMemoryItemRepository::new();
        let first = repo.create(&new_item("A1", "Widget")).unwrap();
        let second = repo.create(&new_item("A2", "Gadget")).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        assert!(repo.delete(second.id).unwrap());
        let third = repo.create(&new_item("A3", "Gizmo")).unwrap();
        assert_eq!(third.id, 3);
    }

    #[test]
    fn list_is_ordered_by_id() {
        let repo = InMemoryItemRepository::new();
        for code in ["C", "B", "A"] {
            repo.create(&new_item(code, "thing")).unwrap();
        }
        let changes = ItemChanges {
            name: Some("renamed".to_string()),
            ..Default::default()
        };
        repo.update(1, &changes).unwrap();

        let ids: Vec<i32> = repo.list().unwrap().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn missing_rows_are_reported_as_absent() {
        let repo = InMemoryItemRepository::new();
        assert_eq!(repo.get(42).unwrap(), None);
        assert_eq!(repo.update(42, &ItemChanges::default()).unwrap(), None);
        assert!(!repo.delete(42).unwrap());
        assert!(repo.list().unwrap().is_empty());
    }
}
