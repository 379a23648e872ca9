pub mod item;
pub mod memory;

use std::sync::Arc;

use thiserror::Error;

use crate::models::{Item, ItemChanges, NewItem};
use crate::utils::config::DatabaseConfig;

pub use item::PgItemRepository;
pub use memory::InMemoryItemRepository;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("database pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("database query failed: {0}")]
    Query(#[from] diesel::result::Error),
    #[error("in-memory item store lock poisoned")]
    Poisoned,
}

/// Access to the `items` table.
///
/// Every call checks out its own connection and commits on its own; nothing
/// is shared between calls. A missing row is reported as `None` / `false`,
/// never as an error.
pub trait ItemRepository: Send + Sync {
    /// Creates the backing table when it does not exist yet.
    fn init_schema(&self) -> Result<(), RepoError>;

    fn create(&self, new_item: &NewItem) -> Result<Item, RepoError>;

    fn get(&self, item_id: i32) -> Result<Option<Item>, RepoError>;

    /// All items, ascending by id.
    fn list(&self) -> Result<Vec<Item>, RepoError>;

    fn update(&self, item_id: i32, changes: &ItemChanges) -> Result<Option<Item>, RepoError>;

    fn delete(&self, item_id: i32) -> Result<bool, RepoError>;
}

/// Builds the repository selected by `config`.
pub fn connect(config: &DatabaseConfig) -> Result<Arc<dyn ItemRepository>, RepoError> {
    match config {
        DatabaseConfig::Postgres { url, pool_size } => {
            tracing::info!(pool_size, "connecting to postgres");
            Ok(Arc::new(PgItemRepository::connect(url, *pool_size)?))
        }
        DatabaseConfig::InMemory => {
            tracing::warn!("using in-memory item store, data is lost on restart");
            Ok(Arc::new(InMemoryItemRepository::new()))
        }
    }
}
