use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};

use super::{ItemRepository, RepoError};
use crate::models::{Item, ItemChanges, NewItem};
use crate::schema::items;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type PgPoolConn = PooledConnection<ConnectionManager<PgConnection>>;

const CREATE_ITEMS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id          SERIAL PRIMARY KEY,
    code        VARCHAR NOT NULL,
    name        VARCHAR NOT NULL,
    description TEXT,
    quantity    INTEGER NOT NULL DEFAULT 0,
    location    VARCHAR,
    created_at  TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

#[derive(Clone)]
pub struct PgItemRepository {
    pool: DbPool,
}

impl PgItemRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn connect(database_url: &str, pool_size: u32) -> Result<Self, RepoError> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = Pool::builder().max_size(pool_size).build(manager)?;
        Ok(Self::new(pool))
    }

    fn conn(&self) -> Result<PgPoolConn, RepoError> {
        Ok(self.pool.get()?)
    }
}

impl ItemRepository for PgItemRepository {
    fn init_schema(&self) -> Result<(), RepoError> {
        let mut conn = self.conn()?;
        diesel::sql_query(CREATE_ITEMS_TABLE).execute(&mut conn)?;
        Ok(())
    }

    fn create(&self, new_item: &NewItem) -> Result<Item, RepoError> {
        let mut conn = self.conn()?;
        let created = diesel::insert_into(items::table)
            .values(new_item)
            .returning(Item::as_returning())
            .get_result(&mut conn)?;
        Ok(created)
    }

    fn get(&self, item_id: i32) -> Result<Option<Item>, RepoError> {
        let mut conn = self.conn()?;
        let found = items::table
            .find(item_id)
            .select(Item::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(found)
    }

    fn list(&self) -> Result<Vec<Item>, RepoError> {
        let mut conn = self.conn()?;
        let rows = items::table
            .order(items::id.asc())
            .select(Item::as_select())
            .load(&mut conn)?;
        Ok(rows)
    }

    fn update(&self, item_id: i32, changes: &ItemChanges) -> Result<Option<Item>, RepoError> {
        // diesel refuses an empty SET clause
        if changes.is_empty() {
            return self.get(item_id);
        }
        let mut conn = self.conn()?;
        let updated = diesel::update(items::table.find(item_id))
            .set(changes)
            .returning(Item::as_returning())
            .get_result(&mut conn)
            .optional()?;
        Ok(updated)
    }

    fn delete(&self, item_id: i32) -> Result<bool, RepoError> {
        let mut conn = self.conn()?;
        let affected = diesel::delete(items::table.find(item_id)).execute(&mut conn)?;
        Ok(affected > 0)
    }
}
