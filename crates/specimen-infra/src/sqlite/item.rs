//! SQLite item store.
//!
//! Reads and writes the `items` table created by the schema bootstrap.

use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::SqlitePool;
use uuid::Uuid;

use specimen_types::entity::Item;
use specimen_types::error::DataContextError;

/// SQLite-backed repository of [`Item`]s.
pub struct SqliteItemStore {
    pool: SqlitePool,
}

impl SqliteItemStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn add(&self, item: &Item) -> Result<(), DataContextError> {
        sqlx::query("INSERT INTO items (id, name, quantity, created_at) VALUES (?, ?, ?, ?)")
            .bind(item.id.to_string())
            .bind(&item.name)
            .bind(item.quantity)
            .bind(item.created_at.to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(|e| DataContextError::Query(e.to_string()))?;
        Ok(())
    }

    /// First item with the given name, oldest first.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Item>, DataContextError> {
        let row = sqlx::query(
            "SELECT id, name, quantity, created_at FROM items WHERE name = ? ORDER BY created_at, id LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DataContextError::Query(e.to_string()))?;

        row.map(|row| ItemRow::from_row(&row).map_err(query_error)?.into_item())
            .transpose()
    }

    pub async fn list(&self) -> Result<Vec<Item>, DataContextError> {
        let rows = sqlx::query("SELECT id, name, quantity, created_at FROM items ORDER BY created_at, id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DataContextError::Query(e.to_string()))?;

        rows.iter()
            .map(|row| ItemRow::from_row(row).map_err(query_error)?.into_item())
            .collect()
    }

    pub async fn count(&self) -> Result<i64, DataContextError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DataContextError::Query(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Private Row type for SQLite-to-domain mapping
// ---------------------------------------------------------------------------

struct ItemRow {
    id: String,
    name: String,
    quantity: i64,
    created_at: String,
}

impl ItemRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            quantity: row.try_get("quantity")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_item(self) -> Result<Item, DataContextError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| DataContextError::Query(format!("invalid item id: {e}")))?;
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| DataContextError::Query(format!("invalid datetime: {e}")))?;

        Ok(Item {
            id,
            name: self.name,
            quantity: self.quantity,
            created_at,
        })
    }
}

fn query_error(e: sqlx::Error) -> DataContextError {
    DataContextError::Query(e.to_string())
}
