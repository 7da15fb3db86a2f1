//! SQLite-backed data context.
//!
//! Each context owns a single-connection pool. A single connection keeps
//! `sqlite::memory:` databases alive for as long as the context lives, and
//! serializes writes the way SQLite wants them anyway.

use std::str::FromStr;

use sqlx::ConnectOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use specimen_core::data_context::DataContext;
use specimen_types::error::DataContextError;
use specimen_types::options::{DbContextOptions, OptionsExtension};

use super::item::SqliteItemStore;

const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Data context over a SQLite database selected by [`DbContextOptions`].
#[derive(Clone)]
pub struct SqliteDataContext {
    pool: SqlitePool,
    label: String,
}

impl SqliteDataContext {
    /// Create a context from configured options.
    ///
    /// The pool is opened lazily: no connection is made until the first
    /// query, so this is safe to call from synchronous builders.
    ///
    /// An `InMemory` provider gets a private in-memory database; the
    /// database name only labels the context.
    pub fn connect(options: &DbContextOptions) -> Result<Self, DataContextError> {
        let (url, label) = match options.provider() {
            Some(OptionsExtension::Sqlite { connection_string }) => {
                (connection_string.as_str(), connection_string.clone())
            }
            Some(OptionsExtension::InMemory { database_name }) => {
                (IN_MEMORY_URL, format!("memory:{database_name}"))
            }
            _ => return Err(DataContextError::NotConfigured),
        };

        let mut connect_options = SqliteConnectOptions::from_str(url)
            .map_err(|e| DataContextError::Connection(e.to_string()))?
            .foreign_keys(true)
            .create_if_missing(true);
        if !options.logs_statements() {
            connect_options = connect_options.disable_statement_logging();
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_lazy_with(connect_options);

        tracing::debug!(database = %label, "opened data context");
        Ok(Self { pool, label })
    }

    /// Human-readable name of the database this context targets.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Repository over the `items` table.
    pub fn items(&self) -> SqliteItemStore {
        SqliteItemStore::new(self.pool.clone())
    }

    async fn has_schema(&self) -> Result<bool, DataContextError> {
        let tables: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'items'",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DataContextError::Connection(e.to_string()))?;
        Ok(tables > 0)
    }
}

impl DataContext for SqliteDataContext {
    async fn ensure_created(&self) -> Result<bool, DataContextError> {
        let existed = self.has_schema().await?;

        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| DataContextError::Schema(e.to_string()))?;

        if !existed {
            tracing::info!(database = %self.label, "created data context schema");
        }
        Ok(!existed)
    }
}

impl std::fmt::Debug for SqliteDataContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteDataContext")
            .field("label", &self.label)
            .finish()
    }
}
