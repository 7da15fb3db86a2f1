//! Database context options and the builder that collects them.
//!
//! `DbContextOptionsBuilder` is the configuration object that builder
//! decorators post-process: providers are installed by pushing an
//! [`OptionsExtension`], and `options()` freezes the result.

use serde::{Deserialize, Serialize};

/// A single piece of context configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OptionsExtension {
    /// SQLite database addressed by an sqlx connection string.
    Sqlite { connection_string: String },
    /// Named database living only in memory for the process lifetime.
    InMemory { database_name: String },
    /// Log every executed statement at debug level.
    StatementLogging,
}

impl OptionsExtension {
    fn is_provider(&self) -> bool {
        matches!(self, Self::Sqlite { .. } | Self::InMemory { .. })
    }
}

/// Immutable snapshot of configured options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbContextOptions {
    extensions: Vec<OptionsExtension>,
}

impl DbContextOptions {
    pub fn extensions(&self) -> &[OptionsExtension] {
        &self.extensions
    }

    /// The active provider extension. At most one is ever present.
    pub fn provider(&self) -> Option<&OptionsExtension> {
        self.extensions.iter().find(|ext| ext.is_provider())
    }

    pub fn logs_statements(&self) -> bool {
        self.extensions.contains(&OptionsExtension::StatementLogging)
    }
}

/// Mutable collector of [`OptionsExtension`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DbContextOptionsBuilder {
    extensions: Vec<OptionsExtension>,
}

impl DbContextOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a SQLite database. Replaces any previously installed provider.
    pub fn use_sqlite(self, connection_string: impl Into<String>) -> Self {
        self.with_provider(OptionsExtension::Sqlite {
            connection_string: connection_string.into(),
        })
    }

    /// Use a named in-memory database. Replaces any previously installed provider.
    pub fn use_in_memory_database(self, database_name: impl Into<String>) -> Self {
        self.with_provider(OptionsExtension::InMemory {
            database_name: database_name.into(),
        })
    }

    pub fn enable_statement_logging(mut self) -> Self {
        if !self.extensions.contains(&OptionsExtension::StatementLogging) {
            self.extensions.push(OptionsExtension::StatementLogging);
        }
        self
    }

    pub fn extensions(&self) -> &[OptionsExtension] {
        &self.extensions
    }

    pub fn is_configured(&self) -> bool {
        self.extensions.iter().any(OptionsExtension::is_provider)
    }

    pub fn options(&self) -> DbContextOptions {
        DbContextOptions {
            extensions: self.extensions.clone(),
        }
    }

    fn with_provider(mut self, provider: OptionsExtension) -> Self {
        self.extensions.retain(|ext| !ext.is_provider());
        self.extensions.push(provider);
        self
    }
}
