//! Fixture configuration types.
//!
//! `FixtureConfig` represents the `config.toml` that selects the database
//! provider the customizations install and whether the schema is bootstrapped.

use serde::{Deserialize, Serialize};

/// Database provider selected by the configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    #[default]
    Sqlite,
    InMemory,
}

/// Top-level fixture configuration. All fields have sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureConfig {
    #[serde(default)]
    pub provider: ProviderKind,

    /// sqlx connection string used by the `sqlite` provider.
    #[serde(default = "default_connection_string")]
    pub connection_string: String,

    /// Database name used by the `in_memory` provider.
    #[serde(default = "default_database_name")]
    pub database_name: String,

    /// Run the schema bootstrap on every context the fixture creates.
    #[serde(default = "default_ensure_created")]
    pub ensure_created: bool,

    /// Log every statement executed against created contexts.
    #[serde(default)]
    pub log_statements: bool,
}

fn default_connection_string() -> String {
    "sqlite::memory:".to_string()
}

fn default_database_name() -> String {
    "specimen".to_string()
}

fn default_ensure_created() -> bool {
    true
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            connection_string: default_connection_string(),
            database_name: default_database_name(),
            ensure_created: default_ensure_created(),
            log_statements: false,
        }
    }
}
