//! SQLite storage layer.
//!
//! A data context backed by a single-connection sqlx pool, with the schema
//! applied from the embedded migrations.

pub mod context;
pub mod item;

pub use context::SqliteDataContext;
pub use item::SqliteItemStore;
