//! Infrastructure layer for the specimen fixture extensions.
//!
//! Contains the SQLite implementation of the `DataContext` port defined in
//! `specimen-core`, the builders and customizations that produce configured
//! contexts, and the configuration file loader.

pub mod config;
pub mod customization;
pub mod sqlite;
