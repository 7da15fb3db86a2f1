//! Shared data model for the specimen fixture extensions.
//!
//! Requests flowing through a construction pipeline, the specimens it
//! produces, the options object the SQLite layer is configured through, and
//! the error taxonomy shared by every crate.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod config;
pub mod entity;
pub mod error;
pub mod options;
pub mod request;
pub mod specimen;
