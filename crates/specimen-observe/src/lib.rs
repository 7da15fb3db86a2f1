//! Observability setup for the specimen fixture extensions.

pub mod tracing_setup;
