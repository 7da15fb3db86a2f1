//! Data-context capability (port).
//!
//! The persistence collaborator a schema bootstrap runs against. Implementations
//! live in specimen-infra.

use specimen_types::error::DataContextError;

/// Trait for persistence contexts whose schema can be bootstrapped.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
pub trait DataContext: Send + Sync {
    /// Ensure the backing storage schema exists.
    ///
    /// Returns `true` when this call created the schema and `false` when it
    /// already existed. Must be safe to call redundantly.
    fn ensure_created(
        &self,
    ) -> impl std::future::Future<Output = Result<bool, DataContextError>> + Send;
}
