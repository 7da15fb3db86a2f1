//! Specimen commands: side effects run against already produced values.

pub mod ensure_created;

use std::any::Any;

use specimen_types::error::CommandError;

use crate::builder::SpecimenContext;

pub use ensure_created::EnsureCreatedCommand;

/// Borrowed, type-erased specimen a command runs against.
pub type CommandTarget = dyn Any + Send + Sync;

/// An operation executed against a specimen rather than producing one.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
pub trait SpecimenCommand: Send + Sync {
    /// Run the command against `target`.
    ///
    /// `target` is `None` when the pipeline produced nothing to run against.
    fn execute(
        &self,
        target: Option<&CommandTarget>,
        context: &dyn SpecimenContext,
    ) -> impl std::future::Future<Output = Result<(), CommandError>> + Send;
}
