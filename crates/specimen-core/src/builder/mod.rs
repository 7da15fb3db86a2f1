//! Specimen builders and the contexts they resolve through.
//!
//! A builder either produces a specimen for a request or answers
//! [`Specimen::NoSpecimen`] so the next link in the pipeline can try.
//! Decorators own exactly one inner builder and post-process its result.

pub mod composite;
pub mod configurator;
pub mod context;
pub mod delegating;
pub mod filtering;

use std::sync::Arc;

use specimen_types::error::BuildError;
use specimen_types::request::Request;
use specimen_types::specimen::Specimen;

pub use composite::CompositeSpecimenBuilder;
pub use configurator::OptionsBuilderConfigurator;
pub use context::{BuilderContext, EmptyContext};
pub use delegating::DelegatingBuilder;
pub use filtering::FilteringSpecimenBuilder;

/// Resolves further requests while a specimen is being built.
pub trait SpecimenContext: Send + Sync {
    fn resolve(&self, request: &Request) -> Result<Specimen, BuildError>;
}

/// Produces specimens for requests.
pub trait SpecimenBuilder: Send + Sync {
    /// Build a specimen for `request`, or return `Specimen::NoSpecimen` when
    /// this builder does not handle it.
    ///
    /// # Errors
    ///
    /// Whatever the builder or its collaborators fail with; decorators pass
    /// errors from the builders they wrap through untouched.
    fn create(
        &self,
        request: &Request,
        context: &dyn SpecimenContext,
    ) -> Result<Specimen, BuildError>;
}

/// Type-erased builder, exclusively owned by the link that wraps it.
pub type BoxSpecimenBuilder = Box<dyn SpecimenBuilder>;

impl<B: SpecimenBuilder + ?Sized> SpecimenBuilder for Box<B> {
    fn create(
        &self,
        request: &Request,
        context: &dyn SpecimenContext,
    ) -> Result<Specimen, BuildError> {
        (**self).create(request, context)
    }
}

impl<B: SpecimenBuilder + ?Sized> SpecimenBuilder for Arc<B> {
    fn create(
        &self,
        request: &Request,
        context: &dyn SpecimenContext,
    ) -> Result<Specimen, BuildError> {
        (**self).create(request, context)
    }
}
