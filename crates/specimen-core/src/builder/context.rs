use specimen_types::error::BuildError;
use specimen_types::request::Request;
use specimen_types::specimen::Specimen;

use super::{SpecimenBuilder, SpecimenContext};

/// A context that cannot resolve anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyContext;

impl SpecimenContext for EmptyContext {
    fn resolve(&self, _request: &Request) -> Result<Specimen, BuildError> {
        Ok(Specimen::NoSpecimen)
    }
}

/// Resolves requests by running them through a root builder, handing
/// itself down as the context so builders can resolve their own
/// dependencies recursively.
pub struct BuilderContext<'a> {
    root: &'a dyn SpecimenBuilder,
}

impl<'a> BuilderContext<'a> {
    pub fn new(root: &'a dyn SpecimenBuilder) -> Self {
        Self { root }
    }
}

impl SpecimenContext for BuilderContext<'_> {
    fn resolve(&self, request: &Request) -> Result<Specimen, BuildError> {
        self.root.create(request, self)
    }
}
