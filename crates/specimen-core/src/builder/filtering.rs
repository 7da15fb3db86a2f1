use specimen_types::error::BuildError;
use specimen_types::request::Request;
use specimen_types::specimen::Specimen;

use super::{BoxSpecimenBuilder, SpecimenBuilder, SpecimenContext};
use crate::specification::{DynRequestSpecification, RequestSpecification};

/// Forwards to the inner builder only for requests the specification accepts.
pub struct FilteringSpecimenBuilder {
    builder: BoxSpecimenBuilder,
    specification: DynRequestSpecification,
}

impl FilteringSpecimenBuilder {
    pub fn new(
        builder: impl SpecimenBuilder + 'static,
        specification: DynRequestSpecification,
    ) -> Self {
        Self {
            builder: Box::new(builder),
            specification,
        }
    }

    pub fn builder(&self) -> &dyn SpecimenBuilder {
        self.builder.as_ref()
    }

    pub fn specification(&self) -> &DynRequestSpecification {
        &self.specification
    }
}

impl SpecimenBuilder for FilteringSpecimenBuilder {
    fn create(
        &self,
        request: &Request,
        context: &dyn SpecimenContext,
    ) -> Result<Specimen, BuildError> {
        if !self.specification.is_satisfied_by(request) {
            return Ok(Specimen::NoSpecimen);
        }
        self.builder.create(request, context)
    }
}
