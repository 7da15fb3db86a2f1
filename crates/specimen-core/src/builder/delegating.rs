use specimen_types::error::BuildError;
use specimen_types::request::Request;
use specimen_types::specimen::Specimen;

use super::{SpecimenBuilder, SpecimenContext};

type CreateFn =
    dyn Fn(&Request, &dyn SpecimenContext) -> Result<Specimen, BuildError> + Send + Sync;

/// Builder whose behaviour is supplied as a closure.
pub struct DelegatingBuilder {
    on_create: Box<CreateFn>,
}

impl DelegatingBuilder {
    /// A builder that never produces anything.
    pub fn new() -> Self {
        Self::with(|_, _| Ok(Specimen::NoSpecimen))
    }

    pub fn with<F>(on_create: F) -> Self
    where
        F: Fn(&Request, &dyn SpecimenContext) -> Result<Specimen, BuildError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            on_create: Box::new(on_create),
        }
    }
}

impl Default for DelegatingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SpecimenBuilder for DelegatingBuilder {
    fn create(
        &self,
        request: &Request,
        context: &dyn SpecimenContext,
    ) -> Result<Specimen, BuildError> {
        (self.on_create)(request, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::EmptyContext;

    #[test]
    fn test_default_produces_no_specimen() {
        let builder = DelegatingBuilder::new();
        let specimen = builder.create(&Request::of::<u32>(), &EmptyContext).unwrap();
        assert!(specimen.is_no_specimen());
    }

    #[test]
    fn test_invokes_closure() {
        let builder = DelegatingBuilder::with(|_, _| Ok(Specimen::new(5_i32)));
        let specimen = builder.create(&Request::of::<i32>(), &EmptyContext).unwrap();
        assert_eq!(specimen.downcast_ref::<i32>(), Some(&5));
    }

    #[test]
    fn test_closure_errors_surface() {
        let builder = DelegatingBuilder::with(|_, _| Err(BuildError::Failed("boom".to_string())));
        let err = builder.create(&Request::of::<i32>(), &EmptyContext).unwrap_err();
        assert!(matches!(err, BuildError::Failed(msg) if msg == "boom"));
    }
}
