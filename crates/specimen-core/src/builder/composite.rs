use specimen_types::error::BuildError;
use specimen_types::request::Request;
use specimen_types::specimen::Specimen;

use super::{BoxSpecimenBuilder, SpecimenBuilder, SpecimenContext};

/// Tries builders in order; the first one producing a specimen wins.
///
/// An error from any builder stops the walk and is returned as is.
#[derive(Default)]
pub struct CompositeSpecimenBuilder {
    builders: Vec<BoxSpecimenBuilder>,
}

impl CompositeSpecimenBuilder {
    pub fn new(builders: Vec<BoxSpecimenBuilder>) -> Self {
        Self { builders }
    }

    /// Append a builder with the lowest precedence so far.
    pub fn push(&mut self, builder: impl SpecimenBuilder + 'static) {
        self.builders.push(Box::new(builder));
    }

    pub fn with(mut self, builder: impl SpecimenBuilder + 'static) -> Self {
        self.push(builder);
        self
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }
}

impl SpecimenBuilder for CompositeSpecimenBuilder {
    fn create(
        &self,
        request: &Request,
        context: &dyn SpecimenContext,
    ) -> Result<Specimen, BuildError> {
        for builder in &self.builders {
            let specimen = builder.create(request, context)?;
            if !specimen.is_no_specimen() {
                return Ok(specimen);
            }
        }
        Ok(Specimen::NoSpecimen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::builder::{DelegatingBuilder, EmptyContext};

    fn constant(value: u32) -> DelegatingBuilder {
        DelegatingBuilder::with(move |_, _| Ok(Specimen::new(value)))
    }

    #[test]
    fn test_empty_composite_produces_nothing() {
        let composite = CompositeSpecimenBuilder::default();
        assert!(composite.is_empty());
        assert!(composite
            .create(&Request::of::<u32>(), &EmptyContext)
            .unwrap()
            .is_no_specimen());
    }

    #[test]
    fn test_first_specimen_wins() {
        let composite = CompositeSpecimenBuilder::default()
            .with(DelegatingBuilder::new())
            .with(constant(1))
            .with(constant(2));

        let specimen = composite.create(&Request::of::<u32>(), &EmptyContext).unwrap();

        assert_eq!(composite.len(), 3);
        assert_eq!(specimen.downcast_ref::<u32>(), Some(&1));
    }

    #[test]
    fn test_error_stops_the_walk() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let composite = CompositeSpecimenBuilder::default()
            .with(DelegatingBuilder::with(|_, _| {
                Err(BuildError::Failed("broken".to_string()))
            }))
            .with(DelegatingBuilder::with(move |_, _| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(Specimen::new(3_u32))
            }));

        let err = composite.create(&Request::of::<u32>(), &EmptyContext).unwrap_err();

        assert!(matches!(err, BuildError::Failed(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
