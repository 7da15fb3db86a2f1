//! Post-processing of freshly built options builders.

use std::any::Any;
use std::sync::Arc;

use specimen_types::error::BuildError;
use specimen_types::options::DbContextOptionsBuilder;
use specimen_types::request::Request;
use specimen_types::specimen::Specimen;

use super::{BoxSpecimenBuilder, SpecimenBuilder, SpecimenContext};

/// Transform applied to a configuration object.
pub type ConfigureFn<B> = dyn Fn(B) -> B + Send + Sync;

fn identity<B>(options: B) -> B {
    options
}

/// Decorates a builder so that any `B` it produces is passed through a
/// configuration transform before being handed back.
///
/// Results of any other shape, including `NoSpecimen`, are returned exactly
/// as the inner builder produced them.
pub struct OptionsBuilderConfigurator<B = DbContextOptionsBuilder> {
    builder: BoxSpecimenBuilder,
    configure: Arc<ConfigureFn<B>>,
}

impl<B: Any + Send + Sync> OptionsBuilderConfigurator<B> {
    /// Wrap `builder` with the identity transform.
    pub fn new(builder: impl SpecimenBuilder + 'static) -> Self {
        Self::with_configure(builder, identity::<B>)
    }

    /// Wrap `builder` with `configure`.
    pub fn with_configure<F>(builder: impl SpecimenBuilder + 'static, configure: F) -> Self
    where
        F: Fn(B) -> B + Send + Sync + 'static,
    {
        Self::from_shared(builder, Arc::new(configure))
    }

    /// Wrap `builder` with a transform shared with other links.
    pub fn from_shared(
        builder: impl SpecimenBuilder + 'static,
        configure: Arc<ConfigureFn<B>>,
    ) -> Self {
        Self {
            builder: Box::new(builder),
            configure,
        }
    }

    pub fn builder(&self) -> &dyn SpecimenBuilder {
        self.builder.as_ref()
    }

    pub fn configure(&self) -> &Arc<ConfigureFn<B>> {
        &self.configure
    }
}

impl<B: Any + Send + Sync> SpecimenBuilder for OptionsBuilderConfigurator<B> {
    fn create(
        &self,
        request: &Request,
        context: &dyn SpecimenContext,
    ) -> Result<Specimen, BuildError> {
        let specimen = self.builder.create(request, context)?;

        match specimen.downcast::<B>() {
            Ok(options) => {
                tracing::debug!(%request, "configuring {}", std::any::type_name::<B>());
                Ok(Specimen::new((self.configure)(*options)))
            }
            Err(untouched) => Ok(untouched),
        }
    }
}
