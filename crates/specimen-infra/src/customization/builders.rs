use specimen_core::builder::{SpecimenBuilder, SpecimenContext};
use specimen_types::error::BuildError;
use specimen_types::options::DbContextOptionsBuilder;
use specimen_types::request::Request;
use specimen_types::specimen::Specimen;

use crate::sqlite::SqliteDataContext;

/// Produces an empty [`DbContextOptionsBuilder`] for every request.
///
/// Meant to sit behind a specification that narrows it to options requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionsBuilderFactory;

impl SpecimenBuilder for OptionsBuilderFactory {
    fn create(
        &self,
        _request: &Request,
        _context: &dyn SpecimenContext,
    ) -> Result<Specimen, BuildError> {
        Ok(Specimen::new(DbContextOptionsBuilder::new()))
    }
}

/// Connects a [`SqliteDataContext`] using the options builder resolved
/// from the context, for every request.
///
/// Meant to sit behind a specification that narrows it to context requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteContextBuilder;

impl SpecimenBuilder for SqliteContextBuilder {
    fn create(
        &self,
        request: &Request,
        context: &dyn SpecimenContext,
    ) -> Result<Specimen, BuildError> {
        let options = context.resolve(&Request::of::<DbContextOptionsBuilder>())?;
        let options = options
            .downcast_ref::<DbContextOptionsBuilder>()
            .ok_or_else(|| {
                BuildError::Failed(format!("no options builder could be resolved for {request}"))
            })?;

        let data_context = SqliteDataContext::connect(&options.options())?;
        Ok(Specimen::new(data_context))
    }
}
