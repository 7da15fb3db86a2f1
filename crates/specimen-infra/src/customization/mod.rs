//! Fixture customizations producing ready-to-use SQLite data contexts.
//!
//! A customization is a builder pipeline answering two requests:
//! - `DbContextOptionsBuilder`: a fresh builder, passed through an
//!   `OptionsBuilderConfigurator` that installs the provider
//! - `SqliteDataContext`: a context connected with whatever options builder
//!   the pipeline resolves
//!
//! `create_context` drives such a pipeline and bootstraps the schema.

pub mod builders;

use std::sync::Arc;

use specimen_core::builder::{
    BuilderContext, CompositeSpecimenBuilder, FilteringSpecimenBuilder,
    OptionsBuilderConfigurator, SpecimenBuilder,
};
use specimen_core::command::{EnsureCreatedCommand, SpecimenCommand};
use specimen_core::specification::ExactTypeSpecification;
use specimen_types::config::{FixtureConfig, ProviderKind};
use specimen_types::error::FixtureError;
use specimen_types::options::DbContextOptionsBuilder;
use specimen_types::request::Request;

use crate::sqlite::SqliteDataContext;

pub use builders::{OptionsBuilderFactory, SqliteContextBuilder};

/// Pipeline whose contexts use the SQLite database at `connection_string`.
pub fn sqlite_customization(connection_string: impl Into<String>) -> CompositeSpecimenBuilder {
    let connection_string = connection_string.into();
    customization(move |options| options.use_sqlite(connection_string.clone()))
}

/// Pipeline whose contexts use a private in-memory database.
pub fn in_memory_customization(database_name: impl Into<String>) -> CompositeSpecimenBuilder {
    let database_name = database_name.into();
    customization(move |options| options.use_in_memory_database(database_name.clone()))
}

/// Pipeline matching the provider selected by `config`.
pub fn customization_for(config: &FixtureConfig) -> CompositeSpecimenBuilder {
    let log_statements = config.log_statements;
    let provider = config.provider;
    let connection_string = config.connection_string.clone();
    let database_name = config.database_name.clone();

    customization(move |options| {
        let options = match provider {
            ProviderKind::Sqlite => options.use_sqlite(connection_string.clone()),
            ProviderKind::InMemory => options.use_in_memory_database(database_name.clone()),
        };
        if log_statements {
            options.enable_statement_logging()
        } else {
            options
        }
    })
}

fn customization<F>(configure: F) -> CompositeSpecimenBuilder
where
    F: Fn(DbContextOptionsBuilder) -> DbContextOptionsBuilder + Send + Sync + 'static,
{
    let options = OptionsBuilderConfigurator::with_configure(
        FilteringSpecimenBuilder::new(
            OptionsBuilderFactory,
            Arc::new(ExactTypeSpecification::of::<DbContextOptionsBuilder>()),
        ),
        configure,
    );
    let contexts = FilteringSpecimenBuilder::new(
        SqliteContextBuilder,
        Arc::new(ExactTypeSpecification::of::<SqliteDataContext>()),
    );

    CompositeSpecimenBuilder::default().with(options).with(contexts)
}

/// Resolve a `SqliteDataContext` through `root`, bootstrapping its schema
/// when `ensure_created` is set.
///
/// # Errors
///
/// - [`FixtureError::NoSpecimen`] when `root` produces no context
/// - build and bootstrap failures, unchanged
pub async fn create_context(
    root: &dyn SpecimenBuilder,
    ensure_created: bool,
) -> Result<SqliteDataContext, FixtureError> {
    let context = BuilderContext::new(root);
    let request = Request::of::<SqliteDataContext>();
    let specimen = root.create(&request, &context)?;

    if specimen.is_no_specimen() {
        return Err(FixtureError::NoSpecimen(request.to_string()));
    }

    if ensure_created {
        EnsureCreatedCommand::<SqliteDataContext>::new()
            .execute(specimen.as_any(), &context)
            .await?;
    }

    specimen
        .downcast::<SqliteDataContext>()
        .map(|data_context| *data_context)
        .map_err(|_| FixtureError::NoSpecimen(request.to_string()))
}
