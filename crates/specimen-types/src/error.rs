use thiserror::Error;

/// Precondition violations on constructor or call arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("argument '{0}' must not be absent")]
    Null(&'static str),

    #[error("argument '{name}' must be an instance of {expected}")]
    TypeMismatch {
        name: &'static str,
        expected: &'static str,
    },
}

/// Errors from the persistence collaborator.
#[derive(Debug, Error)]
pub enum DataContextError {
    #[error("no database provider configured")]
    NotConfigured,

    #[error("database connection error: {0}")]
    Connection(String),

    #[error("schema error: {0}")]
    Schema(String),

    #[error("query error: {0}")]
    Query(String),
}

/// Errors raised while building a specimen.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    DataContext(#[from] DataContextError),

    #[error("builder failed: {0}")]
    Failed(String),
}

/// Errors raised while executing a command against a specimen.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    DataContext(#[from] DataContextError),
}

/// Errors from assembling a specimen end to end (build, then run commands).
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("no specimen could be created for {0}")]
    NoSpecimen(String),
}
