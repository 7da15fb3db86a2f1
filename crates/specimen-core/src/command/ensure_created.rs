use std::marker::PhantomData;

use specimen_types::error::{ArgumentError, CommandError};

use super::{CommandTarget, SpecimenCommand};
use crate::builder::SpecimenContext;
use crate::data_context::DataContext;

/// Bootstraps the schema of a data context of type `C`.
///
/// The context argument is accepted for the command contract and not used.
/// Bootstrap failures are returned exactly as the data context reports them.
pub struct EnsureCreatedCommand<C> {
    _context: PhantomData<fn() -> C>,
}

impl<C: DataContext + 'static> EnsureCreatedCommand<C> {
    pub fn new() -> Self {
        Self {
            _context: PhantomData,
        }
    }
}

impl<C: DataContext + 'static> Default for EnsureCreatedCommand<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: DataContext + 'static> SpecimenCommand for EnsureCreatedCommand<C> {
    async fn execute(
        &self,
        target: Option<&CommandTarget>,
        _context: &dyn SpecimenContext,
    ) -> Result<(), CommandError> {
        let target = target.ok_or(ArgumentError::Null("target"))?;
        let data_context =
            target
                .downcast_ref::<C>()
                .ok_or(ArgumentError::TypeMismatch {
                    name: "target",
                    expected: std::any::type_name::<C>(),
                })?;

        let created = data_context.ensure_created().await?;
        tracing::info!(
            context = std::any::type_name::<C>(),
            created,
            "ensured data context schema"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::builder::EmptyContext;
    use specimen_types::error::DataContextError;

    /// In-memory data context that records bootstrap calls.
    #[derive(Default)]
    struct FakeContext {
        calls: AtomicUsize,
        created: Mutex<bool>,
        fail_with: Option<String>,
    }

    impl DataContext for FakeContext {
        async fn ensure_created(&self) -> Result<bool, DataContextError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(reason) = &self.fail_with {
                return Err(DataContextError::Schema(reason.clone()));
            }
            let mut created = self.created.lock().unwrap();
            let first = !*created;
            *created = true;
            Ok(first)
        }
    }

    #[test]
    fn test_is_command() {
        fn assert_command<T: SpecimenCommand>(_: &T) {}
        assert_command(&EnsureCreatedCommand::<FakeContext>::new());
    }

    #[tokio::test]
    async fn test_rejects_missing_target() {
        let command = EnsureCreatedCommand::<FakeContext>::new();

        let err = command.execute(None, &EmptyContext).await.unwrap_err();

        assert!(matches!(err, CommandError::Argument(ArgumentError::Null("target"))));
    }

    #[tokio::test]
    async fn test_rejects_target_that_is_not_a_context() {
        let command = EnsureCreatedCommand::<FakeContext>::new();
        let target = String::from("not a context");

        let err = command.execute(Some(&target), &EmptyContext).await.unwrap_err();

        assert!(matches!(
            err,
            CommandError::Argument(ArgumentError::TypeMismatch { name: "target", .. })
        ));
    }

    #[tokio::test]
    async fn test_runs_ensure_created_once() {
        let command = EnsureCreatedCommand::<FakeContext>::new();
        let context = FakeContext::default();

        command.execute(Some(&context), &EmptyContext).await.unwrap();

        assert_eq!(context.calls.load(Ordering::SeqCst), 1);
        assert!(*context.created.lock().unwrap());
    }

    #[tokio::test]
    async fn test_repeated_execution_is_harmless() {
        let command = EnsureCreatedCommand::<FakeContext>::new();
        let context = FakeContext::default();

        command.execute(Some(&context), &EmptyContext).await.unwrap();
        command.execute(Some(&context), &EmptyContext).await.unwrap();

        assert_eq!(context.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_bootstrap_failure_propagates() {
        let command = EnsureCreatedCommand::<FakeContext>::new();
        let context = FakeContext {
            fail_with: Some("read-only database".to_string()),
            ..Default::default()
        };

        let err = command.execute(Some(&context), &EmptyContext).await.unwrap_err();

        assert!(matches!(
            err,
            CommandError::DataContext(DataContextError::Schema(reason)) if reason == "read-only database"
        ));
        assert_eq!(context.calls.load(Ordering::SeqCst), 1);
    }
}
