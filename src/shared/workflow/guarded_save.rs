use std::future::Future;
use thiserror::Error;

use super::{run_to_completion, DetachedTaskError, EditorBusy, EditorKind, EditorRegistry, EditorTarget};

#[derive(Debug, Error)]
pub enum GuardedSaveError {
    #[error(transparent)]
    Busy(#[from] EditorBusy),

    #[error(transparent)]
    Detached(#[from] DetachedTaskError),
}

/// Claims the editor target, then runs `save` detached from the caller.
///
/// The target is released when the save settles, whatever the outcome;
/// a second call for the same target meanwhile gets `Busy`.
pub async fn run_guarded<F, T, E>(
    registry: &EditorRegistry,
    kind: EditorKind,
    target: EditorTarget,
    save: F,
) -> Result<Result<T, E>, GuardedSaveError>
where
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    let ticket = registry.begin_save(kind, target)?;

    let outcome = run_to_completion(async move {
        let result = save.await;
        ticket.finish(result.is_ok());
        result
    })
    .await?;

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::workflow::EditorPhase;
    use std::time::Duration;
    use uuid::Uuid;

    #[tokio::test]
    async fn concurrent_save_of_same_target_is_refused() {
        let registry = EditorRegistry::new();
        let target = EditorTarget::Edit(Uuid::new_v4());
        let (release, wait) = tokio::sync::oneshot::channel::<()>();

        let first = {
            let registry = registry.clone();
            tokio::spawn(async move {
                run_guarded(&registry, EditorKind::Project, target, async move {
                    let _ = wait.await;
                    Ok::<_, ()>(1)
                })
                .await
            })
        };

        tokio::time::sleep(Duration::from_millis(10)).await;
        let second =
            run_guarded(&registry, EditorKind::Project, target, async { Ok::<_, ()>(2) }).await;
        assert!(matches!(second, Err(GuardedSaveError::Busy(_))));

        release.send(()).unwrap();
        let first = first.await.unwrap().unwrap();
        assert_eq!(first, Ok(1));
        assert_eq!(registry.phase(EditorKind::Project, target), EditorPhase::Closed);
    }

    #[tokio::test]
    async fn failed_save_reopens_the_editor() {
        let registry = EditorRegistry::new();
        let target = EditorTarget::Create;

        let result =
            run_guarded(&registry, EditorKind::Certificate, target, async { Err::<(), _>("boom") })
                .await
                .unwrap();

        assert_eq!(result, Err("boom"));
        assert_eq!(
            registry.phase(EditorKind::Certificate, target),
            EditorPhase::Open(target)
        );
        // The reopened editor accepts the retry
        assert!(registry.begin_save(EditorKind::Certificate, target).is_ok());
    }

    #[tokio::test]
    async fn different_targets_do_not_block_each_other() {
        let registry = EditorRegistry::new();
        let _held = registry
            .begin_save(EditorKind::Project, EditorTarget::Edit(Uuid::new_v4()))
            .unwrap();

        let other = run_guarded(
            &registry,
            EditorKind::Project,
            EditorTarget::Edit(Uuid::new_v4()),
            async { Ok::<_, ()>(()) },
        )
        .await;

        assert!(other.is_ok());
    }
}
