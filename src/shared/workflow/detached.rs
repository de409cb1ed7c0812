use std::future::Future;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Background task did not complete: {0}")]
pub struct DetachedTaskError(String);

/// Runs `fut` on its own task and waits for it.
///
/// Dropping the caller (a client disconnect dropping the handler future)
/// does not cancel the spawned work, so an editor save always finishes.
pub async fn run_to_completion<F, T>(fut: F) -> Result<T, DetachedTaskError>
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    tokio::spawn(fut)
        .await
        .map_err(|e| DetachedTaskError(e.to_string()))
}
