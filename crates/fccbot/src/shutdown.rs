//! Process shutdown: ctrl-c handling and draining the audit queue.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::info;

/// Runs an action when ctrl-c arrives.
///
/// The action future, and anything it captures, stays alive until the signal
/// fires or [`ShutdownListener::cancel`] is awaited.
#[derive(Debug)]
pub struct ShutdownListener {
    task: JoinHandle<()>,
}

impl ShutdownListener {
    /// Spawn a task waiting for ctrl-c, then running `on_signal`.
    pub fn spawn<F>(on_signal: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let task = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Shutdown requested");
                on_signal.await;
            }
        });
        Self { task }
    }

    /// Stop listening and release whatever the action captured.
    pub async fn cancel(self) {
        self.task.abort();
        let _ = self.task.await;
    }
}

/// Wait for the audit delivery task to drain its queue.
///
/// The task ends once every sender is dropped. Returns `false` when
/// `timeout` elapses first.
pub async fn flush_audit(task: JoinHandle<()>, timeout: Duration) -> bool {
    tokio::time::timeout(timeout, task).await.is_ok()
}
