use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

/// A delayed one-shot job owned by whoever holds it. Dropping the handle
/// aborts the job if it has not run yet.
#[derive(Debug)]
pub struct ScopedTask {
    label: &'static str,
    handle: JoinHandle<()>,
}

impl ScopedTask {
    pub fn after<F>(delay: Duration, label: &'static str, work: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            work.await;
        });

        Self { label, handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for ScopedTask {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            debug!("Cancelling pending task: {}", self.label);
            self.handle.abort();
        }
    }
}
