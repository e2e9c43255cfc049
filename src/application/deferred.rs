//! Delayed work with a cancellation handle.
//!
//! Every simulated wait in the engine (capture processing, listening) is a
//! `Deferred`: the task runs once `delay` has elapsed unless `cancel` was
//! called first. Dropping the handle does not cancel the task.

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time;
use tracing::trace;

pub struct Deferred {
    cancel: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl Deferred {
    /// Schedules `task` to run after `delay`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn after<F>(delay: Duration, task: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let (cancel, mut cancelled_rx) = watch::channel(false);
        let handle = tokio::spawn(async move {
            tokio::select! {
                biased;

                _ = cancelled(&mut cancelled_rx) => {
                    trace!("Deferred task cancelled before its delay elapsed");
                }

                _ = time::sleep(delay) => task.await,
            }
        });
        Self { cancel, handle }
    }

    /// Prevents the task from running if its delay has not elapsed yet.
    pub fn cancel(&self) {
        self.cancel.send_replace(true);
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Resolves once the flag behind `rx` becomes true. Never resolves if the
/// sender goes away without setting it.
pub(crate) async fn cancelled(rx: &mut watch::Receiver<bool>) {
    loop {
        if *rx.borrow_and_update() {
            return;
        }
        if rx.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_task(counter: &Arc<AtomicUsize>) -> impl Future<Output = ()> + Send + 'static {
        let counter = Arc::clone(counter);
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn runs_after_delay() {
        let counter = Arc::new(AtomicUsize::new(0));
        let deferred = Deferred::after(Duration::from_secs(2), counting_task(&counter));

        time::sleep(Duration::from_millis(1_900)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        time::sleep(Duration::from_millis(200)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(deferred.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_before_delay_skips_task() {
        let counter = Arc::new(AtomicUsize::new(0));
        let deferred = Deferred::after(Duration::from_secs(3), counting_task(&counter));

        time::sleep(Duration::from_secs(1)).await;
        deferred.cancel();
        time::sleep(Duration::from_secs(5)).await;

        assert_eq!(counter.load(Ordering::SeqCst), 0);
        assert!(deferred.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_handle_does_not_cancel() {
        let counter = Arc::new(AtomicUsize::new(0));
        drop(Deferred::after(Duration::from_secs(1), counting_task(&counter)));

        time::sleep(Duration::from_secs(2)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_after_completion_is_harmless() {
        let counter = Arc::new(AtomicUsize::new(0));
        let deferred = Deferred::after(Duration::from_millis(10), counting_task(&counter));

        time::sleep(Duration::from_millis(50)).await;
        deferred.cancel();
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
