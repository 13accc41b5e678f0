use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Collapses a burst of calls into a single deferred invocation carrying the
/// arguments of the most recent call.
///
/// Each debouncer owns at most one pending timer: `call` cancels whatever is
/// still scheduled and restarts the wait with the new arguments. Instances
/// are independent; there is no shared registry, and dropping a debouncer
/// abandons its pending invocation.
pub struct Debouncer<T> {
    wait: Duration,
    action: Arc<dyn Fn(T) + Send + Sync>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(wait: Duration, action: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            wait,
            action: Arc::new(action),
            pending: None,
        }
    }

    /// Schedules `action(args)` to run after the quiescence window, replacing
    /// any previously scheduled invocation. Fire-and-forget: nothing is
    /// returned to the caller.
    ///
    /// A zero wait still goes through the timer queue, so the action runs on
    /// the next cooperative tick rather than inline.
    pub fn call(&mut self, args: T) {
        self.cancel();
        let action = Arc::clone(&self.action);
        let wait = self.wait;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            action(args);
        }));
    }

    /// Drops the pending invocation, if any, without running it.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// True while a scheduled invocation has neither fired nor been cancelled.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
