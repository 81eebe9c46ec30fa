//! Trailing-edge debouncer
//!
//! Each call restarts the wait. The callback runs once, with the most
//! recent argument, after `wait` has passed without another call.
//! Requires a tokio runtime.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

type Callback<T> = Arc<dyn Fn(T) + Send + Sync>;

pub struct Debouncer<T: Send + 'static> {
    wait: Duration,
    callback: Callback<T>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(wait: Duration, callback: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            wait,
            callback: Arc::new(callback),
            pending: Mutex::new(None),
        }
    }

    /// Schedule the callback, cancelling any call still waiting.
    pub fn call(&self, arg: T) {
        let callback = Arc::clone(&self.callback);
        let wait = self.wait;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            callback(arg);
        });

        if let Some(previous) = self.pending.lock().replace(handle) {
            previous.abort();
        }
    }

    /// Drop the waiting call, if any.
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.lock().take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }
}

impl<T: Send + 'static> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn recorder() -> (Arc<AtomicUsize>, Arc<Mutex<Vec<u32>>>, impl Fn(u32) + Send + Sync) {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let (c, s) = (Arc::clone(&count), Arc::clone(&seen));
        let f = move |v: u32| {
            c.fetch_add(1, Ordering::SeqCst);
            s.lock().push(v);
        };
        (count, seen, f)
    }

    #[tokio::test(start_paused = true)]
    async fn burst_collapses_to_last_call() {
        let (count, seen, f) = recorder();
        let debouncer = Debouncer::new(Duration::from_millis(100), f);

        debouncer.call(1);
        debouncer.call(2);
        debouncer.call(3);
        assert!(debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(101)).await;

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(*seen.lock(), vec![3]);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn each_call_restarts_the_wait() {
        let (count, _seen, f) = recorder();
        let debouncer = Debouncer::new(Duration::from_millis(100), f);

        debouncer.call(1);
        tokio::time::sleep(Duration::from_millis(50)).await;
        debouncer.call(2);
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_drops_pending_call() {
        let (count, _seen, f) = recorder();
        let debouncer = Debouncer::new(Duration::from_millis(100), f);

        debouncer.call(7);
        debouncer.cancel();
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
