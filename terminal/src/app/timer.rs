//! Cancellable single-slot timers
//!
//! A [`TimerSlot`] owns at most one running timer task. Starting a new timer
//! aborts the previous one, and dropping a [`TimerHandle`] aborts its task, so
//! a slot can never leak a ticker past the view that armed it.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinHandle;
use tracing::Instrument;

/// Decrements the live counter when the timer future is dropped, whether it
/// finished or was aborted.
struct LiveGuard {
    live: Arc<AtomicUsize>,
}

impl LiveGuard {
    fn arm(live: Arc<AtomicUsize>) -> Self {
        live.fetch_add(1, Ordering::SeqCst);
        Self { live }
    }
}

impl Drop for LiveGuard {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Handle to one spawned timer task
pub struct TimerHandle {
    name: &'static str,
    handle: JoinHandle<()>,
    started: Instant,
}

impl TimerHandle {
    fn spawn<F>(name: &'static str, live: Arc<AtomicUsize>, future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let guard = LiveGuard::arm(live);
        tracing::debug!(timer = %name, "Timer armed");

        let handle = tokio::spawn(
            async move {
                let _guard = guard;
                future.await;
            }
            .in_current_span(),
        );

        Self {
            name,
            handle,
            started: Instant::now(),
        }
    }

    /// Whether the underlying task has completed or been aborted
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Abort the timer task
    pub fn cancel(self) {
        tracing::debug!(
            timer = %self.name,
            elapsed_ms = self.started.elapsed().as_millis() as u64,
            "Timer cancelled"
        );
        // Drop aborts
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Holds at most one running timer
#[derive(Default)]
pub struct TimerSlot {
    current: Option<TimerHandle>,
    live: Arc<AtomicUsize>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `future` as this slot's timer, cancelling any previous one
    pub fn start<F>(&mut self, name: &'static str, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        self.current = Some(TimerHandle::spawn(name, self.live.clone(), future));
    }

    /// Cancel the running timer, if any. Returns whether one was armed.
    pub fn cancel(&mut self) -> bool {
        match self.current.take() {
            Some(handle) => {
                let was_running = !handle.is_finished();
                handle.cancel();
                was_running
            }
            None => false,
        }
    }

    /// Whether a timer is armed and still running
    pub fn is_armed(&self) -> bool {
        self.current.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Number of timer tasks spawned from this slot whose futures have not
    /// been dropped yet. Aborted tasks are released on the runtime's next
    /// scheduling pass.
    pub fn live_count(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for TimerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerSlot")
            .field("armed", &self.is_armed())
            .field("live", &self.live_count())
            .finish()
    }
}
