//! Debounced autosave.
//!
//! A single delayed write that every change cancels and reschedules.
//! [`Debouncer`] holds the timing state and takes the clock as an
//! argument; [`Autosaver`] drives it from one background thread.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};
use serde::Serialize;

use crate::error::DraftError;

use super::persistence::{DraftStore, SaveOutcome};

/// Cancel-and-reschedule timer state.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
    generation: u64,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
            generation: 0,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace any pending deadline with `now + delay`.
    pub fn schedule(&mut self, now: Instant) -> u64 {
        self.generation += 1;
        self.deadline = Some(now + self.delay);
        self.generation
    }

    /// Drop the pending deadline. Returns whether one existed.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Number of schedules so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Consume the deadline if it has passed.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

struct Shared<T> {
    debouncer: Debouncer,
    pending: Option<T>,
    shutdown: bool,
}

struct Inner<T> {
    state: Mutex<Shared<T>>,
    wake: Condvar,
}

/// Background writer for form snapshots.
///
/// Dropping the autosaver stops the worker without writing the pending
/// snapshot; call [`Autosaver::flush`] first to keep it.
pub struct Autosaver<T: Serialize + Send + 'static> {
    inner: Arc<Inner<T>>,
    store: Arc<DraftStore>,
    worker: Option<JoinHandle<()>>,
}

impl<T: Serialize + Send + 'static> Autosaver<T> {
    pub fn spawn(store: Arc<DraftStore>, delay: Duration) -> Result<Self, DraftError> {
        let inner = Arc::new(Inner {
            state: Mutex::new(Shared {
                debouncer: Debouncer::new(delay),
                pending: None,
                shutdown: false,
            }),
            wake: Condvar::new(),
        });

        let worker = {
            let inner = Arc::clone(&inner);
            let store = Arc::clone(&store);
            thread::Builder::new()
                .name("draft-autosave".to_string())
                .spawn(move || run_worker(&inner, &store))
                .map_err(DraftError::Worker)?
        };

        log::debug!(
            "AUTOSAVE_STARTED key={} delay_ms={}",
            store.key(),
            delay.as_millis()
        );

        Ok(Self {
            inner,
            store,
            worker: Some(worker),
        })
    }

    /// Record a new snapshot and restart the timer.
    pub fn notify(&self, snapshot: T) {
        let mut state = self.inner.state.lock();
        state.pending = Some(snapshot);
        state.debouncer.schedule(Instant::now());
        self.inner.wake.notify_one();
    }

    pub fn has_pending(&self) -> bool {
        self.inner.state.lock().pending.is_some()
    }

    /// Write the pending snapshot now, if any.
    pub fn flush(&self) -> Option<SaveOutcome> {
        let mut state = self.inner.state.lock();
        state.debouncer.cancel();
        let snapshot = state.pending.take()?;
        Some(self.store.save(&snapshot))
    }

    /// Drop the pending snapshot. Waits for a write already in progress,
    /// so nothing lands in storage after this returns.
    pub fn cancel(&self) -> bool {
        let mut state = self.inner.state.lock();
        state.debouncer.cancel();
        let had_pending = state.pending.take().is_some();
        if had_pending {
            log::debug!("AUTOSAVE_CANCELLED key={}", self.store.key());
        }
        had_pending
    }
}

impl<T: Serialize + Send + 'static> Drop for Autosaver<T> {
    fn drop(&mut self) {
        {
            let mut state = self.inner.state.lock();
            state.shutdown = true;
            self.inner.wake.notify_one();
        }
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!("AUTOSAVE_WORKER_PANICKED key={}", self.store.key());
            }
        }
    }
}

fn run_worker<T: Serialize>(inner: &Inner<T>, store: &DraftStore) {
    let mut state = inner.state.lock();
    loop {
        if state.shutdown {
            return;
        }
        match state.debouncer.deadline() {
            None => inner.wake.wait(&mut state),
            Some(deadline) => {
                if state.debouncer.take_due(Instant::now()) {
                    // Written under the lock so cancel() cannot race a write.
                    if let Some(snapshot) = state.pending.take() {
                        store.save(&snapshot);
                    }
                } else {
                    inner.wake.wait_until(&mut state, deadline);
                }
            }
        }
    }
}
