//! Single-slot trailing-edge debounce.
//!
//! Every [`schedule`](Debouncer::schedule) cancels whatever is still pending
//! and starts a fresh timer, so only the last call within a quiet period ever
//! runs. Each schedule gets a new generation number; the scheduled task must
//! [`claim`](Debouncer::claim) its generation before doing any work, which
//! rejects a task that lost a race with a later cancel.

use std::time::Duration;

use crate::timer::{Timer, TimerHandle};

#[derive(Debug, Default)]
pub struct Debouncer {
    generation: u64,
    pending: Option<TimerHandle>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any pending task with `task`, due after `delay`.
    ///
    /// Returns the generation the task is scheduled under; the same number is
    /// passed to `task` when it runs.
    pub fn schedule<F>(&mut self, timer: &dyn Timer, delay: Duration, task: F) -> u64
    where
        F: FnOnce(u64) + Send + 'static,
    {
        self.cancel();
        self.generation += 1;
        let generation = self.generation;
        log::trace!("Debouncer::schedule generation={} delay={:?}", generation, delay);
        self.pending = Some(timer.schedule(delay, Box::new(move || task(generation))));
        generation
    }

    /// Take ownership of the pending slot for `generation`.
    ///
    /// True only if `generation` is the most recent schedule and it has not
    /// been cancelled or claimed already.
    pub fn claim(&mut self, generation: u64) -> bool {
        if self.pending.is_some() && generation == self.generation {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Cancel the pending task, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                handle.cancel();
                self.generation += 1;
                true
            }
            None => false,
        }
    }

    /// Whether a task is scheduled and has not run yet.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
