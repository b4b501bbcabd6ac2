//! Schedule-after-delay primitives used by the debounce slot.
//!
//! The selector only needs "run this later" and "never mind". [`TokioTimer`]
//! provides that on a tokio runtime; [`ManualTimer`] is a virtual clock that a
//! host (or a test) advances explicitly.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::AbortHandle;

use crate::error::{PickerError, Result};

/// Work scheduled on a [`Timer`].
pub type TimerTask = Box<dyn FnOnce() + Send + 'static>;

/// Something that can run a task after a delay.
pub trait Timer: Send + Sync {
    /// Run `task` once `delay` has elapsed, unless the returned handle is
    /// cancelled first.
    fn schedule(&self, delay: Duration, task: TimerTask) -> TimerHandle;
}

/// Handle to one scheduled task.
#[derive(Debug, Clone)]
pub struct TimerHandle {
    cancelled: Arc<AtomicBool>,
    abort: Option<AbortHandle>,
}

impl TimerHandle {
    fn new(cancelled: Arc<AtomicBool>, abort: Option<AbortHandle>) -> Self {
        Self { cancelled, abort }
    }

    /// Cancel the task. Does nothing if it already ran or was cancelled.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        if let Some(abort) = &self.abort {
            abort.abort();
        }
    }

    /// Check whether [`cancel`](Self::cancel) was called.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

// -----------------------------------------------------------------------------
// Tokio
// -----------------------------------------------------------------------------

/// Timer backed by `tokio::time::sleep` on a runtime handle.
#[derive(Debug, Clone)]
pub struct TokioTimer {
    handle: Handle,
}

impl TokioTimer {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Use the runtime the caller is running on.
    pub fn try_current() -> Result<Self> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|_| PickerError::NoRuntime)
    }
}

impl Timer for TokioTimer {
    fn schedule(&self, delay: Duration, task: TimerTask) -> TimerHandle {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        let join = self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            if !flag.load(Ordering::SeqCst) {
                task();
            }
        });
        TimerHandle::new(cancelled, Some(join.abort_handle()))
    }
}

// -----------------------------------------------------------------------------
// Manual clock
// -----------------------------------------------------------------------------

struct Entry {
    due: Duration,
    seq: u64,
    cancelled: Arc<AtomicBool>,
    task: TimerTask,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_seq: u64,
    entries: Vec<Entry>,
}

/// Virtual clock for hosts that drive time themselves.
///
/// Nothing runs until [`advance`](Self::advance) is called; due tasks then run
/// on the calling thread in deadline order, ties in scheduling order.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::time::Duration;
/// use picker::{ManualTimer, Timer};
///
/// let timer = ManualTimer::new();
/// let fired = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&fired);
/// timer.schedule(Duration::from_millis(300), Box::new(move || flag.store(true, Ordering::SeqCst)));
///
/// timer.advance(Duration::from_millis(299));
/// assert!(!fired.load(Ordering::SeqCst));
/// timer.advance(Duration::from_millis(1));
/// assert!(fired.load(Ordering::SeqCst));
/// ```
#[derive(Clone, Default)]
pub struct ManualTimer {
    clock: Arc<Mutex<Clock>>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on this clock.
    pub fn now(&self) -> Duration {
        self.clock.lock().map(|clock| clock.now).unwrap_or_default()
    }

    /// Number of scheduled tasks that have neither run nor been cancelled.
    pub fn pending(&self) -> usize {
        self.clock
            .lock()
            .map(|clock| {
                clock
                    .entries
                    .iter()
                    .filter(|e| !e.cancelled.load(Ordering::SeqCst))
                    .count()
            })
            .unwrap_or(0)
    }

    /// Move the clock forward, running every task that falls due.
    ///
    /// Tasks run without the clock lock held, so a task may schedule more work;
    /// anything it schedules within the window also runs.
    pub fn advance(&self, by: Duration) {
        let target = match self.clock.lock() {
            Ok(clock) => clock.now + by,
            Err(_) => return,
        };

        while let Some(task) = self.pop_due(target) {
            task();
        }

        if let Ok(mut clock) = self.clock.lock() {
            clock.now = target;
        }
    }

    fn pop_due(&self, target: Duration) -> Option<TimerTask> {
        let mut clock = self.clock.lock().ok()?;
        clock.entries.retain(|e| !e.cancelled.load(Ordering::SeqCst));

        let position = clock
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= target)
            .min_by_key(|(_, e)| (e.due, e.seq))
            .map(|(i, _)| i)?;

        let entry = clock.entries.remove(position);
        clock.now = entry.due;
        Some(entry.task)
    }
}

impl Timer for ManualTimer {
    fn schedule(&self, delay: Duration, task: TimerTask) -> TimerHandle {
        let cancelled = Arc::new(AtomicBool::new(false));
        if let Ok(mut clock) = self.clock.lock() {
            let seq = clock.next_seq;
            clock.next_seq += 1;
            let due = clock.now + delay;
            log::trace!("ManualTimer::schedule seq={} due={:?}", seq, due);
            clock.entries.push(Entry {
                due,
                seq,
                cancelled: Arc::clone(&cancelled),
                task,
            });
        }
        TimerHandle::new(cancelled, None)
    }
}

impl fmt::Debug for ManualTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualTimer")
            .field("now", &self.now())
            .field("pending", &self.pending())
            .finish()
    }
}
