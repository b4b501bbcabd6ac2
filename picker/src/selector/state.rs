//! Selector widget state.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::candidate::{Candidate, PickerItem};
use crate::config::SelectorConfig;
use crate::debounce::Debouncer;
use crate::error::Result;
use crate::timer::{Timer, TokioTimer};
use crate::wakeup::WakeupSender;

/// Callback notified whenever the confirmed selection changes.
///
/// Receives `Some(item)` when the user picks a suggestion and `None` when an
/// edit clears a previous pick.
pub type SelectionCallback<T> = Arc<dyn Fn(Option<&T>) + Send + Sync>;

/// Unique identifier for a Selector instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectorId(usize);

impl SelectorId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for SelectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__selector_{}", self.0)
    }
}

/// Internal state for a Selector.
#[derive(Debug)]
pub(super) struct SelectorInner<T> {
    /// Full candidate list supplied by the caller
    pub(super) candidates: Vec<T>,
    /// Literal contents of the text field
    pub(super) text: String,
    /// Candidates listed in the dropdown, as of the last filter pass
    pub(super) suggestions: Vec<T>,
    /// Whether the dropdown panel is shown
    pub(super) dropdown_visible: bool,
    /// Last explicitly picked candidate, until the next edit
    pub(super) selection: Option<T>,
    /// Pending filter pass slot
    pub(super) debouncer: Debouncer,
    /// Set once the selector is torn down
    pub(super) disposed: bool,
}

impl<T> SelectorInner<T> {
    fn new(candidates: Vec<T>) -> Self {
        Self {
            candidates,
            text: String::new(),
            suggestions: Vec::new(),
            dropdown_visible: false,
            selection: None,
            debouncer: Debouncer::new(),
            disposed: false,
        }
    }
}

/// A text input whose dropdown lists the candidates containing the typed text.
///
/// Filtering is debounced: each edit restarts a single per-instance timer,
/// and only the timer that survives a full quiet period recomputes the
/// suggestions. Picking a suggestion confirms it and reports it through the
/// selection callback; editing the text afterwards clears it again.
///
/// `Selector` is a cheap handle. Clones share the same state and timer slot.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::time::Duration;
/// use picker::{Candidate, ManualTimer, Selector};
///
/// let timer = ManualTimer::new();
/// let selector = Selector::builder(vec![
///     Candidate::new("Alice", "a"),
///     Candidate::new("Bob", "b"),
/// ])
/// .timer(Arc::new(timer.clone()))
/// .on_selection_change(|picked: Option<&Candidate>| println!("picked {:?}", picked))
/// .build()
/// .unwrap();
///
/// selector.on_text_change("bo");
/// timer.advance(Duration::from_millis(300));
/// assert_eq!(selector.suggestions(), vec![Candidate::new("Bob", "b")]);
/// ```
pub struct Selector<T: PickerItem = Candidate> {
    /// Unique identifier for this selector instance
    pub(super) id: SelectorId,
    /// Internal state
    pub(super) inner: Arc<RwLock<SelectorInner<T>>>,
    /// Dirty flag for re-render
    pub(super) dirty: Arc<AtomicBool>,
    pub(super) config: Arc<SelectorConfig>,
    pub(super) timer: Arc<dyn Timer>,
    pub(super) on_selection_change: SelectionCallback<T>,
    pub(super) wakeup: Option<WakeupSender>,
}

impl<T: PickerItem> Selector<T> {
    /// Start building a selector over `candidates`.
    pub fn builder(candidates: impl IntoIterator<Item = T>) -> SelectorBuilder<T> {
        SelectorBuilder::new(candidates.into_iter().collect())
    }

    /// Get the unique ID for this selector.
    pub fn id(&self) -> SelectorId {
        self.id
    }

    /// Get the configuration this selector was built with.
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Current text field contents.
    pub fn text(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.text.clone())
            .unwrap_or_default()
    }

    /// Candidates currently listed in the dropdown.
    pub fn suggestions(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|guard| guard.suggestions.clone())
            .unwrap_or_default()
    }

    /// Whether the dropdown panel is shown.
    pub fn is_dropdown_visible(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.dropdown_visible)
            .unwrap_or(false)
    }

    /// The confirmed selection, if the user picked one and has not edited since.
    pub fn selection(&self) -> Option<T> {
        self.inner
            .read()
            .map(|guard| guard.selection.clone())
            .unwrap_or(None)
    }

    /// The full candidate list.
    pub fn candidates(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|guard| guard.candidates.clone())
            .unwrap_or_default()
    }

    /// Whether a debounced filter pass is waiting to run.
    pub fn has_pending_filter(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.debouncer.is_pending())
            .unwrap_or(false)
    }

    /// Whether [`dispose`](Self::dispose) has been called.
    pub fn is_disposed(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.disposed)
            .unwrap_or(true)
    }

    // -------------------------------------------------------------------------
    // Caller data
    // -------------------------------------------------------------------------

    /// Replace the full candidate list.
    ///
    /// The listed suggestions are left alone; the next filter pass or focus
    /// works on the new list.
    pub fn set_candidates(&self, candidates: Vec<T>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.candidates = candidates;
        }
    }

    // -------------------------------------------------------------------------
    // Teardown
    // -------------------------------------------------------------------------

    /// Tear the selector down.
    ///
    /// Cancels any pending filter pass. Later events are ignored and the
    /// selection callback is never called again.
    pub fn dispose(&self) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.disposed {
                return;
            }
            guard.disposed = true;
            let cancelled = guard.debouncer.cancel();
            log::debug!("Selector::dispose id={} cancelled_pending={}", self.id, cancelled);
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the selector state has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    pub(super) fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }
}

impl<T: PickerItem> Clone for Selector<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            config: Arc::clone(&self.config),
            timer: Arc::clone(&self.timer),
            on_selection_change: Arc::clone(&self.on_selection_change),
            wakeup: self.wakeup.clone(),
        }
    }
}

impl<T: PickerItem + fmt::Debug> fmt::Debug for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selector")
            .field("id", &self.id)
            .field("inner", &self.inner)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// Builder
// -----------------------------------------------------------------------------

/// Typestate marker: builder still needs a selection callback.
pub struct NeedsCallback;

/// Typestate marker: builder has a selection callback.
pub struct HasCallback<T>(SelectionCallback<T>);

/// Builder for a [`Selector`].
///
/// Uses the typestate pattern so `build()` only exists once
/// `on_selection_change()` has been called.
pub struct SelectorBuilder<T: PickerItem, C = NeedsCallback> {
    candidates: Vec<T>,
    config: SelectorConfig,
    timer: Option<Arc<dyn Timer>>,
    wakeup: Option<WakeupSender>,
    callback: C,
}

impl<T: PickerItem> SelectorBuilder<T, NeedsCallback> {
    fn new(candidates: Vec<T>) -> Self {
        Self {
            candidates,
            config: SelectorConfig::default(),
            timer: None,
            wakeup: None,
            callback: NeedsCallback,
        }
    }

    /// Set the selection callback. Required before calling `build()`.
    pub fn on_selection_change<F>(self, f: F) -> SelectorBuilder<T, HasCallback<T>>
    where
        F: Fn(Option<&T>) + Send + Sync + 'static,
    {
        SelectorBuilder {
            candidates: self.candidates,
            config: self.config,
            timer: self.timer,
            wakeup: self.wakeup,
            callback: HasCallback(Arc::new(f)),
        }
    }
}

impl<T: PickerItem, C> SelectorBuilder<T, C> {
    /// Replace the whole configuration.
    pub fn config(mut self, config: SelectorConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the debounce delay.
    pub fn debounce_delay(mut self, delay: Duration) -> Self {
        self.config.debounce_delay = delay;
        self
    }

    /// Use `timer` instead of the current tokio runtime.
    pub fn timer(mut self, timer: Arc<dyn Timer>) -> Self {
        self.timer = Some(timer);
        self
    }

    /// Signal `wakeup` whenever a filter pass changes the selector.
    pub fn wakeup(mut self, wakeup: WakeupSender) -> Self {
        self.wakeup = Some(wakeup);
        self
    }
}

impl<T: PickerItem> SelectorBuilder<T, HasCallback<T>> {
    /// Build the selector.
    ///
    /// Fails with [`PickerError::NoRuntime`](crate::PickerError::NoRuntime)
    /// when no timer was given and the caller is not inside a tokio runtime.
    pub fn build(self) -> Result<Selector<T>> {
        let timer: Arc<dyn Timer> = match self.timer {
            Some(timer) => timer,
            None => Arc::new(TokioTimer::try_current()?),
        };

        let selector = Selector {
            id: SelectorId::new(),
            inner: Arc::new(RwLock::new(SelectorInner::new(self.candidates))),
            dirty: Arc::new(AtomicBool::new(false)),
            config: Arc::new(self.config),
            timer,
            on_selection_change: self.callback.0,
            wakeup: self.wakeup,
        };

        log::debug!(
            "Selector::build id={} candidates={} delay={:?}",
            selector.id,
            selector.candidates().len(),
            selector.config.debounce_delay
        );

        Ok(selector)
    }
}
