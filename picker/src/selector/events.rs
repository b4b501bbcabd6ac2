//! Event handling for the Selector widget.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, Weak};

use crate::candidate::PickerItem;
use crate::filter::filter_items;
use crate::wakeup::WakeupSender;

use super::state::{SelectorId, SelectorInner};
use super::Selector;

impl<T: PickerItem> Selector<T> {
    /// The user edited the text field.
    ///
    /// Updates the text at once and restarts the debounce timer for a filter
    /// pass over the new text. A confirmed selection is cleared immediately
    /// and `None` is reported before this returns, even if the new text still
    /// equals the selected label.
    pub fn on_text_change(&self, text: impl Into<String>) {
        let text = text.into();

        let cleared = {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            if guard.disposed {
                log::warn!("Selector::on_text_change id={} after dispose", self.id);
                return;
            }
            guard.text = text.clone();
            // Scheduled before the callback runs, so an edit made from inside
            // the callback replaces this pass instead of being replaced by it.
            self.schedule_filter(&mut guard, text.clone());
            guard.selection.take().is_some()
        };
        self.mark_dirty();

        log::debug!(
            "Selector::on_text_change id={} text={:?} cleared_selection={}",
            self.id,
            text,
            cleared
        );

        if cleared {
            (self.on_selection_change)(None);
        }
    }

    /// The text field received focus.
    ///
    /// With an empty field, lists every candidate right away without waiting
    /// for the debounce timer. Otherwise nothing changes.
    pub fn on_focus(&self) {
        {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            if guard.disposed {
                log::warn!("Selector::on_focus id={} after dispose", self.id);
                return;
            }
            if !guard.text.is_empty() {
                return;
            }
            guard.suggestions = guard.candidates.clone();
            guard.dropdown_visible = true;
            log::debug!(
                "Selector::on_focus id={} showing all {} candidates",
                self.id,
                guard.suggestions.len()
            );
        }
        self.mark_dirty();
    }

    /// The user picked `item`.
    ///
    /// Confirms it, copies its label into the text field, closes the dropdown
    /// and reports it to the selection callback. A filter pass still waiting
    /// on the debounce timer is dropped so the dropdown stays closed.
    pub fn select(&self, item: &T) {
        {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            if guard.disposed {
                log::warn!("Selector::select id={} after dispose", self.id);
                return;
            }
            guard.debouncer.cancel();
            guard.selection = Some(item.clone());
            guard.text = item.item_label().to_string();
            guard.suggestions.clear();
            guard.dropdown_visible = false;
        }
        self.mark_dirty();

        log::debug!(
            "Selector::select id={} key={} label={:?}",
            self.id,
            item.item_key(),
            item.item_label()
        );

        (self.on_selection_change)(Some(item));
    }

    /// Activate the rendered row keyed `key`.
    ///
    /// Returns false, changing nothing, when the dropdown does not currently
    /// list a row with that key.
    pub fn activate(&self, key: &str) -> bool {
        let item = self.inner.read().ok().and_then(|guard| {
            if !guard.dropdown_visible {
                return None;
            }
            guard
                .suggestions
                .iter()
                .find(|item| item.item_key() == key)
                .cloned()
        });

        match item {
            Some(item) => {
                self.select(&item);
                true
            }
            None => {
                log::warn!("Selector::activate id={} no listed row with key {:?}", self.id, key);
                false
            }
        }
    }

    fn schedule_filter(&self, inner: &mut SelectorInner<T>, query: String) {
        let weak = Arc::downgrade(&self.inner);
        let dirty = Arc::clone(&self.dirty);
        let wakeup = self.wakeup.clone();
        let id = self.id;

        inner.debouncer.schedule(
            &*self.timer,
            self.config.debounce_delay,
            move |generation| {
                run_filter_pass(id, &weak, &dirty, wakeup.as_ref(), generation, &query);
            },
        );
    }
}

/// Debounced filter pass: recompute suggestions for `query` and show the
/// dropdown. Never touches the confirmed selection.
fn run_filter_pass<T: PickerItem>(
    id: SelectorId,
    inner: &Weak<RwLock<SelectorInner<T>>>,
    dirty: &AtomicBool,
    wakeup: Option<&WakeupSender>,
    generation: u64,
    query: &str,
) {
    let Some(inner) = inner.upgrade() else {
        log::trace!("Selector filter pass id={} skipped, selector dropped", id);
        return;
    };
    let Ok(mut guard) = inner.write() else {
        return;
    };
    if guard.disposed || !guard.debouncer.claim(generation) {
        log::trace!(
            "Selector filter pass id={} generation={} is stale",
            id,
            generation
        );
        return;
    }

    guard.suggestions = filter_items(query, &guard.candidates);
    guard.dropdown_visible = true;
    log::debug!(
        "Selector filter pass id={} query={:?} matches={}",
        id,
        query,
        guard.suggestions.len()
    );
    drop(guard);

    dirty.store(true, Ordering::SeqCst);
    if let Some(wakeup) = wakeup {
        wakeup.send();
    }
}
