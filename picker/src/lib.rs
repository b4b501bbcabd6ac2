//! A debounced, substring-filtered selector widget.
//!
//! The [`Selector`] owns the text field contents, the current suggestion list,
//! dropdown visibility and the confirmed selection. Hosts feed it UI events,
//! draw the [`SelectorView`] it renders, and get notified whenever the
//! confirmed selection changes.

pub mod candidate;
pub mod catalog;
pub mod config;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod selector;
pub mod timer;
pub mod wakeup;

pub use candidate::{Candidate, PickerItem};
pub use config::{DEFAULT_DEBOUNCE_MS, SelectorConfig};
pub use error::{PickerError, Result};
pub use selector::{Dropdown, Selector, SelectorBuilder, SelectorId, SelectorView, SuggestionRow};
pub use timer::{ManualTimer, Timer, TimerHandle, TokioTimer};

/// Glob-importable names for hosts.
///
/// Leaves out the [`Result`] alias so it does not shadow `std::result::Result`.
pub mod prelude {
    pub use crate::candidate::{Candidate, PickerItem};
    pub use crate::config::SelectorConfig;
    pub use crate::error::PickerError;
    pub use crate::selector::{Dropdown, Selector, SelectorView, SuggestionRow};
    pub use crate::timer::{ManualTimer, Timer, TokioTimer};
    pub use crate::wakeup::{WakeupReceiver, WakeupSender};
}
