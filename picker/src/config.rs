//! Selector configuration.

use std::time::Duration;

/// Default quiet period before a filter pass runs.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Per-selector configuration.
///
/// Everything here is presentation or timing; the candidate list and the
/// selection callback are given to the builder directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Quiet period after the last text edit before suggestions are recomputed.
    /// Not clamped; zero means "on the next timer tick".
    pub debounce_delay: Duration,

    /// Text shown in the empty input field.
    pub placeholder: String,

    /// Label of the single row shown when nothing matches.
    pub no_matches_label: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            debounce_delay: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            placeholder: "Enter a part of the name".to_string(),
            no_matches_label: "No matching suggestions".to_string(),
        }
    }
}

impl SelectorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the debounce delay.
    pub fn debounce_delay(mut self, delay: Duration) -> Self {
        self.debounce_delay = delay;
        self
    }

    /// Set the debounce delay in milliseconds.
    pub fn with_debounce_ms(self, ms: u64) -> Self {
        self.debounce_delay(Duration::from_millis(ms))
    }

    /// Set the input placeholder.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the "no matches" row label.
    pub fn no_matches_label(mut self, label: impl Into<String>) -> Self {
        self.no_matches_label = label.into();
        self
    }
}
