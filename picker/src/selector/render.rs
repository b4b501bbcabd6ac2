//! Rendering for the Selector widget.
//!
//! The selector only decides which structure exists: the input line, whether
//! the dropdown panel is present, and which rows it holds. Drawing is up to
//! the host.

use crate::candidate::PickerItem;

use super::Selector;

/// One clickable suggestion row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRow {
    /// Row identity, the item key. Pass it to [`Selector::activate`].
    pub key: String,
    /// Text shown on the row.
    pub label: String,
}

/// Contents of the open dropdown panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dropdown {
    /// One row per suggestion, in suggestion order.
    Suggestions(Vec<SuggestionRow>),
    /// Single placeholder row shown instead of an empty panel.
    NoMatches { label: String },
}

impl Dropdown {
    /// Suggestion rows; empty for the no-matches panel.
    pub fn rows(&self) -> &[SuggestionRow] {
        match self {
            Dropdown::Suggestions(rows) => rows,
            Dropdown::NoMatches { .. } => &[],
        }
    }

    /// Number of lines the panel occupies.
    pub fn row_count(&self) -> usize {
        match self {
            Dropdown::Suggestions(rows) => rows.len(),
            Dropdown::NoMatches { .. } => 1,
        }
    }

    /// Suggestion row drawn at `line`, if that line holds one.
    pub fn row_at(&self, line: usize) -> Option<&SuggestionRow> {
        self.rows().get(line)
    }
}

/// Everything a host needs to draw a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorView {
    /// Selector instance id, for element ids in the host.
    pub id: String,
    /// Literal text field contents.
    pub text: String,
    /// Placeholder for the empty field.
    pub placeholder: String,
    /// Whether the widget is in its open state.
    pub active: bool,
    /// The dropdown panel, present only while it is visible.
    pub dropdown: Option<Dropdown>,
}

impl SelectorView {
    /// Text to draw in the input line: the field contents or the placeholder.
    pub fn display_text(&self) -> &str {
        if self.text.is_empty() {
            &self.placeholder
        } else {
            &self.text
        }
    }
}

impl<T: PickerItem> Selector<T> {
    /// Render the current state.
    pub fn view(&self) -> SelectorView {
        let (text, visible, rows) = match self.inner.read() {
            Ok(guard) => {
                let rows: Vec<SuggestionRow> = guard
                    .suggestions
                    .iter()
                    .map(|item| SuggestionRow {
                        key: item.item_key().to_string(),
                        label: item.item_label().to_string(),
                    })
                    .collect();
                (guard.text.clone(), guard.dropdown_visible, rows)
            }
            Err(_) => (String::new(), false, Vec::new()),
        };

        let dropdown = visible.then(|| {
            if rows.is_empty() {
                Dropdown::NoMatches {
                    label: self.config.no_matches_label.clone(),
                }
            } else {
                Dropdown::Suggestions(rows)
            }
        });

        log::trace!(
            "Selector::view id={} active={} rows={}",
            self.id,
            visible,
            dropdown.as_ref().map(Dropdown::row_count).unwrap_or(0)
        );

        SelectorView {
            id: self.id.to_string(),
            text,
            placeholder: self.config.placeholder.clone(),
            active: visible,
            dropdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::{Candidate, ManualTimer, SelectorConfig};

    fn selector(timer: &ManualTimer) -> Selector {
        Selector::builder(vec![
            Candidate::new("Alice", "a"),
            Candidate::new("Bob", "b"),
            Candidate::new("Alicia", "c"),
        ])
        .config(SelectorConfig::new().no_matches_label("Nobody"))
        .timer(Arc::new(timer.clone()))
        .on_selection_change(|_| {})
        .build()
        .unwrap()
    }

    #[test]
    fn test_hidden_dropdown_renders_no_panel() {
        let timer = ManualTimer::new();
        let view = selector(&timer).view();
        assert!(!view.active);
        assert_eq!(view.dropdown, None);
        assert_eq!(view.display_text(), "Enter a part of the name");
    }

    #[test]
    fn test_rows_follow_suggestion_order() {
        let timer = ManualTimer::new();
        let selector = selector(&timer);
        selector.on_text_change("ali");
        timer.advance(Duration::from_millis(300));

        let view = selector.view();
        assert!(view.active);
        assert_eq!(view.display_text(), "ali");
        let dropdown = view.dropdown.unwrap();
        let keys: Vec<&str> = dropdown.rows().iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "c"]);
        assert_eq!(dropdown.row_at(1).map(|r| r.label.as_str()), Some("Alicia"));
        assert_eq!(dropdown.row_at(2), None);
    }

    #[test]
    fn test_empty_result_renders_single_placeholder_row() {
        let timer = ManualTimer::new();
        let selector = selector(&timer);
        selector.on_text_change("zz");
        timer.advance(Duration::from_millis(300));

        let dropdown = selector.view().dropdown.unwrap();
        assert_eq!(
            dropdown,
            Dropdown::NoMatches {
                label: "Nobody".to_string()
            }
        );
        assert_eq!(dropdown.row_count(), 1);
        assert!(dropdown.rows().is_empty());
        assert_eq!(dropdown.row_at(0), None);
    }
}
