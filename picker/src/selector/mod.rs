//! Selector widget - text input with debounced substring-filtered suggestions.

mod events;
mod render;
mod state;

pub use render::{Dropdown, SelectorView, SuggestionRow};
pub use state::{
    HasCallback, NeedsCallback, SelectionCallback, Selector, SelectorBuilder, SelectorId,
};
