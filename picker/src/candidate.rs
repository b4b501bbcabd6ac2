//! Records that can be offered by a [`Selector`](crate::Selector).

use serde::{Deserialize, Serialize};

/// A selectable record: a display name plus a stable unique slug.
///
/// # Example
///
/// ```
/// use picker::{Candidate, PickerItem};
///
/// let alice = Candidate::new("Alice", "alice-1990");
/// assert_eq!(alice.item_label(), "Alice");
/// assert_eq!(alice.item_key(), "alice-1990");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub slug: String,
}

impl Candidate {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
        }
    }
}

/// Trait for items that can be listed in a selector dropdown.
///
/// Keys must be unique across one candidate list, otherwise rows cannot be
/// told apart. The selector does not check this.
pub trait PickerItem: Clone + Send + Sync + 'static {
    /// Stable identifier, used as the row key.
    fn item_key(&self) -> &str;

    /// Display text, used for matching and as the row label.
    fn item_label(&self) -> &str;
}

impl PickerItem for Candidate {
    fn item_key(&self) -> &str {
        &self.slug
    }

    fn item_label(&self) -> &str {
        &self.name
    }
}

impl PickerItem for String {
    fn item_key(&self) -> &str {
        self
    }

    fn item_label(&self) -> &str {
        self
    }
}

impl PickerItem for &'static str {
    fn item_key(&self) -> &str {
        self
    }

    fn item_label(&self) -> &str {
        self
    }
}

// (key, label) tuples
impl<S1, S2> PickerItem for (S1, S2)
where
    S1: AsRef<str> + Clone + Send + Sync + 'static,
    S2: AsRef<str> + Clone + Send + Sync + 'static,
{
    fn item_key(&self) -> &str {
        self.0.as_ref()
    }

    fn item_label(&self) -> &str {
        self.1.as_ref()
    }
}
