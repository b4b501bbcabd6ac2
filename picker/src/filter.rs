//! Case-insensitive substring filtering.

use crate::candidate::PickerItem;

/// Indices of the items whose label contains `query`, ignoring case.
///
/// Matches keep the order of `items`; nothing is scored or reordered.
/// An empty query matches every item.
///
/// # Example
///
/// ```
/// use picker::filter::substring_matches;
///
/// let items = ["Alice", "Bob", "Alicia"];
/// assert_eq!(substring_matches("ALI", &items), vec![0, 2]);
/// ```
pub fn substring_matches<T: PickerItem>(query: &str, items: &[T]) -> Vec<usize> {
    if query.is_empty() {
        return (0..items.len()).collect();
    }

    let needle = query.to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.item_label().to_lowercase().contains(&needle))
        .map(|(index, _)| index)
        .collect()
}

/// Clones of the items matched by [`substring_matches`], in original order.
pub fn filter_items<T: PickerItem>(query: &str, items: &[T]) -> Vec<T> {
    substring_matches(query, items)
        .into_iter()
        .map(|index| items[index].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Candidate;

    fn people() -> Vec<Candidate> {
        vec![
            Candidate::new("Alice", "a"),
            Candidate::new("Bob", "b"),
            Candidate::new("Alicia", "c"),
        ]
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        assert_eq!(filter_items("", &people()), people());
    }

    #[test]
    fn test_match_is_case_insensitive_and_stable() {
        let names: Vec<String> = filter_items("aLi", &people())
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Alice", "Alicia"]);
    }

    #[test]
    fn test_match_anywhere_in_name() {
        assert_eq!(substring_matches("cia", &people()), vec![2]);
        assert_eq!(substring_matches("o", &people()), vec![1]);
    }

    #[test]
    fn test_no_match() {
        assert!(filter_items("zed", &people()).is_empty());
    }

    #[test]
    fn test_whitespace_is_literal() {
        let items = ["Jan van Dam", "Janvan"];
        assert_eq!(substring_matches("n v", &items), vec![0]);
        assert_eq!(substring_matches(" ", &items), vec![0]);
    }

    #[test]
    fn test_unicode_case_folding() {
        let items = ["ÉMILE", "emile"];
        assert_eq!(substring_matches("émi", &items), vec![0]);
    }
}
