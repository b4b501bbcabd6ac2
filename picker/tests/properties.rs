use std::sync::Arc;
use std::time::Duration;

use picker::filter::filter_items;
use picker::{Candidate, ManualTimer, Selector, SelectorConfig};
use proptest::prelude::*;

const DELAY_MS: u64 = 300;

fn arb_candidates() -> impl Strategy<Value = Vec<Candidate>> {
    prop::collection::vec("[a-zA-Z ]{0,10}", 0..20).prop_map(|names| {
        names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Candidate::new(name, format!("slug-{i}")))
            .collect()
    })
}

/// Candidates whose lowercased name contains the lowercased query, in list order.
fn expected_matches(query: &str, candidates: &[Candidate]) -> Vec<Candidate> {
    let query = query.to_lowercase();
    candidates
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

proptest! {
    /// Property: the filter keeps exactly the matching candidates in their original order
    #[test]
    fn prop_filter_is_ordered_substring_match(
        candidates in arb_candidates(),
        query in "[a-zA-Z ]{0,4}",
    ) {
        prop_assert_eq!(filter_items(&query, &candidates), expected_matches(&query, &candidates));
    }

    /// Property: an empty query keeps the whole list
    #[test]
    fn prop_empty_query_keeps_everything(candidates in arb_candidates()) {
        prop_assert_eq!(filter_items("", &candidates), candidates);
    }

    /// Property: edits closer together than the delay produce one pass, for the last text
    #[test]
    fn prop_rapid_edits_run_one_pass(
        candidates in arb_candidates(),
        edits in prop::collection::vec(("[a-zA-Z ]{0,4}", 0..DELAY_MS), 1..12),
    ) {
        let timer = ManualTimer::new();
        let selector = Selector::builder(candidates.clone())
            .config(SelectorConfig::new().with_debounce_ms(DELAY_MS))
            .timer(Arc::new(timer.clone()))
            .on_selection_change(|_| {})
            .build()
            .unwrap();

        for (text, gap) in &edits {
            selector.on_text_change(text.as_str());
            timer.advance(Duration::from_millis(*gap));
            prop_assert!(!selector.is_dropdown_visible());
        }
        prop_assert_eq!(timer.pending(), 1);

        // The last gap already counts towards the final quiet period.
        let last_gap = edits.last().map(|(_, gap)| *gap).unwrap_or(0);
        selector.clear_dirty();
        timer.advance(Duration::from_millis(DELAY_MS - last_gap - 1));
        prop_assert!(!selector.is_dirty());
        prop_assert!(!selector.is_dropdown_visible());

        timer.advance(Duration::from_millis(1));
        let last_text = edits.last().map(|(text, _)| text.as_str()).unwrap_or("");
        prop_assert!(selector.is_dirty());
        prop_assert!(selector.is_dropdown_visible());
        prop_assert_eq!(selector.text(), last_text);
        prop_assert_eq!(selector.suggestions(), expected_matches(last_text, &candidates));

        selector.clear_dirty();
        timer.advance(Duration::from_millis(10 * DELAY_MS));
        prop_assert!(!selector.is_dirty());
        prop_assert_eq!(timer.pending(), 0);
    }
}
