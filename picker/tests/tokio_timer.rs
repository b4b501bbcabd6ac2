use std::sync::{Arc, Mutex};
use std::time::Duration;

use picker::wakeup;
use picker::{Candidate, Selector};

fn people() -> Vec<Candidate> {
    vec![
        Candidate::new("Alice", "a"),
        Candidate::new("Bob", "b"),
        Candidate::new("Alicia", "c"),
    ]
}

#[tokio::test(start_paused = true)]
async fn test_debounce_on_runtime_clock() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let calls_clone = Arc::clone(&calls);
    let selector = Selector::builder(people())
        .on_selection_change(move |picked: Option<&Candidate>| {
            calls_clone.lock().unwrap().push(picked.map(|c| c.slug.clone()))
        })
        .build()
        .unwrap();

    selector.on_text_change("a");
    tokio::time::sleep(Duration::from_millis(100)).await;
    selector.on_text_change("al");
    tokio::time::sleep(Duration::from_millis(100)).await;
    selector.on_text_change("ali");
    tokio::time::sleep(Duration::from_millis(299)).await;
    assert!(!selector.is_dropdown_visible());

    tokio::time::sleep(Duration::from_millis(2)).await;
    let slugs: Vec<String> = selector.suggestions().into_iter().map(|c| c.slug).collect();
    assert_eq!(slugs, vec!["a", "c"]);

    assert!(selector.activate("c"));
    selector.on_text_change("Alici");
    assert_eq!(
        *calls.lock().unwrap(),
        vec![Some("c".to_string()), None]
    );

    tokio::time::sleep(Duration::from_millis(301)).await;
    let slugs: Vec<String> = selector.suggestions().into_iter().map(|c| c.slug).collect();
    assert_eq!(slugs, vec!["c"]);
}

#[tokio::test(start_paused = true)]
async fn test_filter_pass_sends_wakeup() {
    let (tx, mut rx) = wakeup::channel();
    let selector = Selector::builder(people())
        .wakeup(tx)
        .on_selection_change(|_| {})
        .build()
        .unwrap();

    selector.on_text_change("bob");
    assert_eq!(rx.recv().await, Some(()));
    assert_eq!(selector.suggestions(), vec![Candidate::new("Bob", "b")]);
}

#[tokio::test(start_paused = true)]
async fn test_dispose_on_runtime_clock() {
    let selector = Selector::builder(people())
        .on_selection_change(|_| {})
        .build()
        .unwrap();

    selector.on_text_change("bob");
    selector.dispose();
    tokio::time::sleep(Duration::from_secs(1)).await;

    assert!(!selector.is_dropdown_visible());
    assert!(selector.suggestions().is_empty());
}
