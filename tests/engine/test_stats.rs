//! Traversal counters and the cancellation hook.

#[path = "../common/mod.rs"]
mod common;

use common::{chain_store, pid};
use costar_core::search::{search_with, CancelToken, SearchError, SearchOptions};

#[test]
fn discovered_never_exceeds_reachable() {
    let store = chain_store();
    let outcome = search_with(&store, &pid("a"), &pid("d"), &SearchOptions::default()).unwrap();
    // The component of a is {a, b, c}; d is never discovered.
    assert_eq!(outcome.path, None);
    assert!(outcome.stats.people_discovered <= 3);
    assert!(outcome.stats.people_expanded <= outcome.stats.people_discovered);
}

#[test]
fn exhaustive_search_expands_whole_component() {
    let store = chain_store();
    let outcome = search_with(&store, &pid("a"), &pid("d"), &SearchOptions::default()).unwrap();
    // A failed search dequeues everything it discovered.
    assert_eq!(
        outcome.stats.people_expanded,
        outcome.stats.people_discovered - 1 // source is discovered, never dequeued
    );
}

#[test]
fn early_target_skips_remaining_frontier() {
    let store = chain_store();
    let outcome = search_with(&store, &pid("a"), &pid("b"), &SearchOptions::default()).unwrap();
    assert_eq!(outcome.path.as_ref().map(Vec::len), Some(1));
    // b is the first dequeue; nothing is expanded.
    assert_eq!(outcome.stats.people_expanded, 0);
}

#[test]
fn cancelled_token_stops_connected_search() {
    let store = chain_store();
    let cancel = CancelToken::new();
    cancel.cancel();
    let options = SearchOptions {
        cancel: Some(cancel),
    };
    let err = search_with(&store, &pid("a"), &pid("c"), &options).unwrap_err();
    assert!(matches!(err, SearchError::Cancelled));
}

#[test]
fn unarmed_token_changes_nothing() {
    let store = chain_store();
    let options = SearchOptions {
        cancel: Some(CancelToken::new()),
    };
    let outcome = search_with(&store, &pid("a"), &pid("c"), &options).unwrap();
    assert_eq!(outcome.path.map(|p| p.len()), Some(2));
}
