//! Concurrent searches over one shared store, no synchronization.

#[path = "../common/mod.rs"]
mod common;

use common::{build_store, pid};
use costar_core::search::find_shortest_path;

#[test]
fn test_parallel_searches_share_one_store() {
    // A ring of ten people, each sharing a movie with the next.
    let people: Vec<(String, String)> = (0..10)
        .map(|i| (format!("p{}", i), format!("Person {}", i)))
        .collect();
    let movies: Vec<(String, String)> = (0..10)
        .map(|i| (format!("m{}", i), format!("Movie {}", i)))
        .collect();
    let mut credits = Vec::new();
    for i in 0..10 {
        credits.push((format!("p{}", i), format!("m{}", i)));
        credits.push((format!("p{}", (i + 1) % 10), format!("m{}", i)));
    }

    let people_refs: Vec<(&str, &str)> = people
        .iter()
        .map(|(a, b)| (a.as_str(), b.as_str()))
        .collect();
    let movie_refs: Vec<(&str, &str)> = movies
        .iter()
        .map(|(a, b)| (a.as_str(), b.as_str()))
        .collect();
    let credit_refs: Vec<(&str, &str)> = credits
        .iter()
        .map(|(a, b)| (a.as_str(), b.as_str()))
        .collect();
    let store = build_store(&people_refs, &movie_refs, &credit_refs);

    // On a ring of n nodes the distance from p0 to pk is min(k, n - k).
    std::thread::scope(|scope| {
        for k in 0..10usize {
            let store = &store;
            scope.spawn(move || {
                let target = format!("p{}", k);
                let path = find_shortest_path(store, &pid("p0"), &pid(&target))
                    .unwrap()
                    .unwrap();
                assert_eq!(path.len(), k.min(10 - k), "distance to p{}", k);
            });
        }
    });
}

#[test]
fn test_repeated_concurrent_runs_agree() {
    let store = build_store(
        &[("a", "Ann"), ("b", "Ben"), ("c", "Cal")],
        &[("m1", "One"), ("m2", "Two")],
        &[("a", "m1"), ("b", "m1"), ("b", "m2"), ("c", "m2")],
    );

    let baseline = find_shortest_path(&store, &pid("a"), &pid("c")).unwrap();
    std::thread::scope(|scope| {
        for _ in 0..8 {
            let store = &store;
            let baseline = &baseline;
            scope.spawn(move || {
                let path = find_shortest_path(store, &pid("a"), &pid("c")).unwrap();
                assert_eq!(&path, baseline);
            });
        }
    });
}
