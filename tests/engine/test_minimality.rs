//! Path lengths cross-checked against an independent distance-only BFS.

#[path = "../common/mod.rs"]
mod common;

use std::collections::{HashMap, VecDeque};

use common::{build_store, pid};
use costar_core::search::find_shortest_path;
use costar_core::store::EntityStore;
use costar_core::types::PersonId;

/// Distance-only BFS, written without the parent-map machinery so the two
/// implementations can disagree.
fn reference_distance(store: &EntityStore, source: &PersonId, target: &PersonId) -> Option<usize> {
    let mut distance: HashMap<PersonId, usize> = HashMap::new();
    let mut queue = VecDeque::new();
    distance.insert(source.clone(), 0);
    queue.push_back(source.clone());
    while let Some(current) = queue.pop_front() {
        let d = distance[&current];
        if current == *target {
            return Some(d);
        }
        for hop in store.neighbors_for_person(&current).unwrap() {
            if !distance.contains_key(&hop.person) {
                distance.insert(hop.person.clone(), d + 1);
                queue.push_back(hop.person);
            }
        }
    }
    None
}

/// Two clusters joined through f, plus an isolated pair (h, i).
fn dense_store() -> EntityStore {
    build_store(
        &[
            ("a", "Ann"),
            ("b", "Ben"),
            ("c", "Cal"),
            ("d", "Dee"),
            ("e", "Eli"),
            ("f", "Fay"),
            ("g", "Gus"),
            ("h", "Hal"),
            ("i", "Ida"),
        ],
        &[
            ("m1", "One"),
            ("m2", "Two"),
            ("m3", "Three"),
            ("m4", "Four"),
            ("m5", "Five"),
            ("m6", "Six"),
        ],
        &[
            ("a", "m1"),
            ("b", "m1"),
            ("c", "m1"),
            ("c", "m2"),
            ("d", "m2"),
            ("d", "m3"),
            ("e", "m3"),
            ("e", "m4"),
            ("f", "m4"),
            ("a", "m5"),
            ("f", "m5"),
            ("g", "m4"),
            ("h", "m6"),
            ("i", "m6"),
        ],
    )
}

#[test]
fn every_pair_matches_reference_distance() {
    let store = dense_store();
    let ids = ["a", "b", "c", "d", "e", "f", "g", "h", "i"];
    for source in ids {
        for target in ids {
            let expected = reference_distance(&store, &pid(source), &pid(target));
            let path = find_shortest_path(&store, &pid(source), &pid(target)).unwrap();
            assert_eq!(
                path.as_ref().map(|hops| hops.len()),
                expected,
                "distance mismatch for {} -> {}",
                source,
                target,
            );
        }
    }
}

#[test]
fn every_returned_hop_is_a_valid_credit() {
    let store = dense_store();
    let ids = ["a", "b", "c", "d", "e", "f", "g"];
    for source in ids {
        for target in ids {
            let Some(path) = find_shortest_path(&store, &pid(source), &pid(target)).unwrap()
            else {
                continue;
            };
            let mut previous = pid(source);
            for hop in path {
                let movie = store.movie(&hop.movie).unwrap();
                assert!(movie.stars.contains(&previous));
                assert!(movie.stars.contains(&hop.person));
                previous = hop.person;
            }
            assert_eq!(previous, pid(target));
        }
    }
}

#[test]
fn shortcut_beats_long_way_round() {
    // a -> f directly through m5, never the four-hop chain through the middle.
    let store = dense_store();
    let path = find_shortest_path(&store, &pid("a"), &pid("f"))
        .unwrap()
        .unwrap();
    assert_eq!(path.len(), 1);
}
