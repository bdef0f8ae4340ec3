//! Breadth-first shortest-path search over the implicit co-star graph.
//!
//! Each call owns a fresh visited set, frontier queue, and parent map; no
//! state survives between calls, so concurrent searches over one shared
//! store need no synchronization.
//!
//! Neighbor sets iterate in ascending (movie id, person id) order, so among
//! equal-length paths the reported one follows earliest discovery under that
//! order. Results are byte-identical across runs.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::store::EntityStore;
use crate::types::{Hop, MovieId, PersonId, StoreError};

/// Errors raised by a search call. A missing path is not an error; see
/// [`SearchOutcome::path`].
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("search cancelled")]
    Cancelled,
}

/// Cloneable cancellation flag, checked once per dequeue iteration.
///
/// The CLI arms one from a timer thread to implement `--timeout`.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Options for a single search call.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub cancel: Option<CancelToken>,
}

/// Traversal counters: how many people were discovered (entered the visited
/// set) and how many were dequeued and expanded. Discovered is bounded by
/// the people reachable from the source; expanded never exceeds discovered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub people_discovered: usize,
    pub people_expanded: usize,
}

/// Result of a completed (non-erroring) search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// `Some(hops)` when connected (empty for a self-path), `None` when the
    /// two people share no chain of movies.
    pub path: Option<Vec<Hop>>,
    pub stats: SearchStats,
}

/// How a person was first reached. Written once per person, at enqueue time;
/// first discovery wins, which is what makes reconstructed paths shortest.
struct Discovery {
    movie: MovieId,
    predecessor: PersonId,
}

/// Find the minimal chain of shared-movie hops from `source` to `target`.
///
/// Returns `Ok(Some(hops))` when connected — `hops.len()` is the degree of
/// separation, zero for a self-search — and `Ok(None)` when no chain exists.
/// Unknown ids fail with [`StoreError::PersonNotFound`] before any traversal.
pub fn find_shortest_path(
    store: &EntityStore,
    source: &PersonId,
    target: &PersonId,
) -> Result<Option<Vec<Hop>>, SearchError> {
    search_with(store, source, target, &SearchOptions::default()).map(|outcome| outcome.path)
}

/// [`find_shortest_path`] with cancellation support and traversal counters.
pub fn search_with(
    store: &EntityStore,
    source: &PersonId,
    target: &PersonId,
    options: &SearchOptions,
) -> Result<SearchOutcome, SearchError> {
    store.person(source)?;
    store.person(target)?;

    if source == target {
        return Ok(SearchOutcome {
            path: Some(Vec::new()),
            stats: SearchStats {
                people_discovered: 1,
                people_expanded: 0,
            },
        });
    }

    let mut visited: HashSet<PersonId> = HashSet::new();
    let mut parents: HashMap<PersonId, Discovery> = HashMap::new();
    let mut frontier: VecDeque<PersonId> = VecDeque::new();
    let mut expanded = 0usize;

    visited.insert(source.clone());
    enqueue_neighbors(store, source, &mut visited, &mut parents, &mut frontier)?;

    while let Some(current) = frontier.pop_front() {
        if let Some(cancel) = &options.cancel {
            if cancel.is_cancelled() {
                return Err(SearchError::Cancelled);
            }
        }

        if current == *target {
            let path = reconstruct(&parents, target);
            return Ok(SearchOutcome {
                path: Some(path),
                stats: SearchStats {
                    people_discovered: visited.len(),
                    people_expanded: expanded,
                },
            });
        }

        expanded += 1;
        enqueue_neighbors(store, &current, &mut visited, &mut parents, &mut frontier)?;
    }

    Ok(SearchOutcome {
        path: None,
        stats: SearchStats {
            people_discovered: visited.len(),
            people_expanded: expanded,
        },
    })
}

/// Expand one person: mark each unvisited neighbor visited, record how it
/// was discovered, and enqueue it. Marking happens at enqueue, never at
/// dequeue, so no person enters the frontier twice.
fn enqueue_neighbors(
    store: &EntityStore,
    from: &PersonId,
    visited: &mut HashSet<PersonId>,
    parents: &mut HashMap<PersonId, Discovery>,
    frontier: &mut VecDeque<PersonId>,
) -> Result<(), StoreError> {
    for Hop { movie, person } in store.neighbors_for_person(from)? {
        if visited.insert(person.clone()) {
            parents.insert(
                person.clone(),
                Discovery {
                    movie,
                    predecessor: from.clone(),
                },
            );
            frontier.push_back(person);
        }
    }
    Ok(())
}

/// Walk the parent map backward from the target, then reverse. The source is
/// the only visited person without a parent entry, so the walk stops there.
fn reconstruct(parents: &HashMap<PersonId, Discovery>, target: &PersonId) -> Vec<Hop> {
    let mut hops = Vec::new();
    let mut current = target.clone();
    while let Some(found) = parents.get(&current) {
        hops.push(Hop::new(found.movie.clone(), current));
        current = found.predecessor.clone();
    }
    hops.reverse();
    hops
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
