//! Serializable result payloads, built against the store and rendered by the
//! output formatters downstream.

use serde::{Deserialize, Serialize};

use crate::store::EntityStore;
use crate::types::{Hop, PersonId, StoreError};

/// Result of a `costar query` run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathReport {
    pub version: String,
    pub command: String,
    pub source: PersonRef,
    pub target: PersonRef,
    pub connected: bool,
    pub degrees: usize,
    pub steps: Vec<PathStep>,
}

/// A person named in a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonRef {
    pub id: String,
    pub name: String,
}

/// One degree of a found path, resolved to display names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathStep {
    pub movie: String,
    pub from: String,
    pub to: String,
}

/// Result of a `costar search` run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub version: String,
    pub command: String,
    pub term: String,
    pub matches: Vec<PersonMatch>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonMatch {
    pub id: String,
    pub name: String,
    pub birth: Option<String>,
    pub credits: usize,
}

/// Result of a `costar stats` run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsReport {
    pub version: String,
    pub command: String,
    pub data_dir: String,
    pub people: usize,
    pub movies: usize,
    pub credits: usize,
    pub names: usize,
}

impl PathReport {
    /// Resolve a search result against the store. `path` is `None` for a
    /// not-connected outcome. Fails loudly if any hop names an unknown id.
    pub fn build(
        store: &EntityStore,
        source: &PersonId,
        target: &PersonId,
        path: Option<&[Hop]>,
    ) -> Result<Self, StoreError> {
        let mut steps = Vec::new();
        if let Some(hops) = path {
            let mut previous = source.clone();
            for hop in hops {
                steps.push(PathStep {
                    movie: store.movie(&hop.movie)?.title.clone(),
                    from: store.person(&previous)?.name.clone(),
                    to: store.person(&hop.person)?.name.clone(),
                });
                previous = hop.person.clone();
            }
        }
        Ok(PathReport {
            version: env!("CARGO_PKG_VERSION").to_string(),
            command: "query".to_string(),
            source: PersonRef {
                id: source.to_string(),
                name: store.person(source)?.name.clone(),
            },
            target: PersonRef {
                id: target.to_string(),
                name: store.person(target)?.name.clone(),
            },
            connected: path.is_some(),
            degrees: path.map_or(0, |hops| hops.len()),
            steps,
        })
    }
}
