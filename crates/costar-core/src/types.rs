use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Identifier of a person record. Compared and hashed exactly as loaded;
/// name normalization happens in the loader's name index, never here.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    pub fn new(id: impl Into<String>) -> Self {
        PersonId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a movie record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    pub fn new(id: impl Into<String>) -> Self {
        MovieId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One edge traversal: reaching `person` through a movie shared with the
/// previous person on the path.
///
/// Field order matters: the derived `Ord` compares `movie` before `person`,
/// which is the canonical tie-break order used when enqueuing neighbors.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Hop {
    pub movie: MovieId,
    pub person: PersonId,
}

impl Hop {
    pub fn new(movie: MovieId, person: PersonId) -> Self {
        Hop { movie, person }
    }
}

/// A person record: name, optional birth year, and the movies they are
/// credited in. Birth years stay raw strings; the source data leaves them
/// blank or non-numeric often enough that parsing belongs to no one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub birth: Option<String>,
    pub movies: BTreeSet<MovieId>,
}

/// A movie record: title, optional release year, and its cast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub year: Option<String>,
    pub stars: BTreeSet<PersonId>,
}

/// Errors raised by entity store lookups.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("person not found: {0}")]
    PersonNotFound(PersonId),

    #[error("movie not found: {0}")]
    MovieNotFound(MovieId),
}
