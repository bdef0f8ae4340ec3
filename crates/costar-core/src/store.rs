//! The entity store: two lookup tables over people and movies.
//!
//! Built once by the loader, then shared immutably. `&EntityStore` is `Sync`,
//! so any number of concurrent searches may read it without locking.

use std::collections::{BTreeSet, HashMap};

use crate::types::{Hop, Movie, MovieId, Person, PersonId, StoreError};

/// Immutable-after-load lookup tables for people and movies.
///
/// The mutating methods exist for the loader and for test fixtures; once
/// loading completes the store is only ever read.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    people: HashMap<PersonId, Person>,
    movies: HashMap<MovieId, Movie>,
    credits: usize,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a person record with an empty credit set. A repeated id
    /// replaces the earlier record, matching the source data's last-row-wins
    /// semantics.
    pub fn insert_person(&mut self, id: PersonId, name: impl Into<String>, birth: Option<String>) {
        self.people.insert(
            id,
            Person {
                name: name.into(),
                birth,
                movies: BTreeSet::new(),
            },
        );
    }

    /// Insert a movie record with an empty cast.
    pub fn insert_movie(&mut self, id: MovieId, title: impl Into<String>, year: Option<String>) {
        self.movies.insert(
            id,
            Movie {
                title: title.into(),
                year,
                stars: BTreeSet::new(),
            },
        );
    }

    /// Link a person and a movie in both directions.
    ///
    /// Fails if either side is unknown, so dangling references never enter
    /// the store. Re-adding an existing credit is a no-op (the credit sets
    /// deduplicate).
    pub fn add_credit(&mut self, person: &PersonId, movie: &MovieId) -> Result<(), StoreError> {
        if !self.people.contains_key(person) {
            return Err(StoreError::PersonNotFound(person.clone()));
        }
        let movie_rec = self
            .movies
            .get_mut(movie)
            .ok_or_else(|| StoreError::MovieNotFound(movie.clone()))?;
        let newly_cast = movie_rec.stars.insert(person.clone());
        if let Some(person_rec) = self.people.get_mut(person) {
            person_rec.movies.insert(movie.clone());
        }
        if newly_cast {
            self.credits += 1;
        }
        Ok(())
    }

    pub fn person(&self, id: &PersonId) -> Result<&Person, StoreError> {
        self.people
            .get(id)
            .ok_or_else(|| StoreError::PersonNotFound(id.clone()))
    }

    pub fn movie(&self, id: &MovieId) -> Result<&Movie, StoreError> {
        self.movies
            .get(id)
            .ok_or_else(|| StoreError::MovieNotFound(id.clone()))
    }

    pub fn people(&self) -> impl Iterator<Item = (&PersonId, &Person)> {
        self.people.iter()
    }

    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Number of distinct (person, movie) credit links.
    pub fn credit_count(&self) -> usize {
        self.credits
    }

    /// The neighbor generator: every `(movie, person)` pair reachable from
    /// `id` by one shared-movie hop, deduplicated and iterated in ascending
    /// (movie id, person id) order.
    ///
    /// The result includes hops back to `id` itself, since the person is in
    /// the cast of every movie they are credited in; the search engine's
    /// visited set filters those. Unknown ids fail loudly, as does a credit
    /// referencing a movie missing from the table (impossible through
    /// [`add_credit`](Self::add_credit), but never skipped silently).
    pub fn neighbors_for_person(&self, id: &PersonId) -> Result<BTreeSet<Hop>, StoreError> {
        let person = self.person(id)?;
        let mut neighbors = BTreeSet::new();
        for movie_id in &person.movies {
            let movie = self.movie(movie_id)?;
            for star in &movie.stars {
                neighbors.insert(Hop::new(movie_id.clone(), star.clone()));
            }
        }
        Ok(neighbors)
    }
}
