//! CSV loading into an entity store.
//!
//! Malformed rows always fail loudly. Credit rows referencing unknown people
//! or movies are the one policy decision: skipped but counted by default,
//! fatal when `load.strict` is set.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use costar_core::config::CostarConfig;
use costar_core::store::EntityStore;
use costar_core::types::{MovieId, PersonId, StoreError};

use crate::names::NameIndex;

/// Errors raised while loading a dataset directory.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed record in {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Row counts observed during a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub people: usize,
    pub movies: usize,
    pub credits: usize,
    /// Credit rows referencing unknown ids, skipped in lenient mode.
    pub credits_skipped: usize,
}

/// A fully loaded dataset: the store, the name index, and load counters.
#[derive(Debug)]
pub struct Dataset {
    pub store: EntityStore,
    pub names: NameIndex,
    pub summary: LoadSummary,
}

#[derive(Debug, Deserialize)]
struct PersonRow {
    id: String,
    name: String,
    birth: String,
}

#[derive(Debug, Deserialize)]
struct MovieRow {
    id: String,
    title: String,
    year: String,
}

#[derive(Debug, Deserialize)]
struct StarRow {
    person_id: String,
    movie_id: String,
}

/// Load `people.csv`, `movies.csv`, and `stars.csv` from `dir` (file names
/// per `config.files`) into a fresh store and name index.
pub fn load_dataset(dir: &Path, config: &CostarConfig) -> Result<Dataset, LoadError> {
    let mut store = EntityStore::new();
    let mut names = NameIndex::new();
    let mut summary = LoadSummary::default();

    let people_path = dir.join(&config.files.people);
    for row in rows::<PersonRow>(&people_path)? {
        let row = row.map_err(|e| csv_err(&people_path, e))?;
        let id = PersonId::new(row.id);
        names.insert(&row.name, id.clone());
        store.insert_person(id, row.name, blank_to_none(row.birth));
        summary.people += 1;
    }

    let movies_path = dir.join(&config.files.movies);
    for row in rows::<MovieRow>(&movies_path)? {
        let row = row.map_err(|e| csv_err(&movies_path, e))?;
        store.insert_movie(MovieId::new(row.id), row.title, blank_to_none(row.year));
        summary.movies += 1;
    }

    let stars_path = dir.join(&config.files.stars);
    for row in rows::<StarRow>(&stars_path)? {
        let row = row.map_err(|e| csv_err(&stars_path, e))?;
        let person = PersonId::new(row.person_id);
        let movie = MovieId::new(row.movie_id);
        match store.add_credit(&person, &movie) {
            Ok(()) => summary.credits += 1,
            Err(e) if config.load.strict => return Err(e.into()),
            Err(_) => summary.credits_skipped += 1,
        }
    }

    Ok(Dataset {
        store,
        names,
        summary,
    })
}

fn rows<T: serde::de::DeserializeOwned>(
    path: &Path,
) -> Result<csv::DeserializeRecordsIntoIter<File, T>, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(csv::Reader::from_reader(file).into_deserialize())
}

fn csv_err(path: &Path, source: csv::Error) -> LoadError {
    LoadError::Csv {
        path: path.to_path_buf(),
        source,
    }
}

fn blank_to_none(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
