//! Dataset ingestion for costar.
//!
//! Reads the three-file CSV schema (`people.csv`, `movies.csv`, `stars.csv`)
//! into an [`EntityStore`](costar_core::store::EntityStore) plus a
//! case-folded [`NameIndex`](names::NameIndex) for name → id resolution.

pub mod dataset;
pub mod names;

pub use dataset::{load_dataset, Dataset, LoadError, LoadSummary};
pub use names::NameIndex;
