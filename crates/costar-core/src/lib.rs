//! Core data model and shortest-path search for costar.
//!
//! This crate provides the foundational pieces used across all costar crates:
//! - [`types`] — Person/movie identifiers, records, and error types
//! - [`store`] — The immutable [`EntityStore`](store::EntityStore) and neighbor generation
//! - [`search`] — Breadth-first shortest-path search with path reconstruction
//! - [`report`] — Serializable result payloads for the output formatters
//! - [`config`] — Configuration loading from `<data-dir>/costar.json`

pub mod config;
pub mod report;
pub mod search;
pub mod store;
pub mod types;
