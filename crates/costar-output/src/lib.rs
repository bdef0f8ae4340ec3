//! Output formatters for costar command results.
//!
//! Provides two output modes:
//! - **Human** (default): degree-by-degree narration for terminal users
//! - **JSON** (`--json`): Machine-readable structured output

pub mod human;
pub mod json;

use costar_core::report::{MatchReport, PathReport, StatsReport};

pub trait OutputFormatter {
    fn format_path(&self, report: &PathReport) -> String;
    fn format_matches(&self, report: &MatchReport) -> String;
    fn format_stats(&self, report: &StatsReport) -> String;
}
