use costar_core::report::{MatchReport, PathReport, StatsReport};

use crate::OutputFormatter;

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_path(&self, report: &PathReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_default()
    }

    fn format_matches(&self, report: &MatchReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_default()
    }

    fn format_stats(&self, report: &StatsReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_default()
    }
}
