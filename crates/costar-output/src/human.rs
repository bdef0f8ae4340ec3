use costar_core::report::{MatchReport, PathReport, StatsReport};

use crate::OutputFormatter;

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_path(&self, report: &PathReport) -> String {
        if !report.connected {
            return "Not connected.\n".to_string();
        }

        let mut out = format!("{} degrees of separation.\n", report.degrees);
        for (i, step) in report.steps.iter().enumerate() {
            out.push_str(&format!(
                "{}: {} and {} starred in {}\n",
                i + 1,
                step.from,
                step.to,
                step.movie,
            ));
        }
        out
    }

    fn format_matches(&self, report: &MatchReport) -> String {
        let mut out = format!(
            "Search results for '{}' ({} found):\n",
            report.term,
            report.matches.len(),
        );
        for m in &report.matches {
            let born = m.birth.as_deref().unwrap_or("?");
            out.push_str(&format!(
                "  {} [{}] born={} credits={}\n",
                m.name, m.id, born, m.credits,
            ));
        }
        out
    }

    fn format_stats(&self, report: &StatsReport) -> String {
        let mut out = format!("costar stats for {}\n", report.data_dir);
        out.push_str(&format!("  people:  {}\n", report.people));
        out.push_str(&format!("  movies:  {}\n", report.movies));
        out.push_str(&format!("  credits: {}\n", report.credits));
        out.push_str(&format!("  names:   {}\n", report.names));
        out
    }
}
