use std::time::Duration;

use costar_core::report::PathReport;
use costar_core::search::{self, CancelToken, SearchError, SearchOptions};
use costar_core::types::PersonId;
use costar_loader::Dataset;
use costar_output::OutputFormatter;

use crate::prompt;

/// Run `costar query [SOURCE] [TARGET]` — find the shortest co-star chain.
///
/// Exit codes: 0 = path found (including the 0-degree self path),
/// 1 = not connected, 2 = any error.
#[allow(clippy::too_many_arguments)]
pub fn run(
    formatter: &dyn OutputFormatter,
    verbose: bool,
    json: bool,
    source: Option<String>,
    target: Option<String>,
    data: String,
    strict: bool,
    timeout: Option<u64>,
) -> i32 {
    let Some((dataset, config)) = super::data::open("query", &data, strict, verbose) else {
        return 2;
    };

    // --json must never prompt; missing or ambiguous names are hard errors.
    let interactive = !json;
    let Some(source_id) = resolve(&dataset, source, interactive) else {
        return 2;
    };
    let Some(target_id) = resolve(&dataset, target, interactive) else {
        return 2;
    };

    let timeout_seconds = timeout.unwrap_or(config.search.timeout_seconds);
    let mut options = SearchOptions::default();
    if timeout_seconds > 0 {
        let token = CancelToken::new();
        let timer = token.clone();
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_secs(timeout_seconds));
            timer.cancel();
        });
        options.cancel = Some(token);
    }

    let outcome = match search::search_with(&dataset.store, &source_id, &target_id, &options) {
        Ok(outcome) => outcome,
        Err(SearchError::Cancelled) => {
            eprintln!("costar query: search timed out after {}s", timeout_seconds);
            return 2;
        }
        Err(e) => {
            eprintln!("costar query: {}", e);
            return 2;
        }
    };

    if verbose {
        eprintln!(
            "costar query: discovered {} people, expanded {}",
            outcome.stats.people_discovered, outcome.stats.people_expanded,
        );
    }

    let report = match PathReport::build(
        &dataset.store,
        &source_id,
        &target_id,
        outcome.path.as_deref(),
    ) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("costar query: {}", e);
            return 2;
        }
    };

    print!("{}", formatter.format_path(&report));

    if report.connected {
        0
    } else {
        1
    }
}

/// Turn an optional name argument into a validated person id, prompting for
/// missing names and disambiguating shared ones when interactive.
fn resolve(dataset: &Dataset, provided: Option<String>, interactive: bool) -> Option<PersonId> {
    let name = match provided {
        Some(name) => name,
        None if interactive => match prompt::input_name("Name") {
            Ok(name) => name,
            Err(e) => {
                eprintln!("costar query: {}", e);
                return None;
            }
        },
        None => {
            eprintln!("costar query: missing person name (positional, required with --json)");
            return None;
        }
    };

    let candidates = dataset.names.lookup(&name);
    match candidates.len() {
        0 => {
            eprintln!("costar query: person not found: {}", name);
            None
        }
        1 => Some(candidates[0].clone()),
        _ if interactive => match prompt::select_person(&dataset.store, &name, &candidates) {
            Ok(id) => Some(id),
            Err(e) => {
                eprintln!("costar query: {}", e);
                None
            }
        },
        _ => {
            eprintln!("costar query: ambiguous name: {}", name);
            for id in &candidates {
                eprintln!("  {}", prompt::describe(&dataset.store, id));
            }
            None
        }
    }
}
