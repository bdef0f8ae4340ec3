use costar_core::report::{MatchReport, PersonMatch};
use costar_output::OutputFormatter;

/// Run `costar search <name>` — list people matching a name.
pub fn run(
    formatter: &dyn OutputFormatter,
    verbose: bool,
    name: String,
    data: String,
    strict: bool,
) -> i32 {
    let Some((dataset, _config)) = super::data::open("search", &data, strict, verbose) else {
        return 2;
    };

    // Exact (case-folded) match first.
    let mut ids = dataset.names.lookup(&name);

    // If no exact matches, fall back to substring search across all people.
    if ids.is_empty() {
        if verbose {
            eprintln!("costar search: no exact match, trying substring search");
        }
        let term = name.to_lowercase();
        for (id, person) in dataset.store.people() {
            if person.name.to_lowercase().contains(&term) {
                ids.push(id.clone());
            }
        }
        ids.sort();
    }

    let matches: Vec<PersonMatch> = ids
        .iter()
        .filter_map(|id| {
            let person = dataset.store.person(id).ok()?;
            Some(PersonMatch {
                id: id.to_string(),
                name: person.name.clone(),
                birth: person.birth.clone(),
                credits: person.movies.len(),
            })
        })
        .collect();

    let report = MatchReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        command: "search".to_string(),
        term: name,
        matches,
    };

    print!("{}", formatter.format_matches(&report));
    0
}
