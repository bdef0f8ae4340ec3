use costar_core::report::StatsReport;
use costar_output::OutputFormatter;

/// Run `costar stats` — summarize a dataset.
pub fn run(formatter: &dyn OutputFormatter, verbose: bool, data: String, strict: bool) -> i32 {
    let Some((dataset, _config)) = super::data::open("stats", &data, strict, verbose) else {
        return 2;
    };

    let report = StatsReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        command: "stats".to_string(),
        data_dir: data,
        people: dataset.store.person_count(),
        movies: dataset.store.movie_count(),
        credits: dataset.store.credit_count(),
        names: dataset.names.len(),
    };

    print!("{}", formatter.format_stats(&report));
    0
}
