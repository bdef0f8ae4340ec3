//! Shared dataset loading for the commands that read one.

use std::path::Path;

use costar_core::config::CostarConfig;
use costar_loader::Dataset;

/// Load the dataset directory for `cmd`, printing failures to stderr.
/// Returns `None` when the caller should exit with code 2.
pub(crate) fn open(
    cmd: &str,
    data: &str,
    strict: bool,
    verbose: bool,
) -> Option<(Dataset, CostarConfig)> {
    let dir = Path::new(data);
    if !dir.is_dir() {
        eprintln!("costar {}: dataset directory not found: {}", cmd, dir.display());
        return None;
    }

    let mut config = CostarConfig::load(dir);
    if strict {
        config.load.strict = true;
    }

    if verbose {
        eprintln!("costar {}: loading {}", cmd, dir.display());
    }

    match costar_loader::load_dataset(dir, &config) {
        Ok(dataset) => {
            if verbose {
                let s = &dataset.summary;
                eprintln!(
                    "costar {}: loaded {} people, {} movies, {} credits ({} skipped)",
                    cmd, s.people, s.movies, s.credits, s.credits_skipped,
                );
            }
            Some((dataset, config))
        }
        Err(e) => {
            eprintln!("costar {}: {}", cmd, e);
            None
        }
    }
}
