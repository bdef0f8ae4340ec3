//! Configuration file loading for costar.
//!
//! Reads `<data-dir>/costar.json` and provides typed access to all settings.
//! Falls back to sensible defaults when the config file is missing or incomplete.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Top-level costar configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CostarConfig {
    #[serde(default)]
    pub files: FilesConfig,
    #[serde(default)]
    pub load: LoadConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// CSV file names within the dataset directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesConfig {
    #[serde(default = "default_people_file")]
    pub people: String,
    #[serde(default = "default_movies_file")]
    pub movies: String,
    #[serde(default = "default_stars_file")]
    pub stars: String,
}

/// Loader strictness toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    /// Fail on credit rows referencing unknown people or movies instead of
    /// skipping (and counting) them.
    #[serde(default)]
    pub strict: bool,
}

/// Search tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Abort searches after this many seconds; 0 disables the timeout.
    #[serde(default)]
    pub timeout_seconds: u64,
}

fn default_people_file() -> String {
    "people.csv".to_string()
}
fn default_movies_file() -> String {
    "movies.csv".to_string()
}
fn default_stars_file() -> String {
    "stars.csv".to_string()
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            people: default_people_file(),
            movies: default_movies_file(),
            stars: default_stars_file(),
        }
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self { strict: false }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { timeout_seconds: 0 }
    }
}

impl CostarConfig {
    /// Load configuration from `costar.json` inside the given dataset directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(data_dir: &Path) -> Self {
        let config_path = data_dir.join("costar.json");
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!(
                    "costar: warning: failed to parse {}: {}, using defaults",
                    config_path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}
