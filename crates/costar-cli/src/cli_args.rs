use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "costar", version, about = "Degrees of separation between movie stars")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON (disables interactive prompts)
    #[arg(long, global = true)]
    pub json: bool,

    /// Print load and traversal diagnostics to stderr
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Find the shortest co-star chain between two people
    Query {
        /// Source person name (prompted for when omitted)
        source: Option<String>,
        /// Target person name (prompted for when omitted)
        target: Option<String>,
        /// Dataset directory
        #[arg(long, default_value = "large")]
        data: String,
        /// Fail on credit rows referencing unknown ids instead of skipping them
        #[arg(long)]
        strict: bool,
        /// Abort the search after this many seconds
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// List people matching a name
    Search {
        /// Name to look up (case-insensitive)
        name: String,
        /// Dataset directory
        #[arg(long, default_value = "large")]
        data: String,
        /// Fail on credit rows referencing unknown ids instead of skipping them
        #[arg(long)]
        strict: bool,
    },

    /// Summarize a dataset
    Stats {
        /// Dataset directory
        #[arg(long, default_value = "large")]
        data: String,
        /// Fail on credit rows referencing unknown ids instead of skipping them
        #[arg(long)]
        strict: bool,
    },

    /// Generate shell completion scripts
    Completion {
        /// Target shell (bash, zsh, fish, elvish, powershell)
        shell: String,
    },
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod cli_args_tests;
