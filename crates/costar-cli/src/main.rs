//! costar CLI — degrees of separation between movie stars.
//!
//! This binary provides the `costar` command with subcommands for path
//! queries, name search, and dataset statistics. See `costar --help` for usage.

use clap::Parser;

mod cli_args;
mod commands;
mod prompt;

use cli_args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let formatter: Box<dyn costar_output::OutputFormatter> = if cli.json {
        Box::new(costar_output::json::JsonFormatter)
    } else {
        Box::new(costar_output::human::HumanFormatter)
    };

    let exit_code = match cli.command {
        Commands::Query {
            source,
            target,
            data,
            strict,
            timeout,
        } => commands::query::run(
            &*formatter,
            cli.verbose,
            cli.json,
            source,
            target,
            data,
            strict,
            timeout,
        ),
        Commands::Search { name, data, strict } => {
            commands::search::run(&*formatter, cli.verbose, name, data, strict)
        }
        Commands::Stats { data, strict } => {
            commands::stats::run(&*formatter, cli.verbose, data, strict)
        }
        Commands::Completion { shell } => commands::completion::run(&shell),
    };

    std::process::exit(exit_code);
}
