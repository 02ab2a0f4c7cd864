use anyhow::Result;
use colored::Colorize;

use champion_scout::cli::Cli;
use champion_scout::{handle_completions, handle_query, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("{} {e:#}", "Error:".red().bold());
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        return handle_completions(shell);
    }

    let query = cli.query()?;
    handle_query(&query, cli.output_format())
}
