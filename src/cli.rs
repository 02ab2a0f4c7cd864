use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use clap_complete::Shell;

use crate::domain::Query;
use crate::report::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "League of Legends meta and champion information in the terminal"
)]
pub struct Cli {
    /// Type of lookup
    #[arg(long = "type", id = "type", value_enum, default_value_t = QueryType::Meta)]
    pub query_type: QueryType,

    /// Champion name (case-insensitive), required with `--type champion`
    #[arg(long, required_if_eq("type", "champion"))]
    pub name: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Print a completion script for the given shell and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryType {
    /// Tier list for every role
    Meta,
    /// Build and guide of one champion
    Champion,
}

impl Cli {
    pub fn query(&self) -> Result<Query> {
        match self.query_type {
            QueryType::Meta => Ok(Query::Meta),
            QueryType::Champion => self
                .name
                .as_deref()
                .map(Query::character)
                .context("--name is required with --type champion"),
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}
