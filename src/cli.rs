use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "sheetstats")]
#[command(author, version, about = "Stylesheet analytics - aggregate parsed CSS facts into a report")]
#[command(long_about = "Builds a dashboard-ready analytics report from a parsed-stylesheet \
    fact base.\n\n\
    Exit codes:\n  \
    0 - Report built\n  \
    1 - Report degraded (fact extractor produced no facts)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build an analytics report from fact-base files
    Report(ReportArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Fact-base JSON files produced by the stylesheet fact extractor
    #[arg(required = true)]
    pub facts: Vec<PathBuf>,

    /// Output format [possible values: json, text]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Pretty-printed stylesheet source to pass through into the report
    #[arg(long)]
    pub pretty_source: Option<PathBuf>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Long-tail merge threshold in percent (overrides config)
    #[arg(long)]
    pub threshold: Option<f64>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
