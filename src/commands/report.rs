use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rayon::prelude::*;

use crate::cli::{Cli, ReportArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::{Result, SheetStatsError};
use crate::facts::load_facts;
use crate::output::{OutputFormat, ReportFormatter, formatter_for};
use crate::report::{Report, ReportBuilder};
use crate::{EXIT_DEGRADED, EXIT_SUCCESS};

/// Main entry point for the report command.
///
/// Builds one report per fact-base file; multiple inputs are processed in
/// parallel (the pipeline holds no shared state).
///
/// # Errors
/// Returns an error for unreadable inputs, malformed fact bases, or
/// invalid configuration.
pub fn run_report(args: &ReportArgs, cli: &Cli) -> Result<i32> {
    let config = load_config(cli)?;
    validate_args(args)?;

    let format = resolve_format(args, &config)?;
    let threshold = args.threshold.unwrap_or(config.breakdown.threshold);
    let pretty_source = read_pretty_source(args)?;

    let reports = build_reports(&args.facts, pretty_source.as_deref(), threshold)?;

    if !cli.quiet {
        for (path, report) in &reports {
            if report.is_degraded() {
                eprintln!(
                    "warning: no stylesheet facts in {}; aggregations skipped",
                    path.display()
                );
            }
        }
    }

    let output = render(format, &reports)?;
    match &args.output {
        Some(path) => fs::write(path, output)?,
        None => println!("{output}"),
    }

    let degraded = reports.iter().any(|(_, report)| report.is_degraded());
    Ok(if degraded { EXIT_DEGRADED } else { EXIT_SUCCESS })
}

fn load_config(cli: &Cli) -> Result<Config> {
    if cli.no_config {
        return Ok(Config::default());
    }
    let loader = FileConfigLoader::new();
    match &cli.config {
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    }
}

fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.pretty_source.is_some() && args.facts.len() > 1 {
        return Err(SheetStatsError::Config(
            "--pretty-source applies to a single fact-base file".to_string(),
        ));
    }
    if let Some(threshold) = args.threshold
        && !(0.0..=100.0).contains(&threshold)
    {
        return Err(SheetStatsError::Config(format!(
            "--threshold must be between 0.0 and 100.0, got {threshold}"
        )));
    }
    Ok(())
}

fn resolve_format(args: &ReportArgs, config: &Config) -> Result<OutputFormat> {
    if let Some(format) = args.format {
        return Ok(format);
    }
    match &config.output.format {
        Some(name) => OutputFormat::from_str(name).map_err(SheetStatsError::Config),
        None => Ok(OutputFormat::default()),
    }
}

fn read_pretty_source(args: &ReportArgs) -> Result<Option<String>> {
    args.pretty_source
        .as_ref()
        .map(|path| {
            fs::read_to_string(path).map_err(|source| SheetStatsError::FileRead {
                path: path.clone(),
                source,
            })
        })
        .transpose()
}

fn build_reports(
    facts_paths: &[PathBuf],
    pretty_source: Option<&str>,
    threshold: f64,
) -> Result<Vec<(PathBuf, Report)>> {
    if facts_paths.len() == 1 {
        let path = &facts_paths[0];
        let report = build_report(path, pretty_source, threshold)?;
        return Ok(vec![(path.clone(), report)]);
    }
    facts_paths
        .par_iter()
        .map(|path| build_report(path, None, threshold).map(|report| (path.clone(), report)))
        .collect()
}

fn build_report(path: &Path, pretty_source: Option<&str>, threshold: f64) -> Result<Report> {
    let facts = load_facts(path)?;
    let mut builder = ReportBuilder::new(facts).with_breakdown_threshold(threshold);
    if let Some(source) = pretty_source {
        builder = builder.with_pretty_source(source);
    }
    Ok(builder.build())
}

fn render(format: OutputFormat, reports: &[(PathBuf, Report)]) -> Result<String> {
    let formatter = formatter_for(format);
    if let [(_, report)] = reports {
        return formatter.format(report);
    }
    match format {
        OutputFormat::Json => {
            let reports_only: Vec<&Report> = reports.iter().map(|(_, report)| report).collect();
            Ok(serde_json::to_string_pretty(&reports_only)?)
        }
        OutputFormat::Text => {
            let mut sections = Vec::new();
            for (path, report) in reports {
                sections.push(format!("{}:\n{}", path.display(), formatter.format(report)?));
            }
            Ok(sections.join("\n"))
        }
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
