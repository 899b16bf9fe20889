//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::file_loader::load_source;
use crate::adapters::text_report_adapter::TextReportAdapter;
use crate::domain::analyser::AnalysisKind;
use crate::domain::collection::StockCollection;
use crate::domain::config_validation::{validate_kind, validate_run_config};
use crate::domain::error::StockError;
use crate::domain::job::{AnalysisJob, RunPlan};
use crate::ports::config_port::ConfigPort;
use crate::ports::record_format::LoadReport;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "stockalyse", about = "Per-symbol analysis of daily trading records")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the sources named in a config file and run its analysis jobs
    Run {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Run analyses for one symbol over the given files
    Analyse {
        #[arg(short, long = "file", required = true)]
        files: Vec<PathBuf>,
        #[arg(short, long)]
        symbol: String,
        /// e.g. average_volume, high_low, moving_average(10), gap_up(0.011)
        #[arg(short, long = "analysis", required = true)]
        analyses: Vec<AnalysisKind>,
    },
    /// List the symbols found in the given files
    Symbols {
        #[arg(short, long = "file", required = true)]
        files: Vec<PathBuf>,
    },
}

/// What a completed run loaded and which jobs it could not run.
#[derive(Debug)]
pub struct RunSummary {
    pub loads: Vec<LoadReport>,
    pub reported: usize,
    pub skipped: Vec<StockError>,
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Run { config } => run_config(&config),
        Command::Analyse {
            files,
            symbol,
            analyses,
        } => run_analyse(files, &symbol, &analyses),
        Command::Symbols { files } => run_symbols(&files),
    }
}

pub fn load_config(path: &Path) -> Result<FileConfigAdapter, StockError> {
    FileConfigAdapter::from_file(path).map_err(|e| StockError::ConfigParse {
        file: path.display().to_string(),
        reason: e.to_string(),
    })
}

pub fn build_run_plan(config: &dyn ConfigPort) -> Result<RunPlan, StockError> {
    validate_run_config(config)?;

    let data_dir = config.get_string("sources", "data_dir").map(PathBuf::from);
    let sources = config
        .get_list("sources", "files")
        .into_iter()
        .map(PathBuf::from)
        .map(|path| match &data_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path,
        })
        .collect();

    let jobs = config
        .get_list("analysis", "jobs")
        .iter()
        .map(|spec| spec.parse())
        .collect::<Result<Vec<AnalysisJob>, _>>()?;

    Ok(RunPlan { sources, jobs })
}

/// Load every path, in order, into `collection`.
///
/// Stops at the first source that cannot be read at all; malformed lines
/// inside a source only show up in its report.
pub fn load_sources(
    paths: &[PathBuf],
    collection: &mut StockCollection,
) -> Result<Vec<LoadReport>, StockError> {
    let mut reports = Vec::with_capacity(paths.len());
    for path in paths {
        let report = load_source(path, collection)?;
        eprintln!(
            "Loaded {} records from {}",
            report.appended,
            path.display()
        );
        if !report.is_clean() {
            eprintln!(
                "warning: skipped {} malformed entries in {}",
                report.issues.len(),
                path.display()
            );
        }
        reports.push(report);
    }
    Ok(reports)
}

/// Run each job against its symbol's history. Jobs for unknown symbols are
/// skipped with a warning and returned.
pub fn run_jobs(
    collection: &StockCollection,
    jobs: &[AnalysisJob],
    report: &mut dyn ReportPort,
) -> Result<Vec<StockError>, StockError> {
    let mut skipped = Vec::new();
    for job in jobs {
        let Some(history) = collection.get(&job.symbol) else {
            let err = StockError::NoData {
                symbol: job.symbol.clone(),
            };
            eprintln!("warning: skipping {} ({})", job, err);
            skipped.push(err);
            continue;
        };
        let result = job.kind.run(history);
        report.report(&job.symbol, &job.kind, &result)?;
    }
    Ok(skipped)
}

/// Load all sources into one collection, then run every job.
pub fn execute(plan: &RunPlan, report: &mut dyn ReportPort) -> Result<RunSummary, StockError> {
    let mut collection = StockCollection::new();
    let loads = load_sources(&plan.sources, &mut collection)?;
    let skipped = run_jobs(&collection, &plan.jobs, report)?;
    Ok(RunSummary {
        loads,
        reported: plan.jobs.len() - skipped.len(),
        skipped,
    })
}

pub fn write_symbol_listing(collection: &StockCollection, out: &mut dyn Write) -> io::Result<()> {
    for symbol in collection.symbols() {
        let Some(history) = collection.get(symbol) else {
            continue;
        };
        match (history.first(), history.last()) {
            (Some(first), Some(last)) => writeln!(
                out,
                "{}\t{} records\t{} .. {}",
                symbol,
                history.len(),
                first.date,
                last.date
            )?,
            _ => writeln!(out, "{}\t0 records", symbol)?,
        }
    }
    Ok(())
}

fn run_config(config_path: &Path) -> ExitCode {
    eprintln!("Loading config from {}", config_path.display());
    let plan = match load_config(config_path).and_then(|config| build_run_plan(&config)) {
        Ok(plan) => plan,
        Err(e) => return fail(&e),
    };
    eprintln!(
        "Running {} jobs over {} sources...",
        plan.jobs.len(),
        plan.sources.len()
    );

    let mut report = TextReportAdapter::new(io::stdout().lock());
    finish(execute(&plan, &mut report))
}

fn run_analyse(files: Vec<PathBuf>, symbol: &str, analyses: &[AnalysisKind]) -> ExitCode {
    for kind in analyses {
        if let Err(reason) = validate_kind(kind) {
            return fail(&StockError::AnalysisSpec {
                spec: kind.to_string(),
                reason,
            });
        }
    }

    let plan = RunPlan {
        sources: files,
        jobs: analyses
            .iter()
            .map(|&kind| AnalysisJob {
                symbol: symbol.to_string(),
                kind,
            })
            .collect(),
    };

    let mut report = TextReportAdapter::new(io::stdout().lock());
    finish(execute(&plan, &mut report))
}

fn run_symbols(files: &[PathBuf]) -> ExitCode {
    let mut collection = StockCollection::new();
    if let Err(e) = load_sources(files, &mut collection) {
        return fail(&e);
    }
    if let Err(e) = write_symbol_listing(&collection, &mut io::stdout().lock()) {
        return fail(&StockError::Io(e));
    }
    eprintln!(
        "{} symbols, {} records",
        collection.len(),
        collection.record_count()
    );
    ExitCode::SUCCESS
}

fn fail(err: &StockError) -> ExitCode {
    eprintln!("error: {err}");
    err.into()
}

fn finish(outcome: Result<RunSummary, StockError>) -> ExitCode {
    match outcome {
        Ok(summary) => match summary.skipped.first() {
            Some(err) => err.into(),
            None => ExitCode::SUCCESS,
        },
        Err(e) => fail(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_analyse_arguments() {
        let cli = Cli::try_parse_from([
            "stockalyse",
            "analyse",
            "-f",
            "march1.csv",
            "--file",
            "feb1.trp",
            "--symbol",
            "ADV",
            "-a",
            "high_low",
            "--analysis",
            "moving_average(10)",
        ])
        .unwrap();

        match cli.command {
            Command::Analyse {
                files,
                symbol,
                analyses,
            } => {
                assert_eq!(files.len(), 2);
                assert_eq!(symbol, "ADV");
                assert_eq!(
                    analyses,
                    vec![AnalysisKind::HighLow, AnalysisKind::MovingAverage(10)]
                );
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_analysis() {
        let result = Cli::try_parse_from([
            "stockalyse",
            "analyse",
            "-f",
            "march1.csv",
            "-s",
            "ADV",
            "-a",
            "median",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn analyse_requires_a_file() {
        let result = Cli::try_parse_from(["stockalyse", "analyse", "-s", "ADV", "-a", "high_low"]);
        assert!(result.is_err());
    }
}
