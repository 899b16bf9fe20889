//! Run configuration validation.
//!
//! Checks every field before any source file is read.

use crate::domain::analyser::AnalysisKind;
use crate::domain::error::StockError;
use crate::domain::job::AnalysisJob;
use crate::domain::source_format::SourceFormat;
use crate::ports::config_port::ConfigPort;
use std::path::Path;

pub fn validate_run_config(config: &dyn ConfigPort) -> Result<(), StockError> {
    validate_sources(config)?;
    validate_jobs(config)?;
    Ok(())
}

fn validate_sources(config: &dyn ConfigPort) -> Result<(), StockError> {
    let files = config.get_list("sources", "files");
    if files.is_empty() {
        return Err(StockError::ConfigMissing {
            section: "sources".to_string(),
            key: "files".to_string(),
        });
    }
    for file in &files {
        if SourceFormat::from_path(Path::new(file)).is_none() {
            return Err(StockError::ConfigInvalid {
                section: "sources".to_string(),
                key: "files".to_string(),
                reason: format!("{} is neither a .csv nor a .trp file", file),
            });
        }
    }
    Ok(())
}

fn validate_jobs(config: &dyn ConfigPort) -> Result<(), StockError> {
    let jobs = config.get_list("analysis", "jobs");
    if jobs.is_empty() {
        return Err(StockError::ConfigMissing {
            section: "analysis".to_string(),
            key: "jobs".to_string(),
        });
    }
    for spec in &jobs {
        let job: AnalysisJob = spec.parse().map_err(|e| StockError::ConfigInvalid {
            section: "analysis".to_string(),
            key: "jobs".to_string(),
            reason: format!("{}", e),
        })?;
        validate_kind(&job.kind).map_err(|reason| StockError::ConfigInvalid {
            section: "analysis".to_string(),
            key: "jobs".to_string(),
            reason: format!("{}: {}", job, reason),
        })?;
    }
    Ok(())
}

/// Parameter checks the analysers themselves leave to the caller.
pub fn validate_kind(kind: &AnalysisKind) -> Result<(), String> {
    match *kind {
        AnalysisKind::MovingAverage(0) => Err("moving average window must be positive".into()),
        AnalysisKind::GapUp(delta) if !delta.is_finite() || delta <= 0.0 => {
            Err("gap up delta must be a positive number".into())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::file_config_adapter::FileConfigAdapter;

    fn config(content: &str) -> FileConfigAdapter {
        FileConfigAdapter::from_string(content).unwrap()
    }

    const VALID: &str = "[sources]\nfiles = march1.csv, feb1.trp\n\
                         [analysis]\njobs = ADV:average_volume, ADV:moving_average(10), YOW:gap_up(0.011)\n";

    #[test]
    fn valid_config_passes() {
        assert!(validate_run_config(&config(VALID)).is_ok());
    }

    #[test]
    fn missing_files() {
        let err = validate_run_config(&config("[analysis]\njobs = ADV:high_low\n")).unwrap_err();
        assert!(matches!(err, StockError::ConfigMissing { key, .. } if key == "files"));
    }

    #[test]
    fn unknown_file_format() {
        let err = validate_run_config(&config(
            "[sources]\nfiles = march1.csv, prices.txt\n[analysis]\njobs = ADV:high_low\n",
        ))
        .unwrap_err();
        assert!(
            matches!(err, StockError::ConfigInvalid { reason, .. } if reason.contains("prices.txt"))
        );
    }

    #[test]
    fn missing_jobs() {
        let err = validate_run_config(&config("[sources]\nfiles = a.csv\n")).unwrap_err();
        assert!(matches!(err, StockError::ConfigMissing { key, .. } if key == "jobs"));
    }

    #[test]
    fn unparseable_job() {
        let err = validate_run_config(&config(
            "[sources]\nfiles = a.csv\n[analysis]\njobs = ADV:median\n",
        ))
        .unwrap_err();
        assert!(matches!(err, StockError::ConfigInvalid { key, .. } if key == "jobs"));
    }

    #[test]
    fn zero_window_rejected() {
        let err = validate_run_config(&config(
            "[sources]\nfiles = a.csv\n[analysis]\njobs = ADV:moving_average(0)\n",
        ))
        .unwrap_err();
        assert!(
            matches!(err, StockError::ConfigInvalid { reason, .. } if reason.contains("window"))
        );
    }

    #[test]
    fn non_positive_delta_rejected() {
        for delta in ["0", "-0.5", "inf"] {
            let err = validate_run_config(&config(&format!(
                "[sources]\nfiles = a.csv\n[analysis]\njobs = YOW:gap_up({delta})\n"
            )))
            .unwrap_err();
            assert!(
                matches!(err, StockError::ConfigInvalid { ref reason, .. } if reason.contains("delta")),
                "delta {delta} should be rejected"
            );
        }
    }

    #[test]
    fn validate_kind_accepts_defaults() {
        assert!(validate_kind(&AnalysisKind::AverageVolume).is_ok());
        assert!(validate_kind(&AnalysisKind::HighLow).is_ok());
        assert!(validate_kind(&AnalysisKind::MovingAverage(1)).is_ok());
        assert!(validate_kind(&AnalysisKind::GapUp(0.011)).is_ok());
    }
}
