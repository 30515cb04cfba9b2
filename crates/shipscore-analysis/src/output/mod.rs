//! Filesystem persistence for the three outputs.
//!
//! Every failure here is fatal for the invocation and carries the path.
//! Decision records are create-new: an existing record is never replaced.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use shipscore_core::errors::OutputError;
use shipscore_core::tracing::fields;

use crate::record::DecisionRecord;
use crate::remediation::RemediationProposal;
use crate::reporters::json::JsonReporter;
use crate::reporters::Reporter;
use crate::scoring::ScoreReport;

fn ensure_dir(dir: &Path) -> Result<(), OutputError> {
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), OutputError> {
    fs::write(path, contents).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the score artifact, overwriting any previous run.
pub fn write_scores(path: &Path, report: &ScoreReport) -> Result<(), OutputError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    let mut json = JsonReporter.generate(report)?;
    json.push('\n');
    write_file(path, json.as_bytes())?;
    tracing::info!(
        { fields::OUTPUT_PATH } = %path.display(),
        { fields::SHIP_SCORE } = report.final_score,
        "score written"
    );
    Ok(())
}

/// Persist a decision record into `dir`. Returns the written path.
pub fn write_record(dir: &Path, record: &DecisionRecord) -> Result<PathBuf, OutputError> {
    ensure_dir(dir)?;
    let path = dir.join(record.file_name());
    let yaml = record.to_yaml()?;

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|source| match source.kind() {
            ErrorKind::AlreadyExists => OutputError::RecordExists { path: path.clone() },
            _ => OutputError::Write {
                path: path.clone(),
                source,
            },
        })?;
    file.write_all(yaml.as_bytes())
        .map_err(|source| OutputError::Write {
            path: path.clone(),
            source,
        })?;

    tracing::info!(
        { fields::OUTPUT_PATH } = %path.display(),
        { fields::RECORD_ID } = %record.id,
        "decision record written"
    );
    Ok(path)
}

/// Write a remediation proposal into `dir`. Returns the written path.
pub fn write_proposal(dir: &Path, proposal: &RemediationProposal) -> Result<PathBuf, OutputError> {
    ensure_dir(dir)?;
    let path = dir.join(&proposal.file_name);
    write_file(&path, proposal.body.as_bytes())?;
    tracing::info!(
        { fields::OUTPUT_PATH } = %path.display(),
        { fields::VIOLATION } = %proposal.kind,
        "remediation proposal written"
    );
    Ok(path)
}
