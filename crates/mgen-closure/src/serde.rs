use std::path::Path;

use mgen_core::{ErrorInfo, MgenError};

use crate::report::ClosureReport;
use crate::subsets::{SubsetCheckpoint, SubsetOutcome};

/// Serialises a closure report into indented JSON.
pub fn closure_report_to_json(report: &ClosureReport) -> Result<String, MgenError> {
    serde_json::to_string_pretty(report)
        .map_err(|err| MgenError::Serde(ErrorInfo::new("closure-report-serialize", err.to_string())))
}

/// Deserialises a closure report from JSON text.
pub fn closure_report_from_json(json: &str) -> Result<ClosureReport, MgenError> {
    serde_json::from_str(json).map_err(|err| {
        MgenError::Serde(ErrorInfo::new("closure-report-deserialize", err.to_string()))
    })
}

/// Serialises a subset outcome into indented JSON.
pub fn subset_outcome_to_json(outcome: &SubsetOutcome) -> Result<String, MgenError> {
    serde_json::to_string_pretty(outcome)
        .map_err(|err| MgenError::Serde(ErrorInfo::new("subset-outcome-serialize", err.to_string())))
}

/// Serialises a subset checkpoint into JSON.
pub fn checkpoint_to_json(checkpoint: &SubsetCheckpoint) -> Result<String, MgenError> {
    serde_json::to_string_pretty(checkpoint)
        .map_err(|err| MgenError::Serde(ErrorInfo::new("checkpoint-serialize", err.to_string())))
}

/// Deserialises a subset checkpoint from JSON text.
pub fn checkpoint_from_json(json: &str) -> Result<SubsetCheckpoint, MgenError> {
    serde_json::from_str(json)
        .map_err(|err| MgenError::Serde(ErrorInfo::new("checkpoint-deserialize", err.to_string())))
}

/// Writes a JSON payload to disk.
pub fn write_json(path: &Path, json: &str) -> Result<(), MgenError> {
    std::fs::write(path, json).map_err(|err| {
        MgenError::Serde(
            ErrorInfo::new("json-write", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })
}

/// Reads a JSON payload from disk.
pub fn read_json(path: &Path) -> Result<String, MgenError> {
    std::fs::read_to_string(path).map_err(|err| {
        MgenError::Serde(
            ErrorInfo::new("json-read", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })
}
