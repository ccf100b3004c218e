use std::path::Path;

use mgen_core::{ErrorInfo, MgenError};
use serde::{de::DeserializeOwned, Serialize};

use crate::certificate::Certificate;
use crate::policies::VerifyPolicy;
use crate::report::VerificationReport;

fn serde_error(code: &str, err: impl ToString) -> MgenError {
    MgenError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn read_bytes(path: &Path, code: &str) -> Result<Vec<u8>, MgenError> {
    std::fs::read(path).map_err(|err| {
        MgenError::Serde(
            ErrorInfo::new(code, err.to_string()).with_context("path", path.display().to_string()),
        )
    })
}

/// Serializes a value into YAML.
pub fn to_yaml_string<T: Serialize>(value: &T) -> Result<String, MgenError> {
    serde_yaml::to_string(value).map_err(|err| serde_error("yaml-serialize", err))
}

/// Deserializes a YAML payload into the requested type.
pub fn from_yaml_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, MgenError> {
    serde_yaml::from_slice(data).map_err(|err| serde_error("yaml-deserialize", err))
}

/// Loads a certificate from a YAML file.
pub fn load_certificate(path: &Path) -> Result<Certificate, MgenError> {
    from_yaml_slice(&read_bytes(path, "certificate-read")?)
}

/// Loads a policy from a YAML file; missing fields take their defaults.
pub fn load_policy(path: &Path) -> Result<VerifyPolicy, MgenError> {
    from_yaml_slice(&read_bytes(path, "policy-read")?)
}

/// Serialises a verification report into indented JSON.
pub fn report_to_json(report: &VerificationReport) -> Result<String, MgenError> {
    serde_json::to_string_pretty(report).map_err(|err| serde_error("report-serialize", err))
}

/// Deserialises a verification report from JSON text.
pub fn report_from_json(json: &str) -> Result<VerificationReport, MgenError> {
    serde_json::from_str(json).map_err(|err| serde_error("report-deserialize", err))
}
