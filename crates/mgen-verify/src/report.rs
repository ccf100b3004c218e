use mgen_closure::{stable_hash_string, to_canonical_json_bytes};
use mgen_core::{MgenError, RunProvenance};
use serde::{Deserialize, Serialize};

use crate::policies::VerifyPolicy;

/// Result of one claim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClaimCheck {
    /// Name of the claim.
    pub name: String,
    /// What was claimed.
    pub statement: String,
    /// Whether the claim holds. Skipped checks count as passing.
    pub pass: bool,
    /// What was observed, e.g. the computed order.
    pub observed: String,
    /// The check was not run under the active policy.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub skipped: bool,
}

impl ClaimCheck {
    /// Placeholder for a check the policy did not run.
    pub fn skipped(name: impl Into<String>, statement: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            statement: statement.into(),
            pass: true,
            observed: "skipped".to_string(),
            skipped: true,
        }
    }
}

/// Provenance metadata attached to [`VerificationReport`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerificationProvenance {
    /// Policy applied during the run.
    pub policy: VerifyPolicy,
    /// Input hash and tool versions.
    pub run: RunProvenance,
    /// Ordering of executed checks.
    pub check_order: Vec<String>,
}

/// Outcome of evaluating a certificate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerificationReport {
    /// Certificate the checks came from.
    pub certificate: String,
    /// Content-addressed hash of the report payload.
    pub analysis_hash: String,
    /// Per-claim results, in certificate order.
    pub checks: Vec<ClaimCheck>,
    /// Provenance describing policy and inputs.
    pub provenance: VerificationProvenance,
}

impl VerificationReport {
    /// Constructs a report from checks and provenance while computing the stable hash.
    pub fn new(
        certificate: impl Into<String>,
        checks: Vec<ClaimCheck>,
        policy: VerifyPolicy,
        run: RunProvenance,
    ) -> Result<Self, MgenError> {
        let certificate = certificate.into();
        let provenance = VerificationProvenance {
            policy,
            run,
            check_order: checks.iter().map(|check| check.name.clone()).collect(),
        };
        let analysis_hash = stable_hash_string(&(&certificate, &checks, &provenance))?;
        Ok(Self {
            certificate,
            analysis_hash,
            checks,
            provenance,
        })
    }

    /// Whether every check passed.
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|check| check.pass)
    }

    /// Checks that did not pass.
    pub fn failures(&self) -> impl Iterator<Item = &ClaimCheck> {
        self.checks.iter().filter(|check| !check.pass)
    }

    /// Check called `name`.
    pub fn check(&self, name: &str) -> Option<&ClaimCheck> {
        self.checks.iter().find(|check| check.name == name)
    }

    /// Persists the report as canonical JSON bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, MgenError> {
        to_canonical_json_bytes(self)
    }
}
