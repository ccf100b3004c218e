//! Provenance and schema descriptors shared across mgen artifacts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Semantic version describing the schema of serialized payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Major version incremented for breaking changes.
    pub major: u32,
    /// Minor version incremented for additive changes.
    pub minor: u32,
    /// Patch version incremented for bug fixes and documentation updates.
    pub patch: u32,
}

impl SchemaVersion {
    /// Creates a new schema version descriptor.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

/// Provenance information attached to every serialized report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RunProvenance {
    /// Schema of the payload carrying this provenance.
    #[serde(default)]
    pub schema_version: SchemaVersion,
    /// Hash of the input (group file, certificate, generator list).
    pub input_hash: String,
    /// Seed used for randomized searches, zero when none was involved.
    pub seed: u64,
    /// Version map for all tools involved in the run.
    pub tool_versions: BTreeMap<String, String>,
}

impl RunProvenance {
    /// Creates provenance for the given input hash stamped with the calling
    /// crate name and version.
    pub fn for_input(input_hash: impl Into<String>, tool: &str, version: &str) -> Self {
        let mut tool_versions = BTreeMap::new();
        tool_versions.insert(tool.to_string(), version.to_string());
        Self {
            schema_version: SchemaVersion::default(),
            input_hash: input_hash.into(),
            seed: 0,
            tool_versions,
        }
    }

    /// Records the seed used by a randomized computation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
