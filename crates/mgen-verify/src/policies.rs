use serde::{Deserialize, Serialize};

/// Switches controlling how much work a verification does.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyPolicy {
    /// Run the exhaustive subset check of the standard generators.
    #[serde(default)]
    pub run_exhaustive: bool,
    /// Number of conjugates `(a^2)^((ab)^i)` spanning Q_x0.
    #[serde(default = "VerifyPolicy::default_extraspecial_count")]
    pub extraspecial_count: usize,
    /// Cap on subsets tested by the exhaustive check; `None` means all.
    #[serde(default)]
    pub subset_budget: Option<u64>,
    /// Log subset progress every this many subsets.
    #[serde(default = "VerifyPolicy::default_progress_every")]
    pub progress_every: u64,
    /// Stop evaluating a certificate after its first failed check.
    #[serde(default)]
    pub fail_fast: bool,
}

impl VerifyPolicy {
    const fn default_extraspecial_count() -> usize {
        24
    }

    const fn default_progress_every() -> u64 {
        1 << 20
    }
}

impl Default for VerifyPolicy {
    fn default() -> Self {
        Self {
            run_exhaustive: false,
            extraspecial_count: Self::default_extraspecial_count(),
            subset_budget: None,
            progress_every: Self::default_progress_every(),
            fail_fast: false,
        }
    }
}
