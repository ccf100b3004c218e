use std::sync::atomic::{AtomicBool, Ordering};

use log::info;
use mgen_core::{ErrorInfo, GroupElement, MgenError, SchemaVersion};
use serde::{Deserialize, Serialize};

/// Largest number of elements the subset check accepts.
pub const MAX_SUBSET_ELEMENTS: usize = 63;

/// Options for [`run_subsets`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsetOpts {
    /// Maximum number of subsets to test in this call; `None` runs to the end.
    #[serde(default)]
    pub budget: Option<u64>,
    /// Report progress every this many subsets; zero disables it.
    #[serde(default = "default_progress_every")]
    pub progress_every: u64,
}

fn default_progress_every() -> u64 {
    1 << 20
}

impl Default for SubsetOpts {
    fn default() -> Self {
        Self {
            budget: None,
            progress_every: default_progress_every(),
        }
    }
}

/// Resume point of an interrupted subset check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsetCheckpoint {
    /// Schema of the checkpoint payload.
    #[serde(default)]
    pub schema_version: SchemaVersion,
    /// Number of elements being checked.
    pub element_count: usize,
    /// Whether products are compared against a central element.
    pub with_central: bool,
    /// First mask not yet tested.
    pub next_mask: u64,
    /// Subsets tested so far.
    pub checked: u64,
    /// Total number of non-empty subsets.
    pub total: u64,
}

impl SubsetCheckpoint {
    /// Checkpoint at the very start of a check.
    pub fn start(element_count: usize, with_central: bool) -> Self {
        Self {
            schema_version: SchemaVersion::default(),
            element_count,
            with_central,
            next_mask: 1,
            checked: 0,
            total: total_subsets(element_count),
        }
    }

    /// Whether every subset has been tested.
    pub fn is_finished(&self) -> bool {
        self.checked >= self.total
    }
}

/// Result of a subset check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubsetOutcome {
    /// No non-empty subset multiplies to the identity (or to the inverse of
    /// the central element).
    Independent,
    /// The subset `mask` hits; `indices` lists its positions.
    Dependent {
        /// Bit mask of the offending subset.
        mask: u64,
        /// Indices of the elements in the subset, ascending.
        indices: Vec<usize>,
    },
    /// The budget ran out or the check was cancelled.
    Interrupted(SubsetCheckpoint),
}

/// Progress snapshot handed to the caller's callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubsetProgress {
    /// Subsets tested so far.
    pub checked: u64,
    /// Total number of non-empty subsets.
    pub total: u64,
}

/// Cancellation flag and progress callback for a long running check.
#[derive(Default)]
pub struct SubsetControl<'a> {
    /// Checked before every subset; raising it interrupts the check.
    pub cancel: Option<&'a AtomicBool>,
    /// Called every `progress_every` subsets.
    pub on_progress: Option<Box<dyn FnMut(SubsetProgress) + 'a>>,
}

fn total_subsets(element_count: usize) -> u64 {
    if element_count == 0 {
        0
    } else {
        u64::MAX >> (64 - element_count)
    }
}

fn mask_indices(mask: u64) -> Vec<usize> {
    (0..64).filter(|bit| (mask >> bit) & 1 == 1).collect()
}

/// Checks every non-empty subset of `elements` from the start, without
/// cancellation or callbacks.
pub fn check_subsets<E: GroupElement>(
    elements: &[E],
    central: Option<&E>,
    opts: &SubsetOpts,
) -> Result<SubsetOutcome, MgenError> {
    run_subsets(elements, central, None, opts, &mut SubsetControl::default())
}

/// Tests every non-empty subset of `elements` in increasing mask order.
///
/// The product of a subset is taken over its elements in ascending index
/// order. A subset hits when its product is the identity or, with a central
/// element `z`, when `product * z` is. Passing the checkpoint of
/// an interrupted run resumes it exactly where it stopped.
pub fn run_subsets<E: GroupElement>(
    elements: &[E],
    central: Option<&E>,
    resume: Option<&SubsetCheckpoint>,
    opts: &SubsetOpts,
    control: &mut SubsetControl<'_>,
) -> Result<SubsetOutcome, MgenError> {
    if elements.is_empty() {
        return Err(MgenError::Closure(ErrorInfo::new(
            "empty-elements",
            "subset check requires at least one element",
        )));
    }
    if elements.len() > MAX_SUBSET_ELEMENTS {
        return Err(MgenError::Closure(
            ErrorInfo::new("too-many-elements", "subset masks are limited to 63 bits")
                .with_context("elements", elements.len().to_string()),
        ));
    }

    let mut state = match resume {
        Some(checkpoint) => {
            if checkpoint.element_count != elements.len()
                || checkpoint.with_central != central.is_some()
                || checkpoint.total != total_subsets(elements.len())
            {
                return Err(MgenError::Closure(
                    ErrorInfo::new(
                        "checkpoint-mismatch",
                        "checkpoint was taken for a different input",
                    )
                    .with_context("checkpoint_elements", checkpoint.element_count.to_string())
                    .with_context("elements", elements.len().to_string()),
                ));
            }
            if checkpoint.next_mask == 0
                || checkpoint.next_mask > checkpoint.total + 1
                || checkpoint.checked != checkpoint.next_mask - 1
            {
                return Err(MgenError::Closure(
                    ErrorInfo::new(
                        "invalid-checkpoint",
                        "checkpoint position is out of range or inconsistent",
                    )
                    .with_context("next_mask", checkpoint.next_mask.to_string())
                    .with_context("checked", checkpoint.checked.to_string())
                    .with_context("total", checkpoint.total.to_string()),
                ));
            }
            checkpoint.clone()
        }
        None => SubsetCheckpoint::start(elements.len(), central.is_some()),
    };

    let identity = elements[0].identity();
    let mut spent = 0u64;
    while state.next_mask <= state.total {
        if opts.budget.is_some_and(|budget| spent >= budget)
            || control
                .cancel
                .is_some_and(|flag| flag.load(Ordering::Relaxed))
        {
            info!(
                "subset check interrupted after {}/{} subsets",
                state.checked, state.total
            );
            return Ok(SubsetOutcome::Interrupted(state));
        }

        let mask = state.next_mask;
        let mut product = identity.clone();
        for index in mask_indices(mask) {
            product = product.mul(&elements[index]);
        }
        let hit = product.is_identity() || central.is_some_and(|z| product.mul(z).is_identity());
        state.next_mask += 1;
        state.checked += 1;
        spent += 1;

        if hit {
            return Ok(SubsetOutcome::Dependent {
                mask,
                indices: mask_indices(mask),
            });
        }

        if opts.progress_every > 0 && state.checked % opts.progress_every == 0 {
            info!("subset check: {}/{} subsets", state.checked, state.total);
            if let Some(callback) = control.on_progress.as_mut() {
                callback(SubsetProgress {
                    checked: state.checked,
                    total: state.total,
                });
            }
        }
    }
    Ok(SubsetOutcome::Independent)
}
