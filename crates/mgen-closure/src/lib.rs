#![deny(missing_docs)]
#![doc = "Subgroup enumeration over any `GroupElement`: closure, centralizers, cyclic \
normaliser helpers, the exhaustive subset-independence check and random word search."]

/// Centralizer filters over enumerated subgroups.
pub mod centralizer;
/// Closure enumeration.
pub mod closure;
/// Cyclic subgroups and normaliser checks.
pub mod cyclic;
/// Canonical JSON hashing.
pub mod hash;
/// Closure reports.
pub mod report;
/// Seeded random word search.
pub mod search;
/// JSON helpers for reports and checkpoints.
#[path = "serde.rs"]
pub mod serde_io;
/// Exhaustive subset-independence check.
pub mod subsets;

pub use centralizer::{centralizer, centralizer_in, psl2_13_centralizer};
pub use closure::{enumerate, enumerate_with, Closure, ClosureOpts};
pub use cyclic::{cyclic_subgroup, fixed_powers, normalises};
pub use hash::{stable_hash_string, to_canonical_json_bytes};
pub use report::ClosureReport;
pub use search::{random_word_search, SearchHit, SearchOpts, SearchReport};
pub use subsets::{
    check_subsets, run_subsets, SubsetCheckpoint, SubsetControl, SubsetOpts, SubsetOutcome,
    SubsetProgress, MAX_SUBSET_ELEMENTS,
};
