use std::collections::BTreeMap;

use mgen_core::{GroupElement, MgenError, RunProvenance};
use serde::{Deserialize, Serialize};

use crate::closure::Closure;
use crate::hash::stable_hash_string;

/// Summary of an enumerated subgroup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosureReport {
    /// Number of elements of the subgroup.
    pub order: usize,
    /// Number of generators the closure was built from.
    pub generator_count: usize,
    /// Element count per element order.
    pub order_histogram: BTreeMap<u64, usize>,
    /// Requested orders and whether an element of that order exists.
    #[serde(default)]
    pub found_orders: BTreeMap<u64, bool>,
    /// Content hash over every other field.
    pub analysis_hash: String,
    /// Input hash, tool versions and seed.
    pub provenance: RunProvenance,
}

impl ClosureReport {
    /// Builds the report for `closure`, recording which of `requested_orders`
    /// occur in it.
    pub fn new<E: GroupElement>(
        closure: &Closure<E>,
        generator_count: usize,
        requested_orders: &[u64],
        provenance: RunProvenance,
    ) -> Result<Self, MgenError> {
        let order_histogram = closure.order_histogram();
        let found_orders = requested_orders
            .iter()
            .map(|order| (*order, order_histogram.contains_key(order)))
            .collect();
        let mut report = Self {
            order: closure.len(),
            generator_count,
            order_histogram,
            found_orders,
            analysis_hash: String::new(),
            provenance,
        };
        report.analysis_hash = report.compute_hash()?;
        Ok(report)
    }

    /// Hash of the report with `analysis_hash` blanked.
    pub fn compute_hash(&self) -> Result<String, MgenError> {
        stable_hash_string(&(
            self.order,
            self.generator_count,
            &self.order_histogram,
            &self.found_orders,
            &self.provenance,
        ))
    }
}
