use log::debug;
use mgen_core::{ErrorInfo, GroupElement, MgenError};

use crate::closure::{enumerate_with, Closure, ClosureOpts};

/// Elements `k` of `closure` with `t^k == t` for every target `t`.
pub fn centralizer<E: GroupElement>(closure: &Closure<E>, targets: &[E]) -> Vec<E> {
    closure
        .iter()
        .filter(|k| targets.iter().all(|t| t.conjugate(k) == *t))
        .cloned()
        .collect()
}

/// Centralizer of `targets` inside the subgroup generated by `reference_gens`.
pub fn centralizer_in<E: GroupElement>(
    reference_gens: &[E],
    targets: &[E],
    opts: &ClosureOpts,
) -> Result<Vec<E>, MgenError> {
    let closure = enumerate_with(reference_gens, opts)?;
    let found = centralizer(&closure, targets);
    debug!(
        "centralizer of {} targets in a subgroup of order {} has {} elements",
        targets.len(),
        closure.len(),
        found.len()
    );
    Ok(found)
}

/// Centralizer of `(h13, h6, h2)` in the subgroup generated by
/// `reference_gens`, after checking that the three elements have orders 13, 6
/// and 2.
///
/// This is the search used to show that `<h13, h6, h2>` is PSL(2,13) with
/// trivial centralizer in the PSL(3,3) it normalises.
pub fn psl2_13_centralizer<E: GroupElement>(
    reference_gens: &[E],
    h13: &E,
    h6: &E,
    h2: &E,
) -> Result<Vec<E>, MgenError> {
    let observed = [h13.order(), h6.order(), h2.order()];
    if observed != [13, 6, 2] {
        return Err(MgenError::Precondition(
            ErrorInfo::new(
                "element-orders",
                "elements must have orders 13, 6 and 2",
            )
            .with_context("h13", observed[0].to_string())
            .with_context("h6", observed[1].to_string())
            .with_context("h2", observed[2].to_string()),
        ));
    }
    centralizer_in(
        reference_gens,
        &[h13.clone(), h6.clone(), h2.clone()],
        &ClosureOpts::default(),
    )
}
