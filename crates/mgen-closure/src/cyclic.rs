use std::collections::HashSet;

use mgen_core::GroupElement;

/// Powers `g^0, g^1, ..., g^(n-1)` where `n` is the order of `g`.
pub fn cyclic_subgroup<E: GroupElement>(g: &E) -> Vec<E> {
    let mut powers = vec![g.identity()];
    let mut current = g.clone();
    while !current.is_identity() {
        powers.push(current.clone());
        current = current.mul(g);
    }
    powers
}

/// Whether every element of `gens` normalises `<elt>`, i.e. `elt^x` is a
/// power of `elt` for each `x`.
pub fn normalises<E: GroupElement>(elt: &E, gens: &[E]) -> bool {
    let members: HashSet<E::Key> = cyclic_subgroup(elt)
        .iter()
        .map(E::canonical_key)
        .collect();
    gens.iter()
        .all(|x| members.contains(&elt.conjugate(x).canonical_key()))
}

/// Exponents `i < count` for which `by` fixes `t^i` under conjugation.
pub fn fixed_powers<E: GroupElement>(t: &E, by: &E, count: u64) -> Vec<u64> {
    let mut fixed = Vec::new();
    let mut power = t.identity();
    for i in 0..count {
        if power.conjugate(by) == power {
            fixed.push(i);
        }
        power = power.mul(t);
    }
    fixed
}
