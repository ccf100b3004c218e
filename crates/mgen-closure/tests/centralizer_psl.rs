use mgen_closure::{
    centralizer, centralizer_in, cyclic_subgroup, enumerate, fixed_powers, normalises,
    psl2_13_centralizer, ClosureOpts,
};
use mgen_core::{GroupElement, MgenError};
use mgen_groups::{DirectProduct, ProjectiveMatrix};

mod common;

use common::{perm, pgl, pgl2_13, psl3_3};

type Pair = DirectProduct<ProjectiveMatrix, ProjectiveMatrix>;

struct Scenario {
    reference: Vec<Pair>,
    h13: Pair,
    h6: Pair,
    h2: Pair,
}

/// PSL(3,3) acting on the first factor, PGL(2,13) elements on the second.
fn scenario() -> Result<Scenario, MgenError> {
    let psl = psl3_3()?;
    let pgl13 = pgl2_13()?;
    let one3 = psl[0].identity();
    let one13 = pgl13[0].identity();
    let s6 = pgl(3, &[&[1, 2, 1], &[2, 1, 1], &[0, 2, 2]])?;
    let s2 = pgl(3, &[&[0, 1, 2], &[2, 1, 1], &[1, 1, 1]])?;
    Ok(Scenario {
        reference: psl
            .iter()
            .map(|g| DirectProduct::new(g.clone(), one13.clone()))
            .collect(),
        h13: DirectProduct::new(one3, pgl13[0].clone()),
        h6: DirectProduct::new(s6, pgl13[1].clone()),
        h2: DirectProduct::new(s2, pgl13[2].clone()),
    })
}

#[test]
fn transposition_centralizer_in_s4() -> Result<(), MgenError> {
    let closure = enumerate(&[perm(4, "(0 1)"), perm(4, "(0 1 2 3)")])?;
    let found = centralizer(&closure, &[perm(4, "(0 1)")]);
    assert_eq!(found.len(), 4);
    for k in &found {
        assert!(k.commutes_with(&perm(4, "(0 1)")));
    }
    let sub = enumerate(&found)?;
    assert_eq!(sub.len(), found.len());
    Ok(())
}

#[test]
fn psl2_13_has_trivial_centralizer() -> Result<(), MgenError> {
    let s = scenario()?;
    assert_eq!(s.h6.order(), 6);
    assert_eq!(s.h2.order(), 2);
    for g in &s.reference {
        assert!(g.commutes_with(&s.h13));
    }
    let found = psl2_13_centralizer(&s.reference, &s.h13, &s.h6, &s.h2)?;
    assert_eq!(found.len(), 1);
    assert!(found[0].is_identity());
    Ok(())
}

#[test]
fn partial_centralizers_grow() -> Result<(), MgenError> {
    let s = scenario()?;
    let opts = ClosureOpts::default();
    assert_eq!(centralizer_in(&s.reference, &[s.h13.clone()], &opts)?.len(), 5616);
    assert_eq!(
        centralizer_in(&s.reference, &[s.h13.clone(), s.h6.clone()], &opts)?.len(),
        6
    );
    Ok(())
}

#[test]
fn wrong_orders_violate_the_precondition() -> Result<(), MgenError> {
    let s = scenario()?;
    let err = psl2_13_centralizer(&s.reference, &s.h13, &s.h2, &s.h6).unwrap_err();
    assert!(matches!(err, MgenError::Precondition(_)));
    assert_eq!(err.code(), "element-orders");
    assert_eq!(err.info().context.get("h6").map(String::as_str), Some("2"));
    assert_eq!(err.info().context.get("h2").map(String::as_str), Some("6"));
    Ok(())
}

#[test]
fn cyclic_helpers_on_the_borel_subgroup() -> Result<(), MgenError> {
    let gens = pgl2_13()?;
    let (g13, g6, i2) = (&gens[0], &gens[1], &gens[2]);
    let powers = cyclic_subgroup(g13);
    assert_eq!(powers.len(), 13);
    assert!(powers[0].is_identity());
    assert!(normalises(g13, &[g6.clone()]));
    assert!(!normalises(g13, &[g6.clone(), i2.clone()]));
    assert_eq!(cyclic_subgroup(&g13.identity()).len(), 1);
    Ok(())
}

#[test]
fn fixed_powers_detects_extra_fixed_points() -> Result<(), MgenError> {
    let i2 = pgl(13, &[&[0, 1], &[1, 0]])?;
    let t = pgl(13, &[&[1, 10], &[0, 10]])?;
    assert_eq!(t.order(), 6);
    assert_eq!(fixed_powers(&t, &i2, 6), vec![0]);
    let bad = pgl(13, &[&[1, 0], &[0, 10]])?;
    assert_eq!(fixed_powers(&bad, &i2, 6), vec![0, 3]);
    Ok(())
}
