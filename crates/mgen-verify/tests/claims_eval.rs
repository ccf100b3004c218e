mod common;

use mgen_core::MgenError;
use mgen_groups::Perm;
use mgen_verify::{Certificate, Claim, ClassOracle, Expr, VerifyPolicy};

use common::{s4_bindings, s4_oracle};

fn e(text: &str) -> Expr {
    Expr::parse(text).expect("valid expression")
}

fn check(claim: Claim) -> Result<(bool, String), MgenError> {
    let oracle = s4_oracle()?;
    let check = claim.check("claim", &s4_bindings(), Some(&oracle as &dyn ClassOracle<Perm>))?;
    Ok((check.pass, check.observed))
}

#[test]
fn order_claims() -> Result<(), MgenError> {
    assert_eq!(
        check(Claim::Order { expr: e("b"), order: 3 })?,
        (true, "3".to_string())
    );
    assert_eq!(
        check(Claim::Order { expr: e("r"), order: 3 })?,
        (false, "4".to_string())
    );
    assert!(check(Claim::OrderDivisibleBy { expr: e("a*b"), divisor: 2 })?.0);
    assert!(!check(Claim::OrderDivisibleBy { expr: e("b"), divisor: 2 })?.0);
    assert!(!check(Claim::OrderDivisibleBy { expr: e("b"), divisor: 0 })?.0);
    Ok(())
}

#[test]
fn equality_and_commutation_claims() -> Result<(), MgenError> {
    assert!(check(Claim::Relator { expr: e("a^2") })?.0);
    assert!(!check(Claim::Relator { expr: e("b") })?.0);
    assert!(check(Claim::Equal { lhs: e("z"), rhs: e("a*c") })?.0);
    assert!(check(Claim::Commute { a: e("a"), b: e("c") })?.0);
    assert!(!check(Claim::Commute { a: e("a"), b: e("b") })?.0);
    assert!(check(Claim::NotCommute { a: e("a"), b: e("b") })?.0);
    assert_eq!(
        check(Claim::CommuteModulo {
            a: e("z"),
            b: e("w"),
            central: e("z"),
        })?,
        (true, "commute".to_string())
    );
    assert!(!check(Claim::CommuteModulo {
        a: e("a"),
        b: e("b"),
        central: e("z"),
    })?
    .0);
    Ok(())
}

#[test]
fn membership_claims() -> Result<(), MgenError> {
    assert_eq!(
        check(Claim::MemberOf {
            expr: e("b^3"),
            set: vec![e("b"), e("1")],
        })?,
        (true, "equals 1".to_string())
    );
    assert!(!check(Claim::MemberOf {
        expr: e("a"),
        set: vec![e("b"), e("b^2")],
    })?
    .0);
    assert!(check(Claim::NotMemberOf {
        expr: e("a"),
        set: vec![e("b"), e("b^2"), e("b^3")],
    })?
    .0);
    Ok(())
}

#[test]
fn subgroup_claims() -> Result<(), MgenError> {
    assert!(check(Claim::Normalises {
        expr: e("b"),
        by: vec![e("a"), e("b")],
    })?
    .0);
    let (pass, observed) = check(Claim::Normalises {
        expr: e("b"),
        by: vec![e("a"), e("c")],
    })?;
    assert!(!pass);
    assert_eq!(observed, "not normalised by c");

    assert_eq!(
        check(Claim::FixedPowers {
            t: e("b"),
            by: e("a"),
            count: 3,
            expected: vec![0],
        })?,
        (true, "[0]".to_string())
    );
    assert_eq!(
        check(Claim::FixedPowers {
            t: e("b"),
            by: e("b"),
            count: 3,
            expected: vec![0],
        })?,
        (false, "[0, 1, 2]".to_string())
    );
    assert_eq!(
        check(Claim::CentralizerSize {
            reference: vec![e("a"), e("r")],
            targets: vec![e("b")],
            size: 3,
        })?,
        (true, "3".to_string())
    );
    Ok(())
}

#[test]
fn oracle_claims() -> Result<(), MgenError> {
    assert!(check(Claim::InMaximal2Local { expr: e("b") })?.0);
    assert_eq!(
        check(Claim::InMaximal2Local { expr: e("a") })?,
        (false, "outside".to_string())
    );
    assert!(check(Claim::InExtraspecial { expr: e("z*w") })?.0);
    assert!(!check(Claim::InExtraspecial { expr: e("b") })?.0);
    assert!(check(Claim::Character {
        expr: e("b"),
        index: 1,
        value: 2,
    })?
    .0);
    assert!(check(Claim::CharacterOneOf {
        expr: e("z"),
        index: 0,
        values: vec![-3, 5],
    })?
    .0);
    assert_eq!(
        check(Claim::CharacterProduct {
            expr: e("b^-1"),
            indices: [2, 3],
            value: 12,
        })?,
        (true, "12".to_string())
    );
    assert!(check(Claim::InvolutionClass { expr: e("w"), class: 2 })?.0);
    assert!(check(Claim::InvolutionClass { expr: e("c"), class: 1 })?.0);
    assert_eq!(
        check(Claim::InvolutionClass { expr: e("1"), class: 1 })?,
        (false, "0".to_string())
    );
    assert!(check(Claim::CharacterAfterConjugation {
        involution: e("w"),
        target: e("b"),
        class: 2,
        index: 0,
        value: 1,
    })?
    .0);
    assert_eq!(
        check(Claim::CharacterAfterConjugation {
            involution: e("a"),
            target: e("b"),
            class: 2,
            index: 0,
            value: 1,
        })?,
        (false, "class 1".to_string())
    );
    Ok(())
}

#[test]
fn oracle_claims_need_an_oracle() {
    let err = Claim::InMaximal2Local { expr: e("a") }
        .check("needs-oracle", &s4_bindings(), None)
        .expect_err("no oracle supplied");
    assert_eq!(err.code(), "oracle-required");
    assert_eq!(
        err.info().context.get("claim").map(String::as_str),
        Some("needs-oracle")
    );
}

#[test]
fn character_index_is_checked() -> Result<(), MgenError> {
    let err = check(Claim::Character {
        expr: e("b"),
        index: 4,
        value: 0,
    })
    .expect_err("index out of range");
    assert_eq!(err.code(), "character-index");
    Ok(())
}

#[test]
fn certificates_use_definitions_and_are_deterministic() -> Result<(), MgenError> {
    let certificate = Certificate::new("s3-in-s4")
        .define("s", Expr::parse("a*b")?)
        .claim("order-s", Claim::Order { expr: e("s"), order: 2 })
        .claim("order-b", Claim::Order { expr: e("b"), order: 3 })
        .claim("s-inverts-b", Claim::Equal { lhs: e("b^s"), rhs: e("b^-1") });
    let oracle = s4_oracle()?;
    let oracle: &dyn ClassOracle<Perm> = &oracle;
    let policy = VerifyPolicy::default();
    let first = certificate.evaluate(&s4_bindings(), Some(oracle), &policy)?;
    let second = certificate.evaluate(&s4_bindings(), Some(oracle), &policy)?;
    assert!(first.passed());
    assert_eq!(first.analysis_hash, second.analysis_hash);
    assert_eq!(
        first.provenance.check_order,
        vec!["order-s", "order-b", "s-inverts-b"]
    );
    assert!(!certificate.needs_oracle());
    Ok(())
}

#[test]
fn failing_claims_do_not_abort_unless_fail_fast() -> Result<(), MgenError> {
    let certificate = Certificate::new("mixed")
        .claim("wrong", Claim::Order { expr: e("a"), order: 3 })
        .claim("right", Claim::Order { expr: e("b"), order: 3 });
    let report = certificate.evaluate(&s4_bindings(), None, &VerifyPolicy::default())?;
    assert!(!report.passed());
    assert_eq!(report.checks.len(), 2);
    assert_eq!(report.failures().count(), 1);
    assert_eq!(report.check("wrong").map(|c| c.observed.as_str()), Some("2"));

    let policy = VerifyPolicy {
        fail_fast: true,
        ..VerifyPolicy::default()
    };
    let report = certificate.evaluate(&s4_bindings(), None, &policy)?;
    assert_eq!(report.checks.len(), 1);
    Ok(())
}

#[test]
fn certificate_errors() -> Result<(), MgenError> {
    let empty = Certificate::new("empty");
    let err = empty
        .evaluate(&s4_bindings(), None, &VerifyPolicy::default())
        .expect_err("no claims");
    assert_eq!(err.code(), "empty-certificate");

    let broken = Certificate::new("broken")
        .define("s", Expr::parse("a*missing")?)
        .claim("order-s", Claim::Order { expr: e("s"), order: 2 });
    let err = broken
        .evaluate(&s4_bindings(), None, &VerifyPolicy::default())
        .expect_err("unbound name in a definition");
    assert_eq!(err.code(), "missing-binding");
    assert_eq!(
        err.info().context.get("definition").map(String::as_str),
        Some("s")
    );
    Ok(())
}

#[test]
fn character_product_overflow_fails_the_check() -> Result<(), MgenError> {
    let ambient = mgen_closure::enumerate(&[common::perm("(0 1 2)")])?;
    let oracle = mgen_verify::FiniteClassOracle::new(ambient.clone(), ambient.clone(), ambient)
        .with_character(3, [0, 0, i64::MAX, 2]);
    let check = Claim::CharacterProduct {
        expr: e("b"),
        indices: [2, 3],
        value: 0,
    }
    .check(
        "huge-product",
        &s4_bindings(),
        Some(&oracle as &dyn ClassOracle<Perm>),
    )?;
    assert!(!check.pass);
    assert!(check.observed.starts_with("overflow"));
    Ok(())
}
