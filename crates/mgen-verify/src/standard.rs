use log::info;
use mgen_closure::{psl2_13_centralizer, run_subsets, SubsetControl, SubsetOpts, SubsetOutcome};
use mgen_core::{GroupElement, MgenError};

use crate::certificate::Certificate;
use crate::claims::Claim;
use crate::expr::{Bindings, Expr};
use crate::oracle::ClassOracle;
use crate::policies::VerifyPolicy;
use crate::report::{ClaimCheck, VerificationReport};

const EXHAUSTIVE: &str = "exhaustive_subsets";

fn expr(text: &str) -> Result<Expr, MgenError> {
    Expr::parse(text)
}

/// Name of the `i`-th conjugate `(a^2)^((a*b)^i)`.
pub fn extraspecial_name(i: usize) -> String {
    format!("j{i}")
}

/// Claims that `a`, `b` are standard generators of G = 2^(1+24).Co1 with
/// central involution `cent`, and that the first `count` conjugates
/// `j_i = (a^2)^((a*b)^i)` lie in Q_x0, are involutions and commute
/// modulo `cent`.
pub fn standard_g_certificate(count: usize) -> Result<Certificate, MgenError> {
    let mut certificate = Certificate::new("standard-g")
        .describe("a, b are standard generators of 2^(1+24).Co1 inside the Monster")
        .claim(
            "commutator-a2-b3",
            Claim::Equal {
                lhs: expr("[a^2, b^3]")?,
                rhs: expr("cent")?,
            },
        )
        .claim(
            "cent-commutes-a",
            Claim::Commute {
                a: expr("cent")?,
                b: expr("a")?,
            },
        )
        .claim(
            "cent-commutes-b",
            Claim::Commute {
                a: expr("cent")?,
                b: expr("b")?,
            },
        )
        .claim("a-in-g-x0", Claim::InMaximal2Local { expr: expr("a")? })
        .claim("b-in-g-x0", Claim::InMaximal2Local { expr: expr("b")? })
        .claim(
            "order-a",
            Claim::Order {
                expr: expr("a")?,
                order: 4,
            },
        )
        .claim(
            "order-b",
            Claim::Order {
                expr: expr("b")?,
                order: 6,
            },
        )
        .claim(
            "class-a",
            Claim::Character {
                expr: expr("a")?,
                index: 1,
                value: -13,
            },
        )
        .claim(
            "class-b",
            Claim::Character {
                expr: expr("b")?,
                index: 1,
                value: 2,
            },
        )
        .claim(
            "class-b-4096",
            Claim::CharacterOneOf {
                expr: expr("b")?,
                index: 0,
                values: vec![-3, 5],
            },
        )
        .claim(
            "order-ab",
            Claim::Order {
                expr: expr("a*b")?,
                order: 40,
            },
        )
        .claim(
            "class-ab-inverse",
            Claim::Character {
                expr: expr("(a*b)^-1")?,
                index: 1,
                value: 0,
            },
        )
        .claim(
            "class-ab-inverse-product",
            Claim::CharacterProduct {
                expr: expr("(a*b)^-1")?,
                indices: [2, 3],
                value: 0,
            },
        )
        .claim(
            "a2-b-noncommuting",
            Claim::NotCommute {
                a: expr("a^2")?,
                b: expr("b")?,
            },
        )
        .claim(
            "b2-a-noncommuting",
            Claim::NotCommute {
                a: expr("b^2")?,
                b: expr("a")?,
            },
        )
        .claim(
            "b3-a-noncommuting",
            Claim::NotCommute {
                a: expr("b^3")?,
                b: expr("a")?,
            },
        )
        .claim(
            "order-abab2",
            Claim::OrderDivisibleBy {
                expr: expr("a*b*a*b^2")?,
                divisor: 6,
            },
        );

    for i in 0..count {
        let by = if i == 0 {
            "1".to_string()
        } else {
            format!("(a*b)^{i}")
        };
        certificate = certificate.define(extraspecial_name(i), expr(&format!("(a^2)^({by})"))?);
    }
    for i in 0..count {
        let name = extraspecial_name(i);
        certificate = certificate
            .claim(
                format!("{name}-in-q-x0"),
                Claim::InExtraspecial {
                    expr: Expr::var(&name),
                },
            )
            .claim(
                format!("order-{name}"),
                Claim::Order {
                    expr: Expr::var(&name),
                    order: 2,
                },
            );
    }
    for i in 0..count {
        for k in i + 1..count {
            certificate = certificate.claim(
                format!("{}-{}-commute-mod-cent", extraspecial_name(i), extraspecial_name(k)),
                Claim::CommuteModulo {
                    a: Expr::var(extraspecial_name(i)),
                    b: Expr::var(extraspecial_name(k)),
                    central: expr("cent")?,
                },
            );
        }
    }
    Ok(certificate)
}

/// Verifies that `a`, `b` are standard generators of 2^(1+24).Co1 with
/// central involution `central`.
///
/// Runs [`standard_g_certificate`] with `policy.extraspecial_count`
/// conjugates. When `policy.run_exhaustive` is set it then checks that no
/// non-empty subset of the conjugates multiplies to 1 or to `central`, so
/// they generate an extraspecial group of the full order; otherwise the
/// report records `exhaustive_subsets` as skipped.
pub fn verify_standard_generators_g<E: GroupElement>(
    a: &E,
    b: &E,
    central: &E,
    oracle: &dyn ClassOracle<E>,
    policy: &VerifyPolicy,
) -> Result<VerificationReport, MgenError> {
    let certificate = standard_g_certificate(policy.extraspecial_count)?;
    let bindings = Bindings::new(a.identity())
        .with("a", a.clone())
        .with("b", b.clone())
        .with("cent", central.clone());
    let mut checks = certificate.checks(&bindings, Some(oracle), policy)?;

    let statement = format!(
        "no product of a non-empty subset of j0..j{} is 1 or cent",
        policy.extraspecial_count.saturating_sub(1)
    );
    let stopped_early = policy.fail_fast && checks.iter().any(|check| !check.pass);
    if !policy.run_exhaustive || stopped_early || policy.extraspecial_count == 0 {
        checks.push(ClaimCheck::skipped(EXHAUSTIVE, statement));
    } else {
        let bound = certificate.bind(&bindings)?;
        let elements = (0..policy.extraspecial_count)
            .map(|i| bound.get(&extraspecial_name(i)).cloned())
            .collect::<Result<Vec<_>, _>>()?;
        info!(
            "running exhaustive subset check over {} conjugates",
            elements.len()
        );
        let opts = SubsetOpts {
            budget: policy.subset_budget,
            progress_every: policy.progress_every,
        };
        let outcome = run_subsets(
            &elements,
            Some(central),
            None,
            &opts,
            &mut SubsetControl::default(),
        )?;
        let (pass, observed) = match outcome {
            SubsetOutcome::Independent => (true, "independent".to_string()),
            SubsetOutcome::Dependent { indices, .. } => (
                false,
                format!(
                    "subset {:?} multiplies to 1 or cent",
                    indices
                ),
            ),
            SubsetOutcome::Interrupted(checkpoint) => (
                false,
                format!(
                    "interrupted after {}/{} subsets",
                    checkpoint.checked, checkpoint.total
                ),
            ),
        };
        checks.push(ClaimCheck {
            name: EXHAUSTIVE.to_string(),
            statement,
            pass,
            observed,
            skipped: false,
        });
    }

    VerificationReport::new(
        &certificate.name,
        checks,
        policy.clone(),
        certificate.provenance()?,
    )
}

/// Certificate for `g6 = y*t` where the only power `t^i`, `i < 6`, fixed by
/// `i2` is `t^0`.
pub fn centralizer_pgl2_13_certificate() -> Result<Certificate, MgenError> {
    Ok(Certificate::new("pgl2-13-centraliser")
        .describe("g6 splits as y*t and i2 fixes no non-trivial power of t")
        .claim(
            "g6-is-y-t",
            Claim::Equal {
                lhs: expr("g6")?,
                rhs: expr("y*t")?,
            },
        )
        .claim(
            "t-powers-fixed-by-i2",
            Claim::FixedPowers {
                t: expr("t")?,
                by: expr("i2")?,
                count: 6,
                expected: vec![0],
            },
        ))
}

/// Checks `g6 == y*t` and that `t^0` is the only power `t^i`, `i < 6`, with
/// `(t^i)^i2 == t^i`.
pub fn verify_centralizer_pgl2_13<E: GroupElement>(
    g6: &E,
    y: &E,
    t: &E,
    i2: &E,
    policy: &VerifyPolicy,
) -> Result<VerificationReport, MgenError> {
    let bindings = Bindings::new(g6.identity())
        .with("g6", g6.clone())
        .with("y", y.clone())
        .with("t", t.clone())
        .with("i2", i2.clone());
    centralizer_pgl2_13_certificate()?.evaluate(&bindings, None, policy)
}

/// Checks that every reference generator centralizes `h13` and that the
/// centralizer of `(h13, h6, h2)` in the reference subgroup is trivial.
///
/// Wrong orders of `h13`, `h6`, `h2` are a precondition error, not a failed
/// check.
pub fn verify_psl2_13_centralizer<E: GroupElement>(
    h13: &E,
    h6: &E,
    h2: &E,
    reference_gens: &[E],
    policy: &VerifyPolicy,
) -> Result<VerificationReport, MgenError> {
    let mut checks: Vec<ClaimCheck> = reference_gens
        .iter()
        .enumerate()
        .map(|(index, gen)| {
            let pass = gen.commutes_with(h13);
            ClaimCheck {
                name: format!("reference-{index}-centralizes-h13"),
                statement: format!("reference generator {index} commutes with h13"),
                pass,
                observed: if pass { "commute" } else { "do not commute" }.to_string(),
                skipped: false,
            }
        })
        .collect();
    let found = psl2_13_centralizer(reference_gens, h13, h6, h2)?;
    checks.push(ClaimCheck {
        name: "psl2-13-centralizer-trivial".to_string(),
        statement: "|C(h13, h6, h2)| = 1 in the reference subgroup".to_string(),
        pass: found.len() == 1,
        observed: found.len().to_string(),
        skipped: false,
    });

    let certificate = Certificate::new("psl2-13-centralizer");
    VerificationReport::new(
        &certificate.name,
        checks,
        policy.clone(),
        certificate.provenance()?,
    )
}
