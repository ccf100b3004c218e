use mgen_core::{GroupElement, MgenError};
use serde::{Deserialize, Serialize};

use crate::certificate::{Certificate, Definition};
use crate::claims::Claim;
use crate::expr::{Bindings, Expr};
use crate::policies::VerifyPolicy;
use crate::report::VerificationReport;

fn expr(text: &str) -> Result<Expr, MgenError> {
    Expr::parse(text)
}

/// Relators of a finitely presented group plus order requirements that
/// pin the quotient down.
///
/// The presentation is checked on images: the generators named in
/// `generators` must satisfy every relator. `definitions` express those
/// generators through the caller's bindings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
    /// Name of the presented group.
    pub name: String,
    /// Generator names used in the relators.
    pub generators: Vec<String>,
    /// Generators in terms of the caller's bindings.
    #[serde(default)]
    pub definitions: Vec<Definition>,
    /// Words that must evaluate to the identity.
    pub relators: Vec<Expr>,
    /// Elements with a required order.
    #[serde(default)]
    pub orders: Vec<(Expr, u64)>,
}

impl Presentation {
    /// Certificate with one relator claim per relator and one order claim per
    /// order requirement.
    pub fn to_certificate(&self) -> Certificate {
        let mut certificate = Certificate::new(self.name.clone())
            .describe(format!("presentation of {}", self.name));
        certificate.definitions = self.definitions.clone();
        for relator in &self.relators {
            certificate = certificate.claim(
                format!("relator {relator}"),
                Claim::Relator {
                    expr: relator.clone(),
                },
            );
        }
        for (element, order) in &self.orders {
            certificate = certificate.claim(
                format!("order {element}"),
                Claim::Order {
                    expr: element.clone(),
                    order: *order,
                },
            );
        }
        certificate
    }
}

/// Checks that `bindings` satisfy `presentation`.
pub fn verify_presentation<E: GroupElement>(
    bindings: &Bindings<E>,
    presentation: &Presentation,
    policy: &VerifyPolicy,
) -> Result<VerificationReport, MgenError> {
    presentation
        .to_certificate()
        .evaluate(bindings, None, policy)
}

/// PGL(2,13) on `u = i2*g6^4*a12` and `v = g13`:
/// `u^2 = v^13 = (uv^2)^4 = (uvuv^2)^3 = 1`.
///
/// The caller's `g13`, `g6`, `i2` and `a12` must have orders 13, 6, 2 and 12.
pub fn pgl2_13_presentation() -> Result<Presentation, MgenError> {
    Ok(Presentation {
        name: "PGL(2,13)".to_string(),
        generators: vec!["u".to_string(), "v".to_string()],
        definitions: vec![
            Definition::new("u", expr("i2*g6^4*a12")?),
            Definition::new("v", expr("g13")?),
        ],
        relators: vec![
            expr("u^2")?,
            expr("v^13")?,
            expr("(u*v^2)^4")?,
            expr("(u*v*u*v^2)^3")?,
        ],
        orders: vec![
            (expr("g13")?, 13),
            (expr("g6")?, 6),
            (expr("i2")?, 2),
            (expr("a12")?, 12),
        ],
    })
}

/// PSL(2,29) extended by its outer involution, on `a`, `b`:
/// `a^2 = b^29 = (ab^2)^4 = (abab^2)^3 = 1` with `|ab| = 28`.
pub fn psl2_29_2_presentation() -> Result<Presentation, MgenError> {
    Ok(Presentation {
        name: "PSL(2,29):2".to_string(),
        generators: vec!["a".to_string(), "b".to_string()],
        definitions: Vec::new(),
        relators: vec![
            expr("a^2")?,
            expr("b^29")?,
            expr("(a*b^2)^4")?,
            expr("(a*b*a*b^2)^3")?,
        ],
        orders: vec![(expr("a*b")?, 28)],
    })
}
