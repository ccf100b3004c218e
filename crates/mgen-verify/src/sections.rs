use mgen_core::{ErrorInfo, GroupElement, MgenError};
use mgen_word::{catalog, Word, WordOracle};
use serde::Serialize;

use crate::certificate::Certificate;
use crate::claims::Claim;
use crate::expr::{Bindings, Expr};
use crate::oracle::ClassOracle;
use crate::policies::VerifyPolicy;
use crate::presentation::pgl2_13_presentation;
use crate::report::VerificationReport;
use crate::standard::{
    centralizer_pgl2_13_certificate, standard_g_certificate, verify_standard_generators_g,
};

/// Catalogue literal bound to a local name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionBinding {
    /// Name used by the section's claims.
    pub name: String,
    /// Catalogue section holding the literal.
    pub section: String,
    /// Entry name inside that section.
    pub entry: String,
}

/// How a section is verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Evaluate the certificate.
    Certificate,
    /// Run [`verify_standard_generators_g`] on `a`, `b`, `cent`.
    StandardGenerators,
}

/// One construction: its elements and what is proved about them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Stable identifier, e.g. `3fi24`.
    pub id: String,
    /// Subgroup constructed.
    pub title: String,
    /// What the claims establish.
    pub description: String,
    /// Elements taken from the catalogue.
    pub bindings: Vec<SectionBinding>,
    /// Verification procedure.
    pub kind: SectionKind,
    /// Claims over the bindings.
    pub certificate: Certificate,
}

impl Section {
    fn new(id: &str, title: &str, description: &str, certificate: Certificate) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            bindings: Vec::new(),
            kind: SectionKind::Certificate,
            certificate,
        }
    }

    /// Binds every entry of the section's own catalogue section.
    fn own_entries(mut self) -> Self {
        let own: Vec<SectionBinding> = catalog::section_entries(&self.id)
            .map(|entry| SectionBinding {
                name: entry.name.to_string(),
                section: entry.section.to_string(),
                entry: entry.name.to_string(),
            })
            .collect();
        self.bindings.extend(own);
        self
    }

    /// Binds `entry` of catalogue section `section` under the same name.
    fn borrow(mut self, section: &str, entry: &str) -> Self {
        self.bindings.push(SectionBinding {
            name: entry.to_string(),
            section: section.to_string(),
            entry: entry.to_string(),
        });
        self
    }

    fn with_kind(mut self, kind: SectionKind) -> Self {
        self.kind = kind;
        self
    }

    /// Evaluates the section's words through `oracle`.
    pub fn bindings<O: WordOracle>(&self, oracle: &O) -> Result<Bindings<O::Element>, MgenError> {
        let mut bindings = Bindings::new(oracle.evaluate(&Word::identity())?);
        for binding in &self.bindings {
            let entry = catalog::lookup(&binding.section, &binding.entry).ok_or_else(|| {
                MgenError::Verify(
                    ErrorInfo::new("unknown-catalog-entry", "binding names no catalogue literal")
                        .with_context("section", binding.section.clone())
                        .with_context("entry", binding.entry.clone()),
                )
            })?;
            bindings.insert(binding.name.clone(), oracle.evaluate(&entry.word()?)?);
        }
        Ok(bindings)
    }

    /// Evaluates the section's words through `words` and checks its claims.
    pub fn verify<O: WordOracle>(
        &self,
        words: &O,
        classes: Option<&dyn ClassOracle<O::Element>>,
        policy: &VerifyPolicy,
    ) -> Result<VerificationReport, MgenError> {
        let bindings = self.bindings(words)?;
        self.verify_bindings(&bindings, classes, policy)
    }

    /// Checks the section's claims against already evaluated bindings.
    pub fn verify_bindings<E: GroupElement>(
        &self,
        bindings: &Bindings<E>,
        classes: Option<&dyn ClassOracle<E>>,
        policy: &VerifyPolicy,
    ) -> Result<VerificationReport, MgenError> {
        match self.kind {
            SectionKind::Certificate => self.certificate.evaluate(bindings, classes, policy),
            SectionKind::StandardGenerators => {
                let classes = classes.ok_or_else(|| {
                    MgenError::Verify(
                        ErrorInfo::new(
                            "oracle-required",
                            "standard generators need a class oracle",
                        )
                        .with_context("section", self.id.clone()),
                    )
                })?;
                verify_standard_generators_g(
                    bindings.get("a")?,
                    bindings.get("b")?,
                    bindings.get("cent")?,
                    classes,
                    policy,
                )
            }
        }
    }
}

fn expr(text: &str) -> Result<Expr, MgenError> {
    Expr::parse(text)
}

fn exprs(texts: &[&str]) -> Result<Vec<Expr>, MgenError> {
    texts.iter().map(|text| expr(text)).collect()
}

fn order(expr_text: &str, order: u64) -> Result<Claim, MgenError> {
    Ok(Claim::Order {
        expr: expr(expr_text)?,
        order,
    })
}

fn equal(lhs: &str, rhs: &str) -> Result<Claim, MgenError> {
    Ok(Claim::Equal {
        lhs: expr(lhs)?,
        rhs: expr(rhs)?,
    })
}

fn commute(a: &str, b: &str) -> Result<Claim, MgenError> {
    Ok(Claim::Commute {
        a: expr(a)?,
        b: expr(b)?,
    })
}

fn numbered(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{prefix}_{i}")).collect()
}

fn normalised_by(element: &str, prefix: &str, count: usize) -> Result<Claim, MgenError> {
    Ok(Claim::Normalises {
        expr: expr(element)?,
        by: numbered(prefix, count)
            .iter()
            .map(|name| expr(name))
            .collect::<Result<_, _>>()?,
    })
}

fn standard_g() -> Result<Section, MgenError> {
    Ok(Section::new(
        "standard-g",
        "2^(1+24).Co1",
        "a, b are standard generators of the 2B-centraliser G_x0 with central involution cent",
        standard_g_certificate(VerifyPolicy::default().extraspecial_count)?,
    )
    .own_entries()
    .with_kind(SectionKind::StandardGenerators))
}

fn pgl2_13() -> Result<Section, MgenError> {
    let mut certificate = pgl2_13_presentation()?.to_certificate();
    certificate.name = "pgl2-13".to_string();
    Ok(Section::new(
        "pgl2-13",
        "PGL(2,13)",
        "u = i2*g6^4*a12 and v = g13 satisfy a presentation of PGL(2,13)",
        certificate.describe("presentation of PGL(2,13) on u, v with element orders 13, 6, 2 and 12"),
    )
    .own_entries())
}

fn pgl2_13_centraliser() -> Result<Section, MgenError> {
    let mut certificate = centralizer_pgl2_13_certificate()?;
    certificate = certificate
        .claim("order-g13", order("g13", 13)?)
        .claim("order-g6", order("g6", 6)?)
        .claim("order-i2", order("i2", 2)?)
        .claim("l33-0-centralizes-g13", commute("l33_0", "g13")?)
        .claim("l33-1-centralizes-g13", commute("l33_1", "g13")?)
        .claim(
            "psl2-13-centralizer-trivial",
            Claim::CentralizerSize {
                reference: exprs(&["l33_0", "l33_1"])?,
                targets: exprs(&["g13", "g6", "i2"])?,
                size: 1,
            },
        );
    Ok(Section::new(
        "pgl2-13-centraliser",
        "PSL(3,3) centralizing g13",
        "the PSL(2,13) inside PGL(2,13) has trivial centralizer in the PSL(3,3) centralizing g13",
        certificate,
    )
    .own_entries()
    .borrow("pgl2-13", "g13")
    .borrow("pgl2-13", "g6")
    .borrow("pgl2-13", "i2"))
}

fn normalisers_13_6() -> Result<Section, MgenError> {
    let mut certificate = Certificate::new("normalisers-13-6")
        .describe("normalisers of the order 6 elements y, yd and y*t^k")
        .define("yt1", expr("y*t")?)
        .define("yt2", expr("y*t^2")?)
        .define("yt3", expr("y*t^3")?);
    for element in ["y", "yd", "yt1", "yt2", "yt3"] {
        certificate = certificate.claim(format!("order-{element}"), order(element, 6)?);
    }
    certificate = certificate
        .claim("yd-normalised", normalised_by("yd", "yd_norm", 12)?)
        .claim("y-normalised", normalised_by("y", "y_norm", 4)?)
        .claim("yt1-normalised", normalised_by("yt1", "yt1_norm", 10)?)
        .claim("yt2-normalised", normalised_by("yt2", "yt2_norm", 10)?)
        .claim("yt3-normalised", normalised_by("yt3", "yt3_norm", 10)?);
    Ok(Section::new(
        "normalisers-13-6",
        "normalisers of 13:6 elements",
        "each listed generator conjugates the element into its own cyclic group",
        certificate,
    )
    .own_entries()
    .borrow("pgl2-13-centraliser", "t"))
}

fn two_b() -> Result<Section, MgenError> {
    let certificate = Certificate::new("2B")
        .describe("a, b are standard generators of the 2A-centraliser 2.B")
        .claim(
            "y-is-2a",
            Claim::InvolutionClass {
                expr: expr("y")?,
                class: 1,
            },
        )
        .claim("y-centralizes-a", commute("y", "a")?)
        .claim("y-centralizes-b", commute("y", "b")?)
        .claim(
            "order-17-witness",
            order("(a*b*a*b*a*b*a*b^2*a*b*a*b^2*a*b*a*b)^2", 17)?,
        )
        .claim("order-31-witness", order("a*b*a*b*a*b*a*b^2*a*b*a*b^2", 31)?)
        .claim("order-g104", order("g104", 104)?)
        .claim("order-g78", order("g78", 78)?)
        .claim("y-centralizes-g104", commute("y", "g104")?)
        .claim("y-centralizes-g78", commute("y", "g78")?)
        .claim("g104-powers-to-a", equal("g104^26", "a")?)
        .claim("g78-powers-to-b", equal("g78^13", "b")?)
        .claim("order-a", order("a", 4)?)
        .claim("order-b", order("b", 6)?)
        .claim("order-ab", order("a*b", 55)?)
        .claim(
            "order-23-projects-into-y",
            Claim::MemberOf {
                expr: expr("((a*b)^3*(a*b^2)*(a*b)*(a*b^2)^2)^23")?,
                set: exprs(&["y", "y^2"])?,
            },
        );
    Ok(Section::new(
        "2B",
        "2.B",
        "a, b generate the centralizer of the standard 2A-involution y",
        certificate,
    )
    .own_entries())
}

fn s3_th() -> Result<Section, MgenError> {
    let certificate = Certificate::new("s3-th")
        .describe("c2, c3 generate the S3 factor and a, b are standard generators of Th")
        .claim("order-c2", order("c2", 2)?)
        .claim("order-c3", order("c3", 3)?)
        .claim("c2-inverts-c3", equal("c3^c2", "c3^-1")?)
        .claim("c2-centralizes-a", commute("c2", "a")?)
        .claim("c2-centralizes-b", commute("c2", "b")?)
        .claim("c3-centralizes-a", commute("c3", "a")?)
        .claim("c3-centralizes-b", commute("c3", "b")?)
        .claim(
            "c3-is-3c",
            Claim::CharacterAfterConjugation {
                involution: expr("a")?,
                target: expr("c3")?,
                class: 2,
                index: 0,
                value: -1,
            },
        )
        .claim("order-a", order("a", 2)?)
        .claim("order-ab", order("a*b", 19)?)
        .claim("g39-centralizes-c2", commute("g39", "c2")?)
        .claim("order-g39", order("g39", 39)?)
        .claim("g39-powers-to-b", equal("g39^13", "b")?)
        .claim(
            "order-31-witness",
            order(
                "a*b*a*b^2*a*b^2*a*b*a*b^2*a*b*a*b*a*b*a*b^2*a*b^2*a*b*a*b",
                31,
            )?,
        );
    Ok(Section::new(
        "s3-th",
        "S3 x Th",
        "the normaliser of the 3C element c3",
        certificate,
    )
    .own_entries())
}

fn three_fi24() -> Result<Section, MgenError> {
    let certificate = Certificate::new("3fi24")
        .describe("a, b are standard generators of the normaliser of the 3A element g3")
        .claim("order-g3", order("g3", 3)?)
        .claim("g3-in-g-x0", Claim::InMaximal2Local { expr: expr("g3")? })
        .claim(
            "g3-is-3a",
            Claim::Character {
                expr: expr("g3")?,
                index: 0,
                value: 782,
            },
        )
        .claim("a-inverts-g3", equal("g3^a", "g3^-1")?)
        .claim("b-inverts-g3", equal("g3^b", "g3^-1")?)
        .claim(
            "a-outside-g3",
            Claim::NotMemberOf {
                expr: expr("a")?,
                set: exprs(&["g3", "g3^2", "g3^3"])?,
            },
        )
        .claim(
            "b-outside-g3",
            Claim::NotMemberOf {
                expr: expr("b")?,
                set: exprs(&["g3", "g3^2", "g3^3"])?,
            },
        )
        .claim("order-a", order("a", 2)?)
        .claim("order-b", order("b", 8)?)
        .claim("g46-inverts-g3", equal("g3^g46", "g3^-1")?)
        .claim("g40-inverts-g3", equal("g3^g40", "g3^-1")?)
        .claim("order-g46", order("g46", 46)?)
        .claim("order-g40", order("g40", 40)?)
        .claim("g46-powers-to-a", equal("g46^23", "a")?)
        .claim("g40-powers-to-b", equal("g40^5", "b")?)
        .claim("order-ab", order("a*b", 29)?);
    Ok(Section::new(
        "3fi24",
        "3.Fi24",
        "the normaliser of the 3A element g3",
        certificate,
    )
    .own_entries())
}

fn psl2_29_2() -> Result<Section, MgenError> {
    let mut certificate = crate::presentation::psl2_29_2_presentation()?.to_certificate();
    certificate.name = "psl2-29-2".to_string();
    certificate = certificate
        .describe("a, b satisfy a presentation of PSL(2,29):2 and the fusion of its 28 and 30 elements")
        .define("g28", expr("a*b")?)
        .define("g30", expr("a*b^2*[a, a*b^2]^7")?)
        .claim("order-g28", order("g28", 28)?)
        .claim(
            "g28-is-28d",
            Claim::CharacterAfterConjugation {
                involution: expr("g28^14")?,
                target: expr("g28")?,
                class: 2,
                index: 0,
                value: 1,
            },
        )
        .claim("order-g30", order("g30", 30)?)
        .claim("g30-in-g-x0", Claim::InMaximal2Local { expr: expr("g30")? })
        .claim(
            "g30-is-30g",
            Claim::Character {
                expr: expr("g30")?,
                index: 0,
                value: 0,
            },
        );
    Ok(Section::new(
        "psl2-29-2",
        "PSL(2,29):2",
        "a, b generate PSL(2,29):2 with elements of order 28 and 30 in classes 28D and 30G",
        certificate,
    )
    .own_entries())
}

/// Every construction, in the order they build on each other.
pub fn all_sections() -> Result<Vec<Section>, MgenError> {
    Ok(vec![
        standard_g()?,
        pgl2_13()?,
        pgl2_13_centraliser()?,
        normalisers_13_6()?,
        two_b()?,
        s3_th()?,
        three_fi24()?,
        psl2_29_2()?,
    ])
}

/// Section with identifier `id`.
pub fn section(id: &str) -> Result<Section, MgenError> {
    all_sections()?
        .into_iter()
        .find(|section| section.id == id)
        .ok_or_else(|| {
            MgenError::Verify(
                ErrorInfo::new("unknown-section", format!("no section called `{id}`"))
                    .with_hint("run `mgen sections` for the list"),
            )
        })
}
