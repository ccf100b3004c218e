#![deny(missing_docs)]
#![doc = "Claims over group expressions, certificates and the verification procedures for the \
maximal-subgroup constructions."]

/// Certificates: definitions plus named claims.
pub mod certificate;
/// Claim variants and their evaluation.
pub mod claims;
/// Expression language over named elements.
pub mod expr;
/// Class and membership oracle.
pub mod oracle;
/// Verification policy.
pub mod policies;
/// Finite presentations.
pub mod presentation;
/// Verification reports and provenance types.
pub mod report;
/// The constructions as data.
pub mod sections;
/// YAML and JSON helpers.
#[path = "serde.rs"]
pub mod serde_io;
/// Standard generators and the PGL(2,13) centralizer procedures.
pub mod standard;

pub use certificate::{Certificate, Definition};
pub use claims::{Claim, NamedClaim};
pub use expr::{Bindings, Expr};
pub use mgen_closure::normalises as normaliser_check;
pub use oracle::{ClassOracle, FiniteClassOracle};
pub use policies::VerifyPolicy;
pub use presentation::{
    pgl2_13_presentation, psl2_29_2_presentation, verify_presentation, Presentation,
};
pub use report::{ClaimCheck, VerificationProvenance, VerificationReport};
pub use sections::{all_sections, section, Section, SectionBinding, SectionKind};
pub use standard::{
    standard_g_certificate, verify_centralizer_pgl2_13, verify_psl2_13_centralizer,
    verify_standard_generators_g,
};
