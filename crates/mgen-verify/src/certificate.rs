use log::{debug, warn};
use mgen_closure::stable_hash_string;
use mgen_core::{ErrorInfo, GroupElement, MgenError, RunProvenance};
use serde::{Deserialize, Serialize};

use crate::claims::{Claim, NamedClaim};
use crate::expr::{Bindings, Expr};
use crate::oracle::ClassOracle;
use crate::policies::VerifyPolicy;
use crate::report::{ClaimCheck, VerificationReport};

/// Name bound to an expression over earlier bindings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// New name.
    pub name: String,
    /// Value in terms of names bound before it.
    pub expr: Expr,
}

impl Definition {
    /// Binds `name` to `expr`.
    pub fn new(name: impl Into<String>, expr: Expr) -> Self {
        Self {
            name: name.into(),
            expr,
        }
    }
}

/// Named list of claims over a set of bindings.
///
/// Definitions are evaluated first, in order, and may refer to the caller's
/// bindings and to earlier definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    /// Certificate name, carried into the report.
    pub name: String,
    /// What the claims establish.
    #[serde(default)]
    pub description: String,
    /// Derived elements.
    #[serde(default)]
    pub definitions: Vec<Definition>,
    /// Claims in evaluation order.
    pub claims: Vec<NamedClaim>,
}

impl Certificate {
    /// Empty certificate called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            definitions: Vec::new(),
            claims: Vec::new(),
        }
    }

    /// Sets the description.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Appends a definition.
    pub fn define(mut self, name: impl Into<String>, expr: Expr) -> Self {
        self.definitions.push(Definition::new(name, expr));
        self
    }

    /// Appends a claim.
    pub fn claim(mut self, name: impl Into<String>, claim: Claim) -> Self {
        self.claims.push(NamedClaim::new(name, claim));
        self
    }

    /// Whether any claim needs a class oracle.
    pub fn needs_oracle(&self) -> bool {
        self.claims.iter().any(|named| named.claim.needs_oracle())
    }

    /// Caller bindings extended by the definitions.
    pub fn bind<E: GroupElement>(&self, bindings: &Bindings<E>) -> Result<Bindings<E>, MgenError> {
        let mut extended = bindings.clone();
        for definition in &self.definitions {
            let value = definition.expr.evaluate(&extended).map_err(|err| match err {
                MgenError::Verify(info) => {
                    MgenError::Verify(info.with_context("definition", definition.name.clone()))
                }
                other => other,
            })?;
            extended.insert(definition.name.clone(), value);
        }
        Ok(extended)
    }

    /// Evaluates every claim and returns the checks in order.
    pub fn checks<E: GroupElement>(
        &self,
        bindings: &Bindings<E>,
        oracle: Option<&dyn ClassOracle<E>>,
        policy: &VerifyPolicy,
    ) -> Result<Vec<ClaimCheck>, MgenError> {
        if self.claims.is_empty() {
            return Err(MgenError::Verify(
                ErrorInfo::new("empty-certificate", "certificate has no claims")
                    .with_context("certificate", self.name.clone()),
            ));
        }
        let bindings = self.bind(bindings)?;
        let mut checks = Vec::with_capacity(self.claims.len());
        for named in &self.claims {
            let check = named.claim.check(&named.name, &bindings, oracle)?;
            debug!(
                "{}: {} -> {} ({})",
                self.name,
                check.name,
                if check.pass { "pass" } else { "FAIL" },
                check.observed
            );
            let failed = !check.pass;
            checks.push(check);
            if failed && policy.fail_fast {
                warn!("{}: stopping after failed check {}", self.name, named.name);
                break;
            }
        }
        Ok(checks)
    }

    /// Evaluates the certificate into a report.
    pub fn evaluate<E: GroupElement>(
        &self,
        bindings: &Bindings<E>,
        oracle: Option<&dyn ClassOracle<E>>,
        policy: &VerifyPolicy,
    ) -> Result<VerificationReport, MgenError> {
        let checks = self.checks(bindings, oracle, policy)?;
        VerificationReport::new(&self.name, checks, policy.clone(), self.provenance()?)
    }

    /// Provenance stamped with the certificate hash.
    pub fn provenance(&self) -> Result<RunProvenance, MgenError> {
        Ok(RunProvenance::for_input(
            stable_hash_string(self)?,
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
        ))
    }
}
