use itertools::Itertools;
use mgen_closure::{centralizer_in, fixed_powers, normalises, ClosureOpts};
use mgen_core::{ErrorInfo, GroupElement, MgenError};
use serde::{Deserialize, Serialize};

use crate::expr::{Bindings, Expr};
use crate::oracle::ClassOracle;
use crate::report::ClaimCheck;

/// One algebraic fact about expressions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "claim", rename_all = "snake_case")]
pub enum Claim {
    /// `expr` has exactly this order.
    Order {
        /// Element.
        expr: Expr,
        /// Expected order.
        order: u64,
    },
    /// The order of `expr` is a multiple of `divisor`.
    OrderDivisibleBy {
        /// Element.
        expr: Expr,
        /// Required divisor.
        divisor: u64,
    },
    /// `lhs == rhs`.
    Equal {
        /// Left side.
        lhs: Expr,
        /// Right side.
        rhs: Expr,
    },
    /// `expr == 1`.
    Relator {
        /// Word that must vanish.
        expr: Expr,
    },
    /// `a*b == b*a`.
    Commute {
        /// First element.
        a: Expr,
        /// Second element.
        b: Expr,
    },
    /// `a*b != b*a`.
    NotCommute {
        /// First element.
        a: Expr,
        /// Second element.
        b: Expr,
    },
    /// `a` and `b` commute or their commutator is `central`.
    CommuteModulo {
        /// First element.
        a: Expr,
        /// Second element.
        b: Expr,
        /// Allowed commutator.
        central: Expr,
    },
    /// `expr` equals one of `set`.
    MemberOf {
        /// Element.
        expr: Expr,
        /// Allowed values.
        set: Vec<Expr>,
    },
    /// `expr` equals none of `set`.
    NotMemberOf {
        /// Element.
        expr: Expr,
        /// Forbidden values.
        set: Vec<Expr>,
    },
    /// `expr` conjugates `by` into its own cyclic group: `expr^g` is a power
    /// of `expr` for every `g` in `by`.
    Normalises {
        /// Element generating the cyclic group.
        expr: Expr,
        /// Generators of the normaliser.
        by: Vec<Expr>,
    },
    /// The exponents `i < count` with `(t^i)^by == t^i` are exactly `expected`.
    FixedPowers {
        /// Element whose powers are tested.
        t: Expr,
        /// Conjugating element.
        by: Expr,
        /// Number of powers tested.
        count: u64,
        /// Expected fixed exponents, ascending.
        expected: Vec<u64>,
    },
    /// The centralizer of `targets` inside `<reference>` has `size` elements.
    CentralizerSize {
        /// Generators of the ambient subgroup.
        reference: Vec<Expr>,
        /// Elements that must be fixed.
        targets: Vec<Expr>,
        /// Expected number of elements.
        size: usize,
    },
    /// Oracle: `expr` lies in G_x0 = 2^(1+24).Co1.
    InMaximal2Local {
        /// Element.
        expr: Expr,
    },
    /// Oracle: `expr` lies in Q_x0 = 2^(1+24).
    InExtraspecial {
        /// Element.
        expr: Expr,
    },
    /// Oracle: `chi_G_x0(expr)[index] == value`.
    Character {
        /// Element of G_x0.
        expr: Expr,
        /// Character index, 0 to 3.
        index: usize,
        /// Expected value.
        value: i64,
    },
    /// Oracle: `chi_G_x0(expr)[index]` is one of `values`.
    CharacterOneOf {
        /// Element of G_x0.
        expr: Expr,
        /// Character index, 0 to 3.
        index: usize,
        /// Allowed values.
        values: Vec<i64>,
    },
    /// Oracle: the product of two character entries equals `value`.
    CharacterProduct {
        /// Element of G_x0.
        expr: Expr,
        /// The two indices multiplied.
        indices: [usize; 2],
        /// Expected product.
        value: i64,
    },
    /// Oracle: `involution` lies in class `class` (0 identity, 1 for 2A, 2 for 2B).
    InvolutionClass {
        /// Involution.
        expr: Expr,
        /// Expected class.
        class: u32,
    },
    /// Oracle: `conjugate_involution(involution) == (class, h)`, `target^h`
    /// lies in G_x0 and `chi(target^h)[index] == value`.
    CharacterAfterConjugation {
        /// Involution mapped into the standard class representative.
        involution: Expr,
        /// Element conjugated by the returned `h`.
        target: Expr,
        /// Expected involution class.
        class: u32,
        /// Character index, 0 to 3.
        index: usize,
        /// Expected value.
        value: i64,
    },
}

/// A claim with a stable name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedClaim {
    /// Name shown in reports.
    pub name: String,
    /// The claim.
    #[serde(flatten)]
    pub claim: Claim,
}

impl NamedClaim {
    /// Pairs `name` with `claim`.
    pub fn new(name: impl Into<String>, claim: Claim) -> Self {
        Self {
            name: name.into(),
            claim,
        }
    }
}

fn oracle_required<'o, E>(
    oracle: Option<&'o dyn ClassOracle<E>>,
    claim: &str,
) -> Result<&'o dyn ClassOracle<E>, MgenError> {
    oracle.ok_or_else(|| {
        MgenError::Verify(
            ErrorInfo::new("oracle-required", "claim needs a class oracle")
                .with_context("claim", claim),
        )
    })
}

fn character_index(index: usize) -> Result<usize, MgenError> {
    if index < 4 {
        Ok(index)
    } else {
        Err(MgenError::Verify(
            ErrorInfo::new("character-index", "character index must be below 4")
                .with_context("index", index.to_string()),
        ))
    }
}

fn evaluate_all<E: GroupElement>(
    exprs: &[Expr],
    bindings: &Bindings<E>,
) -> Result<Vec<E>, MgenError> {
    exprs.iter().map(|expr| expr.evaluate(bindings)).collect()
}

fn position_in<E: GroupElement>(value: &E, set: &[E]) -> Option<usize> {
    set.iter().position(|candidate| candidate == value)
}

impl Claim {
    /// Whether checking the claim needs a [`ClassOracle`].
    pub fn needs_oracle(&self) -> bool {
        matches!(
            self,
            Claim::InMaximal2Local { .. }
                | Claim::InExtraspecial { .. }
                | Claim::Character { .. }
                | Claim::CharacterOneOf { .. }
                | Claim::CharacterProduct { .. }
                | Claim::InvolutionClass { .. }
                | Claim::CharacterAfterConjugation { .. }
        )
    }

    /// One-line statement of the claim.
    pub fn describe(&self) -> String {
        let list = |exprs: &[Expr]| exprs.iter().join(", ");
        match self {
            Claim::Order { expr, order } => format!("|{expr}| = {order}"),
            Claim::OrderDivisibleBy { expr, divisor } => format!("{divisor} divides |{expr}|"),
            Claim::Equal { lhs, rhs } => format!("{lhs} = {rhs}"),
            Claim::Relator { expr } => format!("{expr} = 1"),
            Claim::Commute { a, b } => format!("{a} commutes with {b}"),
            Claim::NotCommute { a, b } => format!("{a} does not commute with {b}"),
            Claim::CommuteModulo { a, b, central } => {
                format!("[{a}, {b}] is 1 or {central}")
            }
            Claim::MemberOf { expr, set } => format!("{expr} in {{{}}}", list(set)),
            Claim::NotMemberOf { expr, set } => format!("{expr} not in {{{}}}", list(set)),
            Claim::Normalises { expr, by } => format!("<{}> normalises <{expr}>", list(by)),
            Claim::FixedPowers {
                t,
                by,
                count,
                expected,
            } => format!(
                "powers of {t} below {count} fixed by {by}: [{}]",
                expected.iter().join(", ")
            ),
            Claim::CentralizerSize {
                reference,
                targets,
                size,
            } => format!(
                "|C_<{}>({})| = {size}",
                list(reference),
                list(targets)
            ),
            Claim::InMaximal2Local { expr } => format!("{expr} in G_x0"),
            Claim::InExtraspecial { expr } => format!("{expr} in Q_x0"),
            Claim::Character { expr, index, value } => {
                format!("chi({expr})[{index}] = {value}")
            }
            Claim::CharacterOneOf {
                expr,
                index,
                values,
            } => format!("chi({expr})[{index}] in {{{}}}", values.iter().join(", ")),
            Claim::CharacterProduct {
                expr,
                indices,
                value,
            } => format!(
                "chi({expr})[{}] * chi({expr})[{}] = {value}",
                indices[0], indices[1]
            ),
            Claim::InvolutionClass { expr, class } => {
                format!("{expr} has involution class {class}")
            }
            Claim::CharacterAfterConjugation {
                involution,
                target,
                class,
                index,
                value,
            } => format!(
                "{involution} has class {class} via h and chi({target}^h)[{index}] = {value}"
            ),
        }
    }

    /// Evaluates the claim.
    ///
    /// A claim that does not hold is a check with `pass = false`. Errors are
    /// returned only when the claim cannot be evaluated at all: a missing
    /// binding, a missing oracle or an oracle failure.
    pub fn check<E: GroupElement>(
        &self,
        name: &str,
        bindings: &Bindings<E>,
        oracle: Option<&dyn ClassOracle<E>>,
    ) -> Result<ClaimCheck, MgenError> {
        let statement = self.describe();
        let outcome = |pass: bool, observed: String| ClaimCheck {
            name: name.to_string(),
            statement: statement.clone(),
            pass,
            observed,
            skipped: false,
        };

        let check = match self {
            Claim::Order { expr, order } => {
                let observed = expr.evaluate(bindings)?.order();
                outcome(observed == *order, observed.to_string())
            }
            Claim::OrderDivisibleBy { expr, divisor } => {
                let observed = expr.evaluate(bindings)?.order();
                let pass = *divisor != 0 && observed % divisor == 0;
                outcome(pass, observed.to_string())
            }
            Claim::Equal { lhs, rhs } => {
                let pass = lhs.evaluate(bindings)? == rhs.evaluate(bindings)?;
                outcome(pass, if pass { "equal" } else { "different" }.to_string())
            }
            Claim::Relator { expr } => {
                let value = expr.evaluate(bindings)?;
                let pass = value.is_identity();
                outcome(pass, format!("order {}", value.order()))
            }
            Claim::Commute { a, b } | Claim::NotCommute { a, b } => {
                let commutes = a.evaluate(bindings)?.commutes_with(&b.evaluate(bindings)?);
                let pass = commutes == matches!(self, Claim::Commute { .. });
                outcome(
                    pass,
                    if commutes { "commute" } else { "do not commute" }.to_string(),
                )
            }
            Claim::CommuteModulo { a, b, central } => {
                let commutator = a.evaluate(bindings)?.commutator(&b.evaluate(bindings)?);
                let central = central.evaluate(bindings)?;
                let observed = if commutator.is_identity() {
                    "commute".to_string()
                } else if commutator == central {
                    "commutator is central".to_string()
                } else {
                    format!("commutator of order {}", commutator.order())
                };
                outcome(
                    commutator.is_identity() || commutator == central,
                    observed,
                )
            }
            Claim::MemberOf { expr, set } | Claim::NotMemberOf { expr, set } => {
                let value = expr.evaluate(bindings)?;
                let members = evaluate_all(set, bindings)?;
                let found = position_in(&value, &members);
                let pass = found.is_some() == matches!(self, Claim::MemberOf { .. });
                let observed = match found {
                    Some(index) => format!("equals {}", set[index]),
                    None => format!("outside the list, order {}", value.order()),
                };
                outcome(pass, observed)
            }
            Claim::Normalises { expr, by } => {
                let element = expr.evaluate(bindings)?;
                let gens = evaluate_all(by, bindings)?;
                let failing: Vec<String> = by
                    .iter()
                    .zip(&gens)
                    .filter(|(_, g)| !normalises(&element, std::slice::from_ref(*g)))
                    .map(|(name, _)| name.to_string())
                    .collect();
                let observed = if failing.is_empty() {
                    format!("all {} generators normalise", gens.len())
                } else {
                    format!("not normalised by {}", failing.join(", "))
                };
                outcome(failing.is_empty(), observed)
            }
            Claim::FixedPowers {
                t,
                by,
                count,
                expected,
            } => {
                let fixed = fixed_powers(&t.evaluate(bindings)?, &by.evaluate(bindings)?, *count);
                let observed = format!("[{}]", fixed.iter().join(", "));
                outcome(&fixed == expected, observed)
            }
            Claim::CentralizerSize {
                reference,
                targets,
                size,
            } => {
                let reference = evaluate_all(reference, bindings)?;
                let targets = evaluate_all(targets, bindings)?;
                let found = centralizer_in(&reference, &targets, &ClosureOpts::default())?;
                outcome(found.len() == *size, found.len().to_string())
            }
            Claim::InMaximal2Local { expr } => {
                let oracle = oracle_required(oracle, name)?;
                let inside = oracle.in_g_x0(&expr.evaluate(bindings)?)?;
                outcome(inside, if inside { "inside" } else { "outside" }.to_string())
            }
            Claim::InExtraspecial { expr } => {
                let oracle = oracle_required(oracle, name)?;
                let inside = oracle.in_q_x0(&expr.evaluate(bindings)?)?;
                outcome(inside, if inside { "inside" } else { "outside" }.to_string())
            }
            Claim::Character { expr, index, value } => {
                let oracle = oracle_required(oracle, name)?;
                let index = character_index(*index)?;
                let chi = oracle.chi_g_x0(&expr.evaluate(bindings)?)?;
                outcome(chi[index] == *value, chi[index].to_string())
            }
            Claim::CharacterOneOf {
                expr,
                index,
                values,
            } => {
                let oracle = oracle_required(oracle, name)?;
                let index = character_index(*index)?;
                let chi = oracle.chi_g_x0(&expr.evaluate(bindings)?)?;
                outcome(values.contains(&chi[index]), chi[index].to_string())
            }
            Claim::CharacterProduct {
                expr,
                indices,
                value,
            } => {
                let oracle = oracle_required(oracle, name)?;
                let first = character_index(indices[0])?;
                let second = character_index(indices[1])?;
                let chi = oracle.chi_g_x0(&expr.evaluate(bindings)?)?;
                match chi[first].checked_mul(chi[second]) {
                    Some(product) => outcome(product == *value, product.to_string()),
                    None => outcome(
                        false,
                        format!("overflow in {} * {}", chi[first], chi[second]),
                    ),
                }
            }
            Claim::InvolutionClass { expr, class } => {
                let oracle = oracle_required(oracle, name)?;
                let (observed, _) = oracle.conjugate_involution(&expr.evaluate(bindings)?)?;
                outcome(observed == *class, observed.to_string())
            }
            Claim::CharacterAfterConjugation {
                involution,
                target,
                class,
                index,
                value,
            } => {
                let oracle = oracle_required(oracle, name)?;
                let index = character_index(*index)?;
                let (observed_class, h) =
                    oracle.conjugate_involution(&involution.evaluate(bindings)?)?;
                let conjugated = target.evaluate(bindings)?.conjugate(&h);
                if observed_class != *class {
                    outcome(false, format!("class {observed_class}"))
                } else if !oracle.in_g_x0(&conjugated)? {
                    outcome(false, "conjugate outside G_x0".to_string())
                } else {
                    let chi = oracle.chi_g_x0(&conjugated)?;
                    outcome(chi[index] == *value, chi[index].to_string())
                }
            }
        };
        Ok(check)
    }
}
