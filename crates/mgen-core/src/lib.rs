#![deny(missing_docs)]
#![doc = "Core group traits, structured errors and provenance types shared by the mgen crates."]

use std::fmt::Debug;
use std::hash::Hash;

pub mod errors;
pub mod provenance;
pub mod rng;

pub use errors::{ErrorInfo, MgenError};
pub use provenance::{RunProvenance, SchemaVersion};
pub use rng::{derive_substream_seed, RngHandle};

/// Element of a finite group, written multiplicatively.
///
/// Implementors provide multiplication, inversion, the identity of the group
/// the element lives in, and a canonical key. Two elements are equal exactly
/// when their canonical keys are equal; the key is what enumeration uses for
/// its seen-set.
///
/// Conventions: conjugation is `a^b := b⁻¹ a b` and the commutator is
/// `[a, b] := a⁻¹ b⁻¹ a b`.
pub trait GroupElement: Clone + PartialEq + Debug {
    /// Hashable canonical representation.
    type Key: Clone + Eq + Hash + Debug;

    /// Identity of the group containing `self`.
    fn identity(&self) -> Self;

    /// Group product `self * rhs`.
    fn mul(&self, rhs: &Self) -> Self;

    /// Inverse element.
    fn inverse(&self) -> Self;

    /// Canonical key used for hashing and deduplication.
    fn canonical_key(&self) -> Self::Key;

    /// Whether `self` is the identity.
    fn is_identity(&self) -> bool {
        *self == self.identity()
    }

    /// Raises `self` to an arbitrary integer power using square-and-multiply.
    /// Negative exponents go through the inverse.
    fn pow(&self, exp: i64) -> Self {
        let mut base = if exp < 0 {
            self.inverse()
        } else {
            self.clone()
        };
        let mut result = self.identity();
        let mut e = exp.unsigned_abs();
        while e > 0 {
            if e & 1 == 1 {
                result = result.mul(&base);
            }
            e >>= 1;
            if e > 0 {
                base = base.mul(&base);
            }
        }
        result
    }

    /// Smallest positive `n` with `self^n == 1`.
    ///
    /// The default walks successive powers and never terminates on elements of
    /// infinite order; see [`GroupElement::order_bounded`].
    fn order(&self) -> u64 {
        let mut acc = self.clone();
        let mut n = 1u64;
        while !acc.is_identity() {
            acc = acc.mul(self);
            n += 1;
        }
        n
    }

    /// Like [`GroupElement::order`] but gives up after `limit` steps.
    fn order_bounded(&self, limit: u64) -> Option<u64> {
        let mut acc = self.clone();
        for n in 1..=limit {
            if acc.is_identity() {
                return Some(n);
            }
            acc = acc.mul(self);
        }
        None
    }

    /// Conjugate `self^by = by⁻¹ * self * by`.
    fn conjugate(&self, by: &Self) -> Self {
        by.inverse().mul(self).mul(by)
    }

    /// Commutator `[self, other] = self⁻¹ * other⁻¹ * self * other`.
    fn commutator(&self, other: &Self) -> Self {
        self.inverse().mul(&other.inverse()).mul(self).mul(other)
    }

    /// Whether `self * other == other * self`.
    fn commutes_with(&self, other: &Self) -> bool {
        self.mul(other) == other.mul(self)
    }
}

/// Ordered product of `factors`, or `None` when the iterator is empty.
pub fn product<'a, E, I>(factors: I) -> Option<E>
where
    E: GroupElement + 'a,
    I: IntoIterator<Item = &'a E>,
{
    let mut iter = factors.into_iter();
    let first = iter.next()?.clone();
    Some(iter.fold(first, |acc, factor| acc.mul(factor)))
}
