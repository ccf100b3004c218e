use std::fmt;

use mgen_core::GroupElement;
use serde::{Deserialize, Serialize};

/// Element `(left, right)` of the direct product `A x B`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectProduct<A, B> {
    /// First component.
    pub left: A,
    /// Second component.
    pub right: B,
}

impl<A, B> DirectProduct<A, B> {
    /// Pairs two elements.
    pub fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

impl<A: GroupElement, B: GroupElement> GroupElement for DirectProduct<A, B> {
    type Key = (A::Key, B::Key);

    fn identity(&self) -> Self {
        Self::new(self.left.identity(), self.right.identity())
    }

    fn mul(&self, rhs: &Self) -> Self {
        Self::new(self.left.mul(&rhs.left), self.right.mul(&rhs.right))
    }

    fn inverse(&self) -> Self {
        Self::new(self.left.inverse(), self.right.inverse())
    }

    fn canonical_key(&self) -> Self::Key {
        (self.left.canonical_key(), self.right.canonical_key())
    }

    fn pow(&self, exp: i64) -> Self {
        Self::new(self.left.pow(exp), self.right.pow(exp))
    }

    fn order(&self) -> u64 {
        let a = self.left.order();
        let b = self.right.order();
        let mut x = a;
        let mut y = b;
        while y != 0 {
            let r = x % y;
            x = y;
            y = r;
        }
        a / x * b
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for DirectProduct<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.left, self.right)
    }
}
