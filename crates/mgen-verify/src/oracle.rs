use std::collections::BTreeMap;

use mgen_closure::Closure;
use mgen_core::{ErrorInfo, GroupElement, MgenError};

/// Class and membership information about the ambient group.
///
/// For the Monster these are the services of a dedicated computer algebra
/// package: membership in the maximal 2-local G_x0 = 2^(1+24).Co1 and in its
/// normal subgroup Q_x0 = 2^(1+24), the character vector `chi_G_x0` of
/// elements of G_x0, and conjugation of involutions into standard
/// representatives.
pub trait ClassOracle<E> {
    /// Whether `g` lies in G_x0.
    fn in_g_x0(&self, g: &E) -> Result<bool, MgenError>;

    /// Whether `g` lies in Q_x0.
    fn in_q_x0(&self, g: &E) -> Result<bool, MgenError>;

    /// Character vector of an element of G_x0.
    fn chi_g_x0(&self, g: &E) -> Result<[i64; 4], MgenError>;

    /// Returns `(class, h)` such that `g^h` is the standard representative of
    /// its class: 0 for the identity, 1 for 2A and 2 for 2B.
    fn conjugate_involution(&self, g: &E) -> Result<(u32, E), MgenError>;
}

/// Class oracle over an explicitly enumerated finite group.
///
/// The two distinguished subgroups are given by their closures, the
/// character is tabulated by element order and each involution class by a
/// representative. Conjugating elements are found by search through the
/// ambient closure, so this is meant for small groups.
#[derive(Debug, Clone)]
pub struct FiniteClassOracle<E: GroupElement> {
    ambient: Closure<E>,
    large: Closure<E>,
    small: Closure<E>,
    characters: BTreeMap<u64, [i64; 4]>,
    involutions: Vec<(u32, E)>,
}

impl<E: GroupElement> FiniteClassOracle<E> {
    /// Oracle for `ambient`, with `large` playing G_x0 and `small` playing
    /// Q_x0. Every character value is zero until set.
    pub fn new(ambient: Closure<E>, large: Closure<E>, small: Closure<E>) -> Self {
        Self {
            ambient,
            large,
            small,
            characters: BTreeMap::new(),
            involutions: Vec::new(),
        }
    }

    /// Character vector of elements of order `order`.
    pub fn with_character(mut self, order: u64, values: [i64; 4]) -> Self {
        self.characters.insert(order, values);
        self
    }

    /// Standard representative of involution class `class`.
    pub fn with_involution(mut self, class: u32, representative: E) -> Self {
        self.involutions.push((class, representative));
        self
    }
}

impl<E: GroupElement> ClassOracle<E> for FiniteClassOracle<E> {
    fn in_g_x0(&self, g: &E) -> Result<bool, MgenError> {
        Ok(self.large.contains(g))
    }

    fn in_q_x0(&self, g: &E) -> Result<bool, MgenError> {
        Ok(self.small.contains(g))
    }

    fn chi_g_x0(&self, g: &E) -> Result<[i64; 4], MgenError> {
        if !self.large.contains(g) {
            return Err(MgenError::Verify(ErrorInfo::new(
                "outside-g-x0",
                "character is only defined on G_x0",
            )));
        }
        Ok(self
            .characters
            .get(&g.order())
            .copied()
            .unwrap_or([0; 4]))
    }

    fn conjugate_involution(&self, g: &E) -> Result<(u32, E), MgenError> {
        if g.is_identity() {
            return Ok((0, g.identity()));
        }
        for (class, representative) in &self.involutions {
            if let Some(h) = self
                .ambient
                .iter()
                .find(|h| g.conjugate(h) == *representative)
            {
                return Ok((*class, h.clone()));
            }
        }
        Err(MgenError::Verify(
            ErrorInfo::new(
                "unknown-involution",
                "element is not conjugate to any class representative",
            )
            .with_context("order", g.order().to_string()),
        ))
    }
}
