use std::fmt;

use itertools::Itertools;
use mgen_core::{ErrorInfo, GroupElement, MgenError};
use serde::{Deserialize, Serialize};

/// Permutation of `0..n` stored as its image list.
///
/// Products compose left to right: `(a * b)(x) = b(a(x))`, which matches the
/// right-action convention `x^(ab) = (x^a)^b`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Perm {
    images: Vec<usize>,
}

impl Perm {
    /// Identity permutation of degree `degree`.
    pub fn identity(degree: usize) -> Self {
        Self {
            images: (0..degree).collect(),
        }
    }

    /// Builds a permutation from its image list, checking bijectivity.
    pub fn from_images(images: Vec<usize>) -> Result<Self, MgenError> {
        let degree = images.len();
        let mut seen = vec![false; degree];
        for (point, &image) in images.iter().enumerate() {
            if image >= degree || seen[image] {
                return Err(MgenError::Group(
                    ErrorInfo::new("not-a-permutation", "image list is not a bijection")
                        .with_context("point", point.to_string())
                        .with_context("image", image.to_string()),
                ));
            }
            seen[image] = true;
        }
        Ok(Self { images })
    }

    /// Builds a permutation of degree `degree` from disjoint cycles.
    pub fn from_cycles(degree: usize, cycles: &[Vec<usize>]) -> Result<Self, MgenError> {
        let mut images: Vec<usize> = (0..degree).collect();
        let mut touched = vec![false; degree];
        for cycle in cycles {
            for &point in cycle {
                if point >= degree || touched[point] {
                    return Err(MgenError::Group(
                        ErrorInfo::new(
                            "bad-cycle",
                            "cycle point is out of range or repeated",
                        )
                        .with_context("point", point.to_string())
                        .with_context("degree", degree.to_string()),
                    ));
                }
                touched[point] = true;
            }
            for (from, to) in cycle.iter().zip(cycle.iter().cycle().skip(1)) {
                images[*from] = *to;
            }
        }
        Ok(Self { images })
    }

    /// Parses cycle notation such as `(0 1 2)(3 4)`; `()` is the identity.
    pub fn parse_cycles(degree: usize, text: &str) -> Result<Self, MgenError> {
        let bad = |reason: &str| {
            MgenError::Group(
                ErrorInfo::new("bad-cycle-notation", reason.to_string())
                    .with_context("text", text.to_string()),
            )
        };
        let mut cycles = Vec::new();
        let mut rest = text.trim();
        while !rest.is_empty() {
            let inner = rest
                .strip_prefix('(')
                .ok_or_else(|| bad("expected `(`"))?;
            let close = inner.find(')').ok_or_else(|| bad("unclosed cycle"))?;
            let points = inner[..close]
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|piece| !piece.is_empty())
                .map(|piece| piece.parse::<usize>().map_err(|_| bad("invalid point")))
                .collect::<Result<Vec<_>, _>>()?;
            if !points.is_empty() {
                cycles.push(points);
            }
            rest = inner[close + 1..].trim_start();
        }
        Self::from_cycles(degree, &cycles)
    }

    /// Number of points acted on.
    pub fn degree(&self) -> usize {
        self.images.len()
    }

    /// Image of `point`, or `None` when `point` is not below the degree.
    pub fn image(&self, point: usize) -> Option<usize> {
        self.images.get(point).copied()
    }

    /// Image list.
    pub fn images(&self) -> &[usize] {
        &self.images
    }

    /// Non-trivial cycles, each starting at its smallest point.
    pub fn cycles(&self) -> Vec<Vec<usize>> {
        let mut seen = vec![false; self.degree()];
        let mut cycles = Vec::new();
        for start in 0..self.degree() {
            if seen[start] {
                continue;
            }
            let mut cycle = vec![start];
            seen[start] = true;
            let mut next = self.images[start];
            while next != start {
                seen[next] = true;
                cycle.push(next);
                next = self.images[next];
            }
            if cycle.len() > 1 {
                cycles.push(cycle);
            }
        }
        cycles
    }
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

impl GroupElement for Perm {
    type Key = Vec<usize>;

    fn identity(&self) -> Self {
        Perm::identity(self.degree())
    }

    /// Left-to-right product.
    ///
    /// # Panics
    ///
    /// Panics when the two permutations have different degrees.
    fn mul(&self, rhs: &Self) -> Self {
        assert_eq!(
            self.degree(),
            rhs.degree(),
            "permutations of different degrees"
        );
        Self {
            images: self.images.iter().map(|&x| rhs.images[x]).collect(),
        }
    }

    fn inverse(&self) -> Self {
        let mut images = vec![0; self.degree()];
        for (point, &image) in self.images.iter().enumerate() {
            images[image] = point;
        }
        Self { images }
    }

    fn canonical_key(&self) -> Self::Key {
        self.images.clone()
    }

    fn order(&self) -> u64 {
        self.cycles()
            .iter()
            .map(|cycle| cycle.len() as u64)
            .fold(1, |acc, len| acc / gcd(acc, len) * len)
    }
}

impl fmt::Display for Perm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cycles = self.cycles();
        if cycles.is_empty() {
            return write!(f, "()");
        }
        for cycle in cycles {
            write!(f, "({})", cycle.iter().join(" "))?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<usize>> for Perm {
    type Error = MgenError;

    fn try_from(images: Vec<usize>) -> Result<Self, Self::Error> {
        Perm::from_images(images)
    }
}

impl From<Perm> for Vec<usize> {
    fn from(perm: Perm) -> Self {
        perm.images
    }
}
