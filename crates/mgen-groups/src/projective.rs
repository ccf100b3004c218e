use std::fmt;

use mgen_core::{GroupElement, MgenError};
use serde::{Deserialize, Serialize};

use crate::matrix::Matrix;
use crate::modulus::Modulus;

/// Matrix modulo scalars, i.e. an element of PGL(n, p).
///
/// The stored representative always has its first non-zero entry (row-major)
/// equal to 1, so structural equality is equality in the projective group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Matrix", try_from = "Matrix")]
pub struct ProjectiveMatrix {
    matrix: Matrix,
}

impl ProjectiveMatrix {
    /// Projective image of `matrix`.
    pub fn new(matrix: Matrix) -> Self {
        Self {
            matrix: normalise(matrix),
        }
    }

    /// Builds the projective image of integer rows.
    pub fn from_rows(modulus: Modulus, rows: &[Vec<i64>]) -> Result<Self, MgenError> {
        Ok(Self::new(Matrix::from_rows(modulus, rows)?))
    }

    /// Identity of PGL(`dim`, p).
    pub fn identity(modulus: Modulus, dim: usize) -> Self {
        Self {
            matrix: Matrix::identity(modulus, dim),
        }
    }

    /// Normalised representative.
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }
}

fn normalise(matrix: Matrix) -> Matrix {
    let lead = matrix.entries().iter().copied().find(|&entry| entry != 0);
    match lead.and_then(|value| matrix.modulus().inv(value)) {
        Some(1) | None => matrix,
        Some(scalar) => matrix.scale(scalar),
    }
}

impl GroupElement for ProjectiveMatrix {
    type Key = Vec<u32>;

    fn identity(&self) -> Self {
        Self::identity(self.matrix.modulus(), self.matrix.dim())
    }

    fn mul(&self, rhs: &Self) -> Self {
        Self::new(self.matrix.mul(&rhs.matrix))
    }

    fn inverse(&self) -> Self {
        Self::new(self.matrix.inverse())
    }

    fn canonical_key(&self) -> Self::Key {
        self.matrix.canonical_key()
    }
}

impl From<ProjectiveMatrix> for Matrix {
    fn from(value: ProjectiveMatrix) -> Self {
        value.matrix
    }
}

impl TryFrom<Matrix> for ProjectiveMatrix {
    type Error = MgenError;

    fn try_from(value: Matrix) -> Result<Self, Self::Error> {
        Ok(Self::new(value))
    }
}

impl fmt::Display for ProjectiveMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.matrix)
    }
}
