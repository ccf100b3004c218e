use std::fmt;

use itertools::Itertools;
use mgen_core::{ErrorInfo, GroupElement, MgenError};
use serde::{Deserialize, Serialize};

use crate::modulus::Modulus;

/// Invertible square matrix over GF(p), stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MatrixData")]
pub struct Matrix {
    modulus: Modulus,
    dim: usize,
    entries: Vec<u32>,
}

/// Unchecked serialized form of a [`Matrix`].
#[derive(Deserialize)]
struct MatrixData {
    modulus: Modulus,
    dim: usize,
    entries: Vec<u32>,
}

impl TryFrom<MatrixData> for Matrix {
    type Error = MgenError;

    fn try_from(data: MatrixData) -> Result<Self, Self::Error> {
        if data.dim == 0 || data.dim.checked_mul(data.dim) != Some(data.entries.len()) {
            return Err(MgenError::Group(
                ErrorInfo::new("bad-entry-count", "entries must fill a dim x dim matrix")
                    .with_context("dim", data.dim.to_string())
                    .with_context("entries", data.entries.len().to_string()),
            ));
        }
        if let Some(&entry) = data.entries.iter().find(|&&e| e >= data.modulus.get()) {
            return Err(MgenError::Group(
                ErrorInfo::new("entry-range", "entry is not reduced modulo p")
                    .with_context("entry", entry.to_string())
                    .with_context("modulus", data.modulus.get().to_string()),
            ));
        }
        let rows: Vec<Vec<i64>> = data
            .entries
            .chunks(data.dim)
            .map(|row| row.iter().map(|&e| i64::from(e)).collect())
            .collect();
        Matrix::from_rows(data.modulus, &rows)
    }
}

impl Matrix {
    /// Identity matrix of size `dim`.
    pub fn identity(modulus: Modulus, dim: usize) -> Self {
        let mut entries = vec![0; dim * dim];
        for i in 0..dim {
            entries[i * dim + i] = 1 % modulus.get();
        }
        Self {
            modulus,
            dim,
            entries,
        }
    }

    /// Builds a matrix from integer rows, reducing mod `p` and rejecting
    /// singular or ragged input.
    pub fn from_rows(modulus: Modulus, rows: &[Vec<i64>]) -> Result<Self, MgenError> {
        let dim = rows.len();
        if dim == 0 {
            return Err(MgenError::Group(ErrorInfo::new(
                "empty-matrix",
                "matrix must have at least one row",
            )));
        }
        let mut entries = Vec::with_capacity(dim * dim);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != dim {
                return Err(MgenError::Group(
                    ErrorInfo::new("ragged-matrix", "matrix must be square")
                        .with_context("row", index.to_string())
                        .with_context("expected", dim.to_string())
                        .with_context("found", row.len().to_string()),
                ));
            }
            entries.extend(row.iter().map(|&value| modulus.reduce(value)));
        }
        let matrix = Self {
            modulus,
            dim,
            entries,
        };
        if matrix.determinant() == 0 {
            return Err(MgenError::Group(
                ErrorInfo::new("singular-matrix", "matrix is not invertible")
                    .with_context("modulus", modulus.get().to_string()),
            ));
        }
        Ok(matrix)
    }

    /// Field of definition.
    pub fn modulus(&self) -> Modulus {
        self.modulus
    }

    /// Number of rows.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Entry at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.entries[row * self.dim + col]
    }

    /// Row-major entries.
    pub fn entries(&self) -> &[u32] {
        &self.entries
    }

    /// Rows as vectors.
    pub fn rows(&self) -> Vec<Vec<u32>> {
        self.entries.chunks(self.dim).map(<[u32]>::to_vec).collect()
    }

    /// Determinant by Gaussian elimination.
    pub fn determinant(&self) -> u32 {
        let m = self.modulus;
        let n = self.dim;
        let mut a = self.entries.clone();
        let mut det = 1u32;
        for col in 0..n {
            let Some(pivot) = (col..n).find(|&row| a[row * n + col] != 0) else {
                return 0;
            };
            if pivot != col {
                for k in 0..n {
                    a.swap(pivot * n + k, col * n + k);
                }
                det = m.neg(det);
            }
            let pivot_value = a[col * n + col];
            det = m.mul(det, pivot_value);
            let Some(pivot_inv) = m.inv(pivot_value) else {
                return 0;
            };
            for row in col + 1..n {
                let factor = m.mul(a[row * n + col], pivot_inv);
                if factor == 0 {
                    continue;
                }
                for k in col..n {
                    let delta = m.mul(factor, a[col * n + k]);
                    a[row * n + k] = m.sub(a[row * n + k], delta);
                }
            }
        }
        det
    }

    /// Multiplies every entry by `scalar`.
    pub fn scale(&self, scalar: u32) -> Self {
        Self {
            modulus: self.modulus,
            dim: self.dim,
            entries: self
                .entries
                .iter()
                .map(|&entry| self.modulus.mul(entry, scalar))
                .collect(),
        }
    }
}

impl GroupElement for Matrix {
    type Key = Vec<u32>;

    fn identity(&self) -> Self {
        Matrix::identity(self.modulus, self.dim)
    }

    fn mul(&self, rhs: &Self) -> Self {
        let m = self.modulus;
        let n = self.dim;
        let mut entries = vec![0u32; n * n];
        for i in 0..n {
            for k in 0..n {
                let lhs = self.entries[i * n + k];
                if lhs == 0 {
                    continue;
                }
                for j in 0..n {
                    let term = m.mul(lhs, rhs.entries[k * n + j]);
                    entries[i * n + j] = m.add(entries[i * n + j], term);
                }
            }
        }
        Self {
            modulus: m,
            dim: n,
            entries,
        }
    }

    /// Gauss-Jordan inverse; every constructed matrix is invertible.
    fn inverse(&self) -> Self {
        let m = self.modulus;
        let n = self.dim;
        let width = 2 * n;
        let mut aug = vec![0u32; n * width];
        for i in 0..n {
            for j in 0..n {
                aug[i * width + j] = self.entries[i * n + j];
            }
            aug[i * width + n + i] = 1 % m.get();
        }
        for col in 0..n {
            let Some(pivot) = (col..n).find(|&row| aug[row * width + col] != 0) else {
                continue;
            };
            if pivot != col {
                for k in 0..width {
                    aug.swap(pivot * width + k, col * width + k);
                }
            }
            let pivot_inv = m.inv(aug[col * width + col]).unwrap_or(0);
            for k in 0..width {
                aug[col * width + k] = m.mul(aug[col * width + k], pivot_inv);
            }
            for row in 0..n {
                if row == col {
                    continue;
                }
                let factor = aug[row * width + col];
                if factor == 0 {
                    continue;
                }
                for k in 0..width {
                    let delta = m.mul(factor, aug[col * width + k]);
                    aug[row * width + k] = m.sub(aug[row * width + k], delta);
                }
            }
        }
        let entries = (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .map(|(i, j)| aug[i * width + n + j])
            .collect();
        Self {
            modulus: m,
            dim: n,
            entries,
        }
    }

    fn canonical_key(&self) -> Self::Key {
        self.entries.clone()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self
            .entries
            .chunks(self.dim)
            .map(|row| format!("[{}]", row.iter().join(", ")))
            .join(", ");
        write!(f, "[{rows}] mod {}", self.modulus.get())
    }
}
