#![allow(dead_code)]

use mgen_closure::enumerate;
use mgen_core::MgenError;
use mgen_groups::{Modulus, Perm, ProjectiveMatrix};
use mgen_verify::{Bindings, FiniteClassOracle};

pub fn perm(cycles: &str) -> Perm {
    Perm::parse_cycles(4, cycles).expect("valid cycle notation")
}

pub fn pgl(p: u32, rows: &[&[i64]]) -> Result<ProjectiveMatrix, MgenError> {
    let rows: Vec<Vec<i64>> = rows.iter().map(|row| row.to_vec()).collect();
    ProjectiveMatrix::from_rows(Modulus::new(p)?, &rows)
}

/// S4 with a = (0 1), b = (0 1 2), c = (2 3), z = (0 1)(2 3).
pub fn s4_bindings() -> Bindings<Perm> {
    Bindings::new(Perm::identity(4))
        .with("a", perm("(0 1)"))
        .with("b", perm("(0 1 2)"))
        .with("c", perm("(2 3)"))
        .with("z", perm("(0 1)(2 3)"))
        .with("w", perm("(0 2)(1 3)"))
        .with("r", perm("(0 1 2 3)"))
}

/// S4 with A4 standing in for G_x0 and the Klein four group for Q_x0.
///
/// Characters: order 3 gives `[1, 2, 3, 4]`, order 2 gives `[5, 0, 0, 0]`.
/// Involution classes: 1 for transpositions, 2 for double transpositions.
pub fn s4_oracle() -> Result<FiniteClassOracle<Perm>, MgenError> {
    let ambient = enumerate(&[perm("(0 1)"), perm("(0 1 2 3)")])?;
    let large = enumerate(&[perm("(0 1 2)"), perm("(1 2 3)")])?;
    let small = enumerate(&[perm("(0 1)(2 3)"), perm("(0 2)(1 3)")])?;
    Ok(FiniteClassOracle::new(ambient, large, small)
        .with_character(3, [1, 2, 3, 4])
        .with_character(2, [5, 0, 0, 0])
        .with_involution(1, perm("(0 1)"))
        .with_involution(2, perm("(0 1)(2 3)")))
}

/// PGL(2,29) elements satisfying the PSL(2,29):2 presentation.
pub fn pgl2_29_bindings() -> Result<Bindings<ProjectiveMatrix>, MgenError> {
    let a = pgl(29, &[&[0, 1], &[14, 0]])?;
    let b = pgl(29, &[&[1, 1], &[0, 1]])?;
    Ok(Bindings::new(ProjectiveMatrix::identity(Modulus::new(29)?, 2))
        .with("a", a)
        .with("b", b))
}

/// `g13, g6, i2, a12` in PGL(2,13).
pub fn pgl2_13_bindings() -> Result<Bindings<ProjectiveMatrix>, MgenError> {
    Ok(Bindings::new(ProjectiveMatrix::identity(Modulus::new(13)?, 2))
        .with("g13", pgl(13, &[&[1, 1], &[0, 1]])?)
        .with("g6", pgl(13, &[&[4, 0], &[0, 1]])?)
        .with("i2", pgl(13, &[&[0, 1], &[1, 0]])?)
        .with("a12", pgl(13, &[&[1, 6], &[11, 9]])?))
}
