#![allow(dead_code)]

use mgen_core::MgenError;
use mgen_groups::{Modulus, Perm, ProjectiveMatrix};

pub fn perm(degree: usize, cycles: &str) -> Perm {
    Perm::parse_cycles(degree, cycles).expect("valid cycle notation")
}

pub fn pgl(p: u32, rows: &[&[i64]]) -> Result<ProjectiveMatrix, MgenError> {
    let rows: Vec<Vec<i64>> = rows.iter().map(|row| row.to_vec()).collect();
    ProjectiveMatrix::from_rows(Modulus::new(p)?, &rows)
}

/// Generators `g13, g6, i2, a12` of PGL(2,13).
pub fn pgl2_13() -> Result<Vec<ProjectiveMatrix>, MgenError> {
    Ok(vec![
        pgl(13, &[&[1, 1], &[0, 1]])?,
        pgl(13, &[&[4, 0], &[0, 1]])?,
        pgl(13, &[&[0, 1], &[1, 0]])?,
        pgl(13, &[&[1, 6], &[11, 9]])?,
    ])
}

/// Generators `x, y` of PSL(3,3).
pub fn psl3_3() -> Result<Vec<ProjectiveMatrix>, MgenError> {
    Ok(vec![
        pgl(3, &[&[1, 1, 0], &[0, 1, 0], &[0, 0, 1]])?,
        pgl(3, &[&[0, 0, 1], &[1, 0, 0], &[0, 1, 0]])?,
    ])
}
