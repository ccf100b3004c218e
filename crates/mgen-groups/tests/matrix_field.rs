use mgen_core::{GroupElement, MgenError};
use mgen_groups::{DirectProduct, Matrix, Modulus, Perm, ProjectiveMatrix};

fn rows(data: &[&[i64]]) -> Vec<Vec<i64>> {
    data.iter().map(|row| row.to_vec()).collect()
}

#[test]
fn unipotent_matrix_has_order_p() -> Result<(), MgenError> {
    let f13 = Modulus::new(13)?;
    let u = Matrix::from_rows(f13, &rows(&[&[1, 1], &[0, 1]]))?;
    assert_eq!(u.order(), 13);
    assert_eq!(u.determinant(), 1);
    Ok(())
}

#[test]
fn determinant_and_inverse_agree() -> Result<(), MgenError> {
    let f13 = Modulus::new(13)?;
    let m = Matrix::from_rows(f13, &rows(&[&[1, 6], &[11, 9]]))?;
    assert_eq!(m.determinant(), 8);
    assert!(m.mul(&m.inverse()).is_identity());
    let f3 = Modulus::new(3)?;
    let s = Matrix::from_rows(f3, &rows(&[&[0, 0, 1], &[1, 0, 0], &[0, 1, 0]]))?;
    assert_eq!(s.order(), 3);
    assert!(s.inverse().mul(&s).is_identity());
    Ok(())
}

#[test]
fn entries_reduce_modulo_p() -> Result<(), MgenError> {
    let f7 = Modulus::new(7)?;
    let m = Matrix::from_rows(f7, &rows(&[&[-1, 8], &[0, 15]]))?;
    assert_eq!(m.rows(), vec![vec![6, 1], vec![0, 1]]);
    Ok(())
}

#[test]
fn bad_matrices_are_rejected() -> Result<(), MgenError> {
    let f13 = Modulus::new(13)?;
    let err = Matrix::from_rows(f13, &rows(&[&[1, 2], &[2, 4]])).unwrap_err();
    assert_eq!(err.code(), "singular-matrix");
    let err = Matrix::from_rows(f13, &rows(&[&[1, 2], &[2]])).unwrap_err();
    assert_eq!(err.code(), "ragged-matrix");
    let err = Matrix::from_rows(f13, &[]).unwrap_err();
    assert_eq!(err.code(), "empty-matrix");
    assert_eq!(Modulus::new(12).unwrap_err().code(), "modulus-not-prime");
    Ok(())
}

#[test]
fn projective_matrices_ignore_scalars() -> Result<(), MgenError> {
    let f13 = Modulus::new(13)?;
    let scalar = ProjectiveMatrix::from_rows(f13, &rows(&[&[2, 0], &[0, 2]]))?;
    assert!(scalar.is_identity());
    let m = ProjectiveMatrix::from_rows(f13, &rows(&[&[2, 4], &[6, 8]]))?;
    assert_eq!(m.matrix().rows(), vec![vec![1, 2], vec![3, 4]]);
    let a12 = ProjectiveMatrix::from_rows(f13, &rows(&[&[1, 6], &[11, 9]]))?;
    assert_eq!(a12.order(), 12);
    Ok(())
}

#[test]
fn psl3_3_generators_have_expected_orders() -> Result<(), MgenError> {
    let f3 = Modulus::new(3)?;
    let x = ProjectiveMatrix::from_rows(f3, &rows(&[&[1, 1, 0], &[0, 1, 0], &[0, 0, 1]]))?;
    let y = ProjectiveMatrix::from_rows(f3, &rows(&[&[0, 0, 1], &[1, 0, 0], &[0, 1, 0]]))?;
    assert_eq!(x.order(), 3);
    assert_eq!(y.order(), 3);
    assert_eq!(x.mul(&y).order(), 8);
    Ok(())
}

#[test]
fn direct_product_is_componentwise() -> Result<(), MgenError> {
    let f13 = Modulus::new(13)?;
    let u = ProjectiveMatrix::from_rows(f13, &rows(&[&[1, 1], &[0, 1]]))?;
    let c = Perm::parse_cycles(3, "(0 1)")?;
    let pair = DirectProduct::new(c.clone(), u.clone());
    assert_eq!(pair.order(), 26);
    assert_eq!(pair.pow(2), DirectProduct::new(c.pow(2), u.pow(2)));
    assert!(pair.mul(&pair.inverse()).is_identity());
    assert!(pair.pow(26).is_identity());
    Ok(())
}

#[test]
fn deserialized_matrices_are_validated() -> Result<(), MgenError> {
    let f13 = Modulus::new(13)?;
    let m = Matrix::from_rows(f13, &rows(&[&[1, 6], &[11, 9]]))?;
    let json = serde_json::to_string(&m).expect("serialize");
    let back: Matrix = serde_json::from_str(&json).expect("valid matrix");
    assert_eq!(back, m);

    for bad in [
        r#"{"modulus": 13, "dim": 2, "entries": [1, 2, 3]}"#,
        r#"{"modulus": 13, "dim": 0, "entries": []}"#,
        r#"{"modulus": 13, "dim": 2, "entries": [1, 13, 0, 1]}"#,
        r#"{"modulus": 13, "dim": 2, "entries": [1, 2, 2, 4]}"#,
    ] {
        assert!(serde_json::from_str::<Matrix>(bad).is_err(), "{bad}");
        assert!(serde_json::from_str::<ProjectiveMatrix>(bad).is_err(), "{bad}");
    }
    Ok(())
}
