use mgen_core::{product, GroupElement};

/// Residue modulo `n` under addition, written multiplicatively.
#[derive(Debug, Clone, PartialEq)]
struct Cyclic {
    n: u64,
    value: u64,
}

impl Cyclic {
    fn new(n: u64, value: u64) -> Self {
        Self { n, value: value % n }
    }
}

impl GroupElement for Cyclic {
    type Key = (u64, u64);

    fn identity(&self) -> Self {
        Cyclic::new(self.n, 0)
    }

    fn mul(&self, rhs: &Self) -> Self {
        Cyclic::new(self.n, self.value + rhs.value)
    }

    fn inverse(&self) -> Self {
        Cyclic::new(self.n, self.n - self.value)
    }

    fn canonical_key(&self) -> Self::Key {
        (self.n, self.value)
    }
}

#[test]
fn pow_handles_negative_and_large_exponents() {
    let g = Cyclic::new(12, 5);
    assert_eq!(g.pow(0), g.identity());
    assert_eq!(g.pow(1), g);
    assert_eq!(g.pow(-1), g.inverse());
    assert_eq!(g.pow(-3), Cyclic::new(12, 9));
    assert_eq!(g.pow(1_000_000_007), Cyclic::new(12, 7));
}

#[test]
fn order_matches_cyclic_structure() {
    assert_eq!(Cyclic::new(12, 0).order(), 1);
    assert_eq!(Cyclic::new(12, 4).order(), 3);
    assert_eq!(Cyclic::new(12, 5).order(), 12);
    assert_eq!(Cyclic::new(12, 5).order_bounded(11), None);
    assert_eq!(Cyclic::new(12, 6).order_bounded(11), Some(2));
}

#[test]
fn abelian_commutators_are_trivial() {
    let a = Cyclic::new(10, 3);
    let b = Cyclic::new(10, 7);
    assert!(a.commutator(&b).is_identity());
    assert_eq!(a.conjugate(&b), a);
    assert!(a.commutes_with(&b));
}

#[test]
fn product_folds_in_order() {
    let elements = [Cyclic::new(9, 2), Cyclic::new(9, 4), Cyclic::new(9, 5)];
    assert_eq!(product(elements.iter()), Some(Cyclic::new(9, 2)));
    let empty: [Cyclic; 0] = [];
    assert_eq!(product(empty.iter()), None);
}
