use mgen_core::{ErrorInfo, MgenError};
use serde::{Deserialize, Serialize};

/// Prime modulus with arithmetic on residues in `0..p`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Modulus {
    p: u32,
}

impl Modulus {
    /// Validates that `p` is prime.
    pub fn new(p: u32) -> Result<Self, MgenError> {
        if !is_prime(p) {
            return Err(MgenError::Group(
                ErrorInfo::new("modulus-not-prime", format!("{p} is not a prime"))
                    .with_hint("matrix groups are only supported over prime fields"),
            ));
        }
        Ok(Self { p })
    }

    /// The prime `p`.
    pub fn get(self) -> u32 {
        self.p
    }

    /// Reduces any integer into `0..p`.
    pub fn reduce(self, value: i64) -> u32 {
        value.rem_euclid(i64::from(self.p)) as u32
    }

    /// `a + b mod p`.
    pub fn add(self, a: u32, b: u32) -> u32 {
        ((u64::from(a) + u64::from(b)) % u64::from(self.p)) as u32
    }

    /// `a - b mod p`.
    pub fn sub(self, a: u32, b: u32) -> u32 {
        self.add(a, self.neg(b))
    }

    /// `-a mod p`.
    pub fn neg(self, a: u32) -> u32 {
        if a == 0 {
            0
        } else {
            self.p - a
        }
    }

    /// `a * b mod p`.
    pub fn mul(self, a: u32, b: u32) -> u32 {
        ((u64::from(a) * u64::from(b)) % u64::from(self.p)) as u32
    }

    /// `a^exp mod p` by square-and-multiply.
    pub fn pow(self, a: u32, mut exp: u64) -> u32 {
        let mut base = a % self.p;
        let mut result = 1 % self.p;
        while exp > 0 {
            if exp & 1 == 1 {
                result = self.mul(result, base);
            }
            base = self.mul(base, base);
            exp >>= 1;
        }
        result
    }

    /// Multiplicative inverse via Fermat, `None` for zero.
    pub fn inv(self, a: u32) -> Option<u32> {
        if a % self.p == 0 {
            None
        } else {
            Some(self.pow(a, u64::from(self.p - 2)))
        }
    }
}

impl TryFrom<u32> for Modulus {
    type Error = MgenError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Modulus::new(value)
    }
}

impl From<Modulus> for u32 {
    fn from(modulus: Modulus) -> Self {
        modulus.p
    }
}

fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    let n = u64::from(n);
    let mut d = 2u64;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_composites() {
        assert!(Modulus::new(0).is_err());
        assert!(Modulus::new(1).is_err());
        assert!(Modulus::new(15).is_err());
        assert!(Modulus::new(2).is_ok());
        assert!(Modulus::new(29).is_ok());
    }

    #[test]
    fn inverse_and_negative_reduction() {
        let m = Modulus::new(13).unwrap();
        assert_eq!(m.reduce(-1), 12);
        assert_eq!(m.reduce(27), 1);
        for a in 1..13 {
            let inv = m.inv(a).unwrap();
            assert_eq!(m.mul(a, inv), 1);
        }
        assert_eq!(m.inv(0), None);
        assert_eq!(m.sub(3, 5), 11);
        assert_eq!(m.pow(2, 12), 1);
    }
}
