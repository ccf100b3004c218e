use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use mgen_core::{ErrorInfo, GroupElement, MgenError};
use serde::{Deserialize, Serialize};

fn expr_error(code: &str, message: impl Into<String>, text: &str, position: usize) -> MgenError {
    MgenError::Verify(
        ErrorInfo::new(code, message.into())
            .with_context("text", text)
            .with_context("position", position.to_string()),
    )
}

/// Named elements an expression is evaluated against.
#[derive(Debug, Clone)]
pub struct Bindings<E> {
    identity: E,
    values: BTreeMap<String, E>,
}

impl<E: GroupElement> Bindings<E> {
    /// Empty bindings in the group whose identity is `identity`.
    pub fn new(identity: E) -> Self {
        Self {
            identity,
            values: BTreeMap::new(),
        }
    }

    /// Binds `name` to `value`, replacing any earlier binding.
    pub fn insert(&mut self, name: impl Into<String>, value: E) {
        self.values.insert(name.into(), value);
    }

    /// Builder form of [`Bindings::insert`].
    pub fn with(mut self, name: impl Into<String>, value: E) -> Self {
        self.insert(name, value);
        self
    }

    /// Element bound to `name`.
    pub fn get(&self, name: &str) -> Result<&E, MgenError> {
        self.values.get(name).ok_or_else(|| {
            MgenError::Verify(
                ErrorInfo::new("missing-binding", format!("no element bound to `{name}`"))
                    .with_context("known", self.values.keys().join(",")),
            )
        })
    }

    /// Identity of the group.
    pub fn identity(&self) -> &E {
        &self.identity
    }

    /// Bound names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

/// Group expression over named elements.
///
/// Text syntax: names, `1`, products `x*y`, integer powers `x^3` and
/// `x^-1`, conjugation `x^y` (meaning `y⁻¹ x y`), commutators `[x, y]`
/// (meaning `x⁻¹ y⁻¹ x y`) and parentheses. `^` binds tighter than `*` and
/// associates to the left.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Expr {
    /// The identity element.
    Identity,
    /// A bound name.
    Var(String),
    /// Ordered product of two or more factors.
    Product(Vec<Expr>),
    /// Integer power.
    Power(Box<Expr>, i64),
    /// Conjugate `base^by`.
    Conjugate(Box<Expr>, Box<Expr>),
    /// Commutator `[a, b]`.
    Commutator(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Parses the text syntax.
    pub fn parse(text: &str) -> Result<Self, MgenError> {
        let mut parser = Parser {
            text,
            bytes: text.as_bytes(),
            pos: 0,
        };
        let expr = parser.product()?;
        parser.skip_ws();
        if parser.pos != parser.bytes.len() {
            return Err(expr_error(
                "trailing-input",
                "unexpected characters after expression",
                text,
                parser.pos,
            ));
        }
        Ok(expr)
    }

    /// Shorthand for a bound name.
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(name.into())
    }

    /// `self^exp`.
    pub fn pow(self, exp: i64) -> Self {
        Expr::Power(Box::new(self), exp)
    }

    /// `self^by`.
    pub fn conj(self, by: Expr) -> Self {
        Expr::Conjugate(Box::new(self), Box::new(by))
    }

    /// `self * rhs`, flattening nested products.
    pub fn times(self, rhs: Expr) -> Self {
        let mut factors = match self {
            Expr::Product(factors) => factors,
            other => vec![other],
        };
        match rhs {
            Expr::Product(more) => factors.extend(more),
            other => factors.push(other),
        }
        Expr::Product(factors)
    }

    /// Evaluates the expression.
    pub fn evaluate<E: GroupElement>(&self, bindings: &Bindings<E>) -> Result<E, MgenError> {
        match self {
            Expr::Identity => Ok(bindings.identity().clone()),
            Expr::Var(name) => bindings.get(name).cloned(),
            Expr::Product(factors) => {
                let mut acc = bindings.identity().clone();
                for factor in factors {
                    acc = acc.mul(&factor.evaluate(bindings)?);
                }
                Ok(acc)
            }
            Expr::Power(base, exp) => Ok(base.evaluate(bindings)?.pow(*exp)),
            Expr::Conjugate(base, by) => {
                Ok(base.evaluate(bindings)?.conjugate(&by.evaluate(bindings)?))
            }
            Expr::Commutator(a, b) => {
                Ok(a.evaluate(bindings)?.commutator(&b.evaluate(bindings)?))
            }
        }
    }

    /// Names referenced by the expression, sorted and deduplicated.
    pub fn free_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        self.collect_names(&mut names);
        names.sort();
        names.dedup();
        names
    }

    fn collect_names(&self, names: &mut Vec<String>) {
        match self {
            Expr::Identity => {}
            Expr::Var(name) => names.push(name.clone()),
            Expr::Product(factors) => factors.iter().for_each(|f| f.collect_names(names)),
            Expr::Power(base, _) => base.collect_names(names),
            Expr::Conjugate(a, b) | Expr::Commutator(a, b) => {
                a.collect_names(names);
                b.collect_names(names);
            }
        }
    }

    fn is_atomic(&self) -> bool {
        matches!(self, Expr::Identity | Expr::Var(_) | Expr::Commutator(..))
    }
}

struct Parser<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn skip_ws(&mut self) {
        while self.pos < self.bytes.len() && self.bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    fn peek(&mut self) -> Option<u8> {
        self.skip_ws();
        self.bytes.get(self.pos).copied()
    }

    fn expect(&mut self, byte: u8) -> Result<(), MgenError> {
        if self.peek() == Some(byte) {
            self.pos += 1;
            Ok(())
        } else {
            Err(expr_error(
                "unexpected-token",
                format!("expected `{}`", byte as char),
                self.text,
                self.pos,
            ))
        }
    }

    fn product(&mut self) -> Result<Expr, MgenError> {
        let mut factors = vec![self.factor()?];
        while self.peek() == Some(b'*') {
            self.pos += 1;
            factors.push(self.factor()?);
        }
        Ok(if factors.len() == 1 {
            factors.remove(0)
        } else {
            Expr::Product(factors)
        })
    }

    fn factor(&mut self) -> Result<Expr, MgenError> {
        let mut base = self.primary()?;
        while self.peek() == Some(b'^') {
            self.pos += 1;
            match self.peek() {
                Some(b'-') | Some(b'0'..=b'9') => {
                    let exp = self.integer()?;
                    base = base.pow(exp);
                }
                _ => {
                    let by = self.primary()?;
                    base = base.conj(by);
                }
            }
        }
        Ok(base)
    }

    fn integer(&mut self) -> Result<i64, MgenError> {
        self.skip_ws();
        let start = self.pos;
        if self.bytes.get(self.pos) == Some(&b'-') {
            self.pos += 1;
        }
        while self.pos < self.bytes.len() && self.bytes[self.pos].is_ascii_digit() {
            self.pos += 1;
        }
        self.text[start..self.pos].parse::<i64>().map_err(|_| {
            expr_error("bad-exponent", "exponent must be an integer", self.text, start)
        })
    }

    fn primary(&mut self) -> Result<Expr, MgenError> {
        match self.peek() {
            Some(b'(') => {
                self.pos += 1;
                let inner = self.product()?;
                self.expect(b')')?;
                Ok(inner)
            }
            Some(b'[') => {
                self.pos += 1;
                let a = self.product()?;
                self.expect(b',')?;
                let b = self.product()?;
                self.expect(b']')?;
                Ok(Expr::Commutator(Box::new(a), Box::new(b)))
            }
            Some(b'1') => {
                self.pos += 1;
                if self
                    .bytes
                    .get(self.pos)
                    .is_some_and(|c| c.is_ascii_alphanumeric() || *c == b'_')
                {
                    return Err(expr_error(
                        "unexpected-token",
                        "names cannot start with a digit",
                        self.text,
                        self.pos - 1,
                    ));
                }
                Ok(Expr::Identity)
            }
            Some(c) if c.is_ascii_alphabetic() || c == b'_' => {
                let start = self.pos;
                while self.pos < self.bytes.len()
                    && (self.bytes[self.pos].is_ascii_alphanumeric() || self.bytes[self.pos] == b'_')
                {
                    self.pos += 1;
                }
                Ok(Expr::Var(self.text[start..self.pos].to_string()))
            }
            Some(_) => Err(expr_error(
                "unexpected-token",
                "expected a name, `1`, `(` or `[`",
                self.text,
                self.pos,
            )),
            None => Err(expr_error(
                "unexpected-end",
                "expression ended early",
                self.text,
                self.pos,
            )),
        }
    }
}

struct Grouped<'a>(&'a Expr);

impl fmt::Display for Grouped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_atomic() {
            write!(f, "{}", self.0)
        } else {
            write!(f, "({})", self.0)
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identity => write!(f, "1"),
            Expr::Var(name) => write!(f, "{name}"),
            Expr::Product(factors) if factors.is_empty() => write!(f, "1"),
            Expr::Product(factors) => {
                let rendered = factors
                    .iter()
                    .map(|factor| match factor {
                        Expr::Product(_) => format!("({factor})"),
                        other => other.to_string(),
                    })
                    .join("*");
                write!(f, "{rendered}")
            }
            Expr::Power(base, exp) => match base.as_ref() {
                Expr::Power(..) | Expr::Conjugate(..) => write!(f, "{base}^{exp}"),
                other => write!(f, "{}^{exp}", Grouped(other)),
            },
            Expr::Conjugate(base, by) => {
                let base_text = match base.as_ref() {
                    Expr::Power(..) | Expr::Conjugate(..) => base.to_string(),
                    other => Grouped(other).to_string(),
                };
                match by.as_ref() {
                    Expr::Var(_) | Expr::Commutator(..) => write!(f, "{base_text}^{by}"),
                    other => write!(f, "{base_text}^({other})"),
                }
            }
            Expr::Commutator(a, b) => write!(f, "[{a}, {b}]"),
        }
    }
}

impl FromStr for Expr {
    type Err = MgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expr::parse(s)
    }
}

impl TryFrom<String> for Expr {
    type Error = MgenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Expr::parse(&value)
    }
}

impl From<Expr> for String {
    fn from(expr: Expr) -> Self {
        expr.to_string()
    }
}
