//! Word atoms, tags and the `Word` type with its textual format.
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use mgen_core::{ErrorInfo, MgenError};
use serde::{Deserialize, Serialize};

/// Order of the Mathieu group M24; `p` atoms index its elements.
pub const M24_ORDER: u64 = 244_823_040;

fn word_error(code: &str, message: impl Into<String>) -> MgenError {
    MgenError::Word(ErrorInfo::new(code, message.into()))
}

/// Generator family named by an atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    /// Element of the Golay cocode (12 bits).
    D,
    /// Element of M24, given by its index.
    P,
    /// Golay code element acting as `x` (13 bits).
    X,
    /// Golay code element acting as `y` (13 bits).
    Y,
    /// Power of the triality element `l` (exponent mod 3).
    L,
    /// Power of the triality element `t` (exponent mod 3).
    T,
}

impl Tag {
    /// All tags in display order.
    pub const ALL: [Tag; 6] = [Tag::D, Tag::P, Tag::X, Tag::Y, Tag::L, Tag::T];

    /// Parses a tag letter.
    pub fn from_char(letter: char) -> Option<Self> {
        match letter {
            'd' => Some(Tag::D),
            'p' => Some(Tag::P),
            'x' => Some(Tag::X),
            'y' => Some(Tag::Y),
            'l' => Some(Tag::L),
            't' => Some(Tag::T),
            _ => None,
        }
    }

    /// Letter used in the text form.
    pub fn as_char(self) -> char {
        match self {
            Tag::D => 'd',
            Tag::P => 'p',
            Tag::X => 'x',
            Tag::Y => 'y',
            Tag::L => 'l',
            Tag::T => 't',
        }
    }

    /// Exclusive upper bound for atom values.
    pub fn limit(self) -> u64 {
        match self {
            Tag::D => 1 << 12,
            Tag::X | Tag::Y => 1 << 13,
            Tag::P => M24_ORDER,
            Tag::L | Tag::T => 3,
        }
    }

    /// Whether values are written in hexadecimal.
    pub fn hex_display(self) -> bool {
        matches!(self, Tag::D | Tag::X | Tag::Y)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Single factor `tag_value` of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Atom {
    /// Generator family.
    pub tag: Tag,
    /// Value (bit vector, index or exponent depending on the tag).
    pub value: u64,
}

impl Atom {
    /// Creates an atom after checking the value range.
    pub fn new(tag: Tag, value: u64) -> Result<Self, MgenError> {
        if value >= tag.limit() {
            return Err(MgenError::Word(
                ErrorInfo::new(
                    "value-range",
                    format!("value {value} out of range for tag `{tag}`"),
                )
                .with_context("limit", tag.limit().to_string()),
            ));
        }
        Ok(Self { tag, value })
    }

    fn parse(text: &str, index: usize) -> Result<Self, MgenError> {
        let with_index = |err: MgenError| match err {
            MgenError::Word(info) => MgenError::Word(
                info.with_context("atom", index.to_string())
                    .with_context("text", text),
            ),
            other => other,
        };
        let (tag_text, value_text) = text.split_once('_').ok_or_else(|| {
            with_index(word_error(
                "missing-separator",
                "atom must have the form `tag_value`",
            ))
        })?;
        let mut letters = tag_text.chars();
        let tag = match (letters.next(), letters.next()) {
            (Some(letter), None) => Tag::from_char(letter),
            _ => None,
        }
        .ok_or_else(|| {
            with_index(word_error(
                "unknown-tag",
                format!("unsupported generator tag `{tag_text}`"),
            ))
        })?;
        let value = parse_value(value_text).map_err(with_index)?;
        Atom::new(tag, value).map_err(with_index)
    }
}

fn parse_value(text: &str) -> Result<u64, MgenError> {
    let bad = || word_error("bad-value", format!("`{text}` is not a valid atom value"));
    if let Some(hex) = text.strip_suffix('h') {
        if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }
        u64::from_str_radix(hex, 16).map_err(|_| bad())
    } else {
        if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
            return Err(bad());
        }
        text.parse::<u64>().map_err(|_| bad())
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tag.hex_display() {
            let digits = format!("{:x}", self.value);
            let pad = if digits.starts_with(|c: char| c.is_ascii_alphabetic()) {
                "0"
            } else {
                ""
            };
            write!(f, "{}_{pad}{digits}h", self.tag)
        } else {
            write!(f, "{}_{}", self.tag, self.value)
        }
    }
}

/// Validated word in the generators `d, p, x, y, l, t`.
///
/// The text form is `M<atom*atom*...>`, with `M<1>` for the empty word.
/// Parsing followed by display reproduces the canonical text exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word {
    atoms: Vec<Atom>,
}

impl Word {
    /// The empty word `M<1>`.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Builds a word from already validated atoms.
    pub fn from_atoms(atoms: Vec<Atom>) -> Self {
        Self { atoms }
    }

    /// Parses the text form.
    pub fn parse(text: &str) -> Result<Self, MgenError> {
        let trimmed = text.trim();
        let body = trimmed
            .strip_prefix("M<")
            .and_then(|rest| rest.strip_suffix('>'))
            .ok_or_else(|| {
                MgenError::Word(
                    ErrorInfo::new("missing-frame", "word must be enclosed in `M<` and `>`")
                        .with_context("text", trimmed),
                )
            })?
            .trim();
        if body.is_empty() || body == "1" {
            return Ok(Self::identity());
        }

        let mut atoms = Vec::new();
        for (index, raw) in body.split('*').enumerate() {
            let raw = raw.trim();
            if raw.is_empty() {
                return Err(MgenError::Word(
                    ErrorInfo::new("empty-atom", "word contains an empty factor")
                        .with_context("atom", index.to_string()),
                ));
            }
            if raw == "1" {
                continue;
            }
            atoms.push(Atom::parse(raw, index)?);
        }
        Ok(Self { atoms })
    }

    /// Atoms in multiplication order.
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Number of atoms.
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Whether this is the empty word.
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Concatenation `self * other`.
    pub fn concat(&self, other: &Word) -> Word {
        let mut atoms = self.atoms.clone();
        atoms.extend_from_slice(&other.atoms);
        Word { atoms }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.atoms.is_empty() {
            return write!(f, "M<1>");
        }
        write!(f, "M<{}>", self.atoms.iter().join("*"))
    }
}

impl FromStr for Word {
    type Err = MgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Word::parse(s)
    }
}

impl TryFrom<String> for Word {
    type Error = MgenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Word::parse(&value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.to_string()
    }
}
