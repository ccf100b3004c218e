//! Evaluation of words into concrete group elements.

use std::collections::BTreeMap;

use mgen_core::{ErrorInfo, GroupElement, MgenError};

use crate::word::{Tag, Word};

/// Service that turns words into elements of some group.
///
/// The Monster's own multiplication lives behind this trait; the crate only
/// ships [`GeneratorTable`], which evaluates words in any [`GroupElement`]
/// implementation.
pub trait WordOracle {
    /// Element type produced by the oracle.
    type Element: GroupElement;

    /// Evaluates a parsed word.
    fn evaluate(&self, word: &Word) -> Result<Self::Element, MgenError>;

    /// Parses and evaluates the text form of a word.
    fn parse_element(&self, text: &str) -> Result<Self::Element, MgenError> {
        let word = Word::parse(text)?;
        self.evaluate(&word)
    }
}

/// Oracle binding every tag to a fixed element; `tag_v` evaluates to
/// `generator(tag)^v`.
#[derive(Debug, Clone)]
pub struct GeneratorTable<E> {
    identity: E,
    generators: BTreeMap<Tag, E>,
}

impl<E: GroupElement> GeneratorTable<E> {
    /// Creates an empty table for the group whose identity is `identity`.
    pub fn new(identity: E) -> Self {
        Self {
            identity,
            generators: BTreeMap::new(),
        }
    }

    /// Binds `tag` to `element`.
    pub fn with_generator(mut self, tag: Tag, element: E) -> Self {
        self.generators.insert(tag, element);
        self
    }

    /// Element bound to `tag`, if any.
    pub fn generator(&self, tag: Tag) -> Option<&E> {
        self.generators.get(&tag)
    }
}

impl<E: GroupElement> WordOracle for GeneratorTable<E> {
    type Element = E;

    fn evaluate(&self, word: &Word) -> Result<E, MgenError> {
        let mut acc = self.identity.clone();
        for (index, atom) in word.atoms().iter().enumerate() {
            let generator = self.generators.get(&atom.tag).ok_or_else(|| {
                MgenError::Word(
                    ErrorInfo::new(
                        "unbound-tag",
                        format!("no generator bound to tag `{}`", atom.tag),
                    )
                    .with_context("atom", index.to_string())
                    .with_hint("bind the tag with GeneratorTable::with_generator"),
                )
            })?;
            let exponent = i64::try_from(atom.value).map_err(|_| {
                MgenError::Word(ErrorInfo::new(
                    "value-range",
                    format!("exponent {} does not fit in i64", atom.value),
                ))
            })?;
            acc = acc.mul(&generator.pow(exponent));
        }
        Ok(acc)
    }
}
