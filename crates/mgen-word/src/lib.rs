#![deny(missing_docs)]
#![doc = "Textual word format for Monster elements, word oracles and the catalogue of word literals."]

pub mod catalog;
pub mod oracle;
pub mod word;

pub use catalog::{CatalogEntry, CATALOG};
pub use oracle::{GeneratorTable, WordOracle};
pub use word::{Atom, Tag, Word, M24_ORDER};
