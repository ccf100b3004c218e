use std::error::Error;
use std::fs;
use std::path::Path;

use mgen_closure::{enumerate, stable_hash_string};
use mgen_core::GroupElement;
use mgen_groups::{group_file_from_json, LoadedGroup, NamedElements};
use mgen_verify::FiniteClassOracle;
use mgen_word::{GeneratorTable, Tag};
use serde::Deserialize;

/// Runs `$body` with `$named` bound to the elements of whichever group kind
/// `$loaded` holds.
macro_rules! with_named {
    ($loaded:expr, $named:ident => $body:expr) => {
        match $loaded {
            mgen_groups::LoadedGroup::Permutation($named) => $body,
            mgen_groups::LoadedGroup::Matrix($named) => $body,
            mgen_groups::LoadedGroup::Projective($named) => $body,
        }
    };
}
pub(crate) use with_named;

/// Built group file and the hash of its contents.
pub struct GroupInput {
    pub loaded: LoadedGroup,
    pub hash: String,
}

pub fn load_group(path: &Path) -> Result<GroupInput, Box<dyn Error>> {
    let file = group_file_from_json(&fs::read_to_string(path)?)?;
    let loaded = file.build()?;
    let hash = stable_hash_string(&file)?;
    log::info!("loaded {} group from {}", loaded.kind(), path.display());
    Ok(GroupInput { loaded, hash })
}

/// Selected names, or the declared generators when none were given.
pub fn pick<E: GroupElement>(
    named: &NamedElements<E>,
    names: &[String],
) -> Result<Vec<(String, E)>, Box<dyn Error>> {
    let names = if names.is_empty() {
        named.generator_names()
    } else {
        names.to_vec()
    };
    let mut picked = Vec::with_capacity(names.len());
    for name in names {
        let element = named.get(&name)?.clone();
        picked.push((name, element));
    }
    Ok(picked)
}

/// Binds every element whose name is a word tag letter (`d`, `p`, `x`, `y`,
/// `l`, `t`) so catalogue words can be evaluated in the group.
pub fn tag_table<E: GroupElement>(named: &NamedElements<E>) -> GeneratorTable<E> {
    let mut table = GeneratorTable::new(named.identity().clone());
    for (name, element) in named.elements() {
        let mut letters = name.chars();
        if let (Some(letter), None) = (letters.next(), letters.next()) {
            if let Some(tag) = Tag::from_char(letter) {
                table = table.with_generator(tag, element.clone());
            }
        }
    }
    table
}

#[derive(Debug, Deserialize)]
struct CharacterRow {
    order: u64,
    values: [i64; 4],
}

#[derive(Debug, Deserialize)]
struct InvolutionRow {
    class: u32,
    element: String,
}

/// Finite stand-in for the class oracle, described in YAML by element names.
#[derive(Debug, Deserialize)]
pub struct OracleFile {
    /// Generators of the ambient group; the declared generators when empty.
    #[serde(default)]
    ambient: Vec<String>,
    large: Vec<String>,
    small: Vec<String>,
    #[serde(default)]
    characters: Vec<CharacterRow>,
    #[serde(default)]
    involutions: Vec<InvolutionRow>,
}

impl OracleFile {
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        Ok(serde_yaml::from_str(&fs::read_to_string(path)?)?)
    }

    pub fn build<E: GroupElement>(
        &self,
        named: &NamedElements<E>,
    ) -> Result<FiniteClassOracle<E>, Box<dyn Error>> {
        let closure_of = |names: &[String]| -> Result<_, Box<dyn Error>> {
            let elements: Vec<E> = pick(named, names)?.into_iter().map(|(_, e)| e).collect();
            Ok(enumerate(&elements)?)
        };
        if self.large.is_empty() || self.small.is_empty() {
            return Err("oracle file needs non-empty `large` and `small` generator lists".into());
        }
        let ambient = closure_of(&self.ambient)?;
        let large = closure_of(&self.large)?;
        let small = closure_of(&self.small)?;
        log::info!(
            "class oracle over {} elements ({} large, {} small)",
            ambient.len(),
            large.len(),
            small.len()
        );
        let mut oracle = FiniteClassOracle::new(ambient, large, small);
        for row in &self.characters {
            oracle = oracle.with_character(row.order, row.values);
        }
        for row in &self.involutions {
            oracle = oracle.with_involution(row.class, named.get(&row.element)?.clone());
        }
        Ok(oracle)
    }
}
