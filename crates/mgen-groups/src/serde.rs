use std::collections::BTreeMap;
use std::path::Path;

use mgen_core::{ErrorInfo, GroupElement, MgenError};
use serde::{Deserialize, Serialize};

use crate::matrix::Matrix;
use crate::modulus::Modulus;
use crate::perm::Perm;
use crate::projective::ProjectiveMatrix;

/// Permutation given either in cycle notation or as an image list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PermSpec {
    /// Cycle notation, e.g. `"(0 1 2)(3 4)"`.
    Cycles(String),
    /// Image of every point.
    Images(Vec<usize>),
}

/// On-disk description of a concrete group and some named elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GroupFile {
    /// Subgroup of the symmetric group on `0..degree`.
    Permutation {
        /// Number of points.
        degree: usize,
        /// Names of the elements generating the group, in order.
        #[serde(default)]
        generators: Vec<String>,
        /// Named elements.
        elements: BTreeMap<String, PermSpec>,
    },
    /// Subgroup of GL(dimension, modulus).
    Matrix {
        /// Prime field size.
        modulus: u32,
        /// Matrix size; inferred from the first element when omitted.
        #[serde(default)]
        dimension: Option<usize>,
        /// Names of the elements generating the group, in order.
        #[serde(default)]
        generators: Vec<String>,
        /// Named elements as integer rows.
        elements: BTreeMap<String, Vec<Vec<i64>>>,
    },
    /// Subgroup of PGL(dimension, modulus).
    Projective {
        /// Prime field size.
        modulus: u32,
        /// Matrix size; inferred from the first element when omitted.
        #[serde(default)]
        dimension: Option<usize>,
        /// Names of the elements generating the group, in order.
        #[serde(default)]
        generators: Vec<String>,
        /// Named elements as integer rows.
        elements: BTreeMap<String, Vec<Vec<i64>>>,
    },
}

/// Named elements of one concrete group.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedElements<E> {
    identity: E,
    generators: Vec<String>,
    elements: BTreeMap<String, E>,
}

impl<E: GroupElement> NamedElements<E> {
    /// Identity of the group.
    pub fn identity(&self) -> &E {
        &self.identity
    }

    /// All named elements.
    pub fn elements(&self) -> &BTreeMap<String, E> {
        &self.elements
    }

    /// Element called `name`.
    pub fn get(&self, name: &str) -> Result<&E, MgenError> {
        self.elements.get(name).ok_or_else(|| {
            MgenError::Group(
                ErrorInfo::new("unknown-element", format!("no element named `{name}`"))
                    .with_context(
                        "known",
                        self.elements.keys().cloned().collect::<Vec<_>>().join(","),
                    ),
            )
        })
    }

    /// Elements called `names`, in order.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<E>, MgenError> {
        names
            .iter()
            .map(|name| self.get(name.as_ref()).cloned())
            .collect()
    }

    /// Declared generator names, or every element name when none were declared.
    pub fn generator_names(&self) -> Vec<String> {
        if self.generators.is_empty() {
            self.elements.keys().cloned().collect()
        } else {
            self.generators.clone()
        }
    }

    /// Declared generators.
    pub fn generators(&self) -> Result<Vec<E>, MgenError> {
        self.select(&self.generator_names())
    }
}

/// Group file after validation and element construction.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadedGroup {
    /// Permutation group.
    Permutation(NamedElements<Perm>),
    /// Matrix group.
    Matrix(NamedElements<Matrix>),
    /// Projective matrix group.
    Projective(NamedElements<ProjectiveMatrix>),
}

impl LoadedGroup {
    /// Kind label as written in the file.
    pub fn kind(&self) -> &'static str {
        match self {
            LoadedGroup::Permutation(_) => "permutation",
            LoadedGroup::Matrix(_) => "matrix",
            LoadedGroup::Projective(_) => "projective",
        }
    }
}

fn with_element(err: MgenError, name: &str) -> MgenError {
    match err {
        MgenError::Group(info) => MgenError::Group(info.with_context("element", name)),
        other => other,
    }
}

fn build_matrices(
    modulus: u32,
    dimension: Option<usize>,
    elements: &BTreeMap<String, Vec<Vec<i64>>>,
) -> Result<(Modulus, usize, BTreeMap<String, Matrix>), MgenError> {
    let modulus = Modulus::new(modulus)?;
    let mut built = BTreeMap::new();
    for (name, rows) in elements {
        let matrix = Matrix::from_rows(modulus, rows).map_err(|err| with_element(err, name))?;
        built.insert(name.clone(), matrix);
    }
    let dim = dimension
        .or_else(|| built.values().next().map(Matrix::dim))
        .ok_or_else(|| {
            MgenError::Group(ErrorInfo::new(
                "unknown-dimension",
                "matrix group needs a dimension or at least one element",
            ))
        })?;
    if let Some((name, matrix)) = built.iter().find(|(_, matrix)| matrix.dim() != dim) {
        return Err(MgenError::Group(
            ErrorInfo::new("dimension-mismatch", "element has the wrong size")
                .with_context("element", name.clone())
                .with_context("expected", dim.to_string())
                .with_context("found", matrix.dim().to_string()),
        ));
    }
    Ok((modulus, dim, built))
}

fn check_generators<E>(generators: &[String], elements: &BTreeMap<String, E>) -> Result<(), MgenError> {
    match generators.iter().find(|name| !elements.contains_key(*name)) {
        Some(name) => Err(MgenError::Group(
            ErrorInfo::new(
                "unknown-generator",
                format!("generator `{name}` is not a named element"),
            ),
        )),
        None => Ok(()),
    }
}

impl GroupFile {
    /// Validates the description and constructs every named element.
    pub fn build(&self) -> Result<LoadedGroup, MgenError> {
        match self {
            GroupFile::Permutation {
                degree,
                generators,
                elements,
            } => {
                let mut built = BTreeMap::new();
                for (name, spec) in elements {
                    let perm = match spec {
                        PermSpec::Cycles(text) => Perm::parse_cycles(*degree, text),
                        PermSpec::Images(images) if images.len() == *degree => {
                            Perm::from_images(images.clone())
                        }
                        PermSpec::Images(images) => Err(MgenError::Group(
                            ErrorInfo::new("degree-mismatch", "image list has the wrong length")
                                .with_context("expected", degree.to_string())
                                .with_context("found", images.len().to_string()),
                        )),
                    }
                    .map_err(|err| with_element(err, name))?;
                    built.insert(name.clone(), perm);
                }
                check_generators(generators, &built)?;
                Ok(LoadedGroup::Permutation(NamedElements {
                    identity: Perm::identity(*degree),
                    generators: generators.clone(),
                    elements: built,
                }))
            }
            GroupFile::Matrix {
                modulus,
                dimension,
                generators,
                elements,
            } => {
                let (modulus, dim, built) = build_matrices(*modulus, *dimension, elements)?;
                check_generators(generators, &built)?;
                Ok(LoadedGroup::Matrix(NamedElements {
                    identity: Matrix::identity(modulus, dim),
                    generators: generators.clone(),
                    elements: built,
                }))
            }
            GroupFile::Projective {
                modulus,
                dimension,
                generators,
                elements,
            } => {
                let (modulus, dim, built) = build_matrices(*modulus, *dimension, elements)?;
                check_generators(generators, &built)?;
                Ok(LoadedGroup::Projective(NamedElements {
                    identity: ProjectiveMatrix::identity(modulus, dim),
                    generators: generators.clone(),
                    elements: built
                        .into_iter()
                        .map(|(name, matrix)| (name, ProjectiveMatrix::new(matrix)))
                        .collect(),
                }))
            }
        }
    }
}

/// Parses a group file from JSON text.
pub fn group_file_from_json(json: &str) -> Result<GroupFile, MgenError> {
    serde_json::from_str(json)
        .map_err(|err| MgenError::Serde(ErrorInfo::new("group-file-deserialize", err.to_string())))
}

/// Serialises a group file into indented JSON.
pub fn group_file_to_json(file: &GroupFile) -> Result<String, MgenError> {
    serde_json::to_string_pretty(file)
        .map_err(|err| MgenError::Serde(ErrorInfo::new("group-file-serialize", err.to_string())))
}

/// Reads, parses and builds a group file from disk.
pub fn load_group_file(path: &Path) -> Result<LoadedGroup, MgenError> {
    let text = std::fs::read_to_string(path).map_err(|err| {
        MgenError::Serde(
            ErrorInfo::new("group-file-read", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })?;
    group_file_from_json(&text)?.build()
}
