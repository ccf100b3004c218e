#![deny(missing_docs)]
#![doc = "Concrete finite groups implementing `mgen_core::GroupElement`: permutations, \
matrices and projective matrices over prime fields, and direct products."]

/// Invertible matrices over prime fields.
pub mod matrix;
/// Prime-field residue arithmetic.
pub mod modulus;
/// Permutations in image-list form.
pub mod perm;
/// Direct products of two groups.
pub mod product;
/// Matrices modulo scalars.
pub mod projective;
/// JSON group files.
#[path = "serde.rs"]
pub mod serde_io;

pub use matrix::Matrix;
pub use modulus::Modulus;
pub use perm::Perm;
pub use product::DirectProduct;
pub use projective::ProjectiveMatrix;
pub use serde_io::{
    group_file_from_json, group_file_to_json, load_group_file, GroupFile, LoadedGroup,
    NamedElements, PermSpec,
};
