pub mod catalog;
pub mod closure;
pub mod parse;
pub mod search;
pub mod sections;
pub mod subsets;
pub mod verify;
pub mod version;
