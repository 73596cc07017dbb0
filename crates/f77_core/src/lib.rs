//! Provide the canonical language vocabulary for the reduced FORTRAN 77 dialect understood by `f77parse`.
//!
//! This crate is intentionally small and dependency-free. It is shared by:
//! - the scanner, which classifies identifiers against the keyword registry, and
//! - the tree printer and reference generator, which need canonical spellings.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no AST types.
//! - Syntax rules (what may appear where) live in `f77_syntax`; registries only describe spellings and metadata.

pub mod lang;
