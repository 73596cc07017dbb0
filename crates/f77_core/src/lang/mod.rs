//! Language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords, operators,
//! punctuation, and the lexical conventions (comment marker, keyword case folding).
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings/metadata via
//! registry tables instead of comparing strings at every call site.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The scanner/parser enforce syntax; registries provide spellings and metadata for shared use (diagnostics,
//!   docs, tree printing).
//!
//! ## Examples
//! ```rust
//! use f77_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("PROGRAM"), Some(KeywordId::Program));
//! assert_eq!(keywords::as_str(KeywordId::Do), "DO");
//! ```
//!
//! ## See also
//! - `cargo run -p f77_core --bin generate_lang_reference` to generate the Markdown reference tables.

pub mod conventions;
pub mod keywords;
pub mod operators;
pub mod punctuation;
pub mod registry;
