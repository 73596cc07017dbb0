//! Shareable metadata for `f77_core::lang` registries.
//!
//! The `f77_core::lang` module is a set of **registry-first** vocabularies: keywords, operators, and
//! punctuation. This submodule provides the small, dependency-free metadata types reused across all of them.
//!
//! ## Notes
//! - These types are intentionally lightweight and `Copy`-friendly so registries can live in `const` tables.
//! - Metadata is meant for tooling/docs/diagnostics; enforcement of syntax rules still lives in the scanner/parser.

/// Describe the lifecycle status of a vocabulary item.
///
/// ## Examples
/// ```rust
/// use f77_core::lang::registry::Stability;
///
/// let s = Stability::Stable;
/// assert_eq!(format!("{s:?}"), "Stable");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    /// Recognized by the scanner, but the grammar only accepts a reduced form (e.g. `DO` without a body).
    Partial,
}

/// A small example snippet for documentation.
///
/// ## Notes
/// - `code` is the example body, in source-language syntax.
/// - `note` is an optional short explanation.
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub code: &'static str,
    pub note: Option<&'static str>,
}
