//! Punctuation vocabulary.
//!
//! This module defines the canonical set of non-operator punctuation tokens used by the scanner/parser:
//! the list separator and the grouping parentheses.
//!
//! ## Examples
//! ```rust
//! use f77_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str(","), Some(PunctuationId::Comma));
//! assert_eq!(punctuation::as_str(PunctuationId::LParen), "(");
//! ```

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Parentheses.
    Delimiter,
    /// Separators like `,`.
    Separator,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    Comma,
    LParen,
    RParen,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub category: PunctuationCategory,
    pub description: &'static str,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    PunctuationInfo {
        id: PunctuationId::Comma,
        canonical: ",",
        category: PunctuationCategory::Separator,
        description: "Separates declared names and the two bounds of a DO header.",
    },
    PunctuationInfo {
        id: PunctuationId::LParen,
        canonical: "(",
        category: PunctuationCategory::Delimiter,
        description: "Opens a parenthesized sub-expression.",
    },
    PunctuationInfo {
        id: PunctuationId::RParen,
        canonical: ")",
        category: PunctuationCategory::Delimiter,
        description: "Closes a parenthesized sub-expression.",
    },
];

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for a punctuation token.
pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// Return the full metadata entry for a punctuation token.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("punctuation info missing")
}

/// Resolve a punctuation spelling to its identifier.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}
