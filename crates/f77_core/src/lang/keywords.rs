//! Define the reserved keyword vocabulary.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings, categories, and examples.
//!
//! ## Notes
//! - Canonical spellings are upper-case. Lookup via [`from_str`] is **ASCII case-insensitive**, so `do`, `Do`
//!   and `DO` all resolve to [`KeywordId::Do`].
//! - This registry is intentionally **pure** (no AST/IO/side effects).
//!
//! ## Examples
//! ```rust
//! use f77_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("integer"), Some(KeywordId::Integer));
//! assert_eq!(keywords::as_str(KeywordId::Integer), "INTEGER");
//! assert_eq!(keywords::from_str("COUNT"), None);
//! ```

use super::registry::{Example, Stability};

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Program structure
    Program,
    End,

    // Declarations
    Integer,
    Real,

    // Control flow
    Do,
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Structure,
    Declaration,
    ControlFlow,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub description: &'static str,
    pub stability: Stability,
    pub examples: &'static [Example],
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    KeywordInfo {
        id: KeywordId::Program,
        canonical: "PROGRAM",
        category: KeywordCategory::Structure,
        description: "Opens the main program unit and names it.",
        stability: Stability::Stable,
        examples: &[Example {
            code: "PROGRAM DEMO",
            note: None,
        }],
    },
    KeywordInfo {
        id: KeywordId::End,
        canonical: "END",
        category: KeywordCategory::Structure,
        description: "Closes the main program unit.",
        stability: Stability::Stable,
        examples: &[],
    },
    KeywordInfo {
        id: KeywordId::Integer,
        canonical: "INTEGER",
        category: KeywordCategory::Declaration,
        description: "Declares one or more integer variables.",
        stability: Stability::Stable,
        examples: &[Example {
            code: "INTEGER I, J",
            note: None,
        }],
    },
    KeywordInfo {
        id: KeywordId::Real,
        canonical: "REAL",
        category: KeywordCategory::Declaration,
        description: "Declares one or more real variables.",
        stability: Stability::Stable,
        examples: &[Example {
            code: "REAL X",
            note: None,
        }],
    },
    KeywordInfo {
        id: KeywordId::Do,
        canonical: "DO",
        category: KeywordCategory::ControlFlow,
        description: "Counted loop header over a variable between two bounds.",
        stability: Stability::Partial,
        examples: &[Example {
            code: "DO J = 1, 10",
            note: Some("Only the header is recognized; following lines are ordinary statements."),
        }],
    },
];

/// Canonical spelling for a keyword.
///
/// ## Examples
/// ```rust
/// use f77_core::lang::keywords::{self, KeywordId};
///
/// assert_eq!(keywords::as_str(KeywordId::Program), "PROGRAM");
/// ```
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Documentation category for a keyword.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling, ignoring ASCII case.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling matches a canonical keyword.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS
        .iter()
        .find(|k| k.canonical.eq_ignore_ascii_case(s))
        .map(|k| k.id)
}
