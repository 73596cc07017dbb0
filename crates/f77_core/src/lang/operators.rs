//! Operator vocabulary.
//!
//! This module defines the canonical operator set along with basic metadata such as precedence and
//! associativity.
//!
//! ## Notes
//! - Lookup via [`from_str`] is exact (operators are symbols, case does not apply).
//! - `=` is listed here as [`OperatorId::Assign`]; it never appears inside an expression, only in assignment and
//!   loop headers. It carries precedence `0`.
//! - `**` must be matched before `*` by any tokenizer built on this table: the spelling `**` is not two `*`.
//!
//! ## Examples
//! ```rust
//! use f77_core::lang::operators::{self, Associativity, OperatorId};
//!
//! assert_eq!(operators::from_str("**"), Some(OperatorId::StarStar));
//! assert_eq!(operators::info_for(OperatorId::StarStar).associativity, Associativity::Right);
//! assert!(operators::info_for(OperatorId::Star).precedence > operators::info_for(OperatorId::Plus).precedence);
//! ```

use super::registry::Example;

/// Define how operators associate when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
    None,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    StarStar,

    // Binding
    Assign,
}

/// Metadata for an operator.
///
/// ## Notes
/// - `precedence` is a relative ordering where higher binds tighter.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub precedence: u8,
    pub associativity: Associativity,
    pub description: &'static str,
    pub examples: &'static [Example],
}

/// Registry of all operators.
///
/// ## Notes
/// - Multi-character spellings come before their single-character prefixes.
pub const OPERATORS: &[OperatorInfo] = &[
    op(
        OperatorId::StarStar,
        "**",
        30,
        Associativity::Right,
        "Exponentiation; binds tighter than every other operator.",
        &[Example {
            code: "X = 2**3**2",
            note: Some("Parsed as 2**(3**2)."),
        }],
    ),
    op(OperatorId::Plus, "+", 10, Associativity::Left, "Addition.", &[]),
    op(
        OperatorId::Minus,
        "-",
        10,
        Associativity::Left,
        "Subtraction.",
        &[Example {
            code: "X = 1 - 2 - 3",
            note: Some("Parsed as (1 - 2) - 3."),
        }],
    ),
    op(OperatorId::Star, "*", 20, Associativity::Left, "Multiplication.", &[]),
    op(OperatorId::Slash, "/", 20, Associativity::Left, "Division.", &[]),
    op(
        OperatorId::Assign,
        "=",
        0,
        Associativity::None,
        "Binds a value to a variable in assignments and DO headers.",
        &[],
    ),
];

/// Canonical spelling for an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Full metadata for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Resolve an operator spelling to its identifier.
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`].
/// - `None` otherwise.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    spelling: &'static str,
    precedence: u8,
    associativity: Associativity,
    description: &'static str,
    examples: &'static [Example],
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        precedence,
        associativity,
        description,
        examples,
    }
}
