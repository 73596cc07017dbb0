//! Ordered token rules.
//!
//! The scanner tries [`RULES`] top to bottom at the current position and takes the first rule that matches a
//! non-empty prefix. Order is significant:
//! - the comment rule precedes identifiers, so `C` in column 1 starts a comment rather than a name;
//! - `**` precedes `*`.

use crate::lexer::TokenKind;
use f77_core::lang::conventions;
use f77_core::lang::operators::OperatorId;
use f77_core::lang::punctuation::PunctuationId;

/// How a rule recognises its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Matcher {
    /// One or more spaces or tabs.
    Whitespace,
    /// A comment marker in column 1, through the end of the line (terminator included).
    CommentLine,
    /// `\n` or `\r\n`.
    LineEnd,
    /// A fixed spelling.
    Literal(&'static str),
    /// `[0-9]+(\.[0-9]+)?`
    Number,
    /// `[A-Za-z][A-Za-z0-9_]*`
    Word,
}

/// What a matched rule contributes to the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    /// Drop the text.
    Skip,
    /// Emit one `Newline` for the whole comment line.
    Comment,
    /// Emit a `Newline`.
    LineEnd,
    /// Emit a token of this kind.
    Emit(TokenKind),
    /// Emit a keyword or identifier depending on spelling.
    Word,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Rule {
    pub matcher: Matcher,
    pub action: Action,
}

const fn emit(matcher: Matcher, kind: TokenKind) -> Rule {
    Rule {
        matcher,
        action: Action::Emit(kind),
    }
}

pub(crate) const RULES: &[Rule] = &[
    Rule {
        matcher: Matcher::Whitespace,
        action: Action::Skip,
    },
    Rule {
        matcher: Matcher::CommentLine,
        action: Action::Comment,
    },
    Rule {
        matcher: Matcher::LineEnd,
        action: Action::LineEnd,
    },
    emit(Matcher::Literal("**"), TokenKind::Operator(OperatorId::StarStar)),
    emit(Matcher::Literal("+"), TokenKind::Operator(OperatorId::Plus)),
    emit(Matcher::Literal("-"), TokenKind::Operator(OperatorId::Minus)),
    emit(Matcher::Literal("*"), TokenKind::Operator(OperatorId::Star)),
    emit(Matcher::Literal("/"), TokenKind::Operator(OperatorId::Slash)),
    emit(Matcher::Literal("="), TokenKind::Operator(OperatorId::Assign)),
    emit(Matcher::Literal(","), TokenKind::Punctuation(PunctuationId::Comma)),
    emit(Matcher::Literal("("), TokenKind::Punctuation(PunctuationId::LParen)),
    emit(Matcher::Literal(")"), TokenKind::Punctuation(PunctuationId::RParen)),
    emit(Matcher::Number, TokenKind::Number),
    Rule {
        matcher: Matcher::Word,
        action: Action::Word,
    },
];

impl Matcher {
    /// Byte length of the prefix of `rest` this matcher accepts, if any.
    ///
    /// `column` is the 1-based column of `rest`'s first character.
    pub(crate) fn match_len(&self, rest: &str, column: usize) -> Option<usize> {
        let len = match self {
            Matcher::Whitespace => rest.bytes().take_while(|b| matches!(*b, b' ' | b'\t')).count(),
            Matcher::CommentLine => {
                let starts_comment = column == 1 && rest.chars().next().is_some_and(conventions::is_comment_marker);
                if !starts_comment {
                    return None;
                }
                rest.find('\n').map_or(rest.len(), |nl| nl + 1)
            }
            Matcher::LineEnd => {
                if rest.starts_with('\n') {
                    1
                } else if rest.starts_with("\r\n") {
                    2
                } else {
                    0
                }
            }
            Matcher::Literal(spelling) => {
                if rest.starts_with(*spelling) {
                    spelling.len()
                } else {
                    0
                }
            }
            Matcher::Number => number_len(rest.as_bytes()),
            Matcher::Word => word_len(rest.as_bytes()),
        };
        (len > 0).then_some(len)
    }
}

fn digits_len(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn number_len(bytes: &[u8]) -> usize {
    let whole = digits_len(bytes);
    if whole == 0 {
        return 0;
    }
    // A fraction needs at least one digit after the dot; `3.` scans as `3` followed by `.`.
    if bytes.get(whole) == Some(&b'.') {
        let fraction = digits_len(&bytes[whole + 1..]);
        if fraction > 0 {
            return whole + 1 + fraction;
        }
    }
    whole
}

fn word_len(bytes: &[u8]) -> usize {
    match bytes.first() {
        Some(b) if b.is_ascii_alphabetic() => {
            1 + bytes[1..]
                .iter()
                .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
                .count()
        }
        _ => 0,
    }
}
