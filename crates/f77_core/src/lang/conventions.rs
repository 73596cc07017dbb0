//! Shared lexical conventions (comment marker, keyword case folding).

/// Characters that turn a whole line into a comment when they appear in column 1.
pub const COMMENT_MARKERS: &[char] = &['C', 'c'];

/// Return `true` if `c` starts a comment line when found in column 1.
pub fn is_comment_marker(c: char) -> bool {
    COMMENT_MARKERS.contains(&c)
}

/// Fold an identifier spelling to the case used for keyword classification.
///
/// Keywords are compared in upper case; only non-keywords keep their original spelling.
pub fn fold_keyword_case(spelling: &str) -> String {
    spelling.to_ascii_uppercase()
}
