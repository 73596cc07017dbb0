//! Generate Markdown reference docs from `f77_core::lang` registries.
//!
//! This binary renders the vocabulary registries (keywords, operators, punctuation) into a single Markdown page
//! at `docs/language/reference.md`.
//!
//! ## Notes
//! - The generated file is meant to be checked into the repo and treated as a derived artifact.
//! - Do not edit the generated Markdown by hand; update the registries instead.
//!
//! ## Examples
//! Run from the workspace root:
//! ```bash
//! cargo run -p f77_core --bin generate_lang_reference
//! ```
//!
//! ## Panics
//! - If the workspace root cannot be resolved.
//! - If the output file cannot be written.

use std::fs;
use std::path::{Path, PathBuf};

use f77_core::lang::{conventions, keywords, operators, punctuation};

fn trim_trailing_newlines_to_at_most_two(out: &mut String) {
    let mut count = 0usize;
    for ch in out.chars().rev() {
        if ch == '\n' {
            count += 1;
        } else {
            break;
        }
    }
    while count > 2 {
        out.pop();
        count -= 1;
    }
}

fn start_section(out: &mut String, heading: &str) {
    trim_trailing_newlines_to_at_most_two(out);
    if !out.is_empty() && !out.ends_with("\n\n") {
        out.push_str(if out.ends_with('\n') { "\n" } else { "\n\n" });
    }
    out.push_str(heading);
    out.push_str("\n\n");
}

fn main() {
    let root = workspace_root();

    let out_dir = root.join("docs/language");
    fs::create_dir_all(&out_dir).expect("create docs/language/");

    write_language_reference(&out_dir.join("reference.md"));
}

/// Write `docs/language/reference.md`.
fn write_language_reference(path: &Path) {
    fs::write(path, render_language_reference()).expect("write reference.md");
}

fn render_language_reference() -> String {
    let mut out = String::new();
    out.push_str("# Language reference\n\n");
    out.push_str("> Generated file. Do not edit this page by hand.\n");
    out.push_str("> Regenerate with: `cargo run -p f77_core --bin generate_lang_reference`\n\n");

    out.push_str("## Contents\n\n");
    out.push_str("- [Lexical conventions](#lexical-conventions)\n");
    out.push_str("- [Keywords](#keywords)\n");
    out.push_str("- [Operators](#operators)\n");
    out.push_str("- [Punctuation](#punctuation)\n");

    render_conventions_section(&mut out);
    render_keywords_section(&mut out);
    render_operators_section(&mut out);
    render_punctuation_section(&mut out);

    trim_trailing_newlines_to_at_most_two(&mut out);
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn render_conventions_section(out: &mut String) {
    start_section(out, "## Lexical conventions");

    let markers = conventions::COMMENT_MARKERS
        .iter()
        .map(|c| format!("`{c}`"))
        .collect::<Vec<_>>()
        .join(", ");
    out.push_str(&format!(
        "- A line whose first column holds one of {markers} is a comment; the whole line counts as one line end.\n"
    ));
    out.push_str("- Keywords are case-insensitive. Other identifiers keep their spelling.\n");
    out.push_str("- Numeric literals are digits with an optional fraction (`3`, `3.5`); no sign, no exponent.\n");
}

fn render_keywords_section(out: &mut String) {
    start_section(out, "## Keywords");

    out.push_str("| Id | Canonical | Category | Stability | Description |\n");
    out.push_str("|----|---|---|---|---|\n");

    for k in keywords::KEYWORDS {
        out.push_str(&format!(
            "| {:?} | `{}` | {:?} | {:?} | {} |\n",
            k.id, k.canonical, k.category, k.stability, k.description
        ));
    }
    out.push('\n');

    out.push_str("### Examples\n\n");
    out.push_str("Only keywords with examples are listed here.\n\n");
    for k in keywords::KEYWORDS.iter().filter(|k| !k.examples.is_empty()) {
        out.push_str(&format!("#### `{}`\n\n", k.canonical));
        for ex in k.examples {
            out.push_str("```fortran\n");
            out.push_str(ex.code);
            out.push_str("\n```\n\n");
            if let Some(note) = ex.note {
                out.push_str(note);
                out.push_str("\n\n");
            }
        }
    }
}

fn render_operators_section(out: &mut String) {
    start_section(out, "## Operators");

    out.push_str("| Id | Spelling | Precedence | Associativity | Description |\n");
    out.push_str("|---|---|---|---|---|\n");

    let mut ops: Vec<_> = operators::OPERATORS.iter().collect();
    ops.sort_by(|a, b| b.precedence.cmp(&a.precedence));
    for o in ops {
        out.push_str(&format!(
            "| {:?} | `{}` | {} | {:?} | {} |\n",
            o.id, o.spelling, o.precedence, o.associativity, o.description
        ));
    }
    out.push('\n');
}

fn render_punctuation_section(out: &mut String) {
    start_section(out, "## Punctuation");

    out.push_str("| Id | Canonical | Category | Description |\n");
    out.push_str("|---|---|---|---|\n");

    for p in punctuation::PUNCTUATION {
        out.push_str(&format!(
            "| {:?} | `{}` | {:?} | {} |\n",
            p.id, p.canonical, p.category, p.description
        ));
    }
    out.push('\n');
}

fn workspace_root() -> PathBuf {
    // crates/f77_core -> crates -> workspace root
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .map(|p| p.to_path_buf())
        .expect("workspace root (two levels above crates/f77_core)")
}
