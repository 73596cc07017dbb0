//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use f77_syntax::ast::Program;
use f77_syntax::lexer::{self, Token};
use miette::{Diagnostic, NamedSource, Report};
use thiserror::Error;

use super::{CliError, CliResult, ExitCode};
use crate::tree::{self, TreeConfig};

/// Maximum source file size (16 MB)
///
/// Larger files are rejected before reading.
const MAX_SOURCE_SIZE: u64 = 16 * 1024 * 1024;

/// Display name used for standard input in diagnostics.
const STDIN_NAME: &str = "<stdin>";

/// Source text together with the name it was read from.
pub struct SourceFile {
    pub name: String,
    pub text: String,
}

/// Failure to obtain source text.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("error reading {name}: {source}")]
    Io { name: String, source: io::Error },
    #[error("error reading {name}: file is {size} bytes, limit is {limit}")]
    TooLarge { name: String, size: u64, limit: u64 },
    #[error("error reading {name}: input exceeds the {limit}-byte limit")]
    StreamTooLarge { name: String, limit: u64 },
}

impl From<SourceError> for CliError {
    fn from(err: SourceError) -> Self {
        CliError::failure(err.to_string())
    }
}

/// Read `path`, or standard input when `path` is `None` or `-`.
pub fn read_source(path: Option<&Path>) -> Result<SourceFile, SourceError> {
    match path {
        Some(p) if p != Path::new("-") => {
            let name = p.display().to_string();
            let metadata = match fs::metadata(p) {
                Ok(metadata) => metadata,
                Err(source) => return Err(SourceError::Io { name, source }),
            };
            if metadata.len() > MAX_SOURCE_SIZE {
                return Err(SourceError::TooLarge {
                    name,
                    size: metadata.len(),
                    limit: MAX_SOURCE_SIZE,
                });
            }
            match fs::read_to_string(p) {
                Ok(text) => Ok(SourceFile { name, text }),
                Err(source) => Err(SourceError::Io { name, source }),
            }
        }
        _ => read_limited(io::stdin(), STDIN_NAME, MAX_SOURCE_SIZE),
    }
}

/// Read at most `limit` bytes of UTF-8 from a stream with no known length.
fn read_limited(reader: impl Read, name: &str, limit: u64) -> Result<SourceFile, SourceError> {
    let io_error = |source| SourceError::Io {
        name: name.to_string(),
        source,
    };
    let mut bytes = Vec::new();
    reader
        .take(limit.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(io_error)?;
    if bytes.len() as u64 > limit {
        return Err(SourceError::StreamTooLarge {
            name: name.to_string(),
            limit,
        });
    }
    let text = String::from_utf8(bytes).map_err(|e| io_error(io::Error::new(io::ErrorKind::InvalidData, e)))?;
    Ok(SourceFile {
        name: name.to_string(),
        text,
    })
}

/// Render a scanner or parser error against its source, with the offending span underlined.
fn report<E>(err: E, source: &SourceFile) -> CliError
where
    E: Diagnostic + Send + Sync + 'static,
{
    tracing::debug!(file = %source.name, error = %err, "syntax error");
    let report = Report::new(err).with_source_code(NamedSource::new(&source.name, source.text.clone()));
    CliError::failure(format!("{report:?}"))
}

fn parse_source(source: &SourceFile) -> CliResult<Program> {
    f77_syntax::parse(&source.text).map_err(|e| report(e, source))
}

// ============================================================================
// Output builders
// ============================================================================

/// Token dump: one `Token(KIND,'text'@line:col)` per line, ending with the `EOF` token.
pub fn token_listing(source: &SourceFile) -> CliResult<String> {
    let tokens: Vec<Token> = lexer::lex(&source.text).map_err(|e| report(e, source))?;
    let mut out = String::new();
    for token in &tokens {
        out.push_str(&token.to_string());
        out.push('\n');
    }
    Ok(out)
}

/// Indented AST outline.
pub fn tree_listing(source: &SourceFile, config: TreeConfig) -> CliResult<String> {
    let program = parse_source(source)?;
    Ok(tree::render_with_config(&program, config))
}

/// Debug representation of the AST.
pub fn ast_listing(source: &SourceFile) -> CliResult<String> {
    let program = parse_source(source)?;
    Ok(format!("{program:#?}\n"))
}

/// One-line summary for `check`.
pub fn check_summary(source: &SourceFile) -> CliResult<String> {
    let program = parse_source(source)?;
    Ok(format!(
        "ok: PROGRAM {} ({} statements)\n",
        program.name,
        program.statements.len()
    ))
}

// ============================================================================
// Commands
// ============================================================================

/// Print the indented tree.
pub fn tree_file(path: Option<&Path>, config: TreeConfig) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    print!("{}", tree_listing(&source, config)?);
    Ok(ExitCode::SUCCESS)
}

/// Print the token stream.
pub fn lex_file(path: Option<&Path>) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    print!("{}", token_listing(&source)?);
    Ok(ExitCode::SUCCESS)
}

/// Print the AST debug dump.
pub fn ast_file(path: Option<&Path>) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    print!("{}", ast_listing(&source)?);
    Ok(ExitCode::SUCCESS)
}

/// Parse only.
pub fn check_file(path: Option<&Path>) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    print!("{}", check_summary(&source)?);
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn source(text: &str) -> SourceFile {
        SourceFile {
            name: "test.f".to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_check_summary() {
        let out = check_summary(&source("PROGRAM DEMO\nINTEGER A\nA = 1\nEND\n")).unwrap();
        assert_eq!(out, "ok: PROGRAM DEMO (2 statements)\n");
    }

    #[test]
    fn test_token_listing_ends_with_eof() {
        let out = token_listing(&source("X = 1\n")).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.first(), Some(&"Token(IDENT,'X'@1:1)"));
        assert_eq!(lines.last(), Some(&"Token(EOF,''@2:1)"));
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_tree_listing() {
        let out = tree_listing(&source("PROGRAM P\nX = 2\nEND\n"), TreeConfig::default()).unwrap();
        assert_eq!(out, "Program P\n  Assign X =\n    Number 2\n");
    }

    #[test]
    fn test_ast_listing_is_debug_dump() {
        let out = ast_listing(&source("PROGRAM P\nEND\n")).unwrap();
        assert!(out.starts_with("Program {"));
        assert!(out.contains("name: \"P\""));
    }

    #[test]
    fn test_parse_error_is_failure_with_message() {
        let err = check_summary(&source("PROGRAM X\nA = \nEND\n")).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("expected a valid factor start"), "{}", err.message);
    }

    #[test]
    fn test_lexical_error_is_failure_with_message() {
        let err = token_listing(&source("X = @\n")).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("unexpected character '@'"), "{}", err.message);
    }

    #[test]
    fn test_stream_within_limit_is_read() {
        let source = read_limited(io::Cursor::new("PROGRAM P\nEND\n"), STDIN_NAME, 14).unwrap();
        assert_eq!(source.name, "<stdin>");
        assert_eq!(source.text, "PROGRAM P\nEND\n");
    }

    #[test]
    fn test_stream_over_limit_is_rejected() {
        let err = read_limited(io::Cursor::new("PROGRAM P\nEND\n"), STDIN_NAME, 13).err().unwrap();
        assert!(matches!(err, SourceError::StreamTooLarge { limit: 13, .. }));
        let err = CliError::from(err);
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert_eq!(err.message, "error reading <stdin>: input exceeds the 13-byte limit");
    }

    #[test]
    fn test_stream_with_invalid_utf8_is_io_error() {
        let err = read_limited(io::Cursor::new(vec![0xff, 0xfe]), STDIN_NAME, 16).err().unwrap();
        assert!(matches!(err, SourceError::Io { .. }));
    }

    #[test]
    fn test_missing_file_is_failure() {
        let err = read_source(Some(Path::new("definitely/not/here.f"))).err().unwrap();
        assert!(matches!(err, SourceError::Io { .. }));
        let err = CliError::from(err);
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.starts_with("error reading definitely/not/here.f"));
    }
}
