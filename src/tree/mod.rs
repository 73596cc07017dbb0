//! Indented tree rendering of a parsed program.
//!
//! The layout is one node per line, children indented under their parent:
//!
//! ```text
//! Program DEMO
//!   Decl INTEGER: A, B
//!   Assign A =
//!     Number 3
//! ```

mod config;
mod printer;
mod writer;

pub use config::TreeConfig;
pub use printer::TreePrinter;
pub use writer::TreeWriter;

use f77_syntax::ast::Program;
use f77_syntax::diagnostics::SyntaxError;

/// Render `program` with default settings
pub fn render(program: &Program) -> String {
    render_with_config(program, TreeConfig::default())
}

/// Render `program` with custom configuration
pub fn render_with_config(program: &Program, config: TreeConfig) -> String {
    TreePrinter::new(config).print(program)
}

/// Parse `source` and render the resulting tree.
///
/// ## Errors
/// Returns the scanner or parser error unchanged.
pub fn render_source(source: &str, config: TreeConfig) -> Result<String, SyntaxError> {
    let program = f77_syntax::parse(source)?;
    Ok(render_with_config(&program, config))
}
