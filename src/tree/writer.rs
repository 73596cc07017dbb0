//! Output writer with indentation tracking

use super::config::TreeConfig;

/// Writer that tracks nesting depth and builds the rendered tree
pub struct TreeWriter {
    output: String,
    indent_level: usize,
    config: TreeConfig,
    at_line_start: bool,
}

impl TreeWriter {
    /// Create a new tree writer with the given config
    pub fn new(config: TreeConfig) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            config,
            at_line_start: true,
        }
    }

    /// Get the rendered output
    pub fn finish(self) -> String {
        self.output
    }

    /// Increase indentation level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    fn write_indent(&mut self) {
        if self.at_line_start {
            let width = self.indent_level * self.config.indent_width;
            self.output.extend(std::iter::repeat_n(' ', width));
            self.at_line_start = false;
        }
    }

    /// Write a string (with auto-indent)
    pub fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.write_indent();
        self.output.push_str(s);
    }

    /// Write a string and newline
    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    /// Write just a newline
    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }
}
