//! Layout configuration for the AST tree printer.

/// Tree printer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    /// Number of spaces per depth level
    pub indent_width: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self { indent_width: 2 }
    }
}

impl TreeConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_indent_width() {
        assert_eq!(TreeConfig::default().indent_width, 2);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(TreeConfig::new(), TreeConfig::default());
    }

    #[test]
    fn test_with_indent_width() {
        let config = TreeConfig::new().with_indent_width(4);
        assert_eq!(config.indent_width, 4);
    }

    #[test]
    fn test_zero_indent_is_allowed() {
        let config = TreeConfig::new().with_indent_width(0);
        assert_eq!(config.indent_width, 0);
    }
}
