//! Configuration for HTML output

/// Configuration options for generated HTML
#[derive(Debug, Clone)]
pub struct HtmlConfig {
    /// Whether to emit a `<!DOCTYPE html>` prologue
    pub doctype: bool,

    /// Whether to format output with newlines and indentation
    pub pretty_print: bool,

    /// Indent width in spaces when pretty-printing
    pub indent_width: usize,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            doctype: false,
            pretty_print: false,
            indent_width: 2,
        }
    }
}

impl HtmlConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to emit the doctype prologue
    pub fn with_doctype(mut self, doctype: bool) -> Self {
        self.doctype = doctype;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the indent width used when pretty-printing
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }
}
