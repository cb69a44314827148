//! CHTL - a compiler for an HTML-like authoring language with reusable,
//! specializable templates
//!
//! This library provides a parser, template resolver, and HTML/CSS
//! generator for CHTL source. Compilation produces plain HTML plus a
//! separate global CSS stream.
//!
//! # Example
//!
//! ```rust
//! use chtl::compile;
//!
//! let out = compile(r#"div { text { "hello" } }"#).unwrap();
//! assert!(out.html.contains("<div>"));
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod parser;
pub mod template;
pub mod value;

pub use config::{CompilerConfig, ConfigError};
pub use error::ParseError;
pub use generator::{
    generate, generate_with_scripts, CompileOutput, GenerateError, HtmlConfig, PassthroughScripts,
    ScriptCompiler, ScriptError,
};
pub use parser::{parse, Document};
pub use template::{resolve_templates, TemplateError, TemplateRegistry};
pub use value::{evaluate, CssValue, ValueError};

use thiserror::Error;

/// Errors that can occur during the compile pipeline
#[derive(Debug, Error)]
pub enum CompileError {
    /// Error during parsing
    #[error("parse errors: {}", format_parse_errors(.0))]
    Parse(Vec<ParseError>),

    /// Error during template resolution
    #[error("template error: {0}")]
    Resolve(#[from] TemplateError),

    /// Error during output generation
    #[error("generation error: {0}")]
    Generate(#[from] GenerateError),
}

impl From<Vec<ParseError>> for CompileError {
    fn from(errors: Vec<ParseError>) -> Self {
        CompileError::Parse(errors)
    }
}

fn format_parse_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Configuration for the complete compile pipeline
#[derive(Debug, Clone)]
pub struct CompileConfig {
    /// HTML output configuration
    pub html: HtmlConfig,
    /// Debug mode: dump the resolved tree to stderr
    pub debug: bool,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            html: HtmlConfig::default(),
            debug: false,
        }
    }
}

impl CompileConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTML output configuration
    pub fn with_html(mut self, html: HtmlConfig) -> Self {
        self.html = html;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Compile CHTL source to HTML and CSS with default configuration
///
/// This is the main entry point for the library. It parses the source,
/// resolves every template usage, and generates the output pair.
///
/// # Example
///
/// ```rust
/// use chtl::compile;
///
/// let out = compile(r#"
///     [Template] @Style Box { width: 100px; }
///     div {
///         style { @Style Box { width: 50%; } }
///     }
/// "#).unwrap();
///
/// assert!(out.html.contains("width:50%;"));
/// assert!(!out.html.contains("100px"));
/// ```
pub fn compile(source: &str) -> Result<CompileOutput, CompileError> {
    compile_with_config(source, &CompileConfig::default())
}

/// Compile CHTL source with custom configuration
///
/// # Example
///
/// ```rust
/// use chtl::{compile_with_config, CompileConfig, HtmlConfig};
///
/// let config = CompileConfig::new()
///     .with_html(HtmlConfig::default().with_doctype(true));
///
/// let out = compile_with_config("html { body { } }", &config).unwrap();
/// assert!(out.html.starts_with("<!DOCTYPE html>"));
/// ```
pub fn compile_with_config(
    source: &str,
    config: &CompileConfig,
) -> Result<CompileOutput, CompileError> {
    compile_with_scripts(source, config, &PassthroughScripts)
}

/// Compile CHTL source, delegating script blocks to the given compiler
pub fn compile_with_scripts(
    source: &str,
    config: &CompileConfig,
    scripts: &dyn ScriptCompiler,
) -> Result<CompileOutput, CompileError> {
    // Parse the source
    let doc = parse(source)?;

    // Resolve templates; the registry is built fresh per compilation unit
    let mut registry = TemplateRegistry::new();
    let doc = resolve_templates(doc, &mut registry)?;

    // Debug output
    if config.debug {
        fn print_node(node: &parser::Node, depth: usize) {
            let indent = "  ".repeat(depth);
            match node {
                parser::Node::Element(el) => {
                    eprintln!(
                        "{}<{}> attrs={} children={}",
                        indent,
                        el.tag,
                        el.attributes.len(),
                        el.children.len()
                    );
                    for child in &el.children {
                        print_node(&child.node, depth + 1);
                    }
                }
                parser::Node::Text(t) => eprintln!("{}text {:?}", indent, t),
                parser::Node::Style(s) => eprintln!("{}style ({} items)", indent, s.items.len()),
                parser::Node::Script(_) => eprintln!("{}script", indent),
                parser::Node::Comment(_) => eprintln!("{}comment", indent),
                _ => eprintln!("{}(template node)", indent),
            }
        }
        eprintln!("=== Resolved Tree ===");
        for node in &doc.nodes {
            print_node(&node.node, 0);
        }
        eprintln!("=====================");
    }

    // Generate output
    let output = generate_with_scripts(&doc, &config.html, scripts)?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_simple_element() {
        let out = compile(r#"div { text { "hello" } }"#).unwrap();
        assert_eq!(out.html, "<div>hello</div>");
        assert_eq!(out.css, "");
    }

    #[test]
    fn test_compile_attributes() {
        let out = compile(r#"a { href: "/home"; text { "Home" } }"#).unwrap();
        assert_eq!(out.html, r#"<a href="/home">Home</a>"#);
    }

    #[test]
    fn test_compile_template_override() {
        let out = compile(
            r#"
            [Template] @Style Box { width: 100px; }
            div {
                style { @Style Box { width: 50%; } }
            }
        "#,
        )
        .unwrap();
        assert_eq!(out.html, r#"<div style="width:50%;"></div>"#);
        assert!(!out.html.contains("100px"));
    }

    #[test]
    fn test_compile_global_and_inline_css() {
        let out = compile(
            r#"
            div {
                style {
                    width: 100px;
                    .box { color: red; }
                }
            }
        "#,
        )
        .unwrap();
        assert_eq!(out.html, r#"<div style="width:100px;"></div>"#);
        assert_eq!(out.css, ".box { color: red; }");
    }

    #[test]
    fn test_compile_arithmetic() {
        let out = compile("div { style { width: 100px + 10; } }").unwrap();
        assert_eq!(out.html, r#"<div style="width:110px;"></div>"#);
    }

    #[test]
    fn test_compile_unit_mismatch_error() {
        let result = compile("div { style { width: 100px + 10%; } }");
        assert!(matches!(result, Err(CompileError::Generate(_))));
    }

    #[test]
    fn test_compile_parse_error() {
        let result = compile("div {");
        assert!(matches!(result, Err(CompileError::Parse(_))));
    }

    #[test]
    fn test_compile_unresolved_template_error() {
        let result = compile("div { style { @Style Missing; } }");
        assert!(matches!(result, Err(CompileError::Resolve(_))));
    }

    #[test]
    fn test_compile_with_script_compiler() {
        struct Stub;
        impl ScriptCompiler for Stub {
            fn compile(&self, _source: &str) -> Result<String, ScriptError> {
                Ok("/* compiled */".to_string())
            }
        }

        let out = compile_with_scripts(
            "div { script { anything } }",
            &CompileConfig::default(),
            &Stub,
        )
        .unwrap();
        assert_eq!(out.html, "<div><script>/* compiled */</script></div>");
    }

    #[test]
    fn test_compile_void_element() {
        let out = compile(r#"img { src: "logo.png"; }"#).unwrap();
        assert_eq!(out.html, r#"<img src="logo.png" />"#);
    }

    #[test]
    fn test_compile_generator_comment() {
        let out = compile("-- top of page\ndiv { }").unwrap();
        assert_eq!(out.html, "<!-- top of page --><div></div>");
    }
}
