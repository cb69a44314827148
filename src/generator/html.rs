//! HTML and CSS generation from a resolved document
//!
//! Walks the resolved tree and produces two strings: the markup and the
//! global CSS stream. Bare style properties become the element's inline
//! `style` attribute; selector-qualified rules are appended to the global
//! accumulator in document order, never inlined, never deduplicated.

use thiserror::Error;

use crate::parser::ast::{is_void_tag, Document, Element, Node, StyleItem, StyleRule};
use crate::value::{evaluate, ValueError};

use super::config::HtmlConfig;
use super::script::{PassthroughScripts, ScriptCompiler, ScriptError};

/// The generator's result: markup plus the global CSS stream. Persisting
/// either to disk is the caller's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct CompileOutput {
    pub html: String,
    pub css: String,
}

/// Errors that can occur while generating output
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A style property's value failed to evaluate
    #[error("invalid value for property '{property}' on <{element}>: {source}")]
    StyleValue {
        element: String,
        property: String,
        #[source]
        source: ValueError,
    },

    /// A rule property's value failed to evaluate
    #[error("invalid value for property '{property}' in rule '{selector}': {source}")]
    RuleValue {
        selector: String,
        property: String,
        #[source]
        source: ValueError,
    },

    /// An attribute value failed to evaluate
    #[error("invalid value for attribute '{attribute}' on <{element}>: {source}")]
    AttributeValue {
        element: String,
        attribute: String,
        #[source]
        source: ValueError,
    },

    /// A template usage survived resolution - a resolver bug, never
    /// recoverable
    #[error("internal error: unexpanded template usage '{name}' reached the generator")]
    UnexpandedTemplate { name: String },

    /// The script collaborator reported a failure
    #[error(transparent)]
    Script(#[from] ScriptError),
}

/// Build HTML incrementally with an accompanying global CSS accumulator
pub struct HtmlBuilder {
    config: HtmlConfig,
    html: String,
    css: Vec<String>,
    indent: usize,
}

impl HtmlBuilder {
    pub fn new(config: HtmlConfig) -> Self {
        Self {
            config,
            html: String::new(),
            css: vec![],
            indent: 0,
        }
    }

    fn push_line(&mut self, line: &str) {
        if self.config.pretty_print {
            for _ in 0..self.indent * self.config.indent_width {
                self.html.push(' ');
            }
            self.html.push_str(line);
            self.html.push('\n');
        } else {
            self.html.push_str(line);
        }
    }

    fn push_css(&mut self, block: String) {
        self.css.push(block);
    }

    fn build(self) -> CompileOutput {
        CompileOutput {
            html: self.html,
            css: self.css.join("\n\n"),
        }
    }
}

/// Generate HTML and CSS from a resolved document with the passthrough
/// script compiler
pub fn generate(doc: &Document, config: &HtmlConfig) -> Result<CompileOutput, GenerateError> {
    generate_with_scripts(doc, config, &PassthroughScripts)
}

/// Generate HTML and CSS, delegating script blocks to the given compiler
///
/// Precondition: the document holds no template usage (resolver
/// postcondition); violation is reported as an internal invariant error.
pub fn generate_with_scripts(
    doc: &Document,
    config: &HtmlConfig,
    scripts: &dyn ScriptCompiler,
) -> Result<CompileOutput, GenerateError> {
    let mut builder = HtmlBuilder::new(config.clone());

    if config.doctype {
        builder.push_line("<!DOCTYPE html>");
    }

    for node in &doc.nodes {
        render_node(&node.node, &mut builder, scripts)?;
    }

    Ok(builder.build())
}

fn render_node(
    node: &Node,
    builder: &mut HtmlBuilder,
    scripts: &dyn ScriptCompiler,
) -> Result<(), GenerateError> {
    match node {
        Node::Element(el) => render_element(el, builder, scripts),
        Node::Text(text) => {
            builder.push_line(&escape_html(text));
            Ok(())
        }
        Node::Comment(comment) => {
            if comment.emit {
                builder.push_line(&format!("<!-- {} -->", comment.text));
            }
            Ok(())
        }
        Node::Script(script) => {
            let js = scripts.compile(&script.source)?;
            builder.push_line(&format!("<script>{}</script>", js));
            Ok(())
        }
        // A style block without a host element contributes only its rules
        Node::Style(style) => {
            for item in &style.items {
                match &item.node {
                    StyleItem::Rule(rule) => render_rule(rule, builder)?,
                    StyleItem::Use(u) => {
                        return Err(GenerateError::UnexpandedTemplate {
                            name: u.name.clone(),
                        })
                    }
                    _ => {}
                }
            }
            Ok(())
        }
        // Definitions are declarations, never rendered
        Node::TemplateDef(_) => Ok(()),
        Node::TemplateUse(u) => Err(GenerateError::UnexpandedTemplate {
            name: u.name.clone(),
        }),
    }
}

fn render_element(
    el: &Element,
    builder: &mut HtmlBuilder,
    scripts: &dyn ScriptCompiler,
) -> Result<(), GenerateError> {
    // Attributes render in insertion order, values via the evaluator
    let mut attrs = String::new();
    for attr in &el.attributes {
        let value =
            evaluate(&attr.node.value).map_err(|source| GenerateError::AttributeValue {
                element: el.tag.clone(),
                attribute: attr.node.key.clone(),
                source,
            })?;
        attrs.push_str(&format!(
            r#" {}="{}""#,
            attr.node.key,
            escape_attr(&value.render())
        ));
    }

    // Direct style children split into inline fragments and global rules
    let mut inline = String::new();
    for child in &el.children {
        if let Node::Style(style) = &child.node {
            for item in &style.items {
                match &item.node {
                    StyleItem::Property(prop) => {
                        let value =
                            evaluate(&prop.value).map_err(|source| GenerateError::StyleValue {
                                element: el.tag.clone(),
                                property: prop.key.clone(),
                                source,
                            })?;
                        inline.push_str(&format!("{}:{};", prop.key, value.render()));
                    }
                    StyleItem::Rule(rule) => render_rule(rule, builder)?,
                    StyleItem::Use(u) => {
                        return Err(GenerateError::UnexpandedTemplate {
                            name: u.name.clone(),
                        })
                    }
                    StyleItem::Def(_) => {}
                }
            }
        }
    }
    if !inline.is_empty() {
        attrs.push_str(&format!(r#" style="{}""#, escape_attr(&inline)));
    }

    if is_void_tag(&el.tag) {
        // Void elements never render children or a closing tag; any
        // source-supplied children are dropped
        builder.push_line(&format!("<{}{} />", el.tag, attrs));
        return Ok(());
    }

    let renderable: Vec<&Node> = el
        .children
        .iter()
        .map(|c| &c.node)
        .filter(|n| !matches!(n, Node::Style(_)))
        .collect();

    if renderable.is_empty() {
        builder.push_line(&format!("<{}{}></{}>", el.tag, attrs, el.tag));
        return Ok(());
    }

    builder.push_line(&format!("<{}{}>", el.tag, attrs));
    builder.indent += 1;
    for child in renderable {
        render_node(child, builder, scripts)?;
    }
    builder.indent -= 1;
    builder.push_line(&format!("</{}>", el.tag));
    Ok(())
}

/// Append one selector-qualified rule to the global CSS stream
fn render_rule(rule: &StyleRule, builder: &mut HtmlBuilder) -> Result<(), GenerateError> {
    let mut props = String::new();
    for prop in &rule.properties {
        let value = evaluate(&prop.node.value).map_err(|source| GenerateError::RuleValue {
            selector: rule.selector.clone(),
            property: prop.node.key.clone(),
            source,
        })?;
        props.push_str(&format!(" {}: {};", prop.node.key, value.render()));
    }
    builder.push_css(format!("{} {{{} }}", rule.selector, props));
    Ok(())
}

/// Escape special characters in text content
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape special characters in attribute values
fn escape_attr(s: &str) -> String {
    escape_html(s).replace('"', "&quot;")
}
