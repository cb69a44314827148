//! Compiler configuration support
//!
//! Project-level options are loaded from a TOML file and mapped onto the
//! generator's output settings. Everything here concerns the output
//! surface only; resolution semantics are not configurable.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::generator::HtmlConfig;

/// Errors that can occur when loading or parsing configuration files
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse configuration TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Compiler configuration resolved from TOML
#[derive(Debug, Clone)]
pub struct CompilerConfig {
    /// Optional project name from the metadata section
    pub name: Option<String>,
    /// Emit a `<!DOCTYPE html>` prologue
    pub doctype: bool,
    /// Pretty-print the generated markup
    pub pretty: bool,
    /// Indent width when pretty-printing
    pub indent: usize,
}

/// TOML structure for deserializing configuration files
#[derive(Deserialize)]
struct TomlConfig {
    metadata: Option<TomlMetadata>,
    output: Option<TomlOutput>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
}

#[derive(Deserialize)]
struct TomlOutput {
    doctype: Option<bool>,
    pretty: Option<bool>,
    indent: Option<usize>,
}

/// Built-in defaults: compact output, no prologue
const DEFAULT_CONFIG: &str = r#"
[output]
doctype = false
pretty = false
indent = 2
"#;

impl CompilerConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let output = parsed.output;

        Ok(CompilerConfig {
            name: parsed.metadata.and_then(|m| m.name),
            doctype: output.as_ref().and_then(|o| o.doctype).unwrap_or(false),
            pretty: output.as_ref().and_then(|o| o.pretty).unwrap_or(false),
            indent: output.as_ref().and_then(|o| o.indent).unwrap_or(2),
        })
    }

    /// Map onto the generator's output settings
    pub fn html_config(&self) -> HtmlConfig {
        HtmlConfig::new()
            .with_doctype(self.doctype)
            .with_pretty_print(self.pretty)
            .with_indent_width(self.indent)
    }
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self::from_str(DEFAULT_CONFIG).expect("Default configuration should be valid TOML")
    }
}
