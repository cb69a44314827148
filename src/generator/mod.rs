//! HTML generator for resolved documents
//!
//! This module takes a resolved AST and produces the output pair: an HTML
//! string and a separate global CSS string.

pub mod config;
pub mod html;
pub mod script;

pub use config::HtmlConfig;
pub use html::{generate, generate_with_scripts, CompileOutput, GenerateError};
pub use script::{PassthroughScripts, ScriptCompiler, ScriptError};
