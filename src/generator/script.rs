//! Script-compiler collaborator interface
//!
//! The generator never interprets script-block text. It hands the raw
//! content to a [`ScriptCompiler`] and wraps whatever JavaScript comes
//! back in `<script>` tags. A real CHTL-JS compiler plugs in here; the
//! default passthrough emits the text unchanged.

use thiserror::Error;

/// Failure reported by a script compiler. Aborts generation; no partial
/// script output is emitted.
#[derive(Debug, Error)]
#[error("script compilation failed: {message}")]
pub struct ScriptError {
    pub message: String,
}

impl ScriptError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Compiles raw script-block text into JavaScript source
pub trait ScriptCompiler {
    fn compile(&self, source: &str) -> Result<String, ScriptError>;
}

/// Default collaborator: emits the script text unchanged
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughScripts;

impl ScriptCompiler for PassthroughScripts {
    fn compile(&self, source: &str) -> Result<String, ScriptError> {
        Ok(source.to_string())
    }
}
