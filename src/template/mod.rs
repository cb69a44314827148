//! Template system: registry, collection, and usage expansion
//!
//! Templates and customs are declared with `[Template]` / `[Custom]` and
//! referenced by `@Style` / `@Element` usages or `Group(key)` var
//! references. Collection walks the tree once, moving every definition
//! into a name-keyed registry; resolution then rewrites the tree until no
//! usage remains.
//!
//! # Example
//!
//! ```text
//! [Custom] @Style Box { width: 100px; }
//!
//! div {
//!     style { @Style Box { width: 50%; } }
//! }
//! ```

mod registry;
mod resolver;

pub use registry::{TemplateDefinition, TemplateError, TemplateRegistry};
pub use resolver::{resolve_templates, ResolutionContext, MAX_EXPANSION_DEPTH};
