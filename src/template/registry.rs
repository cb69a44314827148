//! Template registry for storing and retrieving template definitions

use std::collections::HashMap;

use thiserror::Error;

use crate::parser::ast::{
    Document, Node, Specialization, Spanned, StyleItem, TemplateBody, TemplateDef, TemplateKind,
};

/// Errors that can occur during template collection and resolution
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Usage references a name absent from the registry
    #[error("template not found: {name}")]
    NotFound { name: String },

    /// Duplicate template definition
    #[error("duplicate template definition: {name}")]
    Duplicate { name: String },

    /// Expansion path revisits a name already on its own stack
    #[error("circular template reference detected: {chain}")]
    CircularReference { chain: String },

    /// Usage kind disagrees with the registered definition
    #[error("template {name} is {found}, used as {expected}")]
    KindMismatch {
        name: String,
        expected: TemplateKind,
        found: TemplateKind,
    },

    /// Specialization applied to a plain (non-custom) template
    #[error("template {name} is not a custom and cannot be specialized")]
    NotCustomizable { name: String },

    /// Override or delete targets a key absent from the cloned body
    #[error("no entry '{key}' in template {template}")]
    UnknownProperty { template: String, key: String },

    /// Inheritance delete targets a reference absent from the cloned body
    #[error("no inherited {kind} '{parent}' in template {template}")]
    UnknownInheritance {
        template: String,
        kind: TemplateKind,
        parent: String,
    },

    /// Var reference names a key absent from its group
    #[error("no variable '{key}' in var group {group}")]
    UnknownVariable { group: String, key: String },

    /// Expansion nesting exceeded the hard ceiling
    #[error("template expansion exceeded depth limit of {limit}")]
    DepthExceeded { limit: usize },
}

/// A stored template definition. Bodies in the registry are canonical and
/// immutable; every expansion works on a fresh clone.
#[derive(Debug, Clone)]
pub struct TemplateDefinition {
    pub name: String,
    pub kind: TemplateKind,
    pub is_custom: bool,
    pub body: TemplateBody,
}

impl TemplateDefinition {
    fn from_def(def: TemplateDef) -> Self {
        Self {
            name: def.name,
            kind: def.kind,
            is_custom: def.is_custom,
            body: def.body,
        }
    }
}

/// Registry for storing template definitions, keyed by name
#[derive(Debug, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, TemplateDefinition>,
}

impl TemplateRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template definition. Nested definitions inside the body
    /// are collected into the registry first.
    pub fn register(&mut self, mut def: TemplateDef) -> Result<(), TemplateError> {
        match &mut def.body {
            TemplateBody::Element(nodes) => self.collect_from_nodes(nodes)?,
            TemplateBody::Style(items) => self.collect_from_style_items(items)?,
            TemplateBody::Var(_) => {}
        }

        if self.templates.contains_key(&def.name) {
            return Err(TemplateError::Duplicate { name: def.name });
        }
        self.templates
            .insert(def.name.clone(), TemplateDefinition::from_def(def));
        Ok(())
    }

    /// Register a pre-built definition directly (import processors)
    pub fn register_definition(&mut self, def: TemplateDefinition) -> Result<(), TemplateError> {
        if self.templates.contains_key(&def.name) {
            return Err(TemplateError::Duplicate {
                name: def.name.clone(),
            });
        }
        self.templates.insert(def.name.clone(), def);
        Ok(())
    }

    /// Get a template by name
    pub fn get(&self, name: &str) -> Option<&TemplateDefinition> {
        self.templates.get(name)
    }

    /// Check if a template exists
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Get all template names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(|s| s.as_str())
    }

    /// Number of registered templates
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Collect every template definition from a document, removing the
    /// definition nodes from the tree. Must fully complete before any
    /// expansion step: definitions may follow their first textual use.
    pub fn collect_from_document(&mut self, doc: &mut Document) -> Result<(), TemplateError> {
        self.collect_from_nodes(&mut doc.nodes)
    }

    /// Collect definitions from a node list, recursing into element
    /// bodies, style blocks, and specialization insert bodies.
    pub fn collect_from_nodes(
        &mut self,
        nodes: &mut Vec<Spanned<Node>>,
    ) -> Result<(), TemplateError> {
        let mut i = 0;
        while i < nodes.len() {
            match &mut nodes[i].node {
                Node::TemplateDef(_) => {
                    let def = match nodes.remove(i).node {
                        Node::TemplateDef(d) => d,
                        _ => unreachable!("checked variant above"),
                    };
                    self.register(def)?;
                }
                Node::Element(el) => {
                    self.collect_from_nodes(&mut el.children)?;
                    i += 1;
                }
                Node::Style(style) => {
                    self.collect_from_style_items(&mut style.items)?;
                    i += 1;
                }
                Node::TemplateUse(usage) => {
                    for spec in &mut usage.spec {
                        if let Specialization::InsertAt { nodes, .. } = &mut spec.node {
                            self.collect_from_nodes(nodes)?;
                        }
                    }
                    i += 1;
                }
                _ => i += 1,
            }
        }
        Ok(())
    }

    fn collect_from_style_items(
        &mut self,
        items: &mut Vec<Spanned<StyleItem>>,
    ) -> Result<(), TemplateError> {
        let mut i = 0;
        while i < items.len() {
            if matches!(items[i].node, StyleItem::Def(_)) {
                let def = match items.remove(i).node {
                    StyleItem::Def(d) => d,
                    _ => unreachable!("checked variant above"),
                };
                self.register(def)?;
            } else {
                i += 1;
            }
        }
        Ok(())
    }
}
