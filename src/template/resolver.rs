//! Template resolution - expands template and custom usages into concrete
//! nodes
//!
//! Expansion is a fixpoint tree rewrite: after `resolve_templates` returns,
//! the document contains no `TemplateUse` node and no unresolved var
//! reference. Every expansion works on a deep clone of the registry's
//! canonical body, so specializing one usage can never leak into another.

use crate::parser::ast::{
    Document, Expr, Node, Specialization, Spanned, StyleItem, TemplateBody, TemplateKind,
    TemplateUse,
};

use super::registry::{TemplateError, TemplateRegistry};

/// Hard ceiling on expansion nesting, guarding legitimate-but-pathological
/// depth on top of cycle detection
pub const MAX_EXPANSION_DEPTH: usize = 64;

/// Per-run expansion state: the visited-name stack for one expansion path
#[derive(Debug, Default)]
pub struct ResolutionContext {
    stack: Vec<String>,
}

impl ResolutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a template is currently being expanded on this path
    pub fn is_resolving(&self, name: &str) -> bool {
        self.stack.iter().any(|n| n == name)
    }

    /// The expansion path, ending at `name`, for cycle diagnostics
    fn chain_with(&self, name: &str) -> String {
        let mut parts: Vec<&str> = self.stack.iter().map(|s| s.as_str()).collect();
        parts.push(name);
        parts.join(" -> ")
    }

    fn start(&mut self, name: &str) -> Result<(), TemplateError> {
        if self.stack.len() >= MAX_EXPANSION_DEPTH {
            return Err(TemplateError::DepthExceeded {
                limit: MAX_EXPANSION_DEPTH,
            });
        }
        self.stack.push(name.to_string());
        Ok(())
    }

    fn finish(&mut self) {
        self.stack.pop();
    }
}

/// Resolve all template usages in a document
///
/// This function:
/// 1. Collects every template definition into the registry and strips the
///    definition nodes from the tree
/// 2. Expands each usage into a specialized clone of the referenced body,
///    splicing the result flat at the usage's position
/// 3. Substitutes var-group references in every value expression
pub fn resolve_templates(
    mut doc: Document,
    registry: &mut TemplateRegistry,
) -> Result<Document, TemplateError> {
    // First pass: the registry must be complete before any expansion,
    // since templates may be defined after their first textual use
    registry.collect_from_document(&mut doc)?;

    // Second pass: expand usages and resolve value expressions
    let mut ctx = ResolutionContext::new();
    let nodes = expand_nodes(doc.nodes, registry, &mut ctx)?;

    Ok(Document { nodes })
}

/// Expand a node list, splicing usage expansions flat at their position
fn expand_nodes(
    nodes: Vec<Spanned<Node>>,
    registry: &TemplateRegistry,
    ctx: &mut ResolutionContext,
) -> Result<Vec<Spanned<Node>>, TemplateError> {
    let mut out = Vec::with_capacity(nodes.len());
    for spanned in nodes {
        let span = spanned.span;
        match spanned.node {
            Node::TemplateUse(usage) => {
                let expanded = expand_element_use(&usage, &span, registry, ctx)?;
                out.extend(expanded);
            }
            Node::Element(mut el) => {
                for attr in &mut el.attributes {
                    let value = std::mem::replace(&mut attr.node.value, Expr::Literal(String::new()));
                    attr.node.value = resolve_expr(value, registry, ctx)?;
                }
                el.children = expand_nodes(el.children, registry, ctx)?;
                out.push(Spanned::new(Node::Element(el), span));
            }
            Node::Style(style) => {
                let items = expand_style_items(style.items, registry, ctx)?;
                out.push(Spanned::new(
                    Node::Style(crate::parser::ast::StyleBlock { items }),
                    span,
                ));
            }
            // Definitions were consumed by the collector; any stragglers
            // (from pre-populated registries) are declarations, not content
            Node::TemplateDef(_) => {}
            other => out.push(Spanned::new(other, span)),
        }
    }
    Ok(out)
}

/// Expand a style-block item list
fn expand_style_items(
    items: Vec<Spanned<StyleItem>>,
    registry: &TemplateRegistry,
    ctx: &mut ResolutionContext,
) -> Result<Vec<Spanned<StyleItem>>, TemplateError> {
    let mut out = Vec::with_capacity(items.len());
    for spanned in items {
        let span = spanned.span;
        match spanned.node {
            StyleItem::Use(usage) => {
                let expanded = expand_style_use(&usage, &span, registry, ctx)?;
                out.extend(expanded);
            }
            StyleItem::Property(mut prop) => {
                prop.value = resolve_expr(prop.value, registry, ctx)?;
                out.push(Spanned::new(StyleItem::Property(prop), span));
            }
            StyleItem::Rule(mut rule) => {
                for prop in &mut rule.properties {
                    let value =
                        std::mem::replace(&mut prop.node.value, Expr::Literal(String::new()));
                    prop.node.value = resolve_expr(value, registry, ctx)?;
                }
                out.push(Spanned::new(StyleItem::Rule(rule), span));
            }
            StyleItem::Def(_) => {}
        }
    }
    Ok(out)
}

/// Expand an element-kind usage into a specialized clone of its body
fn expand_element_use(
    usage: &TemplateUse,
    span: &std::ops::Range<usize>,
    registry: &TemplateRegistry,
    ctx: &mut ResolutionContext,
) -> Result<Vec<Spanned<Node>>, TemplateError> {
    if ctx.is_resolving(&usage.name) {
        return Err(TemplateError::CircularReference {
            chain: ctx.chain_with(&usage.name),
        });
    }

    let def = registry
        .get(&usage.name)
        .ok_or_else(|| TemplateError::NotFound {
            name: usage.name.clone(),
        })?;

    let mut body = match (&def.kind, &def.body) {
        (TemplateKind::Element, TemplateBody::Element(body)) => body.clone(),
        _ => {
            return Err(TemplateError::KindMismatch {
                name: usage.name.clone(),
                expected: usage.kind,
                found: def.kind,
            })
        }
    };

    check_custom_ops(usage, def.is_custom)?;
    apply_element_spec(&mut body, &usage.spec, &usage.name, span)?;

    ctx.start(&usage.name)?;
    let expanded = expand_nodes(body, registry, ctx);
    ctx.finish();
    expanded
}

/// Expand a style-kind usage into a specialized clone of its body
fn expand_style_use(
    usage: &TemplateUse,
    _span: &std::ops::Range<usize>,
    registry: &TemplateRegistry,
    ctx: &mut ResolutionContext,
) -> Result<Vec<Spanned<StyleItem>>, TemplateError> {
    if ctx.is_resolving(&usage.name) {
        return Err(TemplateError::CircularReference {
            chain: ctx.chain_with(&usage.name),
        });
    }

    let def = registry
        .get(&usage.name)
        .ok_or_else(|| TemplateError::NotFound {
            name: usage.name.clone(),
        })?;

    let mut body = match (&def.kind, &def.body) {
        (TemplateKind::Style, TemplateBody::Style(body)) => body.clone(),
        _ => {
            return Err(TemplateError::KindMismatch {
                name: usage.name.clone(),
                expected: usage.kind,
                found: def.kind,
            })
        }
    };

    check_custom_ops(usage, def.is_custom)?;
    apply_style_spec(&mut body, &usage.spec, &usage.name)?;

    ctx.start(&usage.name)?;
    let expanded = expand_style_items(body, registry, ctx);
    ctx.finish();
    expanded
}

/// Value overrides work on any template (a re-declaration at the point of
/// use); the structural operations - delete, inheritance delete, insert -
/// require a `[Custom]` definition
fn check_custom_ops(usage: &TemplateUse, is_custom: bool) -> Result<(), TemplateError> {
    if is_custom {
        return Ok(());
    }
    let structural = usage
        .spec
        .iter()
        .any(|s| !matches!(s.node, Specialization::Override { .. }));
    if structural {
        return Err(TemplateError::NotCustomizable {
            name: usage.name.clone(),
        });
    }
    Ok(())
}

/// Apply specialization to a cloned style body: deletions first, then
/// overrides, then insertions. Specialization sees the clone as written,
/// before nested inheritance expands.
fn apply_style_spec(
    body: &mut Vec<Spanned<StyleItem>>,
    spec: &[Spanned<Specialization>],
    template: &str,
) -> Result<(), TemplateError> {
    for s in spec {
        match &s.node {
            Specialization::Delete { key } => {
                let pos = body.iter().position(
                    |item| matches!(&item.node, StyleItem::Property(p) if p.key == *key),
                );
                match pos {
                    Some(i) => {
                        body.remove(i);
                    }
                    None => {
                        return Err(TemplateError::UnknownProperty {
                            template: template.to_string(),
                            key: key.clone(),
                        })
                    }
                }
            }
            Specialization::DeleteInheritance { kind, name } => {
                delete_inheritance_from_style(body, *kind, name, template)?;
            }
            _ => {}
        }
    }

    for s in spec {
        if let Specialization::Override { key, value } = &s.node {
            let entry = body.iter_mut().find_map(|item| match &mut item.node {
                StyleItem::Property(p) if p.key == *key => Some(p),
                _ => None,
            });
            match entry {
                Some(p) => p.value = value.clone(),
                None => {
                    return Err(TemplateError::UnknownProperty {
                        template: template.to_string(),
                        key: key.clone(),
                    })
                }
            }
        }
    }

    // Positional insertion is an element-body operation; the grammar does
    // not produce it for style usages
    Ok(())
}

fn delete_inheritance_from_style(
    body: &mut Vec<Spanned<StyleItem>>,
    kind: TemplateKind,
    name: &str,
    template: &str,
) -> Result<(), TemplateError> {
    let pos = body.iter().position(
        |item| matches!(&item.node, StyleItem::Use(u) if u.kind == kind && u.name == name),
    );
    match pos {
        Some(i) => {
            body.remove(i);
            Ok(())
        }
        None => Err(TemplateError::UnknownInheritance {
            template: template.to_string(),
            kind,
            parent: name.to_string(),
        }),
    }
}

/// Apply specialization to a cloned element body: deletions first, then
/// insertions (indices clamped to the current length)
fn apply_element_spec(
    body: &mut Vec<Spanned<Node>>,
    spec: &[Spanned<Specialization>],
    template: &str,
    span: &std::ops::Range<usize>,
) -> Result<(), TemplateError> {
    for s in spec {
        match &s.node {
            Specialization::Delete { key } => {
                let pos = body.iter().position(
                    |node| matches!(&node.node, Node::Element(el) if el.tag == *key),
                );
                match pos {
                    Some(i) => {
                        body.remove(i);
                    }
                    None => {
                        return Err(TemplateError::UnknownProperty {
                            template: template.to_string(),
                            key: key.clone(),
                        })
                    }
                }
            }
            Specialization::DeleteInheritance { kind, name } => {
                let pos = body.iter().position(
                    |node| matches!(&node.node, Node::TemplateUse(u) if u.kind == *kind && u.name == *name),
                );
                match pos {
                    Some(i) => {
                        body.remove(i);
                    }
                    None => {
                        return Err(TemplateError::UnknownInheritance {
                            template: template.to_string(),
                            kind: *kind,
                            parent: name.clone(),
                        })
                    }
                }
            }
            // Overrides are keyed-body operations; the grammar does not
            // produce them for element usages
            Specialization::Override { key, .. } => {
                return Err(TemplateError::UnknownProperty {
                    template: template.to_string(),
                    key: key.clone(),
                })
            }
            Specialization::InsertAt { .. } => {}
        }
    }

    for s in spec {
        if let Specialization::InsertAt { index, nodes } = &s.node {
            let at = (*index).min(body.len());
            for (offset, node) in nodes.iter().enumerate() {
                body.insert(at + offset, Spanned::new(node.node.clone(), span.clone()));
            }
        }
    }

    Ok(())
}

/// Substitute var-group references in a value expression
fn resolve_expr(
    expr: Expr,
    registry: &TemplateRegistry,
    ctx: &mut ResolutionContext,
) -> Result<Expr, TemplateError> {
    match expr {
        Expr::Var { group, key } => {
            if ctx.is_resolving(&group) {
                return Err(TemplateError::CircularReference {
                    chain: ctx.chain_with(&group),
                });
            }

            let def = registry.get(&group).ok_or_else(|| TemplateError::NotFound {
                name: group.clone(),
            })?;

            let bindings = match (&def.kind, &def.body) {
                (TemplateKind::Var, TemplateBody::Var(bindings)) => bindings,
                _ => {
                    return Err(TemplateError::KindMismatch {
                        name: group.clone(),
                        expected: TemplateKind::Var,
                        found: def.kind,
                    })
                }
            };

            let binding = bindings
                .iter()
                .find(|b| b.key == key)
                .ok_or_else(|| TemplateError::UnknownVariable {
                    group: group.clone(),
                    key: key.clone(),
                })?;

            // Var values may themselves reference var groups
            ctx.start(&group)?;
            let resolved = resolve_expr(binding.value.clone(), registry, ctx);
            ctx.finish();
            resolved
        }
        Expr::Binary { left, op, right } => Ok(Expr::Binary {
            left: Box::new(resolve_expr(*left, registry, ctx)?),
            op,
            right: Box::new(resolve_expr(*right, registry, ctx)?),
        }),
        lit @ Expr::Literal(_) => Ok(lit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn resolve(source: &str) -> Result<Document, TemplateError> {
        let doc = parse(source).expect("Should parse");
        let mut registry = TemplateRegistry::new();
        resolve_templates(doc, &mut registry)
    }

    fn contains_usage(nodes: &[Spanned<Node>]) -> bool {
        nodes.iter().any(|n| match &n.node {
            Node::TemplateUse(_) => true,
            Node::Element(el) => contains_usage(&el.children),
            Node::Style(style) => style
                .items
                .iter()
                .any(|i| matches!(i.node, StyleItem::Use(_))),
            _ => false,
        })
    }

    #[test]
    fn test_expand_style_template() {
        let doc = resolve(
            r#"
            [Template] @Style Box { width: 100px; }
            div { style { @Style Box; } }
        "#,
        )
        .expect("Should resolve");

        assert!(!contains_usage(&doc.nodes));
        match &doc.nodes[0].node {
            Node::Element(el) => match &el.children[0].node {
                Node::Style(style) => match &style.items[0].node {
                    StyleItem::Property(p) => {
                        assert_eq!(p.key, "width");
                        assert_eq!(p.value, Expr::Literal("100px".to_string()));
                    }
                    other => panic!("Expected property, got {:?}", other),
                },
                other => panic!("Expected style block, got {:?}", other),
            },
            other => panic!("Expected element, got {:?}", other),
        }
    }

    #[test]
    fn test_expand_element_template_splices_flat() {
        let doc = resolve(
            r#"
            [Template] @Element Pair {
                span { }
                span { }
            }
            div {
                p { }
                @Element Pair;
                p { }
            }
        "#,
        )
        .expect("Should resolve");

        match &doc.nodes[0].node {
            Node::Element(el) => {
                // p, span, span, p - spliced at the usage position
                let tags: Vec<_> = el
                    .children
                    .iter()
                    .map(|c| match &c.node {
                        Node::Element(e) => e.tag.as_str(),
                        other => panic!("Expected element, got {:?}", other),
                    })
                    .collect();
                assert_eq!(tags, vec!["p", "span", "span", "p"]);
            }
            other => panic!("Expected element, got {:?}", other),
        }
    }

    #[test]
    fn test_override_replaces_never_duplicates() {
        let doc = resolve(
            r#"
            [Custom] @Style Box { color: red; }
            div { style { @Style Box { color: blue; } } }
        "#,
        )
        .expect("Should resolve");

        match &doc.nodes[0].node {
            Node::Element(el) => match &el.children[0].node {
                Node::Style(style) => {
                    let colors: Vec<_> = style
                        .items
                        .iter()
                        .filter_map(|i| match &i.node {
                            StyleItem::Property(p) if p.key == "color" => Some(&p.value),
                            _ => None,
                        })
                        .collect();
                    assert_eq!(colors.len(), 1);
                    assert_eq!(*colors[0], Expr::Literal("blue".to_string()));
                }
                other => panic!("Expected style block, got {:?}", other),
            },
            other => panic!("Expected element, got {:?}", other),
        }
    }

    #[test]
    fn test_delete_then_override() {
        let doc = resolve(
            r#"
            [Custom] @Style Theme { color: red; font-size: 12px; }
            div {
                style {
                    @Style Theme {
                        font-size: 16px;
                        delete color;
                    }
                }
            }
        "#,
        )
        .expect("Should resolve");

        match &doc.nodes[0].node {
            Node::Element(el) => match &el.children[0].node {
                Node::Style(style) => {
                    assert_eq!(style.items.len(), 1);
                    match &style.items[0].node {
                        StyleItem::Property(p) => {
                            assert_eq!(p.key, "font-size");
                            assert_eq!(p.value, Expr::Literal("16px".to_string()));
                        }
                        other => panic!("Expected property, got {:?}", other),
                    }
                }
                other => panic!("Expected style block, got {:?}", other),
            },
            other => panic!("Expected element, got {:?}", other),
        }
    }

    #[test]
    fn test_override_unknown_key_error() {
        let result = resolve(
            r#"
            [Custom] @Style Box { width: 10px; }
            div { style { @Style Box { height: 20px; } } }
        "#,
        );
        assert!(matches!(
            result,
            Err(TemplateError::UnknownProperty { ref key, .. }) if key == "height"
        ));
    }

    #[test]
    fn test_override_on_plain_template_allowed() {
        let doc = resolve(
            r#"
            [Template] @Style Box { width: 100px; }
            div { style { @Style Box { width: 50%; } } }
        "#,
        )
        .expect("Should resolve");

        match &doc.nodes[0].node {
            Node::Element(el) => match &el.children[0].node {
                Node::Style(style) => match &style.items[0].node {
                    StyleItem::Property(p) => {
                        assert_eq!(p.value, Expr::Literal("50%".to_string()));
                    }
                    other => panic!("Expected property, got {:?}", other),
                },
                other => panic!("Expected style block, got {:?}", other),
            },
            other => panic!("Expected element, got {:?}", other),
        }
    }

    #[test]
    fn test_structural_ops_require_custom() {
        let result = resolve(
            r#"
            [Template] @Style Box { width: 10px; }
            div { style { @Style Box { delete width; } } }
        "#,
        );
        assert!(matches!(result, Err(TemplateError::NotCustomizable { .. })));
    }

    #[test]
    fn test_unresolved_usage_error() {
        let result = resolve("div { style { @Style Missing; } }");
        assert!(matches!(
            result,
            Err(TemplateError::NotFound { ref name }) if name == "Missing"
        ));
    }

    #[test]
    fn test_cycle_detection() {
        let result = resolve(
            r#"
            [Template] @Style A { @Style B; }
            [Template] @Style B { @Style A; }
            div { style { @Style A; } }
        "#,
        );
        match result {
            Err(TemplateError::CircularReference { chain }) => {
                assert!(chain.contains("A"));
                assert!(chain.contains("B"));
            }
            other => panic!("Expected circular reference, got {:?}", other),
        }
    }

    #[test]
    fn test_self_cycle_detection() {
        let result = resolve(
            r#"
            [Template] @Element Loop { @Element Loop; }
            @Element Loop;
        "#,
        );
        assert!(matches!(
            result,
            Err(TemplateError::CircularReference { .. })
        ));
    }

    #[test]
    fn test_delete_inheritance() {
        let doc = resolve(
            r#"
            [Template] @Style Base { margin: 0; }
            [Custom] @Style Panel {
                @Style Base;
                padding: 4px;
            }
            div { style { @Style Panel { delete @Style Base; } } }
        "#,
        )
        .expect("Should resolve");

        match &doc.nodes[0].node {
            Node::Element(el) => match &el.children[0].node {
                Node::Style(style) => {
                    assert_eq!(style.items.len(), 1);
                    assert!(matches!(
                        &style.items[0].node,
                        StyleItem::Property(p) if p.key == "padding"
                    ));
                }
                other => panic!("Expected style block, got {:?}", other),
            },
            other => panic!("Expected element, got {:?}", other),
        }
    }

    #[test]
    fn test_insert_at_clamps_index() {
        let doc = resolve(
            r#"
            [Custom] @Element Card { div { } }
            @Element Card { insert 99 { span { } } }
        "#,
        )
        .expect("Should resolve");

        let tags: Vec<_> = doc
            .nodes
            .iter()
            .map(|n| match &n.node {
                Node::Element(e) => e.tag.as_str(),
                other => panic!("Expected element, got {:?}", other),
            })
            .collect();
        assert_eq!(tags, vec!["div", "span"]);
    }

    #[test]
    fn test_insert_at_position() {
        let doc = resolve(
            r#"
            [Custom] @Element Pair { header { } footer { } }
            @Element Pair { insert 1 { main { } } }
        "#,
        )
        .expect("Should resolve");

        let tags: Vec<_> = doc
            .nodes
            .iter()
            .map(|n| match &n.node {
                Node::Element(e) => e.tag.as_str(),
                other => panic!("Expected element, got {:?}", other),
            })
            .collect();
        assert_eq!(tags, vec!["header", "main", "footer"]);
    }

    #[test]
    fn test_element_delete_child_by_tag() {
        let doc = resolve(
            r#"
            [Custom] @Element Page { header { } main { } footer { } }
            @Element Page { delete footer; }
        "#,
        )
        .expect("Should resolve");

        let tags: Vec<_> = doc
            .nodes
            .iter()
            .map(|n| match &n.node {
                Node::Element(e) => e.tag.as_str(),
                other => panic!("Expected element, got {:?}", other),
            })
            .collect();
        assert_eq!(tags, vec!["header", "main"]);
    }

    #[test]
    fn test_var_reference_substitution() {
        let doc = resolve(
            r#"
            [Template] @Var Palette { primary: #336699; }
            div { style { color: Palette(primary); } }
        "#,
        )
        .expect("Should resolve");

        match &doc.nodes[0].node {
            Node::Element(el) => match &el.children[0].node {
                Node::Style(style) => match &style.items[0].node {
                    StyleItem::Property(p) => {
                        assert_eq!(p.value, Expr::Literal("#336699".to_string()));
                    }
                    other => panic!("Expected property, got {:?}", other),
                },
                other => panic!("Expected style block, got {:?}", other),
            },
            other => panic!("Expected element, got {:?}", other),
        }
    }

    #[test]
    fn test_var_unknown_key_error() {
        let result = resolve(
            r#"
            [Template] @Var Palette { primary: red; }
            div { style { color: Palette(missing); } }
        "#,
        );
        assert!(matches!(
            result,
            Err(TemplateError::UnknownVariable { ref key, .. }) if key == "missing"
        ));
    }

    #[test]
    fn test_kind_mismatch_error() {
        let result = resolve(
            r#"
            [Template] @Element Card { div { } }
            div { style { @Style Card; } }
        "#,
        );
        assert!(matches!(result, Err(TemplateError::KindMismatch { .. })));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let source = r#"
            [Template] @Style Box { width: 100px; }
            div { style { @Style Box; } span { text { "hi" } } }
        "#;
        let doc = parse(source).expect("Should parse");
        let mut registry = TemplateRegistry::new();
        let once = resolve_templates(doc, &mut registry).expect("Should resolve");

        let mut registry2 = TemplateRegistry::new();
        let twice = resolve_templates(once.clone(), &mut registry2).expect("Should resolve again");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_specialization_does_not_mutate_registry() {
        // Two usages of the same custom: the second sees the canonical body
        let doc = resolve(
            r#"
            [Custom] @Style Box { width: 100px; }
            div { style { @Style Box { width: 50%; } } }
            p { style { @Style Box; } }
        "#,
        )
        .expect("Should resolve");

        match &doc.nodes[1].node {
            Node::Element(el) => match &el.children[0].node {
                Node::Style(style) => match &style.items[0].node {
                    StyleItem::Property(p) => {
                        assert_eq!(p.value, Expr::Literal("100px".to_string()));
                    }
                    other => panic!("Expected property, got {:?}", other),
                },
                other => panic!("Expected style block, got {:?}", other),
            },
            other => panic!("Expected element, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_template_expansion() {
        let doc = resolve(
            r#"
            [Template] @Style Base { margin: 0; }
            [Template] @Style Panel { @Style Base; padding: 4px; }
            div { style { @Style Panel; } }
        "#,
        )
        .expect("Should resolve");

        match &doc.nodes[0].node {
            Node::Element(el) => match &el.children[0].node {
                Node::Style(style) => {
                    let keys: Vec<_> = style
                        .items
                        .iter()
                        .map(|i| match &i.node {
                            StyleItem::Property(p) => p.key.as_str(),
                            other => panic!("Expected property, got {:?}", other),
                        })
                        .collect();
                    assert_eq!(keys, vec!["margin", "padding"]);
                }
                other => panic!("Expected style block, got {:?}", other),
            },
            other => panic!("Expected element, got {:?}", other),
        }
    }
}
