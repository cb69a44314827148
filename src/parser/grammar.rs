//! Parser implementation using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::parser::ast::*;
use crate::parser::lexer::Token;

/// Helper enum for separating element-body entries while preserving order
#[derive(Debug, Clone)]
enum ElementPart {
    Attr(Spanned<Attribute>),
    Child(Spanned<Node>),
}

/// Parse CHTL source code into an AST
pub fn parse(input: &str) -> Result<Document, Vec<crate::ParseError>> {
    let len = input.len();

    // Create a logos lexer and convert to token stream
    let token_iter = crate::parser::lexer::lex(input).map(|(tok, span)| (tok, span.into()));

    // Turn the token iterator into a stream that chumsky can use
    let token_stream = Stream::from_iter(token_iter)
        // Split (Token, SimpleSpan) into token and span parts
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    document_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

/// Helper to extract span range from chumsky's MapExtra
fn span_range(e: &impl chumsky::span::Span<Offset = usize>) -> std::ops::Range<usize> {
    e.start()..e.end()
}

fn document_parser<'a, I>() -> impl Parser<'a, I, Document, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    // Basic token parsers
    let identifier = select! {
        Token::Ident(s) => s,
    };

    let string_literal = select! {
        Token::String(s) => s,
    };

    // Template kind markers
    let template_kind = choice((
        just(Token::AtStyle).to(TemplateKind::Style),
        just(Token::AtElement).to(TemplateKind::Element),
        just(Token::AtVar).to(TemplateKind::Var),
    ));

    // `[Template]` vs `[Custom]` - the marker decides is_custom
    let def_marker = choice((
        just(Token::Template).to(false),
        just(Token::Custom).to(true),
    ));

    // Value expressions: flat left-associative arithmetic over literals,
    // var-group references, and parenthesised groups
    let expr = recursive(|expr| {
        let term = choice((
            select! { Token::Dimension(d) => Expr::Literal(d) },
            // Hex colors lex as Hash tokens
            select! { Token::Hash(h) => Expr::Literal(h) },
            string_literal.map(Expr::Literal),
            // Var-group reference: Palette(primary)
            identifier
                .then(
                    identifier.delimited_by(just(Token::ParenOpen), just(Token::ParenClose)),
                )
                .map(|(group, key)| Expr::Var { group, key }),
            identifier.map(Expr::Literal),
            expr.delimited_by(just(Token::ParenOpen), just(Token::ParenClose)),
        ));

        let op = choice((
            just(Token::Plus).to(BinaryOp::Add),
            just(Token::Minus).to(BinaryOp::Sub),
            just(Token::Star).to(BinaryOp::Mul),
            just(Token::Slash).to(BinaryOp::Div),
        ));

        term.clone()
            .foldl(op.then(term).repeated(), |left, (op, right)| {
                Expr::binary(left, op, right)
            })
    });

    // Style property: `width: 100px;`
    let style_property = identifier
        .then_ignore(just(Token::Colon))
        .then(expr.clone())
        .then_ignore(just(Token::Semicolon))
        .map(|(key, value)| StyleProperty { key, value });

    let spanned_property = style_property
        .clone()
        .map_with(|p, e| Spanned::new(p, span_range(&e.span())));

    // Selectors for rule-scoped CSS: `.class`, `#id`, `&:pseudo`
    let selector = select! {
        Token::ClassSelector(s) => s,
        Token::Hash(s) => s,
        Token::Amp(s) => s,
    };

    let style_rule = selector
        .then(
            spanned_property
                .clone()
                .repeated()
                .collect::<Vec<_>>()
                .delimited_by(just(Token::BraceOpen), just(Token::BraceClose)),
        )
        .map(|(selector, properties)| StyleRule {
            selector,
            properties,
        });

    // Recursive statement parser
    let node = recursive(|node| {
        // Specialization entries for usage bodies.
        // Note: Order matters! delete @Kind before delete key, and insert
        // before the override fallback, since override matches the very
        // general `identifier :` pattern.
        let delete_inheritance = just(Token::Delete)
            .ignore_then(template_kind)
            .then(identifier)
            .then_ignore(just(Token::Semicolon))
            .map(|(kind, name)| Specialization::DeleteInheritance { kind, name });

        let delete_key = just(Token::Delete)
            .ignore_then(identifier)
            .then_ignore(just(Token::Semicolon))
            .map(|key| Specialization::Delete { key });

        let insert_at = just(Token::Insert)
            .ignore_then(select! { Token::Dimension(d) => d }.try_map(|d: String, span| {
                d.parse::<usize>()
                    .map_err(|_| Rich::custom(span, "insert index must be a whole number"))
            }))
            .then(
                node.clone()
                    .repeated()
                    .collect::<Vec<_>>()
                    .delimited_by(just(Token::BraceOpen), just(Token::BraceClose)),
            )
            .map(|(index, nodes)| Specialization::InsertAt { index, nodes });

        let override_entry = identifier
            .then_ignore(just(Token::Colon))
            .then(expr.clone())
            .then_ignore(just(Token::Semicolon))
            .map(|(key, value)| Specialization::Override { key, value });

        // Style bodies are keyed, so overrides apply; element bodies are
        // positional, so insertion applies instead
        let style_spec_entry = choice((
            delete_inheritance.clone(),
            delete_key.clone(),
            override_entry,
        ))
        .map_with(|s, e| Spanned::new(s, span_range(&e.span())));

        let element_spec_entry = choice((delete_inheritance, delete_key, insert_at))
            .map_with(|s, e| Spanned::new(s, span_range(&e.span())));

        // Usage tail: `;` for a plain use, `{ ... }` for a specialized one
        let style_spec_body = choice((
            just(Token::Semicolon).to(Vec::new()),
            style_spec_entry
                .repeated()
                .collect::<Vec<_>>()
                .delimited_by(just(Token::BraceOpen), just(Token::BraceClose)),
        ));

        let element_spec_body = choice((
            just(Token::Semicolon).to(Vec::new()),
            element_spec_entry
                .repeated()
                .collect::<Vec<_>>()
                .delimited_by(just(Token::BraceOpen), just(Token::BraceClose)),
        ));

        let style_use = just(Token::AtStyle)
            .ignore_then(identifier)
            .then(style_spec_body)
            .map(|(name, spec)| TemplateUse {
                kind: TemplateKind::Style,
                name,
                spec,
            });

        let element_use = just(Token::AtElement)
            .ignore_then(identifier)
            .then(element_spec_body)
            .map(|(name, spec)| TemplateUse {
                kind: TemplateKind::Element,
                name,
                spec,
            });

        // Style-block entries, including nested style-template definitions
        let style_item = recursive(|style_item| {
            let style_items_body = style_item
                .repeated()
                .collect::<Vec<_>>()
                .delimited_by(just(Token::BraceOpen), just(Token::BraceClose));

            let style_def = def_marker
                .clone()
                .then_ignore(just(Token::AtStyle))
                .then(identifier)
                .then(style_items_body)
                .map(|((is_custom, name), items)| TemplateDef {
                    kind: TemplateKind::Style,
                    name,
                    is_custom,
                    body: TemplateBody::Style(items),
                });

            choice((
                style_def.map(StyleItem::Def),
                style_use.clone().map(StyleItem::Use),
                style_rule.clone().map(StyleItem::Rule),
                style_property.clone().map(StyleItem::Property),
            ))
            .map_with(|item, e| Spanned::new(item, span_range(&e.span())))
            .boxed()
        });

        let style_body = style_item
            .repeated()
            .collect::<Vec<_>>()
            .delimited_by(just(Token::BraceOpen), just(Token::BraceClose));

        // `style { ... }` block inside an element
        let style_block = just(Token::Style)
            .ignore_then(style_body.clone())
            .map(|items| Node::Style(StyleBlock { items }));

        // `text { "..." }` - adjacent literals join with a space
        let text_block = just(Token::Text)
            .ignore_then(
                string_literal
                    .repeated()
                    .at_least(1)
                    .collect::<Vec<_>>()
                    .delimited_by(just(Token::BraceOpen), just(Token::BraceClose)),
            )
            .map(|parts| Node::Text(parts.join(" ")));

        let script_block = select! {
            Token::Script(source) => Node::Script(ScriptBlock { source }),
        };

        let gen_comment = select! {
            Token::GenComment(text) => Node::Comment(Comment { text, emit: true }),
        };

        // Template definitions, one alternative per kind
        let style_template = def_marker
            .clone()
            .then_ignore(just(Token::AtStyle))
            .then(identifier)
            .then(style_body)
            .map(|((is_custom, name), items)| {
                Node::TemplateDef(TemplateDef {
                    kind: TemplateKind::Style,
                    name,
                    is_custom,
                    body: TemplateBody::Style(items),
                })
            });

        let element_template = def_marker
            .clone()
            .then_ignore(just(Token::AtElement))
            .then(identifier)
            .then(
                node.clone()
                    .repeated()
                    .collect::<Vec<_>>()
                    .delimited_by(just(Token::BraceOpen), just(Token::BraceClose)),
            )
            .map(|((is_custom, name), nodes)| {
                Node::TemplateDef(TemplateDef {
                    kind: TemplateKind::Element,
                    name,
                    is_custom,
                    body: TemplateBody::Element(nodes),
                })
            });

        let var_binding = identifier
            .then_ignore(just(Token::Colon))
            .then(expr.clone())
            .then_ignore(just(Token::Semicolon))
            .map(|(key, value)| VarBinding { key, value });

        let var_template = def_marker
            .then_ignore(just(Token::AtVar))
            .then(identifier)
            .then(
                var_binding
                    .repeated()
                    .collect::<Vec<_>>()
                    .delimited_by(just(Token::BraceOpen), just(Token::BraceClose)),
            )
            .map(|((is_custom, name), bindings)| {
                Node::TemplateDef(TemplateDef {
                    kind: TemplateKind::Var,
                    name,
                    is_custom,
                    body: TemplateBody::Var(bindings),
                })
            });

        // Attribute: `id: hero;` - distinguished from a child element by
        // the colon after the identifier
        let attribute = identifier
            .then_ignore(just(Token::Colon))
            .then(expr.clone())
            .then_ignore(just(Token::Semicolon))
            .map(|(key, value)| Attribute { key, value })
            .map_with(|a, e| Spanned::new(a, span_range(&e.span())));

        let element_part = choice((
            attribute.map(ElementPart::Attr),
            node.clone().map(ElementPart::Child),
        ));

        let element = identifier
            .then(
                element_part
                    .repeated()
                    .collect::<Vec<_>>()
                    .delimited_by(just(Token::BraceOpen), just(Token::BraceClose)),
            )
            .map(|(tag, parts)| {
                let mut attributes = Vec::new();
                let mut children = Vec::new();
                for part in parts {
                    match part {
                        ElementPart::Attr(a) => attributes.push(a),
                        ElementPart::Child(c) => children.push(c),
                    }
                }
                Node::Element(Element {
                    tag,
                    attributes,
                    children,
                })
            });

        // All statements
        // Note: Order matters! Keyword-led forms first; the element parser
        // comes last since a bare identifier is the most general prefix.
        choice((
            text_block,
            style_block,
            script_block,
            gen_comment,
            style_template,
            element_template,
            var_template,
            element_use.map(Node::TemplateUse),
            element,
        ))
        .map_with(|n, e| Spanned::new(n, span_range(&e.span())))
        .boxed()
    });

    // Document is a list of statements
    node.repeated()
        .collect()
        .then_ignore(end())
        .map(|nodes| Document { nodes })
}
