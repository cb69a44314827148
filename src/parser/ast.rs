//! Abstract Syntax Tree types for the CHTL language

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// AST node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Root AST node - a complete CHTL document
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub nodes: Vec<Spanned<Node>>,
}

/// A statement in a document or element body
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// HTML element: `div { ... }`
    Element(Element),
    /// Literal text content: `text { "hello" }`
    Text(String),
    /// Comment; only generator comments (`-- text`) reach the AST
    Comment(Comment),
    /// Style block attached to an element: `style { ... }`
    Style(StyleBlock),
    /// Raw script block: `script { ... }` - content is opaque to the core
    Script(ScriptBlock),
    /// Template or custom definition: `[Template] @Style Name { ... }`
    TemplateDef(TemplateDef),
    /// Element-kind template usage: `@Element Name;`
    TemplateUse(TemplateUse),
}

/// An HTML element with attributes and mixed children
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    /// Attributes in insertion order
    pub attributes: Vec<Spanned<Attribute>>,
    pub children: Vec<Spanned<Node>>,
}

/// Key-value attribute; the value is an evaluatable expression
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub key: String,
    pub value: Expr,
}

/// A comment node. `emit` distinguishes generator comments (kept in
/// output) from author comments (which the lexer already discards).
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub text: String,
    pub emit: bool,
}

/// A style block: ordered mix of inline properties, selector rules, and
/// style-template usages
#[derive(Debug, Clone, PartialEq)]
pub struct StyleBlock {
    pub items: Vec<Spanned<StyleItem>>,
}

/// One entry of a style block or style-template body
#[derive(Debug, Clone, PartialEq)]
pub enum StyleItem {
    /// Bare property - contributes to the element's inline `style` attribute
    Property(StyleProperty),
    /// Selector-qualified rule - contributes to the global CSS stream
    Rule(StyleRule),
    /// `@Style Name;` usage, expanded in place during resolution
    Use(TemplateUse),
    /// A style-template definition nested inside a style block
    Def(TemplateDef),
}

/// CSS property with an evaluatable value expression
#[derive(Debug, Clone, PartialEq)]
pub struct StyleProperty {
    pub key: String,
    pub value: Expr,
}

/// Selector-qualified rule: `.box { width: 100px; }`
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    pub selector: String,
    pub properties: Vec<Spanned<StyleProperty>>,
}

/// Raw script content, handed verbatim to the script compiler
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptBlock {
    pub source: String,
}

/// The three template kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Style,
    Element,
    Var,
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateKind::Style => write!(f, "@Style"),
            TemplateKind::Element => write!(f, "@Element"),
            TemplateKind::Var => write!(f, "@Var"),
        }
    }
}

/// A `[Template]` or `[Custom]` definition
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateDef {
    pub kind: TemplateKind,
    pub name: String,
    /// Customs allow per-usage specialization; plain templates do not
    pub is_custom: bool,
    pub body: TemplateBody,
}

/// Template body, shaped by the template kind
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateBody {
    Style(Vec<Spanned<StyleItem>>),
    Element(Vec<Spanned<Node>>),
    Var(Vec<VarBinding>),
}

/// One `key: value;` binding of a `@Var` template
#[derive(Debug, Clone, PartialEq)]
pub struct VarBinding {
    pub key: String,
    pub value: Expr,
}

/// A point of use of a template or custom, with optional specialization
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateUse {
    pub kind: TemplateKind,
    pub name: String,
    pub spec: Vec<Spanned<Specialization>>,
}

/// Per-usage edits applied to a cloned template body
#[derive(Debug, Clone, PartialEq)]
pub enum Specialization {
    /// `key: value;` - replace the value of an existing entry
    Override { key: String, value: Expr },
    /// `delete key;` - remove a property (style) or child by tag (element)
    Delete { key: String },
    /// `delete @Style Name;` - remove an inherited-template reference
    /// before it expands
    DeleteInheritance { kind: TemplateKind, name: String },
    /// `insert N { ... }` - splice nodes at an index, clamped to the body
    InsertAt {
        index: usize,
        nodes: Vec<Spanned<Node>>,
    },
}

/// Value expression: a literal token, a var-group reference, or a
/// binary arithmetic node. Pure tree, no cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Raw token: number with optional unit, bare identifier, or quoted
    /// string. Classification happens in the evaluator.
    Literal(String),
    /// `Group(key)` reference into a `@Var` template, substituted during
    /// resolution
    Var { group: String, key: String },
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn literal(raw: impl Into<String>) -> Self {
        Expr::Literal(raw.into())
    }

    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }
}

/// Arithmetic operators for dimensioned values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

/// HTML tags that never render closing tags or children
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Whether a tag is an HTML void element
pub fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}
