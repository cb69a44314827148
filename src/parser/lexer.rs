//! Lexer for the CHTL language using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Captures the brace-balanced body following a `script` keyword without
/// tokenizing it. Single/double/backtick quoted sections are skipped so
/// braces inside string literals do not unbalance the count.
fn lex_script_block(lex: &mut logos::Lexer<Token>) -> Option<String> {
    let remainder = lex.remainder();
    let bytes = remainder.as_bytes();

    let mut offset = 0;
    while offset < bytes.len() && bytes[offset].is_ascii_whitespace() {
        offset += 1;
    }
    if offset >= bytes.len() || bytes[offset] != b'{' {
        return None;
    }
    offset += 1;
    let body_start = offset;

    let mut depth = 1usize;
    let mut quote: Option<u8> = None;
    while offset < bytes.len() {
        let b = bytes[offset];
        match quote {
            Some(q) => {
                if b == b'\\' {
                    offset += 1;
                } else if b == q {
                    quote = None;
                }
            }
            None => match b {
                b'\'' | b'"' | b'`' => quote = Some(b),
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        let body = remainder[body_start..offset].trim().to_string();
                        lex.bump(offset + 1);
                        return Some(body);
                    }
                }
                _ => {}
            },
        }
        offset += 1;
    }
    None
}

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token {
    // Definition markers
    #[token("[Template]")]
    Template,
    #[token("[Custom]")]
    Custom,

    // Template kind markers
    #[token("@Style")]
    AtStyle,
    #[token("@Element")]
    AtElement,
    #[token("@Var")]
    AtVar,

    // Block keywords
    #[token("text")]
    Text,
    #[token("style")]
    Style,
    /// `script { ... }` - the raw body is captured by the lexer so the
    /// parser never sees its contents
    #[token("script", lex_script_block)]
    Script(String),

    // Specialization keywords
    #[token("delete")]
    Delete,
    #[token("insert")]
    Insert,

    // Arithmetic operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    // Delimiters
    #[token("{")]
    BraceOpen,
    #[token("}")]
    BraceClose,
    #[token("(")]
    ParenOpen,
    #[token(")")]
    ParenClose,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,

    // Selector fragments
    #[regex(r"\.[a-zA-Z_][a-zA-Z0-9_-]*", |lex| lex.slice().to_string())]
    ClassSelector(String),
    /// `#name` - an id selector in style position, a hex color in value
    /// position; the grammar decides from context
    #[regex(r"#[a-zA-Z0-9_-]+", |lex| lex.slice().to_string())]
    Hash(String),
    #[regex(r"&(::?[a-zA-Z-]+)?", |lex| lex.slice().to_string())]
    Amp(String),

    // Literals - identifiers may contain interior hyphens (font-size),
    // so subtraction needs surrounding whitespace, as in CSS calc()
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*(-[a-zA-Z0-9_]+)*", |lex| lex.slice().to_string(), priority = 1)]
    Ident(String),

    #[regex(r#""([^"\\]|\\.)*""#, |lex| {
        let s = lex.slice();
        s[1..s.len()-1].to_string()
    })]
    String(String),

    /// Number with optional unit suffix, kept as the raw slice; the
    /// evaluator splits number from unit
    #[regex(r"[0-9]+(\.[0-9]+)?(%|[a-zA-Z]+)?", |lex| lex.slice().to_string())]
    Dimension(String),

    /// `-- text` generator comment, preserved into the output
    #[regex(r"--[^\n]*", |lex| lex.slice()[2..].trim().to_string())]
    GenComment(String),

    // Author comments (skip)
    #[regex(r"//[^\n]*", logos::skip)]
    LineComment,

    #[regex(r"/\*([^*]|\*[^/])*\*/", logos::skip)]
    BlockComment,
}

/// Lex input string into tokens with spans
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_markers() {
        let tokens: Vec<_> = lex("[Template] @Style [Custom] @Element @Var")
            .map(|(t, _)| t)
            .collect();
        assert_eq!(
            tokens,
            vec![
                Token::Template,
                Token::AtStyle,
                Token::Custom,
                Token::AtElement,
                Token::AtVar,
            ]
        );
    }

    #[test]
    fn test_identifiers_and_strings() {
        let tokens: Vec<_> = lex(r#"div "hello world""#).map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("div".to_string()),
                Token::String("hello world".to_string()),
            ]
        );
    }

    #[test]
    fn test_hyphenated_identifier() {
        let tokens: Vec<_> = lex("font-size").map(|(t, _)| t).collect();
        assert_eq!(tokens, vec![Token::Ident("font-size".to_string())]);
    }

    #[test]
    fn test_spaced_subtraction() {
        let tokens: Vec<_> = lex("width - height").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("width".to_string()),
                Token::Minus,
                Token::Ident("height".to_string()),
            ]
        );
    }

    #[test]
    fn test_dimensions() {
        let tokens: Vec<_> = lex("100px 50% 2 1.5em").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Dimension("100px".to_string()),
                Token::Dimension("50%".to_string()),
                Token::Dimension("2".to_string()),
                Token::Dimension("1.5em".to_string()),
            ]
        );
    }

    #[test]
    fn test_arithmetic_tokens() {
        let tokens: Vec<_> = lex("10px + 5 * 2 / 4").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Dimension("10px".to_string()),
                Token::Plus,
                Token::Dimension("5".to_string()),
                Token::Star,
                Token::Dimension("2".to_string()),
                Token::Slash,
                Token::Dimension("4".to_string()),
            ]
        );
    }

    #[test]
    fn test_selectors() {
        let tokens: Vec<_> = lex(".box #hero &:hover").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::ClassSelector(".box".to_string()),
                Token::Hash("#hero".to_string()),
                Token::Amp("&:hover".to_string()),
            ]
        );
    }

    #[test]
    fn test_hex_color_lexes_as_hash() {
        let tokens: Vec<_> = lex("#ff0000").map(|(t, _)| t).collect();
        assert_eq!(tokens, vec![Token::Hash("#ff0000".to_string())]);
    }

    #[test]
    fn test_author_comments_skipped() {
        let tokens: Vec<_> = lex("div // comment\nspan /* block */ p")
            .map(|(t, _)| t)
            .collect();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("div".to_string()),
                Token::Ident("span".to_string()),
                Token::Ident("p".to_string()),
            ]
        );
    }

    #[test]
    fn test_generator_comment() {
        let tokens: Vec<_> = lex("-- rendered into output").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![Token::GenComment("rendered into output".to_string())]
        );
    }

    #[test]
    fn test_script_block_capture() {
        let tokens: Vec<_> = lex(r#"script { console.log("hi"); }"#)
            .map(|(t, _)| t)
            .collect();
        assert_eq!(
            tokens,
            vec![Token::Script(r#"console.log("hi");"#.to_string())]
        );
    }

    #[test]
    fn test_script_block_nested_braces() {
        let tokens: Vec<_> = lex("script { if (x) { y(); } }").map(|(t, _)| t).collect();
        assert_eq!(tokens, vec![Token::Script("if (x) { y(); }".to_string())]);
    }

    #[test]
    fn test_script_block_brace_in_string() {
        let tokens: Vec<_> = lex(r#"script { let s = "{"; }"#).map(|(t, _)| t).collect();
        assert_eq!(tokens, vec![Token::Script(r#"let s = "{";"#.to_string())]);
    }

    #[test]
    fn test_keywords() {
        let tokens: Vec<_> = lex("text style delete insert").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![Token::Text, Token::Style, Token::Delete, Token::Insert]
        );
    }

    #[test]
    fn test_keyword_prefix_identifier() {
        // Longest match: "text-align" is one identifier, not the text keyword
        let tokens: Vec<_> = lex("text-align textual").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("text-align".to_string()),
                Token::Ident("textual".to_string()),
            ]
        );
    }

    #[test]
    fn test_complete_example() {
        let input = r#"
            div {
                id: hero;
                style { width: 100px + 20px; }
            }
        "#;
        let tokens: Vec<_> = lex(input).map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("div".to_string()),
                Token::BraceOpen,
                Token::Ident("id".to_string()),
                Token::Colon,
                Token::Ident("hero".to_string()),
                Token::Semicolon,
                Token::Style,
                Token::BraceOpen,
                Token::Ident("width".to_string()),
                Token::Colon,
                Token::Dimension("100px".to_string()),
                Token::Plus,
                Token::Dimension("20px".to_string()),
                Token::Semicolon,
                Token::BraceClose,
                Token::BraceClose,
            ]
        );
    }
}
