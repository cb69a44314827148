//! CSS stream formatting and ordering guarantees

use pretty_assertions::assert_eq;

use chtl::compile;

#[test]
fn test_rule_block_format() {
    let out = compile(
        r#"
        div {
            style {
                .card {
                    color: red;
                    width: 100px;
                }
            }
        }
    "#,
    )
    .expect("Should compile");

    assert_eq!(out.css, ".card { color: red; width: 100px; }");
}

#[test]
fn test_rules_separated_by_blank_lines() {
    let out = compile(
        r#"
        div {
            style {
                .a { margin: 0; }
                .b { margin: 1px; }
            }
        }
    "#,
    )
    .expect("Should compile");

    assert_eq!(out.css, ".a { margin: 0; }\n\n.b { margin: 1px; }");
}

#[test]
fn test_rule_values_are_evaluated() {
    let out = compile(
        r#"
        div {
            style {
                .wide { width: 100px + 20px; }
            }
        }
    "#,
    )
    .expect("Should compile");

    assert_eq!(out.css, ".wide { width: 120px; }");
}

#[test]
fn test_selector_forms() {
    let out = compile(
        r#"
        div {
            style {
                .by-class { margin: 0; }
                #by-id { margin: 0; }
                &:hover { margin: 0; }
            }
        }
    "#,
    )
    .expect("Should compile");

    assert!(out.css.contains(".by-class {"));
    assert!(out.css.contains("#by-id {"));
    assert!(out.css.contains("&:hover {"));
}

#[test]
fn test_inline_style_is_compact() {
    let out = compile(
        r#"
        div {
            style {
                width: 50%;
                height: 10px;
            }
        }
    "#,
    )
    .expect("Should compile");

    assert_eq!(out.html, r#"<div style="width:50%;height:10px;"></div>"#);
}

#[test]
fn test_expanded_template_rules_go_global() {
    // A style template carrying both a property and inheritance expands
    // with the bare property inline and nothing leaking into CSS
    let out = compile(
        r#"
        [Template] @Style Boxed { width: 100px; }
        div {
            style {
                @Style Boxed;
                .note { color: gray; }
            }
        }
    "#,
    )
    .expect("Should compile");

    assert_eq!(out.html, r#"<div style="width:100px;"></div>"#);
    assert_eq!(out.css, ".note { color: gray; }");
}

#[test]
fn test_css_empty_when_no_rules() {
    let out = compile("div { style { width: 1px; } }").expect("Should compile");
    assert_eq!(out.css, "");
}
