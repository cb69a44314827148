//! CHTL compiler CLI
//!
//! Usage:
//!   chtl [OPTIONS] [FILE]
//!
//! Options:
//!   -o, --output <FILE>   Write HTML here instead of stdout
//!       --css <FILE>      Write the global CSS here instead of embedding it
//!   -c, --config <FILE>   Compiler configuration (TOML format)
//!   -d, --debug           Dump the resolved tree to stderr
//!   -g, --grammar         Show language grammar reference
//!   -e, --examples        Show annotated examples
//!   -h, --help            Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use chtl::{compile_with_config, CompileConfig, CompilerConfig};

#[derive(Parser)]
#[command(name = "chtl")]
#[command(about = "Compile CHTL markup to HTML and CSS")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Output HTML file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output CSS file; without it, non-empty CSS is embedded in a
    /// <style> element before the markup
    #[arg(long)]
    css: Option<PathBuf>,

    /// Compiler configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Debug mode: dump the resolved tree to stderr
    #[arg(short, long)]
    debug: bool,

    /// Show language grammar reference
    #[arg(short, long)]
    grammar: bool,

    /// Show annotated examples
    #[arg(short, long)]
    examples: bool,
}

fn main() {
    let cli = Cli::parse();

    // Handle documentation flags first
    if cli.grammar {
        print_grammar();
        return;
    }

    if cli.examples {
        print_examples();
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load configuration
    let compiler_config = match &cli.config {
        Some(path) => match CompilerConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading configuration '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => CompilerConfig::default(),
    };

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    // Compile
    let config = CompileConfig::new()
        .with_html(compiler_config.html_config())
        .with_debug(cli.debug);
    let out = match compile_with_config(&source, &config) {
        Ok(out) => out,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Route the CSS stream
    let html = match &cli.css {
        Some(path) => {
            if let Err(e) = fs::write(path, &out.css) {
                eprintln!("Error writing CSS file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
            out.html
        }
        None if !out.css.is_empty() => {
            format!("<style>{}</style>\n{}", out.css, out.html)
        }
        None => out.html,
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &html) {
                eprintln!("Error writing output file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => println!("{}", html),
    }
}

fn print_intro() {
    println!(
        r#"CHTL - compile HTML-like markup with reusable templates

USAGE:
    chtl [OPTIONS] [FILE]
    echo '<code>' | chtl

OPTIONS:
    -g, --grammar      Show language grammar reference
    -e, --examples     Show annotated examples
    -o, --output       Write HTML to a file
        --css          Write the global CSS to a separate file
    -c, --config       Compiler configuration (TOML file)
    -d, --debug        Dump the resolved tree to stderr
    -h, --help         Print help

QUICK START:
    echo 'div {{ text {{ "hello" }} }}' | chtl

This compiles a single div. Run --grammar for syntax reference or
--examples for more patterns."#
    );
}

fn print_grammar() {
    println!(
        r#"CHTL GRAMMAR
============

ELEMENTS
--------
tag {{ ... }}                 HTML element with a body
key: value;                  Attribute (inside an element body)
text {{ "content" }}          Literal text
script {{ ... }}              Raw script block (compiled separately)

STYLE
-----
style {{ ... }} inside an element mixes three entry forms:
    width: 100px;            Bare property -> inline style attribute
    .box {{ color: red; }}    Selector rule -> global CSS stream
    @Style Name;             Expand a style template in place

Selectors: .class, #id, &:pseudo

TEMPLATES
---------
[Template] @Style Name {{ ... }}    Reusable style properties
[Template] @Element Name {{ ... }}  Reusable element structure
[Template] @Var Name {{ k: v; }}    Named value group
[Custom] ...                       Same, but specializable at use

USAGE
-----
@Style Name;                 Expand as declared
@Style Name {{                Specialize a clone of the body:
    width: 50%;              - override a value (any template)
    delete color;            - remove an entry      ([Custom] only)
    delete @Style Base;      - remove inheritance   ([Custom] only)
}}
@Element Name {{ insert 0 {{ div {{ }} }} }}   Positional insert ([Custom] only)

Var groups are used inside values: color: Palette(primary);

VALUES
------
Dimensions: 100px, 50%, 1.5em, unitless 2
Arithmetic: + - * /  (left-associative; spaces around '-' since
identifiers may contain hyphens, as in font-size)
Mixed units fail; products of two units fail; division needs a
unitless, non-zero divisor.

COMMENTS
--------
// line and /* block */ comments are dropped.
-- text                      Generator comment, emitted as <!-- text -->"#
    );
}

fn print_examples() {
    println!(
        r#"CHTL EXAMPLES
=============

EXAMPLE 1: Inline vs global style
---------------------------------
div {{
    style {{
        width: 100px;
        .card {{ border: 1px; }}
    }}
}}

The bare property lands on the element's style attribute; the .card
rule goes to the global CSS stream.

EXAMPLE 2: Templates with inheritance
-------------------------------------
[Template] @Style Base {{ margin: 0; }}
[Custom] @Style Panel {{
    @Style Base;
    padding: 4px;
}}

div {{ style {{ @Style Panel; }} }}

Panel expands to margin + padding, in declaration order.

EXAMPLE 3: Specialization
-------------------------
[Custom] @Style Theme {{ color: red; font-size: 12px; }}

div {{
    style {{
        @Style Theme {{
            font-size: 16px;     // override
            delete color;        // remove the entry
        }}
    }}
}}

EXAMPLE 4: Element templates
----------------------------
[Custom] @Element Card {{
    header {{ }}
    main {{ }}
}}

@Element Card {{ insert 2 {{ footer {{ }} }} }}

Expands to header, main, footer spliced at the usage position.

EXAMPLE 5: Var groups and arithmetic
------------------------------------
[Template] @Var Palette {{ primary: #336699; }}

div {{
    style {{
        color: Palette(primary);
        width: 100px + 20px;
    }}
}}"#
    );
}
