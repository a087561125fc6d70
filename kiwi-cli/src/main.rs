//! Kiwi CLI
//!
//! Runs the pipeline over a file or an HTML string and prints the stages.
//!
//! - kiwi page.html               # Print the layout tree
//! - kiwi --dom --styles page.html
//! - kiwi --json --width 400 page.html

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use kiwi_browser::{RenderOptions, RenderedDocument, load_document, render_html};
use kiwi_css::{ApproximateFontMetrics, BoxType, LayoutBox, calculate_content_width};
use kiwi_dom::NodeType;
use kiwi_html::print_tree;
use owo_colors::OwoColorize;

/// Kiwi: turn HTML and CSS into a positioned box tree
#[derive(Parser, Debug)]
#[command(name = "kiwi")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Layout tree of a file
    kiwi ./index.html

    # Parse inline HTML
    kiwi --html '<p style="color: red">Hello</p>'

    # Every stage, for an 400px wide viewport
    kiwi --tokens --dom --css --styles --width 400 ./index.html

    # Layout tree as JSON
    kiwi --json ./index.html
"#)]
#[allow(clippy::struct_excessive_bools)]
struct Cli {
    /// Path to an HTML file
    #[arg(value_name = "FILE", required_unless_present = "html")]
    path: Option<PathBuf>,

    /// Parse HTML string directly instead of a file
    #[arg(long, value_name = "HTML", conflicts_with = "path")]
    html: Option<String>,

    /// Viewport width in px
    #[arg(long, default_value_t = kiwi_browser::DEFAULT_VIEWPORT_WIDTH)]
    width: f32,

    /// Skip the built-in stylesheet
    #[arg(long)]
    no_ua: bool,

    /// Print the token stream
    #[arg(long)]
    tokens: bool,

    /// Print the DOM tree
    #[arg(long)]
    dom: bool,

    /// Print the parsed rules
    #[arg(long)]
    css: bool,

    /// Print computed styles of elements
    #[arg(long)]
    styles: bool,

    /// Print the layout tree as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let options = RenderOptions {
        viewport_width: cli.width,
        include_ua_stylesheet: !cli.no_ua,
    };
    let doc = load_doc(&cli, &options)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&doc.layout_tree)
            .context("failed to serialize the layout tree")?;
        println!("{json}");
        return Ok(());
    }

    if cli.tokens {
        print_tokens(&doc);
    }
    if cli.dom {
        print_dom(&doc);
    }
    if cli.css {
        print_rules(&doc);
    }
    if cli.styles {
        print_styles(&doc);
    }
    print_layout(&doc, cli.width);
    print_issues(&doc);

    Ok(())
}

/// Load document from CLI arguments
fn load_doc(cli: &Cli, options: &RenderOptions) -> Result<RenderedDocument> {
    let metrics = ApproximateFontMetrics;
    if let Some(ref html) = cli.html {
        render_html(html, options, &metrics).context("failed to render --html input")
    } else if let Some(ref path) = cli.path {
        load_document(path, options, &metrics)
            .with_context(|| format!("failed to render {}", path.display()))
    } else {
        anyhow::bail!("a file path or --html is required")
    }
}

fn heading(title: &str) {
    println!("{}", format!("=== {title} ===").bold());
}

fn print_tokens(doc: &RenderedDocument) {
    heading("Tokens");
    for (index, token) in doc.tokens.iter().enumerate() {
        if token.tag_name().is_some() {
            println!("{:>4}  {}", index.dimmed(), token.green());
        } else {
            println!("{:>4}  {token}", index.dimmed());
        }
    }
    println!();
}

fn print_dom(doc: &RenderedDocument) {
    heading("DOM Tree");
    match doc.dom.root() {
        Some(root) => print_tree(&doc.dom, root, 0),
        None => println!("(empty document)"),
    }
    println!();
}

fn print_rules(doc: &RenderedDocument) {
    heading(&format!("Stylesheet ({} rules)", doc.cssom.len()));
    for rule in doc.cssom.rules() {
        println!(
            "{} {} {{",
            rule.selector.to_string().cyan(),
            rule.specificity.dimmed()
        );
        for declaration in &rule.declarations {
            println!("    {}: {};", declaration.property, declaration.value);
        }
        println!("}}");
    }
    println!();
}

fn print_styles(doc: &RenderedDocument) {
    heading("Computed Styles");
    for id in doc.dom.iter_all() {
        let Some(element) = doc.dom.as_element(id) else {
            continue;
        };
        let style = &doc.styles[id];
        println!(
            "<{}> display={} position={} color={} font={}px/{} {} margin={:?} padding={:?}",
            element.tag_name.green(),
            style.display,
            style.position,
            style.color,
            style.font_size,
            style.font_weight,
            style.font_family,
            style.margin,
            style.padding,
        );
    }
    println!();
}

/// Print layout tree with computed positions
fn print_layout(doc: &RenderedDocument, viewport_width: f32) {
    heading(&format!("Layout Tree (viewport width: {viewport_width})"));
    match doc.layout_tree {
        Some(ref layout) => {
            print_layout_box(layout, 0, doc);
            println!("content width: {:.1}", calculate_content_width(layout));
        }
        None => println!("No layout tree available"),
    }
}

/// Recursively print a layout box with its rect
fn print_layout_box(layout_box: &LayoutBox, depth: usize, doc: &RenderedDocument) {
    let indent = "  ".repeat(depth);
    let name = match doc.dom.get(layout_box.node).map(|node| &node.node_type) {
        Some(NodeType::Element(element)) => format!("<{}>", element.tag_name),
        Some(NodeType::Text(_)) | None => String::new(),
    };
    let label = match &layout_box.box_type {
        BoxType::Word(word) => format!("\"{word}\""),
        other => format!("{name} {other}"),
    };
    let rect = layout_box.rect;
    println!(
        "{indent}{} x={:.1} y={:.1} w={:.1} h={:.1}",
        label.trim_start(),
        rect.x,
        rect.y,
        rect.width,
        rect.height
    );

    for child in &layout_box.children {
        if !child.is_skipped() {
            print_layout_box(child, depth + 1, doc);
        }
    }
    for positioned in &layout_box.positioned_children {
        print!("{indent}  {} ", "(positioned)".yellow());
        print_layout_box(positioned, 0, doc);
    }
}

fn print_issues(doc: &RenderedDocument) {
    if doc.parse_issues.is_empty() {
        return;
    }
    println!();
    heading("Parse Issues");
    for issue in &doc.parse_issues {
        println!("  - {} (token {})", issue.message, issue.token_index);
    }
}
