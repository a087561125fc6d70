//! High-level API for the Kiwi engine.
//!
//! # Scope
//!
//! This crate runs the whole pipeline in one call:
//!
//! 1. **Tokenize** the markup ([`kiwi_html::tokenize`])
//! 2. **Build** the DOM, keeping parse issues ([`kiwi_html::HTMLParser`])
//! 3. **Collect** `<style>` text and parse it after the UA stylesheet
//! 4. **Resolve** computed styles ([`kiwi_css::compute_styles`])
//! 5. **Lay out** the box tree for a viewport width ([`kiwi_css::layout_document`])
//!
//! # Not Implemented
//!
//! - External stylesheets (`<link rel="stylesheet">`) and `@import`
//! - Network loading; documents come from strings or local files

pub use kiwi_css as css;
pub use kiwi_dom as dom;
pub use kiwi_html as html;

use std::fs;
use std::path::{Path, PathBuf};

use kiwi_common::warn_once;
use kiwi_css::{
    Cssom, LayoutBox, StyleMap, TextMetrics, compute_styles, create_cssom, extract_style_content,
    layout_document, ua_stylesheet,
};
use kiwi_dom::DomTree;
use kiwi_html::{HTMLParser, ParseIssue, Token, TokenizeError, tokenize};
use thiserror::Error;

/// Viewport width used when none is given.
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 800.0;

/// Settings for one run of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Width of the initial containing block in px.
    pub viewport_width: f32,
    /// Put the built-in stylesheet before the document's own rules.
    pub include_ua_stylesheet: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            include_ua_stylesheet: true,
        }
    }
}

/// Error type for document loading.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read '{}'", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The markup could not be tokenized.
    #[error(transparent)]
    Markup(#[from] TokenizeError),
}

/// A fully processed document.
///
/// Holds every intermediate result of the pipeline for inspection.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    /// Original HTML source
    pub html_source: String,

    /// Source path, empty for documents parsed from a string
    pub source_path: String,

    /// HTML tokens (for debugging)
    pub tokens: Vec<Token>,

    /// Parsed DOM tree
    pub dom: DomTree,

    /// Text of every `<style>` element
    pub css_text: String,

    /// The rules styles were resolved against, UA rules first
    pub cssom: Cssom,

    /// Computed style per node
    pub styles: StyleMap,

    /// Box tree, `None` for a document with no elements
    pub layout_tree: Option<LayoutBox>,

    /// Recoverable problems found while building the tree
    pub parse_issues: Vec<ParseIssue>,
}

impl RenderedDocument {
    /// Lay the document out again for a different viewport width.
    ///
    /// Styles do not depend on the viewport, so only layout is redone.
    pub fn relayout(&mut self, viewport_width: f32, metrics: &dyn TextMetrics) {
        self.layout_tree = layout_document(&self.dom, &self.styles, viewport_width, metrics);
    }
}

/// The sheet styles are resolved against: the UA rules (when enabled)
/// followed by the document's rules, which win ties by coming later.
fn build_cssom(css_text: &str, options: &RenderOptions) -> Cssom {
    let author = create_cssom(css_text);
    if !options.include_ua_stylesheet {
        return author;
    }
    let mut cssom = ua_stylesheet().clone();
    cssom.append(author);
    cssom
}

/// Run the full pipeline over an HTML string.
///
/// # Errors
///
/// Returns [`LoadError::Markup`] if a tag is never closed with `>`. Every
/// other problem is recovered from and reported as a warning or a
/// [`ParseIssue`].
pub fn render_html(
    html: &str,
    options: &RenderOptions,
    metrics: &dyn TextMetrics,
) -> Result<RenderedDocument, LoadError> {
    let tokens = tokenize(html)?;

    let (dom, parse_issues) = HTMLParser::new(tokens.clone()).run_with_issues();

    let css_text = extract_style_content(&dom);
    let cssom = build_cssom(&css_text, options);

    let styles = compute_styles(&dom, &cssom);

    let layout_tree = layout_document(&dom, &styles, options.viewport_width, metrics);
    if layout_tree.is_none() {
        warn_once("Browser", "document has no root element; nothing to lay out");
    }

    Ok(RenderedDocument {
        html_source: html.to_string(),
        source_path: String::new(),
        tokens,
        dom,
        css_text,
        cssom,
        styles,
        layout_tree,
        parse_issues,
    })
}

/// Read a local HTML file and run the full pipeline over it.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, or
/// [`LoadError::Markup`] if it cannot be tokenized.
pub fn load_document(
    path: impl AsRef<Path>,
    options: &RenderOptions,
    metrics: &dyn TextMetrics,
) -> Result<RenderedDocument, LoadError> {
    let path = path.as_ref();
    let html = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut document = render_html(&html, options, metrics)?;
    document.source_path = path.display().to_string();
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = RenderOptions::default();
        assert_eq!(options.viewport_width, 800.0);
        assert!(options.include_ua_stylesheet);
    }

    #[test]
    fn test_cssom_puts_author_rules_last() {
        let options = RenderOptions::default();
        let cssom = build_cssom("p { color: red }", &options);
        assert_eq!(cssom.len(), ua_stylesheet().len() + 1);
        let last = &cssom.rules()[cssom.len() - 1];
        assert_eq!(last.selector.to_string(), "p");
    }

    #[test]
    fn test_cssom_without_ua() {
        let options = RenderOptions {
            include_ua_stylesheet: false,
            ..RenderOptions::default()
        };
        assert_eq!(build_cssom("p { color: red }", &options).len(), 1);
        assert!(build_cssom("", &options).is_empty());
    }
}
