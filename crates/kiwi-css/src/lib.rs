//! CSS parsing, style resolution and layout for the Kiwi engine.
//!
//! # Scope
//!
//! - **Parser**: inline `style` attributes and stylesheets with type, class,
//!   id and universal selectors ([`parser`], [`cssom`], [`selector`]).
//! - **Style resolver**: inheritance, then matching rules by ascending
//!   specificity, then inline style ([`cascade`], [`style`]).
//! - **Layout**: block, inline and word-wrapped text boxes ([`layout`]).
//!
//! # Example
//!
//! ```
//! use kiwi_css::{ApproximateFontMetrics, compute_styles, create_cssom, layout_document};
//! use kiwi_dom::{DomTree, ElementData, NodeType};
//!
//! let mut tree = DomTree::new();
//! let div = tree.alloc(NodeType::Element(ElementData::new("div")));
//! tree.set_root(div);
//!
//! let cssom = create_cssom("div { display: block; height: 50px; }");
//! let styles = compute_styles(&tree, &cssom);
//! let root = layout_document(&tree, &styles, 800.0, &ApproximateFontMetrics).unwrap();
//! assert_eq!(root.rect.width, 800.0);
//! assert_eq!(root.rect.height, 50.0);
//! ```

/// Style resolution over a DOM tree.
pub mod cascade;
/// Rules and declarations.
pub mod cssom;
/// Box layout.
pub mod layout;
/// Declaration and stylesheet parsing.
pub mod parser;
/// Simple selectors.
pub mod selector;
/// Computed values and property setters.
pub mod style;
/// Built-in default styles.
pub mod ua_stylesheet;

use kiwi_dom::{DomTree, NodeType};

pub use cascade::{StyleMap, StyleResolver, compute_styles};
pub use cssom::{Cssom, Declaration, Rule};
pub use layout::{
    ApproximateFontMetrics, BoxType, EdgeSizes, FontDescriptor, LayoutBox, LayoutContext,
    LineState, Rect, TextMetrics, calculate_content_width, layout_document,
};
pub use parser::{CSSParser, create_cssom, parse_inline_style};
pub use selector::{Selector, Specificity, parse_selector};
pub use style::{ColorValue, ComputedStyle, DisplayType, Position, PropertyRegistry};
pub use ua_stylesheet::{UA_CSS, ua_stylesheet};

/// The contents of every `<style>` element, in document order, joined with
/// newlines.
#[must_use]
pub fn extract_style_content(tree: &DomTree) -> String {
    let mut css = String::new();
    for id in tree.elements_by_tag_name("style") {
        for &child in tree.children(id) {
            if let Some(NodeType::Text(text)) = tree.get(child).map(|node| &node.node_type) {
                css.push_str(text);
                css.push('\n');
            }
        }
    }
    css
}
