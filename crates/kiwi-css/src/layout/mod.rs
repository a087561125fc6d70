//! CSS Layout Engine
//!
//! This module implements the CSS visual formatting model for block and
//! inline layout per [CSS 2.1 Chapter 9](https://www.w3.org/TR/CSS2/visuren.html).
//!
//! Layout is a single recursive pass over the DOM: blocks stack their block
//! children vertically, inline content flows word by word through the
//! enclosing block's [`LineState`], and `position: absolute | fixed` boxes
//! are collected by the nearest block instead of taking up space.
//!
//! # Not Implemented
//!
//! - Margin collapsing, floats, flex, grid and tables
//! - `text-align` and `vertical-align` (carried in the style only)
//! - Offsets from `top`/`right`/`bottom`/`left`

/// Rect and edge types.
pub mod box_model;
/// Text measurement and the line cursor.
pub mod inline;
/// Layout tree construction.
pub mod layout_box;

pub use box_model::{EdgeSizes, Rect};
pub use inline::{ApproximateFontMetrics, FontDescriptor, LineState, TextMetrics, flow_words};
pub use layout_box::{BoxType, LayoutBox, LayoutContext, calculate_content_width, layout_document};
