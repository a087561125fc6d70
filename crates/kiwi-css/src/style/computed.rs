//! Computed style values.
//!
//! [§ 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
//!
//! Every node gets a fully populated [`ComputedStyle`]. Fields start at
//! their initial values and are overwritten by inheritance, matching rules
//! and the inline `style` attribute, in that order.

use serde::Serialize;
use strum_macros::{Display, EnumString};

use super::color::ColorValue;
use crate::layout::box_model::EdgeSizes;
use crate::layout::inline::FontDescriptor;

/// Initial `font-size` in px.
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// Initial `line-height` in px (1.5 × the initial font size).
pub const DEFAULT_LINE_HEIGHT: f32 = 24.0;

/// Initial `font-weight`.
pub const DEFAULT_FONT_WEIGHT: u16 = 400;

/// Initial `font-family`.
pub const DEFAULT_FONT_FAMILY: &str = "Arial";

/// [§ 2 Box Layout Modes: the display property](https://www.w3.org/TR/css-display-3/#the-display-properties)
///
/// `list-item` lays out as `block` and `inline-block` as `inline`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum DisplayType {
    /// Stacks vertically and fills the available width.
    #[strum(to_string = "block", serialize = "list-item")]
    Block,
    /// Flows along the current line.
    #[default]
    #[strum(to_string = "inline", serialize = "inline-block")]
    Inline,
    /// Generates no box at all.
    None,
}

/// [§ 3 Positioning schemes](https://www.w3.org/TR/css-position-3/#position-property)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    /// Normal flow.
    #[default]
    Static,
    /// Normal flow, offset when painted.
    Relative,
    /// Out of flow, placed against the containing block.
    Absolute,
    /// Out of flow, placed against the viewport.
    Fixed,
}

impl Position {
    /// Whether boxes with this position are taken out of normal flow.
    #[must_use]
    pub const fn is_out_of_flow(self) -> bool {
        matches!(self, Self::Absolute | Self::Fixed)
    }
}

/// `text-align`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    /// Start of the line.
    #[default]
    Left,
    /// Centered.
    Center,
    /// End of the line.
    Right,
    /// Stretched to both edges.
    Justify,
}

/// `text-decoration`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TextDecoration {
    /// No decoration line.
    #[default]
    None,
    /// Line below the text.
    Underline,
    /// Line above the text.
    Overline,
    /// Line through the middle of the text.
    LineThrough,
}

/// `visibility`. `collapse` is treated as `hidden`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    /// Painted.
    #[default]
    Visible,
    /// Laid out but not painted.
    #[strum(to_string = "hidden", serialize = "collapse")]
    Hidden,
}

/// `font-style`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum FontStyle {
    /// Upright.
    #[default]
    Normal,
    /// Italic face.
    Italic,
    /// Slanted face.
    Oblique,
}

/// `box-sizing`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum BoxSizing {
    /// `width` sizes the content box.
    #[default]
    ContentBox,
    /// `width` sizes the border box.
    BorderBox,
}

/// `border-style`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum BorderStyle {
    /// A single continuous line.
    #[default]
    Solid,
    /// Dashes.
    Dashed,
    /// Dots.
    Dotted,
    /// No border is drawn.
    None,
}

/// The resolved value of every supported property for one node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputedStyle {
    /// `color` (inherited)
    pub color: ColorValue,
    /// `background-color`
    pub background_color: ColorValue,
    /// `font-size` in px (inherited)
    pub font_size: f32,
    /// `font-weight`, a multiple of 100 in 100-900 (inherited)
    pub font_weight: u16,
    /// `font-style` (inherited)
    pub font_style: FontStyle,
    /// `font-family`, the first family named (inherited)
    pub font_family: String,
    /// `line-height` in px (inherited)
    pub line_height: f32,
    /// `text-align` (inherited)
    pub text_align: TextAlign,
    /// `text-decoration` (inherited)
    pub text_decoration: TextDecoration,
    /// `visibility` (inherited)
    pub visibility: Visibility,
    /// `display`
    pub display: DisplayType,
    /// `box-sizing`
    pub box_sizing: BoxSizing,
    /// `position`
    pub position: Position,
    /// `top` in px, `None` for `auto`
    pub top: Option<f32>,
    /// `right` in px, `None` for `auto`
    pub right: Option<f32>,
    /// `bottom` in px, `None` for `auto`
    pub bottom: Option<f32>,
    /// `left` in px, `None` for `auto`
    pub left: Option<f32>,
    /// `width` in px, `None` for `auto`
    pub width: Option<f32>,
    /// `height` in px, `None` for `auto`
    pub height: Option<f32>,
    /// `margin-*`
    pub margin: EdgeSizes,
    /// `padding-*`
    pub padding: EdgeSizes,
    /// `border-*-width`
    pub border_width: EdgeSizes,
    /// `border-color`
    pub border_color: ColorValue,
    /// `border-style`
    pub border_style: BorderStyle,
    /// `opacity` in 0-1
    pub opacity: f32,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            color: ColorValue::BLACK,
            background_color: ColorValue::TRANSPARENT,
            font_size: DEFAULT_FONT_SIZE,
            font_weight: DEFAULT_FONT_WEIGHT,
            font_style: FontStyle::Normal,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            line_height: DEFAULT_LINE_HEIGHT,
            text_align: TextAlign::Left,
            text_decoration: TextDecoration::None,
            visibility: Visibility::Visible,
            display: DisplayType::Inline,
            box_sizing: BoxSizing::ContentBox,
            position: Position::Static,
            top: None,
            right: None,
            bottom: None,
            left: None,
            width: None,
            height: None,
            margin: EdgeSizes::default(),
            padding: EdgeSizes::default(),
            border_width: EdgeSizes::default(),
            border_color: ColorValue::BLACK,
            border_style: BorderStyle::Solid,
            opacity: 1.0,
        }
    }
}

/// [§ 7 Inheritance](https://www.w3.org/TR/css-cascade-4/#inheriting)
///
/// The inherited subset of a parent's resolved style.
#[derive(Debug, Clone, PartialEq)]
pub struct InheritedProperties {
    color: ColorValue,
    font_size: f32,
    font_weight: u16,
    font_style: FontStyle,
    font_family: String,
    line_height: f32,
    text_align: TextAlign,
    text_decoration: TextDecoration,
    visibility: Visibility,
}

impl From<&ComputedStyle> for InheritedProperties {
    fn from(style: &ComputedStyle) -> Self {
        Self {
            color: style.color,
            font_size: style.font_size,
            font_weight: style.font_weight,
            font_style: style.font_style,
            font_family: style.font_family.clone(),
            line_height: style.line_height,
            text_align: style.text_align,
            text_decoration: style.text_decoration,
            visibility: style.visibility,
        }
    }
}

impl ComputedStyle {
    /// Copy the inherited properties from a parent.
    pub fn inherit(&mut self, parent: &InheritedProperties) {
        self.color = parent.color;
        self.font_size = parent.font_size;
        self.font_weight = parent.font_weight;
        self.font_style = parent.font_style;
        self.font_family.clone_from(&parent.font_family);
        self.line_height = parent.line_height;
        self.text_align = parent.text_align;
        self.text_decoration = parent.text_decoration;
        self.visibility = parent.visibility;
    }

    /// The font used to measure this node's text.
    #[must_use]
    pub fn font(&self) -> FontDescriptor {
        FontDescriptor {
            family: self.font_family.clone(),
            size_px: self.font_size,
            weight: self.font_weight,
            italic: matches!(self.font_style, FontStyle::Italic | FontStyle::Oblique),
        }
    }

    /// `width` when it was given a positive value.
    #[must_use]
    pub fn explicit_width(&self) -> Option<f32> {
        self.width.filter(|w| *w > 0.0)
    }

    /// `height` when it was given a positive value.
    #[must_use]
    pub fn explicit_height(&self) -> Option<f32> {
        self.height.filter(|h| *h > 0.0)
    }
}
