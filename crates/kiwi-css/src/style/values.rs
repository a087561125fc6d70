//! Value parsers shared by the property setters.
//!
//! Every parser returns `None` for input it does not understand; the setter
//! then falls back to the property's default.
//!
//! [CSS Values and Units Module Level 4](https://www.w3.org/TR/css-values-4/)

use super::color::ColorValue;
use super::computed::BorderStyle;
use crate::layout::box_model::EdgeSizes;

/// CSS pixels per inch.
const PX_PER_IN: f32 = 96.0;

/// [§ 5 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
///
/// Parse a number with an optional absolute unit and return it in px.
///
/// `px` and `pt` are taken as px; `cm`, `mm` and `in` convert through
/// 96px = 1in = 2.54cm. A bare number is px. Relative units (`em`, `%`)
/// are not supported.
#[must_use]
pub fn parse_length(value: &str) -> Option<f32> {
    let value = value.trim();
    let split = value
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+')))
        .unwrap_or(value.len());
    let (number, unit) = value.split_at(split);
    let number: f32 = number.parse().ok()?;

    let px = match unit.trim() {
        "" | "px" | "pt" => number,
        "cm" => number * PX_PER_IN / 2.54,
        "mm" => number * PX_PER_IN / 25.4,
        "in" => number * PX_PER_IN,
        _ => return None,
    };
    px.is_finite().then_some(px)
}

/// [§ 3.5 Font size: the font-size property](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
///
/// Absolute size keywords or a non-negative length.
#[must_use]
pub fn parse_font_size(value: &str) -> Option<f32> {
    let keyword = match value.trim() {
        "xx-small" => Some(9.0),
        "x-small" => Some(10.0),
        "small" => Some(13.0),
        "medium" => Some(16.0),
        "large" => Some(18.0),
        "x-large" => Some(24.0),
        "xx-large" => Some(32.0),
        _ => None,
    };
    keyword.or_else(|| parse_length(value).filter(|px| *px >= 0.0))
}

/// [§ 3.2 Font weight: the font-weight property](https://www.w3.org/TR/css-fonts-4/#font-weight-prop)
///
/// `normal`, `bold`, or a number in 1-1000 rounded to the nearest hundred
/// and clamped to 100-900.
#[must_use]
pub fn parse_font_weight(value: &str) -> Option<u16> {
    match value.trim() {
        "normal" => Some(400),
        "bold" => Some(700),
        number => {
            let weight: u32 = number.parse().ok()?;
            if !(1..=1000).contains(&weight) {
                return None;
            }
            let rounded = ((weight + 50) / 100 * 100).clamp(100, 900);
            u16::try_from(rounded).ok()
        }
    }
}

/// [§ 3.1 Font family: the font-family property](https://www.w3.org/TR/css-fonts-4/#font-family-prop)
///
/// The first family of a comma-separated list, without quotes.
#[must_use]
pub fn parse_font_family(value: &str) -> Option<String> {
    let first = value.split(',').next()?.trim();
    let unquoted = first
        .strip_prefix('"')
        .and_then(|f| f.strip_suffix('"'))
        .or_else(|| first.strip_prefix('\'').and_then(|f| f.strip_suffix('\'')))
        .unwrap_or(first)
        .trim();
    (!unquoted.is_empty()).then(|| unquoted.to_string())
}

/// A length that may also be `auto`.
///
/// Returns `Some(None)` for `auto`, `Some(Some(px))` for a length and `None`
/// for anything else.
#[must_use]
pub fn parse_length_or_auto(value: &str) -> Option<Option<f32>> {
    if value.trim() == "auto" {
        Some(None)
    } else {
        parse_length(value).map(Some)
    }
}

/// Parse a `margin`/`padding`/`border-width` shorthand, each whitespace
/// separated token going through `parse_token`.
#[must_use]
pub fn parse_edges(value: &str, parse_token: fn(&str) -> Option<f32>) -> Option<EdgeSizes> {
    let values: Option<Vec<f32>> = value.split_whitespace().map(parse_token).collect();
    EdgeSizes::from_shorthand(&values?)
}

/// A margin token. `auto` margins are not resolved and count as 0.
#[must_use]
pub fn parse_margin(value: &str) -> Option<f32> {
    if value.trim() == "auto" {
        Some(0.0)
    } else {
        parse_length(value)
    }
}

/// A padding token. Negative padding is invalid.
#[must_use]
pub fn parse_padding(value: &str) -> Option<f32> {
    parse_length(value).filter(|px| *px >= 0.0)
}

/// [§ 4.3 Line Thickness: the border-width properties](https://www.w3.org/TR/css-backgrounds-3/#border-width)
///
/// `thin`, `medium`, `thick` or a non-negative length.
#[must_use]
pub fn parse_border_width(value: &str) -> Option<f32> {
    match value.trim() {
        "thin" => Some(1.0),
        "medium" => Some(3.0),
        "thick" => Some(5.0),
        other => parse_length(other).filter(|px| *px >= 0.0),
    }
}

/// The components of a `border` shorthand.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderShorthand {
    /// Widths per side.
    pub width: EdgeSizes,
    /// Line style.
    pub style: BorderStyle,
    /// Line color.
    pub color: ColorValue,
}

/// [§ 4.4 Border Shorthand Properties](https://www.w3.org/TR/css-backgrounds-3/#border-shorthands)
///
/// Width, style and color tokens may appear in any order. Width tokens go
/// through the 1-4 value rule. An omitted style is `none`, an omitted
/// color is black, and an omitted width is `medium` unless the style is
/// `none`.
#[must_use]
pub fn parse_border(value: &str) -> Option<BorderShorthand> {
    let mut widths = Vec::new();
    let mut style = None;
    let mut color = None;

    for token in value.split_whitespace() {
        if let Some(width) = parse_border_width(token) {
            widths.push(width);
        } else if let Ok(parsed) = token.parse::<BorderStyle>() {
            if style.replace(parsed).is_some() {
                return None;
            }
        } else if let Some(parsed) = ColorValue::parse(token) {
            if color.replace(parsed).is_some() {
                return None;
            }
        } else {
            return None;
        }
    }

    let style = style.unwrap_or(BorderStyle::None);
    let width = if widths.is_empty() {
        EdgeSizes::uniform(if style == BorderStyle::None { 0.0 } else { 3.0 })
    } else {
        EdgeSizes::from_shorthand(&widths)?
    };
    Some(BorderShorthand {
        width,
        style,
        color: color.unwrap_or(ColorValue::BLACK),
    })
}

/// `opacity` as a number, clamped to 0-1.
#[must_use]
pub fn parse_opacity(value: &str) -> Option<f32> {
    let opacity: f32 = value.trim().parse().ok()?;
    opacity.is_finite().then(|| opacity.clamp(0.0, 1.0))
}
