//! Property name to setter table.
//!
//! A setter always writes its property: a value it cannot parse is replaced
//! by the property's default and reported once through `warn_once`.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::OnceLock;

use kiwi_common::warn_once;

use super::color::ColorValue;
use super::computed::{
    BorderStyle, ComputedStyle, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, DEFAULT_FONT_WEIGHT,
    DEFAULT_LINE_HEIGHT,
};
use super::values::{
    parse_border, parse_border_width, parse_edges, parse_font_family, parse_font_size,
    parse_font_weight, parse_length, parse_length_or_auto, parse_margin, parse_opacity,
    parse_padding,
};
use crate::layout::box_model::EdgeSizes;

/// Writes one property's value into a style.
pub type Setter = fn(&mut ComputedStyle, &str);

/// Maps lowercase property names to their setters.
#[derive(Debug, Clone)]
pub struct PropertyRegistry {
    setters: HashMap<&'static str, Setter>,
}

static SHARED: OnceLock<PropertyRegistry> = OnceLock::new();

fn invalid(property: &str, value: &str) {
    warn_once(
        "CSS",
        &format!("invalid value '{value}' for '{property}', using the default"),
    );
}

fn or_default<T>(parsed: Option<T>, property: &str, value: &str, default: T) -> T {
    parsed.unwrap_or_else(|| {
        invalid(property, value);
        default
    })
}

fn keyword<T: FromStr + Default>(property: &str, value: &str) -> T {
    or_default(value.trim().parse().ok(), property, value, T::default())
}

fn color(property: &str, value: &str, default: ColorValue) -> ColorValue {
    or_default(ColorValue::parse(value), property, value, default)
}

fn length(property: &str, value: &str, default: f32) -> f32 {
    or_default(parse_length(value), property, value, default)
}

fn length_or_auto(property: &str, value: &str) -> Option<f32> {
    or_default(parse_length_or_auto(value), property, value, None)
}

fn edges(property: &str, value: &str, parse_token: fn(&str) -> Option<f32>) -> EdgeSizes {
    or_default(
        parse_edges(value, parse_token),
        property,
        value,
        EdgeSizes::default(),
    )
}

impl PropertyRegistry {
    /// An empty registry.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            setters: HashMap::new(),
        }
    }

    /// A registry with every supported property.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();

        // Text and fonts
        registry.register("color", |s, v| s.color = color("color", v, ColorValue::BLACK));
        registry.register("font-size", |s, v| {
            s.font_size = or_default(parse_font_size(v), "font-size", v, DEFAULT_FONT_SIZE);
        });
        registry.register("font-weight", |s, v| {
            s.font_weight = or_default(parse_font_weight(v), "font-weight", v, DEFAULT_FONT_WEIGHT);
        });
        registry.register("font-style", |s, v| s.font_style = keyword("font-style", v));
        registry.register("font-family", |s, v| {
            s.font_family = or_default(
                parse_font_family(v),
                "font-family",
                v,
                DEFAULT_FONT_FAMILY.to_string(),
            );
        });
        registry.register("line-height", |s, v| {
            s.line_height = if v.trim() == "normal" {
                DEFAULT_LINE_HEIGHT
            } else {
                length("line-height", v, DEFAULT_LINE_HEIGHT)
            };
        });
        registry.register("text-align", |s, v| s.text_align = keyword("text-align", v));
        registry.register("text-decoration", |s, v| {
            s.text_decoration = keyword("text-decoration", v);
        });
        registry.register("visibility", |s, v| s.visibility = keyword("visibility", v));

        // Box generation and positioning
        registry.register("display", |s, v| s.display = keyword("display", v));
        registry.register("box-sizing", |s, v| s.box_sizing = keyword("box-sizing", v));
        registry.register("position", |s, v| s.position = keyword("position", v));
        registry.register("top", |s, v| s.top = length_or_auto("top", v));
        registry.register("right", |s, v| s.right = length_or_auto("right", v));
        registry.register("bottom", |s, v| s.bottom = length_or_auto("bottom", v));
        registry.register("left", |s, v| s.left = length_or_auto("left", v));
        registry.register("width", |s, v| s.width = length_or_auto("width", v));
        registry.register("height", |s, v| s.height = length_or_auto("height", v));
        registry.register("opacity", |s, v| {
            s.opacity = or_default(parse_opacity(v), "opacity", v, 1.0);
        });

        // Margins
        registry.register("margin", |s, v| s.margin = edges("margin", v, parse_margin));
        registry.register("margin-top", |s, v| {
            s.margin.top = or_default(parse_margin(v), "margin-top", v, 0.0);
        });
        registry.register("margin-right", |s, v| {
            s.margin.right = or_default(parse_margin(v), "margin-right", v, 0.0);
        });
        registry.register("margin-bottom", |s, v| {
            s.margin.bottom = or_default(parse_margin(v), "margin-bottom", v, 0.0);
        });
        registry.register("margin-left", |s, v| {
            s.margin.left = or_default(parse_margin(v), "margin-left", v, 0.0);
        });

        // Padding
        registry.register("padding", |s, v| s.padding = edges("padding", v, parse_padding));
        registry.register("padding-top", |s, v| {
            s.padding.top = or_default(parse_padding(v), "padding-top", v, 0.0);
        });
        registry.register("padding-right", |s, v| {
            s.padding.right = or_default(parse_padding(v), "padding-right", v, 0.0);
        });
        registry.register("padding-bottom", |s, v| {
            s.padding.bottom = or_default(parse_padding(v), "padding-bottom", v, 0.0);
        });
        registry.register("padding-left", |s, v| {
            s.padding.left = or_default(parse_padding(v), "padding-left", v, 0.0);
        });

        // Borders and backgrounds
        registry.register("background-color", |s, v| {
            s.background_color = color("background-color", v, ColorValue::TRANSPARENT);
        });
        registry.register("border-width", |s, v| {
            s.border_width = edges("border-width", v, parse_border_width);
        });
        registry.register("border-color", |s, v| {
            s.border_color = color("border-color", v, ColorValue::BLACK);
        });
        registry.register("border-style", |s, v| {
            s.border_style = or_default(v.trim().parse().ok(), "border-style", v, BorderStyle::None);
        });
        registry.register("border", |s, v| match parse_border(v) {
            Some(border) => {
                s.border_width = border.width;
                s.border_style = border.style;
                s.border_color = border.color;
            }
            None => {
                invalid("border", v);
                s.border_width = EdgeSizes::default();
                s.border_style = BorderStyle::default();
                s.border_color = ColorValue::BLACK;
            }
        });

        registry
    }

    /// The process-wide registry, built on first use.
    #[must_use]
    pub fn shared() -> &'static Self {
        SHARED.get_or_init(Self::new)
    }

    /// Add or replace the setter for `property`.
    pub fn register(&mut self, property: &'static str, setter: Setter) {
        let _ = self.setters.insert(property, setter);
    }

    /// Whether `property` has a setter.
    #[must_use]
    pub fn contains(&self, property: &str) -> bool {
        self.setters.contains_key(property)
    }

    /// Number of registered properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.setters.len()
    }

    /// Whether no property is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.setters.is_empty()
    }

    /// Run the setter for `property`. Returns `false` for an unknown property,
    /// leaving the style untouched.
    #[must_use]
    pub fn apply(&self, style: &mut ComputedStyle, property: &str, value: &str) -> bool {
        match self.setters.get(property) {
            Some(setter) => {
                setter(style, value);
                true
            }
            None => false,
        }
    }
}

impl Default for PropertyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::computed::{DisplayType, Position};

    fn apply(property: &str, value: &str) -> ComputedStyle {
        let mut style = ComputedStyle::default();
        assert!(PropertyRegistry::shared().apply(&mut style, property, value));
        style
    }

    #[test]
    fn test_unknown_property_is_ignored() {
        let mut style = ComputedStyle::default();
        assert!(!PropertyRegistry::shared().apply(&mut style, "float", "left"));
        assert_eq!(style, ComputedStyle::default());
    }

    #[test]
    fn test_shared_is_idempotent() {
        assert!(std::ptr::eq(PropertyRegistry::shared(), PropertyRegistry::shared()));
        assert!(PropertyRegistry::shared().contains("margin-left"));
    }

    #[test]
    fn test_unknown_display_falls_back_to_inline() {
        let mut style = apply("display", "block");
        assert!(PropertyRegistry::shared().apply(&mut style, "display", "grid"));
        assert_eq!(style.display, DisplayType::Inline);
    }

    #[test]
    fn test_invalid_length_uses_default() {
        let mut style = apply("margin-top", "10px");
        assert!(PropertyRegistry::shared().apply(&mut style, "margin-top", "lots"));
        assert!(style.margin.top.abs() < f32::EPSILON);
        assert!(kiwi_common::has_warned(
            "CSS",
            "invalid value 'lots' for 'margin-top', using the default"
        ));
    }

    #[test]
    fn test_width_auto_and_length() {
        assert_eq!(apply("width", "200px").width, Some(200.0));
        assert_eq!(apply("width", "auto").width, None);
        assert_eq!(apply("width", "wide").width, None);
    }

    #[test]
    fn test_border_style_unknown_is_none() {
        assert_eq!(apply("border-style", "groove").border_style, BorderStyle::None);
    }

    #[test]
    fn test_invalid_border_resets() {
        let style = apply("border", "1px wavy red");
        assert_eq!(style.border_width, EdgeSizes::default());
        assert_eq!(style.border_style, BorderStyle::Solid);
    }

    #[test]
    fn test_position() {
        assert_eq!(apply("position", "fixed").position, Position::Fixed);
        assert_eq!(apply("position", "sticky").position, Position::Static);
    }

    #[test]
    fn test_line_height() {
        assert!((apply("line-height", "30px").line_height - 30.0).abs() < f32::EPSILON);
        assert!((apply("line-height", "normal").line_height - 24.0).abs() < f32::EPSILON);
        assert!((apply("line-height", "tall").line_height - 24.0).abs() < f32::EPSILON);
    }
}
