//! The style model: computed values, value parsers and the property table.

/// Color values.
pub mod color;
/// `ComputedStyle` and its keyword enums.
pub mod computed;
/// Property name to setter table.
pub mod registry;
/// Value parsers.
pub mod values;

pub use color::ColorValue;
pub use computed::{
    BorderStyle, BoxSizing, ComputedStyle, DisplayType, FontStyle, InheritedProperties, Position,
    TextAlign, TextDecoration, Visibility,
};
pub use registry::{PropertyRegistry, Setter};
