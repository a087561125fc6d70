//! CSS text to declarations and rules.
//!
//! The declaration scanner is shared between the `style` attribute and the
//! body of every rule in a stylesheet, so both lowercase and trim values the
//! same way.

/// Declaration list scanner.
pub mod declarations;
/// Stylesheet parser.
pub mod stylesheet;

pub use declarations::parse_inline_style;
pub use stylesheet::{CSSParser, create_cssom};
