//! HTML parser module for tree construction.

/// Stack-of-open-elements tree builder.
pub mod core;

pub use self::core::{EndTagPolicy, HTMLParser, ParseIssue, VOID_ELEMENTS, parse, print_tree};
