//! Token types shared by the tokenizer and the tree builder.

use core::fmt;

/// A `name="value"` pair on a start tag.
///
/// Only quoted values survive tokenization, so `value` is always the text
/// between the quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name, verbatim.
    pub name: String,
    /// Attribute value without the surrounding quotes.
    pub value: String,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The tokenizer emits tokens of these types to the tree builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `<name attr="value" ...>`, also used for self-closing `<name/>`.
    StartTag {
        /// The tag name, verbatim.
        name: String,
        /// Attributes in source order. Duplicates are kept here; the tree
        /// builder lets the last one win.
        attributes: Vec<Attribute>,
    },

    /// `</name>`.
    EndTag {
        /// The tag name, verbatim.
        name: String,
    },

    /// Character data between two tags, whitespace included.
    Text {
        /// The raw characters.
        data: String,
    },
}

impl Token {
    /// Create a start tag token.
    #[must_use]
    pub fn start_tag(name: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Self::StartTag {
            name: name.into(),
            attributes,
        }
    }

    /// Create an end tag token.
    #[must_use]
    pub fn end_tag(name: impl Into<String>) -> Self {
        Self::EndTag { name: name.into() }
    }

    /// Create a text token.
    #[must_use]
    pub fn text(data: impl Into<String>) -> Self {
        Self::Text { data: data.into() }
    }

    /// The tag name for tag tokens, `None` for text.
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Self::StartTag { name, .. } | Self::EndTag { name } => Some(name),
            Self::Text { .. } => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartTag { name, attributes } => {
                write!(f, "StartTag <{name}")?;
                for attr in attributes {
                    write!(f, " {}=\"{}\"", attr.name, attr.value)?;
                }
                write!(f, ">")
            }
            Self::EndTag { name } => write!(f, "EndTag </{name}>"),
            Self::Text { data } => write!(f, "Text {data:?}"),
        }
    }
}
