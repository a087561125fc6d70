//! HTML tokenizer module.

/// Tokenizer scanning loop.
pub mod core;
/// Token types produced by the tokenizer.
pub mod token;

pub use self::core::{HTMLTokenizer, TokenizeError, tokenize};
pub use token::{Attribute, Token};
