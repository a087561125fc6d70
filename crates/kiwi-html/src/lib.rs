//! HTML tokenizer and tree builder for the Kiwi engine.
//!
//! # Scope
//!
//! This crate implements a deliberately small HTML front end:
//! - **Tokenizer**: splits markup into start tags, end tags and text runs.
//!   Attribute values must be quoted; anything else is dropped with a
//!   warning.
//! - **Tree builder**: a stack of open elements that never rejects input.
//!   Leading text gets an implicit `html`/`body` wrapper, void elements are
//!   never pushed, and every end tag pops the innermost open element.
//!
//! # Not Implemented
//!
//! - Character references (`&amp;` stays literal)
//! - Raw text elements (`<script>` and `<style>` bodies must not contain `<`)
//! - Implied end tags, foster parenting, the adoption agency algorithm

/// Tree construction from a token stream.
pub mod parser;
/// Tokenizer for converting markup into tokens.
pub mod tokenizer;

pub use parser::{EndTagPolicy, HTMLParser, ParseIssue, VOID_ELEMENTS, parse, print_tree};
pub use tokenizer::{Attribute, HTMLTokenizer, Token, TokenizeError, tokenize};
