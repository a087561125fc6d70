//! Markup scanner.
//!
//! The tokenizer walks the input once. At a `<` it looks for the next `>`
//! and turns everything in between into a tag token; everything else up to
//! the next `<` becomes a text token. Markup declarations (`<!DOCTYPE>`,
//! `<!-- comments -->`, `<?xml ?>`) are skipped.

use kiwi_common::warn_once;
use thiserror::Error;

use super::token::{Attribute, Token};

/// Tokenization failure.
///
/// The tokenizer recovers from everything except a tag that never closes,
/// because there is no sensible place to end it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    /// A `<` with no `>` anywhere after it.
    #[error("malformed markup: no closing '>' for the tag opened at byte {position}")]
    MalformedMarkup {
        /// Byte offset of the unmatched `<`.
        position: usize,
    },
}

/// Splits an HTML string into [`Token`]s.
pub struct HTMLTokenizer {
    /// The full input.
    input: String,

    /// Byte offset of the next unread character.
    current_pos: usize,

    /// Tokens emitted so far.
    token_stream: Vec<Token>,
}

impl HTMLTokenizer {
    /// Create a tokenizer over `input`.
    #[must_use]
    pub const fn new(input: String) -> Self {
        Self {
            input,
            current_pos: 0,
            token_stream: Vec::new(),
        }
    }

    /// Tokenize the whole input.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizeError::MalformedMarkup`] if a `<` has no matching
    /// `>`. Tokens emitted before the error are kept and can still be read
    /// with [`Self::tokens`].
    pub fn run(&mut self) -> Result<(), TokenizeError> {
        while self.current_pos < self.input.len() {
            if self.input[self.current_pos..].starts_with('<') {
                self.consume_tag()?;
            } else {
                self.consume_text();
            }
        }
        Ok(())
    }

    /// Tokens emitted so far.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.token_stream
    }

    /// Consume the tokenizer and return its tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.token_stream
    }

    fn emit(&mut self, token: Token) {
        self.token_stream.push(token);
    }

    /// Everything up to the next `<` (or the end of input) is one text run.
    fn consume_text(&mut self) {
        let rest = &self.input[self.current_pos..];
        let len = rest.find('<').unwrap_or(rest.len());
        let token = Token::text(&rest[..len]);
        self.current_pos += len;
        self.emit(token);
    }

    fn consume_tag(&mut self) -> Result<(), TokenizeError> {
        let start = self.current_pos;
        let rest = &self.input[start..];

        // Comments may contain '>' so they end at "-->" rather than at the
        // first '>'.
        if rest.starts_with("<!--") {
            let Some(end) = rest.find("-->") else {
                return Err(TokenizeError::MalformedMarkup { position: start });
            };
            self.current_pos = start + end + "-->".len();
            return Ok(());
        }

        let Some(close) = rest.find('>') else {
            return Err(TokenizeError::MalformedMarkup { position: start });
        };
        let body = &rest[1..close];
        let token = if body.starts_with('!') || body.starts_with('?') {
            warn_once("HTML Tokenizer", "skipping markup declaration");
            None
        } else if let Some(name) = body.strip_prefix('/') {
            Some(Token::end_tag(name.trim()))
        } else {
            Self::start_tag(body)
        };

        self.current_pos = start + close + 1;
        if let Some(token) = token {
            self.emit(token);
        }
        Ok(())
    }

    /// Build a start tag from the text between `<` and `>`.
    fn start_tag(body: &str) -> Option<Token> {
        // STEP 1: A trailing '/' marks a self-closing tag. The tree builder
        //         decides which elements are void, so the slash is dropped.
        let body = body.trim();
        let body = body.strip_suffix('/').unwrap_or(body).trim_end();

        // STEP 2: The name runs up to the first whitespace.
        let (name, attributes) = match body.split_once(|c: char| c.is_ascii_whitespace()) {
            Some((name, rest)) => (name, parse_attributes(rest)),
            None => (body, Vec::new()),
        };

        if name.is_empty() {
            warn_once("HTML Tokenizer", "skipping tag with an empty name");
            return None;
        }
        Some(Token::start_tag(name, attributes))
    }
}

/// Parse the attribute part of a start tag.
///
/// Attributes are separated by whitespace and written `name="value"` or
/// `name='value'`. Unquoted values, valueless attributes and empty values
/// are dropped with a warning; a value whose quote never closes ends the
/// attribute list.
fn parse_attributes(input: &str) -> Vec<Attribute> {
    let mut attributes = Vec::new();
    let mut rest = input.trim_start();

    while !rest.is_empty() {
        let name_end = rest
            .find(|c: char| c == '=' || c.is_ascii_whitespace())
            .unwrap_or(rest.len());
        let name = &rest[..name_end];
        rest = rest[name_end..].trim_start();

        let Some(after_eq) = rest.strip_prefix('=') else {
            if !name.is_empty() {
                warn_once(
                    "HTML Tokenizer",
                    &format!("dropping attribute '{name}' without a value"),
                );
            }
            continue;
        };
        let after_eq = after_eq.trim_start();

        match after_eq.chars().next() {
            Some(quote @ ('"' | '\'')) => {
                let quoted = &after_eq[1..];
                let Some(end) = quoted.find(quote) else {
                    warn_once(
                        "HTML Tokenizer",
                        &format!("unterminated value for attribute '{name}'"),
                    );
                    break;
                };
                let value = &quoted[..end];
                if name.is_empty() || value.is_empty() {
                    warn_once(
                        "HTML Tokenizer",
                        &format!("dropping empty attribute '{name}'"),
                    );
                } else {
                    attributes.push(Attribute::new(name, value));
                }
                rest = quoted[end + 1..].trim_start();
            }
            _ => {
                warn_once(
                    "HTML Tokenizer",
                    &format!("dropping unquoted value for attribute '{name}'"),
                );
                let end = after_eq
                    .find(|c: char| c.is_ascii_whitespace())
                    .unwrap_or(after_eq.len());
                rest = after_eq[end..].trim_start();
            }
        }
    }

    attributes
}

/// Tokenize `html` in one call.
///
/// # Errors
///
/// Returns [`TokenizeError::MalformedMarkup`] if a `<` has no matching `>`.
pub fn tokenize(html: &str) -> Result<Vec<Token>, TokenizeError> {
    let mut tokenizer = HTMLTokenizer::new(html.to_string());
    tokenizer.run()?;
    Ok(tokenizer.into_tokens())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_list() {
        let attrs = parse_attributes(r#"href="/a" class='x y'  id = "main""#);
        assert_eq!(
            attrs,
            vec![
                Attribute::new("href", "/a"),
                Attribute::new("class", "x y"),
                Attribute::new("id", "main"),
            ]
        );
    }

    #[test]
    fn test_attribute_value_keeps_other_quote() {
        let attrs = parse_attributes(r#"title="it's""#);
        assert_eq!(attrs, vec![Attribute::new("title", "it's")]);
    }

    #[test]
    fn test_unquoted_and_boolean_attributes_dropped() {
        let attrs = parse_attributes(r#"disabled width=10 alt="" src="a.png""#);
        assert_eq!(attrs, vec![Attribute::new("src", "a.png")]);
        assert!(kiwi_common::has_warned(
            "HTML Tokenizer",
            "dropping unquoted value for attribute 'width'"
        ));
    }

    #[test]
    fn test_unterminated_value_ends_list() {
        let attrs = parse_attributes(r#"a="1" b="never closed c="3"#);
        assert_eq!(
            attrs,
            vec![Attribute::new("a", "1"), Attribute::new("b", "never closed c=")]
        );
        let attrs = parse_attributes(r#"a="1" b='never closed"#);
        assert_eq!(attrs, vec![Attribute::new("a", "1")]);
    }

    #[test]
    fn test_lone_equals_does_not_loop() {
        let attrs = parse_attributes(r#"= ="x" a="1""#);
        assert_eq!(attrs, vec![Attribute::new("a", "1")]);
    }
}
