//! CSS Parser per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing),
//! reduced to what the engine can use.
//!
//! Comments are removed first. At-rules are skipped whole. Every qualified
//! rule contributes one [`Rule`](crate::cssom::Rule) per supported selector
//! in its selector list; unsupported selectors are dropped with a warning.

use kiwi_common::warn_once;

use super::declarations::parse_inline_style;
use crate::cssom::Cssom;
use crate::selector::parse_selector;

/// Parses a stylesheet into a [`Cssom`].
pub struct CSSParser {
    /// Stylesheet text with comments removed.
    input: String,
    /// Byte offset of the next unread character.
    position: usize,
}

/// [§ 4.3.2 Consume comments](https://www.w3.org/TR/css-syntax-3/#consume-comment)
///
/// Remove every `/* … */`. An unterminated comment runs to the end of input.
fn strip_comments(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("/*") {
        output.push_str(&rest[..start]);
        rest = match rest[start + 2..].find("*/") {
            Some(end) => &rest[start + 2 + end + 2..],
            None => "",
        };
    }
    output.push_str(rest);
    output
}

impl CSSParser {
    /// Create a parser over `input`.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            input: strip_comments(input),
            position: 0,
        }
    }

    fn remaining(&self) -> &str {
        &self.input[self.position..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.remaining();
        self.position += rest.len() - rest.trim_start().len();
    }

    /// [§ 5.3.3 Consume a list of rules](https://www.w3.org/TR/css-syntax-3/#consume-list-of-rules)
    #[must_use]
    pub fn parse_stylesheet(mut self) -> Cssom {
        let mut cssom = Cssom::new();
        loop {
            self.skip_whitespace();
            if self.remaining().is_empty() {
                break;
            }
            if self.remaining().starts_with('@') {
                self.consume_at_rule();
            } else if !self.consume_qualified_rule(&mut cssom) {
                break;
            }
        }
        cssom
    }

    /// Byte length of the `{ … }` block at the start of `text`, counting
    /// nested braces. An unclosed block runs to the end of input.
    fn block_len(text: &str) -> usize {
        let mut depth = 0usize;
        for (i, c) in text.char_indices() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return i + 1;
                    }
                }
                _ => {}
            }
        }
        text.len()
    }

    /// [§ 5.4.2 Consume an at-rule](https://www.w3.org/TR/css-syntax-3/#consume-at-rule)
    ///
    /// At-rules are not supported; this skips to the end of the statement
    /// (`;`) or past its block.
    fn consume_at_rule(&mut self) {
        let rest = self.remaining();
        let name_len = rest[1..]
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
            .map_or(rest.len(), |len| len + 1);
        warn_once("CSS", &format!("ignoring unsupported at-rule {}", &rest[..name_len]));

        let skipped = match rest.find([';', '{']) {
            Some(i) if rest[i..].starts_with(';') => i + 1,
            Some(i) => i + Self::block_len(&rest[i..]),
            None => rest.len(),
        };
        self.position += skipped;
    }

    /// [§ 5.4.3 Consume a qualified rule](https://www.w3.org/TR/css-syntax-3/#consume-qualified-rule)
    ///
    /// Returns `false` if the input ended before a block was found; the
    /// trailing prelude is discarded.
    fn consume_qualified_rule(&mut self, cssom: &mut Cssom) -> bool {
        let rest = self.remaining();
        let Some(open) = rest.find('{') else {
            warn_once("CSS", "discarding selector with no declaration block");
            return false;
        };
        let prelude = &rest[..open];
        let block_len = Self::block_len(&rest[open..]);
        let block = &rest[open..open + block_len];
        let body = block
            .strip_prefix('{')
            .map(|b| b.strip_suffix('}').unwrap_or(b))
            .unwrap_or(block);

        let declarations = parse_inline_style(body);
        let mut selectors = Vec::new();
        for text in prelude.split(',') {
            match parse_selector(text) {
                Some(selector) => selectors.push(selector),
                None => warn_once(
                    "CSS",
                    &format!("dropping unsupported selector '{}'", text.trim()),
                ),
            }
        }

        self.position += open + block_len;
        for selector in selectors {
            cssom.push_rule(selector, declarations.clone());
        }
        true
    }
}

/// Parse stylesheet text into a [`Cssom`].
///
/// Never fails: unsupported constructs are skipped with a warning.
#[must_use]
pub fn create_cssom(stylesheet: &str) -> Cssom {
    CSSParser::new(stylesheet).parse_stylesheet()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_comments() {
        assert_eq!(strip_comments("a /* x */ b /* y"), "a  b ");
        assert_eq!(strip_comments("no comments"), "no comments");
    }

    #[test]
    fn test_block_len_counts_nesting() {
        assert_eq!(CSSParser::block_len("{ a { b } c } rest"), 13);
        assert_eq!(CSSParser::block_len("{ open"), 6);
    }
}
