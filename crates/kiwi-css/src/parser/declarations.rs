//! Declaration list scanner.
//!
//! [§ 5.3.8 Parse a list of declarations](https://www.w3.org/TR/css-syntax-3/#parse-list-of-declarations)

use crate::cssom::Declaration;

/// Scanner state for one declaration.
#[derive(Default)]
struct DeclarationScanner {
    declarations: Vec<Declaration>,
    name: String,
    value: String,
    in_value: bool,
    paren_depth: u32,
    quote: Option<char>,
}

impl DeclarationScanner {
    fn consume(&mut self, c: char) {
        if !self.in_value {
            match c {
                ':' => self.in_value = true,
                // A name with no value is discarded.
                ';' => self.name.clear(),
                c if c.is_whitespace() => {}
                c => self.name.push(c.to_ascii_lowercase()),
            }
            return;
        }

        match (c, self.quote) {
            (';', None) if self.paren_depth == 0 => self.finish(),
            (_, Some(quote)) => {
                if c == quote {
                    self.quote = None;
                }
                self.value.push(c);
            }
            ('"' | '\'', None) => {
                self.quote = Some(c);
                self.value.push(c);
            }
            ('(', None) => {
                self.paren_depth += 1;
                self.value.push(c);
            }
            (')', None) => {
                self.paren_depth = self.paren_depth.saturating_sub(1);
                self.value.push(c);
            }
            (c, None) if self.paren_depth > 0 => self.value.push(c),
            (c, None) => self.value.push(c.to_ascii_lowercase()),
        }
    }

    /// Emit the pending pair if both halves are non-empty, then reset.
    fn finish(&mut self) {
        let value = self.value.trim();
        if !self.name.is_empty() && !value.is_empty() {
            self.declarations
                .push(Declaration::new(self.name.as_str(), value));
        }
        self.name.clear();
        self.value.clear();
        self.in_value = false;
        self.paren_depth = 0;
        self.quote = None;
    }
}

/// Split a declaration list such as a `style` attribute into
/// `property: value` pairs, in source order.
///
/// - Property names are lowercased and lose all whitespace.
/// - Values are trimmed and lowercased, except text inside parentheses or
///   quotes, which keeps its case.
/// - `;` ends a declaration only outside parentheses and quotes, so
///   `url(a;b)` stays one value.
/// - The last declaration does not need a trailing `;`.
/// - Pairs with an empty name or value are dropped.
///
/// A property may appear more than once; applying the pairs in order lets
/// the last one win.
#[must_use]
pub fn parse_inline_style(style: &str) -> Vec<Declaration> {
    let mut scanner = DeclarationScanner::default();
    for c in style.chars() {
        scanner.consume(c);
    }
    scanner.finish();
    scanner.declarations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(style: &str) -> Vec<(String, String)> {
        parse_inline_style(style)
            .into_iter()
            .map(|d| (d.property, d.value))
            .collect()
    }

    fn owned(expected: &[(&str, &str)]) -> Vec<(String, String)> {
        expected
            .iter()
            .map(|(p, v)| ((*p).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_basic_pairs() {
        assert_eq!(
            pairs("color: red; margin-top: 10px;"),
            owned(&[("color", "red"), ("margin-top", "10px")])
        );
    }

    #[test]
    fn test_trailing_pair_without_semicolon() {
        assert_eq!(
            pairs("color: red; width: 50px"),
            owned(&[("color", "red"), ("width", "50px")])
        );
    }

    #[test]
    fn test_case_folding() {
        assert_eq!(
            pairs("COLOR: RED; Font-Family: \"Times New Roman\"; background: URL(Img.PNG)"),
            owned(&[
                ("color", "red"),
                ("font-family", "\"Times New Roman\""),
                ("background", "url(Img.PNG)"),
            ])
        );
    }

    #[test]
    fn test_semicolon_inside_parens_and_quotes() {
        assert_eq!(
            pairs("background: url(a;b); content: 'x;y'; color: blue"),
            owned(&[
                ("background", "url(a;b)"),
                ("content", "'x;y'"),
                ("color", "blue"),
            ])
        );
    }

    #[test]
    fn test_empty_parts_dropped() {
        assert_eq!(pairs(";;color:;: red; ; width : 1px"), owned(&[("width", "1px")]));
        assert!(pairs("").is_empty());
        assert!(pairs("   ").is_empty());
    }

    #[test]
    fn test_duplicates_kept_in_order() {
        assert_eq!(
            pairs("color: red; color: blue"),
            owned(&[("color", "red"), ("color", "blue")])
        );
    }

    #[test]
    fn test_colon_in_value() {
        assert_eq!(
            pairs("background: url(http://x/y.png)"),
            owned(&[("background", "url(http://x/y.png)")])
        );
    }
}
