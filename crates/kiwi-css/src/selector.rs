//! Simple selectors and specificity.
//!
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/)
//!
//! Only single simple selectors are supported: a type, a class, an id or
//! the universal selector. Compound and complex selectors are rejected by
//! [`parse_selector`] and dropped by the stylesheet parser.

use core::fmt;

use kiwi_dom::ElementData;
use serde::Serialize;

/// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
/// "A selector's specificity is calculated for a given element as follows:
///  - count the number of ID selectors in the selector (= A)
///  - count the number of class selectors, attributes selectors, and pseudo-classes in the selector (= B)
///  - count the number of type selectors and pseudo-elements in the selector (= C)
///
/// Specificities are compared by comparing the three components in order."
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.0, self.1, self.2)
    }
}

/// A single simple selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Selector {
    /// [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#the-universal-selector) `*`
    Universal,
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors) `p`
    Type(String),
    /// [§ 6.6 Class selectors](https://www.w3.org/TR/selectors-4/#class-html) `.note`
    Class(String),
    /// [§ 6.7 ID selectors](https://www.w3.org/TR/selectors-4/#id-selectors) `#main`
    Id(String),
}

impl Selector {
    /// This selector's specificity.
    #[must_use]
    pub const fn specificity(&self) -> Specificity {
        match self {
            Self::Universal => Specificity(0, 0, 0),
            Self::Type(_) => Specificity(0, 0, 1),
            Self::Class(_) => Specificity(0, 1, 0),
            Self::Id(_) => Specificity(1, 0, 0),
        }
    }

    /// Whether the selector matches `element`.
    ///
    /// Type selectors compare tag names ASCII case-insensitively; class and
    /// id selectors are case-sensitive.
    #[must_use]
    pub fn matches(&self, element: &ElementData) -> bool {
        match self {
            Self::Universal => true,
            Self::Type(tag) => element.tag_name.eq_ignore_ascii_case(tag),
            Self::Class(class) => element.has_class(class),
            Self::Id(id) => element.id() == Some(id.as_str()),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Universal => write!(f, "*"),
            Self::Type(tag) => write!(f, "{tag}"),
            Self::Class(class) => write!(f, ".{class}"),
            Self::Id(id) => write!(f, "#{id}"),
        }
    }
}

/// [§ 4.3 Identifiers](https://www.w3.org/TR/css-syntax-3/#ident-token-diagram),
/// without escapes or non-ASCII.
fn is_identifier(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Parse one selector from a selector list entry.
///
/// Returns `None` for anything other than a lone simple selector.
#[must_use]
pub fn parse_selector(text: &str) -> Option<Selector> {
    let text = text.trim();
    if text == "*" {
        return Some(Selector::Universal);
    }
    let (selector, name): (fn(String) -> Selector, &str) = if let Some(name) = text.strip_prefix('.') {
        (Selector::Class, name)
    } else if let Some(name) = text.strip_prefix('#') {
        (Selector::Id, name)
    } else {
        (Selector::Type, text)
    };
    is_identifier(name).then(|| selector(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(tag: &str, attrs: &[(&str, &str)]) -> ElementData {
        let mut data = ElementData::new(tag);
        for (name, value) in attrs {
            let _ = data.attrs.insert((*name).to_string(), (*value).to_string());
        }
        data
    }

    #[test]
    fn test_parse_simple_selectors() {
        assert_eq!(parse_selector("*"), Some(Selector::Universal));
        assert_eq!(parse_selector(" p "), Some(Selector::Type("p".to_string())));
        assert_eq!(parse_selector(".note"), Some(Selector::Class("note".to_string())));
        assert_eq!(parse_selector("#main"), Some(Selector::Id("main".to_string())));
        assert_eq!(parse_selector("h1"), Some(Selector::Type("h1".to_string())));
    }

    #[test]
    fn test_unsupported_selectors_rejected() {
        for text in ["div p", "p.note", "a:hover", "ul > li", "[href]", "", ".", "#1a", "p::before"] {
            assert_eq!(parse_selector(text), None, "{text:?} should be rejected");
        }
    }

    #[test]
    fn test_specificity_order() {
        let id = Selector::Id("x".to_string()).specificity();
        let class = Selector::Class("x".to_string()).specificity();
        let tag = Selector::Type("x".to_string()).specificity();
        assert!(id > class && class > tag && tag > Selector::Universal.specificity());
        assert_eq!(id.to_string(), "(1,0,0)");
    }

    #[test]
    fn test_matching() {
        let el = element("DIV", &[("id", "main"), ("class", "box wide")]);
        assert!(Selector::Universal.matches(&el));
        assert!(Selector::Type("div".to_string()).matches(&el));
        assert!(Selector::Class("wide".to_string()).matches(&el));
        assert!(!Selector::Class("Wide".to_string()).matches(&el));
        assert!(Selector::Id("main".to_string()).matches(&el));
        assert!(!Selector::Id("other".to_string()).matches(&el));
    }
}
