//! The CSS object model: an ordered list of single-selector rules.

use kiwi_dom::ElementData;
use serde::Serialize;

use crate::selector::{Selector, Specificity};

/// A `property: value` pair.
///
/// The property name is lowercase. The value is trimmed and lowercase
/// except inside parentheses and quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    /// The property name.
    pub property: String,
    /// The raw value text.
    pub value: String,
}

impl Declaration {
    /// Create a declaration.
    #[must_use]
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// A style rule with exactly one selector.
///
/// A rule with a selector list such as `h1, h2 { … }` is stored as one rule
/// per selector, each carrying a copy of the declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    /// The rule's selector.
    pub selector: Selector,
    /// Cached `selector.specificity()`.
    pub specificity: Specificity,
    /// Position of the rule in the sheet it came from, counting from 0.
    pub source_order: usize,
    /// Declarations in source order.
    pub declarations: Vec<Declaration>,
}

/// An ordered collection of rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cssom {
    rules: Vec<Rule>,
}

impl Cssom {
    /// An empty sheet.
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule after all existing ones.
    pub fn push_rule(&mut self, selector: Selector, declarations: Vec<Declaration>) {
        let specificity = selector.specificity();
        self.rules.push(Rule {
            selector,
            specificity,
            source_order: self.rules.len(),
            declarations,
        });
    }

    /// Append every rule of `other`, so that it wins ties against this sheet.
    pub fn append(&mut self, other: Self) {
        for rule in other.rules {
            self.push_rule(rule.selector, rule.declarations);
        }
    }

    /// All rules in source order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the sheet has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// [§ 6.1 Cascade Sorting Order](https://www.w3.org/TR/css-cascade-4/#cascade-sort)
    ///
    /// The rules matching `element`, ordered so that applying their
    /// declarations first to last lets the winner write last: ascending
    /// specificity, and source order among equal specificities.
    #[must_use]
    pub fn matching_rules(&self, element: &ElementData) -> Vec<&Rule> {
        let mut matched: Vec<&Rule> = self
            .rules
            .iter()
            .filter(|rule| rule.selector.matches(element))
            .collect();
        // Stable, so equal specificities keep source order.
        matched.sort_by_key(|rule| rule.specificity);
        matched
    }
}
