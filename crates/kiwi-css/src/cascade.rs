//! CSS Cascading and Style Computation
//!
//! This module implements style computation per
//! [CSS Cascading and Inheritance Level 4](https://www.w3.org/TR/css-cascade-4/),
//! reduced to three origins applied in a fixed order: inheritance from the
//! parent, matching rules (ascending specificity, then source order), and
//! the element's `style` attribute.

use std::collections::VecDeque;
use std::ops::Index;

use kiwi_common::warn_once;
use kiwi_dom::{DomTree, NodeId};

use crate::cssom::Cssom;
use crate::parser::parse_inline_style;
use crate::style::{ComputedStyle, InheritedProperties, PropertyRegistry};

/// One [`ComputedStyle`] per node of a [`DomTree`], indexed by [`NodeId`].
///
/// Every slot starts at the initial values, so a node always has a fully
/// populated style even before the resolver runs.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleMap {
    styles: Vec<ComputedStyle>,
}

impl StyleMap {
    /// Initial styles for every node of `tree`.
    #[must_use]
    pub fn new(tree: &DomTree) -> Self {
        Self {
            styles: vec![ComputedStyle::default(); tree.len()],
        }
    }

    /// The style of `id`, if the node exists.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&ComputedStyle> {
        self.styles.get(id.0)
    }

    /// Mutable access to the style of `id`.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut ComputedStyle> {
        self.styles.get_mut(id.0)
    }

    /// Number of styles (the node count of the tree it was built for).
    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether the map holds no styles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// `(NodeId, &ComputedStyle)` pairs in node order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &ComputedStyle)> {
        self.styles
            .iter()
            .enumerate()
            .map(|(index, style)| (NodeId(index), style))
    }
}

impl Index<NodeId> for StyleMap {
    type Output = ComputedStyle;

    fn index(&self, id: NodeId) -> &ComputedStyle {
        &self.styles[id.0]
    }
}

/// Resolves the computed style of every node in a tree.
#[derive(Debug, Clone, Copy)]
pub struct StyleResolver<'r> {
    registry: &'r PropertyRegistry,
}

impl Default for StyleResolver<'static> {
    fn default() -> Self {
        Self::new(PropertyRegistry::shared())
    }
}

impl<'r> StyleResolver<'r> {
    /// A resolver using `registry` to apply declarations.
    #[must_use]
    pub const fn new(registry: &'r PropertyRegistry) -> Self {
        Self { registry }
    }

    /// Apply one declaration, warning about properties nobody handles.
    fn apply_declaration(&self, style: &mut ComputedStyle, property: &str, value: &str) {
        if !self.registry.apply(style, property, value) {
            warn_once("CSS", &format!("ignoring unsupported property '{property}'"));
        }
    }

    /// [§ 6 Cascading](https://www.w3.org/TR/css-cascade-4/#cascading)
    ///
    /// Resolve styles for the whole tree in breadth-first order, mutating
    /// `styles` in place. Each node:
    ///
    /// 1. inherits the inheritable properties of its parent (the root keeps
    ///    the initial values),
    /// 2. applies the declarations of every matching rule, lowest
    ///    specificity first,
    /// 3. applies its `style` attribute.
    ///
    /// Text nodes only inherit.
    pub fn apply_style(&self, tree: &DomTree, cssom: &Cssom, styles: &mut StyleMap) {
        let Some(root) = tree.root() else { return };

        // A parent is fully resolved before any of its children is dequeued.
        let mut queue: VecDeque<(NodeId, Option<InheritedProperties>)> =
            VecDeque::from([(root, None)]);

        while let Some((id, inherited)) = queue.pop_front() {
            let Some(style) = styles.get_mut(id) else {
                continue;
            };

            if let Some(parent) = &inherited {
                style.inherit(parent);
            }

            if let Some(element) = tree.as_element(id) {
                for rule in cssom.matching_rules(element) {
                    for declaration in &rule.declarations {
                        self.apply_declaration(style, &declaration.property, &declaration.value);
                    }
                }
                if let Some(inline) = element.get_attribute("style") {
                    for declaration in parse_inline_style(inline) {
                        self.apply_declaration(style, &declaration.property, &declaration.value);
                    }
                }
            }

            let resolved = InheritedProperties::from(&*style);
            for &child in tree.children(id) {
                queue.push_back((child, Some(resolved.clone())));
            }
        }
    }
}

/// Build a [`StyleMap`] for `tree` and resolve it against `cssom` with the
/// shared property registry.
#[must_use]
pub fn compute_styles(tree: &DomTree, cssom: &Cssom) -> StyleMap {
    let mut styles = StyleMap::new(tree);
    StyleResolver::default().apply_style(tree, cssom, &mut styles);
    styles
}
