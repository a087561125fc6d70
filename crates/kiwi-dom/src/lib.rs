//! DOM tree implementation for the Kiwi engine.
//!
//! The tree is produced by the HTML tree builder and is read-only for every
//! later stage: the style resolver and the layout engine only ever borrow it.
//!
//! # Design
//!
//! Nodes live in a single arena and refer to each other through [`NodeId`]
//! indices. Parent links are plain indices, so there are no reference cycles
//! and a whole document is freed by dropping its [`DomTree`].
//!
//! A tree may be empty: markup consisting only of whitespace produces no
//! nodes, and [`DomTree::root`] then returns `None`.

use std::collections::HashMap;

use serde::Serialize;

/// Map of attribute names to values for an element.
pub type AttributesMap = HashMap<String, String>;

/// A type-safe index into the DOM tree.
///
/// Indices are assigned in allocation order, which for a parsed document is
/// document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

/// A single node of the document.
#[derive(Debug, Clone)]
pub struct Node {
    /// Element or text payload.
    pub node_type: NodeType,

    /// The element this node was appended to, `None` for the root.
    pub parent: Option<NodeId>,

    /// Children in document order.
    pub children: Vec<NodeId>,
}

/// The two kinds of node the engine understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeType {
    /// A tag with its attributes.
    Element(ElementData),
    /// A run of character data. Text nodes never have children.
    Text(String),
}

/// Element-specific data.
///
/// Tag and attribute names are stored exactly as they appeared in the
/// markup; no case folding is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    /// The element's tag name.
    pub tag_name: String,
    /// The element's attributes. A repeated attribute keeps its last value.
    pub attrs: AttributesMap,
}

impl ElementData {
    /// Create an element with no attributes.
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attrs: AttributesMap::new(),
        }
    }

    /// Look up an attribute value by name.
    #[must_use]
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Returns the element's id attribute value if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.get_attribute("id")
    }

    /// Returns the class names from the class attribute, in attribute order.
    ///
    /// The attribute is a whitespace-separated token list; empty tokens are
    /// skipped.
    #[must_use]
    pub fn classes(&self) -> Vec<&str> {
        self.get_attribute("class")
            .map(|list| list.split_ascii_whitespace().collect())
            .unwrap_or_default()
    }

    /// Whether the class attribute contains `class_name`.
    #[must_use]
    pub fn has_class(&self, class_name: &str) -> bool {
        self.classes().contains(&class_name)
    }
}

/// Arena-based DOM tree with O(1) node access.
///
/// All nodes are stored in a contiguous vector and linked by index. The root
/// is whichever node the tree builder designated; it is the first element
/// the builder saw, or a synthesized `html` element when the markup starts
/// with text.
#[derive(Debug, Clone, Default)]
pub struct DomTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl DomTree {
    /// Create an empty tree with no root.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// The root node, or `None` for an empty document.
    #[must_use]
    pub const fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Designate `id` as the root of the tree.
    pub const fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    /// Get a node by ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Number of allocated nodes, including any that were never attached.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node has been allocated yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new detached node and return its ID.
    pub fn alloc(&mut self, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            node_type,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// Out-of-range IDs are ignored.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent.0 >= self.nodes.len() || child.0 >= self.nodes.len() {
            return;
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|node| node.parent)
    }

    /// Get the children of a node, empty for unknown IDs.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.get(id) {
            Some(node) => &node.children,
            None => &[],
        }
    }

    /// The element payload of a node, if it is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        match &self.get(id)?.node_type {
            NodeType::Element(data) => Some(data),
            NodeType::Text(_) => None,
        }
    }

    /// The character data of a node, if it is a text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        match &self.get(id)?.node_type {
            NodeType::Text(text) => Some(text),
            NodeType::Element(_) => None,
        }
    }

    /// The tag name of an element node.
    #[must_use]
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.as_element(id).map(|data| data.tag_name.as_str())
    }

    /// Look up an attribute on an element node.
    #[must_use]
    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.as_element(id)?.get_attribute(name)
    }

    /// Iterate over every node reachable from the root, in document order
    /// (depth-first, pre-order).
    #[must_use]
    pub fn iter_all(&self) -> DocumentOrderIterator<'_> {
        DocumentOrderIterator {
            tree: self,
            stack: self.root.into_iter().collect(),
        }
    }

    /// All elements with the given tag name, in document order.
    #[must_use]
    pub fn elements_by_tag_name(&self, tag_name: &str) -> Vec<NodeId> {
        self.iter_all()
            .filter(|&id| self.tag_name(id) == Some(tag_name))
            .collect()
    }
}

/// Pre-order walk over the nodes reachable from the root.
pub struct DocumentOrderIterator<'a> {
    tree: &'a DomTree,
    stack: Vec<NodeId>,
}

impl Iterator for DocumentOrderIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}
