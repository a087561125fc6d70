//! Tree construction.
//!
//! The builder keeps a stack of open elements and processes one token at a
//! time. It never fails: structural problems (an end tag that does not
//! match, an element that is never closed) are recorded as [`ParseIssue`]s
//! and the tree is built anyway.

use kiwi_common::warn_once;
use kiwi_dom::{DomTree, ElementData, NodeId, NodeType};

use crate::tokenizer::{Attribute, Token};

/// Elements that never receive children. Their start tag creates the
/// element but does not push it onto the stack of open elements.
pub const VOID_ELEMENTS: [&str; 6] = ["meta", "link", "img", "br", "hr", "input"];

/// What an end tag does to the stack of open elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndTagPolicy {
    /// Pop the innermost open element whatever its name. `<b><i>x</b></i>`
    /// therefore closes `i` first and `b` second. A mismatch is recorded as a
    /// parse issue but does not change the outcome.
    #[default]
    PopUnconditionally,
}

/// A recoverable problem found while building the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// Human readable description.
    pub message: String,
    /// Index into the token stream where the issue was noticed. Issues found
    /// after the last token carry the stream length.
    pub token_index: usize,
}

/// Builds a [`DomTree`] from a token stream.
pub struct HTMLParser {
    /// Input tokens from the tokenizer.
    tokens: Vec<Token>,

    /// The tree under construction.
    tree: DomTree,

    /// Innermost open element last.
    stack_of_open_elements: Vec<NodeId>,

    /// How end tags are matched.
    end_tag_policy: EndTagPolicy,

    /// Issues encountered so far.
    issues: Vec<ParseIssue>,

    /// Index of the token being processed.
    token_index: usize,
}

impl HTMLParser {
    /// Create a new parser from a token stream.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            tree: DomTree::new(),
            stack_of_open_elements: Vec::new(),
            end_tag_policy: EndTagPolicy::default(),
            issues: Vec::new(),
            token_index: 0,
        }
    }

    /// The end tag policy in effect.
    #[must_use]
    pub const fn end_tag_policy(&self) -> EndTagPolicy {
        self.end_tag_policy
    }

    /// Run the parser and return the DOM tree.
    #[must_use]
    pub fn run(self) -> DomTree {
        self.run_with_issues().0
    }

    /// Run the parser and return both the `DomTree` and any parse issues.
    #[must_use]
    pub fn run_with_issues(mut self) -> (DomTree, Vec<ParseIssue>) {
        let tokens = std::mem::take(&mut self.tokens);
        let token_count = tokens.len();
        for (index, token) in tokens.into_iter().enumerate() {
            self.token_index = index;
            self.process_token(token);
        }
        self.token_index = token_count;

        let unclosed: Vec<String> = self
            .stack_of_open_elements
            .iter()
            .filter_map(|&id| self.tree.tag_name(id).map(str::to_string))
            .collect();
        for tag_name in unclosed {
            self.parse_issue(&format!("element <{tag_name}> was never closed"));
        }

        (self.tree, self.issues)
    }

    fn parse_issue(&mut self, message: &str) {
        warn_once("HTML Parser", message);
        self.issues.push(ParseIssue {
            message: message.to_string(),
            token_index: self.token_index,
        });
    }

    fn process_token(&mut self, token: Token) {
        match token {
            Token::Text { data } => self.insert_text(&data),
            Token::StartTag { name, attributes } => self.insert_element(name, attributes),
            Token::EndTag { name } => self.close_element(&name),
        }
    }

    /// The element new nodes are appended to, or `None` when the stack of
    /// open elements is empty.
    ///
    /// With an empty stack a start tag becomes the root and text gets a new
    /// `<html><body>` pair. If a root already exists it is replaced, which is
    /// recorded as an issue.
    fn current_node(&mut self) -> Option<NodeId> {
        let current = self.stack_of_open_elements.last().copied();
        if current.is_none() && self.tree.root().is_some() {
            self.parse_issue("content after the root element was closed replaces the root");
        }
        current
    }

    fn insert_text(&mut self, data: &str) {
        // Whitespace between tags is not content.
        let text = data.trim();
        if text.is_empty() {
            return;
        }

        let parent = match self.current_node() {
            Some(parent) => parent,
            None => self.synthesize_document_wrapper(),
        };
        let text_node = self.tree.alloc(NodeType::Text(text.to_string()));
        self.tree.append_child(parent, text_node);
    }

    /// Create the implicit `<html><body>` pair for text that arrives with no
    /// open element, make `html` the root and return the `body`.
    fn synthesize_document_wrapper(&mut self) -> NodeId {
        let html = self.tree.alloc(NodeType::Element(ElementData::new("html")));
        self.tree.set_root(html);
        let body = self.tree.alloc(NodeType::Element(ElementData::new("body")));
        self.tree.append_child(html, body);
        self.stack_of_open_elements.push(html);
        self.stack_of_open_elements.push(body);
        body
    }

    fn insert_element(&mut self, name: String, attributes: Vec<Attribute>) {
        let mut data = ElementData::new(name);
        for attr in attributes {
            let _ = data.attrs.insert(attr.name, attr.value);
        }
        let is_void = VOID_ELEMENTS.contains(&data.tag_name.as_str());

        let element = self.tree.alloc(NodeType::Element(data));
        match self.current_node() {
            Some(parent) => self.tree.append_child(parent, element),
            None => self.tree.set_root(element),
        }

        if !is_void {
            self.stack_of_open_elements.push(element);
        }
    }

    fn close_element(&mut self, name: &str) {
        match self.end_tag_policy {
            EndTagPolicy::PopUnconditionally => {
                let Some(popped) = self.stack_of_open_elements.pop() else {
                    self.parse_issue(&format!("end tag </{name}> with no open element"));
                    return;
                };
                let open_name = self.tree.tag_name(popped).unwrap_or_default().to_string();
                if open_name != name {
                    self.parse_issue(&format!("end tag </{name}> closed open element <{open_name}>"));
                }
            }
        }
    }
}

/// Build a tree from `tokens` in one call.
///
/// An input with no elements and no non-whitespace text yields a tree whose
/// [`DomTree::root`] is `None`.
#[must_use]
pub fn parse(tokens: Vec<Token>) -> DomTree {
    HTMLParser::new(tokens).run()
}

/// Print a DOM tree for debugging.
pub fn print_tree(tree: &DomTree, id: NodeId, indent: usize) {
    let prefix = "  ".repeat(indent);
    if let Some(node) = tree.get(id) {
        match &node.node_type {
            NodeType::Element(data) => {
                if data.attrs.is_empty() {
                    println!("{prefix}<{}>", data.tag_name);
                } else {
                    let mut attrs: Vec<String> = data
                        .attrs
                        .iter()
                        .map(|(k, v)| format!("{k}=\"{v}\""))
                        .collect();
                    attrs.sort();
                    println!("{prefix}<{} {}>", data.tag_name, attrs.join(" "));
                }
            }
            NodeType::Text(data) => {
                println!("{prefix}\"{data}\"");
            }
        }
        for &child_id in tree.children(id) {
            print_tree(tree, child_id, indent + 1);
        }
    }
}
