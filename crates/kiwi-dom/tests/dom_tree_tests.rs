//! Integration tests for the arena DOM tree.

use kiwi_dom::{DomTree, ElementData, NodeId, NodeType};

fn make_element(tag: &str) -> NodeType {
    NodeType::Element(ElementData::new(tag))
}

fn make_element_with_attrs(tag: &str, attrs: &[(&str, &str)]) -> NodeType {
    let mut data = ElementData::new(tag);
    for (name, value) in attrs {
        let _ = data.attrs.insert((*name).to_string(), (*value).to_string());
    }
    NodeType::Element(data)
}

/// Builds `<div><p>one</p><span/></div>` and returns the tree plus ids.
fn small_tree() -> (DomTree, NodeId, NodeId, NodeId, NodeId) {
    let mut tree = DomTree::new();
    let div = tree.alloc(make_element("div"));
    tree.set_root(div);
    let p = tree.alloc(make_element("p"));
    tree.append_child(div, p);
    let text = tree.alloc(NodeType::Text("one".to_string()));
    tree.append_child(p, text);
    let span = tree.alloc(make_element("span"));
    tree.append_child(div, span);
    (tree, div, p, text, span)
}

#[test]
fn test_empty_tree_has_no_root() {
    let tree = DomTree::new();
    assert!(tree.root().is_none());
    assert!(tree.is_empty());
    assert_eq!(tree.iter_all().count(), 0);
}

#[test]
fn test_append_child_links_parent() {
    let (tree, div, p, text, span) = small_tree();
    assert_eq!(tree.children(div), &[p, span]);
    assert_eq!(tree.parent(p), Some(div));
    assert_eq!(tree.parent(text), Some(p));
    assert_eq!(tree.parent(div), None);
}

#[test]
fn test_iter_all_is_document_order() {
    let (tree, div, p, text, span) = small_tree();
    let order: Vec<NodeId> = tree.iter_all().collect();
    assert_eq!(order, vec![div, p, text, span]);
}

#[test]
fn test_as_element_and_as_text() {
    let (tree, _, p, text, _) = small_tree();
    assert_eq!(tree.tag_name(p), Some("p"));
    assert!(tree.as_text(p).is_none());
    assert_eq!(tree.as_text(text), Some("one"));
    assert!(tree.as_element(text).is_none());
}

#[test]
fn test_unknown_id_is_harmless() {
    let (mut tree, div, ..) = small_tree();
    let missing = NodeId(99);
    assert!(tree.get(missing).is_none());
    assert!(tree.children(missing).is_empty());
    tree.append_child(div, missing);
    assert_eq!(tree.children(div).len(), 2);
}

#[test]
fn test_id_and_classes() {
    let mut tree = DomTree::new();
    let el = tree.alloc(make_element_with_attrs(
        "a",
        &[("id", "main"), ("class", "  nav   active "), ("href", "/x")],
    ));
    tree.set_root(el);

    let data = tree.as_element(el).expect("element");
    assert_eq!(data.id(), Some("main"));
    assert_eq!(data.classes(), vec!["nav", "active"]);
    assert!(data.has_class("active"));
    assert!(!data.has_class("nav active"));
    assert_eq!(tree.get_attribute(el, "href"), Some("/x"));
    assert_eq!(tree.get_attribute(el, "title"), None);
}

#[test]
fn test_elements_by_tag_name() {
    let (tree, _, p, ..) = small_tree();
    assert_eq!(tree.elements_by_tag_name("p"), vec![p]);
    assert!(tree.elements_by_tag_name("table").is_empty());
}
