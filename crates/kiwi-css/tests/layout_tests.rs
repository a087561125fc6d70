//! Integration tests for box layout.

use kiwi_css::{
    ApproximateFontMetrics, BoxType, FontDescriptor, LayoutBox, Rect, StyleMap, TextMetrics,
    calculate_content_width, compute_styles, create_cssom, layout_document,
};
use kiwi_dom::{DomTree, ElementData, NodeType};
use kiwi_html::{parse, tokenize};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

/// Every word is `self.0` px wide, lines are 10px tall and there is no
/// space between words.
struct FixedWidth(f32);

impl TextMetrics for FixedWidth {
    fn text_width(&self, _text: &str, _font: &FontDescriptor) -> f32 {
        self.0
    }

    fn line_height(&self, _font: &FontDescriptor) -> f32 {
        10.0
    }

    fn space_width(&self, _font: &FontDescriptor) -> f32 {
        0.0
    }
}

fn styled(html: &str, css: &str) -> (DomTree, StyleMap) {
    let tree = parse(tokenize(html).expect("input should tokenize"));
    let styles = compute_styles(&tree, &create_cssom(css));
    (tree, styles)
}

fn layout_with(html: &str, css: &str, width: f32, metrics: &dyn TextMetrics) -> LayoutBox {
    let (tree, styles) = styled(html, css);
    layout_document(&tree, &styles, width, metrics).expect("document has a root")
}

fn layout(html: &str, css: &str) -> LayoutBox {
    layout_with(html, css, 800.0, &ApproximateFontMetrics)
}

#[test]
fn test_empty_document_has_no_layout() {
    let tree = DomTree::new();
    let styles = StyleMap::new(&tree);
    assert!(layout_document(&tree, &styles, 800.0, &ApproximateFontMetrics).is_none());
}

#[test]
fn test_root_block_fills_viewport() {
    let root = layout("<div></div>", "div { display: block }");
    assert_eq!(root.box_type, BoxType::Block);
    assert_eq!(root.rect, Rect::new(0.0, 0.0, 800.0, 0.0));
}

#[test]
fn test_blocks_stack_with_margins() {
    let root = layout(
        "<div><p>a</p><p>b</p></div>",
        "div, p { display: block } p { height: 30px; margin-top: 10px; margin-bottom: 5px }",
    );
    assert_eq!(root.children.len(), 2);
    assert_eq!(root.children[0].rect, Rect::new(0.0, 10.0, 800.0, 30.0));
    assert_eq!(root.children[1].rect, Rect::new(0.0, 55.0, 800.0, 30.0));
    assert_eq!(root.rect.height, 90.0);
}

#[test]
fn test_padding_insets_children() {
    let root = layout(
        "<div><p>a</p></div>",
        "div { display: block; padding: 10px } p { display: block; height: 20px }",
    );
    assert_eq!(root.children[0].rect, Rect::new(10.0, 10.0, 780.0, 20.0));
    assert_eq!(root.rect, Rect::new(0.0, 0.0, 800.0, 40.0));
}

#[test]
fn test_horizontal_margins_shrink_width() {
    let root = layout(
        "<div><p>a</p></div>",
        "div, p { display: block } p { margin-left: 20px; margin-right: 30px; height: 5px }",
    );
    assert_eq!(root.children[0].rect, Rect::new(20.0, 0.0, 750.0, 5.0));
}

#[test]
fn test_explicit_width_and_height() {
    let root = layout(
        "<div><p>a b c</p></div>",
        "div { display: block; width: 300px; height: 7px } p { display: block }",
    );
    assert_eq!(root.rect.width, 300.0);
    assert_eq!(root.rect.height, 7.0);
    assert_eq!(root.children[0].rect.width, 300.0);
}

#[test]
fn test_text_becomes_words() {
    let root = layout(
        "<p>ab cd</p>",
        "p { display: block; font-size: 10px; line-height: 12px }",
    );
    let text = &root.children[0];
    assert_eq!(text.box_type, BoxType::InlineText);
    assert_eq!(text.rect, Rect::new(0.0, 0.0, 30.0, 12.0));
    assert_eq!(root.words(), vec!["ab", "cd"]);
    assert_eq!(text.children[0].rect, Rect::new(0.0, 0.0, 12.0, 12.0));
    assert_eq!(text.children[1].rect, Rect::new(18.0, 0.0, 12.0, 12.0));
    assert_eq!(root.rect.height, 12.0);
}

#[test]
fn test_inline_element_continues_the_line() {
    let root = layout(
        "<p>aa<b>bb</b></p>",
        "p { display: block; font-size: 10px; line-height: 12px }",
    );
    let b = &root.children[1];
    assert_eq!(b.box_type, BoxType::InlineElement);
    assert_eq!(b.rect, Rect::new(18.0, 0.0, 12.0, 12.0));
    // Children are relative to where the element started.
    assert_eq!(b.children[0].rect, Rect::new(0.0, 0.0, 12.0, 12.0));
}

#[test]
fn test_overlong_word_then_wrap() {
    let root = layout(
        "<p>abcdefghijkl b</p>",
        "p { display: block; width: 50px; font-size: 10px }",
    );
    let text = &root.children[0];
    assert_eq!(text.children[0].rect, Rect::new(0.0, 0.0, 72.0, 12.0));
    assert_eq!(text.children[1].rect, Rect::new(0.0, 24.0, 6.0, 12.0));
    assert_eq!(text.rect, Rect::new(0.0, 0.0, 72.0, 36.0));
    assert_eq!(root.rect.height, 48.0);
}

#[test]
fn test_block_inside_inline_starts_a_new_line() {
    let root = layout(
        "<p><span>ab<div></div>cd</span></p>",
        "p { display: block; font-size: 10px; line-height: 12px } div { display: block; height: 30px }",
    );
    let span = &root.children[0];
    assert_eq!(span.children[1].box_type, BoxType::Block);
    assert_eq!(span.children[1].rect, Rect::new(0.0, 12.0, 800.0, 30.0));
    assert_eq!(span.children[2].rect, Rect::new(0.0, 42.0, 12.0, 12.0));
    assert_eq!(root.rect.height, 54.0);
}

#[test]
fn test_display_none_is_skipped() {
    let root = layout(
        r#"<div><p style="display: none">hidden</p><p>shown</p></div>"#,
        "div, p { display: block } p { height: 10px }",
    );
    assert!(root.children[0].is_skipped());
    assert!(root.children[0].children.is_empty());
    assert_eq!(root.children[0].rect, Rect::default());
    assert_eq!(root.children[1].rect.y, 0.0);
    assert_eq!(root.rect.height, 10.0);
}

#[test]
fn test_whitespace_text_is_skipped() {
    let mut tree = DomTree::new();
    let div = tree.alloc(NodeType::Element(ElementData::new("div")));
    let blank = tree.alloc(NodeType::Text("  \n ".to_string()));
    tree.set_root(div);
    tree.append_child(div, blank);

    let styles = compute_styles(&tree, &create_cssom("div { display: block }"));
    let root = layout_document(&tree, &styles, 800.0, &ApproximateFontMetrics).expect("root");
    assert!(root.children[0].is_skipped());
    assert_eq!(root.rect.height, 0.0);
}

#[test]
fn test_content_width_ignores_display_none() {
    let css = "div { display: block; width: 100px } section { width: 5000px }";
    let hidden = layout(
        r#"<div><section style="display: none"></section></div>"#,
        css,
    );
    assert_eq!(calculate_content_width(&hidden), 100.0);

    let shown = layout(
        r#"<div><section style="display: block"></section></div>"#,
        css,
    );
    assert_eq!(calculate_content_width(&shown), 5000.0);
}

#[test]
fn test_positioned_box_leaves_flow() {
    let root = layout(
        r#"<div><p>first</p><span style="position: absolute">abs</span><p>second</p></div>"#,
        "div, p { display: block } p { height: 20px }",
    );
    assert_eq!(root.children.len(), 2);
    assert_eq!(root.children[1].rect.y, 20.0);
    assert_eq!(root.positioned_children.len(), 1);

    let positioned = &root.positioned_children[0];
    assert_eq!(positioned.box_type, BoxType::InlineElement);
    assert_eq!(positioned.rect.x, 0.0);
    assert_eq!(positioned.rect.y, 20.0);
    assert_eq!(root.words(), vec!["first", "second"]);
}

#[test]
fn test_positioned_block_uses_viewport_coordinates() {
    let root = layout(
        r#"<div><section><p style="position: absolute; height: 7px">x</p></section></div>"#,
        "div, section, p { display: block } div { padding: 10px } section { margin-top: 5px }",
    );
    let section = &root.children[0];
    assert_eq!(section.rect, Rect::new(10.0, 15.0, 780.0, 0.0));
    assert!(section.children.is_empty());
    assert_eq!(section.positioned_children[0].rect, Rect::new(10.0, 15.0, 780.0, 7.0));
}

#[test]
fn test_layout_is_deterministic() {
    let html = r#"<div><h1 class="t">Title here</h1><p>Some <b>bold</b> text that wraps around</p></div>"#;
    let css = "div, h1, p { display: block } .t { font-size: 32px } p { width: 120px; padding: 4px }";
    let first = layout(html, css);
    let second = layout(html, css);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serializes"),
        serde_json::to_string(&second).expect("serializes")
    );
}

#[test]
fn test_every_node_gets_a_box() {
    let (tree, styles) = styled(
        "<div><p>a</p><span>b</span></div>",
        "div, p { display: block }",
    );
    let root = layout_document(&tree, &styles, 800.0, &ApproximateFontMetrics).expect("root");
    for id in tree.iter_all() {
        assert!(root.find_by_node(id).is_some(), "no box for {id:?}");
    }
}

#[test]
fn test_wrap_returns_to_left_padding() {
    let root = layout_with(
        "<p>a b c d</p>",
        "p { display: block; width: 120px; padding-left: 20px; line-height: 10px }",
        800.0,
        &FixedWidth(30.0),
    );
    let text = &root.children[0];
    assert_eq!(text.rect.x, 20.0);
    let placed: Vec<(f32, f32)> = text
        .children
        .iter()
        .map(|word| (text.rect.x + word.rect.x, text.rect.y + word.rect.y))
        .collect();
    assert_eq!(placed, vec![(20.0, 0.0), (50.0, 0.0), (80.0, 0.0), (20.0, 10.0)]);
}

/// With fixed-width words and no spacing, a line of content width `W` holds
/// `max(1, floor(W / w))` words, and every line starts at the left padding.
#[quickcheck]
#[allow(clippy::cast_precision_loss)]
fn prop_words_wrap_at_line_capacity(count: u8, word: u8, width: u16, inset: u8) -> TestResult {
    let count = u32::from(count % 30) + 1;
    let word = u32::from(word % 50) + 1;
    let width = u32::from(width % 500) + 1;
    let inset = u32::from(inset % 50);

    let html = format!("<p>{}</p>", vec!["x"; count as usize].join(" "));
    let css = format!(
        "p {{ display: block; width: {}px; padding-left: {inset}px; line-height: 10px }}",
        width + inset
    );
    let root = layout_with(&html, &css, 1000.0, &FixedWidth(word as f32));

    let per_line = (width / word).max(1);
    let text = &root.children[0];
    if text.children.len() != count as usize {
        return TestResult::failed();
    }
    for (i, word_box) in (0..count).zip(&text.children) {
        let expected_x = (inset + (i % per_line) * word) as f32;
        let expected_y = ((i / per_line) * 10) as f32;
        if text.rect.x + word_box.rect.x != expected_x || text.rect.y + word_box.rect.y != expected_y {
            return TestResult::failed();
        }
    }
    TestResult::passed()
}
