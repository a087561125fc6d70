//! Layout tree construction.
//!
//! [§ 9 Visual formatting model](https://www.w3.org/TR/CSS2/visuren.html)
//!
//! One [`LayoutBox`] is produced for every DOM node reachable from the
//! root, plus one `Word` box per word of text. A box's rect is relative to
//! its parent box, except for boxes in `positioned_children`, whose rect is
//! in viewport coordinates.

use serde::Serialize;
use strum_macros::Display;

use kiwi_dom::{DomTree, NodeId};

use super::box_model::Rect;
use super::inline::{LineState, TextMetrics, flow_words};
use crate::cascade::StyleMap;
use crate::style::{ComputedStyle, DisplayType};

/// What kind of box a node produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum BoxType {
    /// `display: none` or whitespace-only text. Zero-sized and ignored by
    /// every measurement.
    Skipped,
    /// [§ 9.2.1 Block-level elements and block boxes](https://www.w3.org/TR/CSS2/visuren.html#block-boxes)
    Block,
    /// A text node. Its children are the `Word` boxes.
    InlineText,
    /// [§ 9.2.2 Inline-level elements and inline boxes](https://www.w3.org/TR/CSS2/visuren.html#inline-boxes)
    InlineElement,
    /// One word of a text node.
    Word(String),
}

/// A node of the layout tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutBox {
    /// The DOM node this box was generated for.
    pub node: NodeId,
    /// The kind of box.
    pub box_type: BoxType,
    /// The node's computed style.
    pub style: ComputedStyle,
    /// Position and size.
    pub rect: Rect,
    /// Boxes in normal flow.
    pub children: Vec<LayoutBox>,
    /// `position: absolute | fixed` descendants collected by this block.
    pub positioned_children: Vec<LayoutBox>,
}

impl LayoutBox {
    fn new(node: NodeId, box_type: BoxType, style: ComputedStyle) -> Self {
        Self {
            node,
            box_type,
            style,
            rect: Rect::default(),
            children: Vec::new(),
            positioned_children: Vec::new(),
        }
    }

    /// Whether this box was skipped by layout.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.box_type == BoxType::Skipped
    }

    /// The text of a `Word` box.
    #[must_use]
    pub fn word(&self) -> Option<&str> {
        match &self.box_type {
            BoxType::Word(word) => Some(word),
            _ => None,
        }
    }

    /// Visit this box and all its descendants, normal-flow children before
    /// positioned children.
    pub fn for_each_box<F: FnMut(&Self)>(&self, f: &mut F) {
        f(self);
        for child in self.children.iter().chain(&self.positioned_children) {
            child.for_each_box(f);
        }
    }

    /// The first non-word box generated for `node`, in `for_each_box` order.
    #[must_use]
    pub fn find_by_node(&self, node: NodeId) -> Option<&Self> {
        if self.node == node && self.word().is_none() {
            return Some(self);
        }
        self.children
            .iter()
            .chain(&self.positioned_children)
            .find_map(|child| child.find_by_node(node))
    }

    /// The words under this box, in order.
    #[must_use]
    pub fn words(&self) -> Vec<&str> {
        let mut words = Vec::new();
        self.collect_words(&mut words);
        words
    }

    fn collect_words<'a>(&'a self, words: &mut Vec<&'a str>) {
        if let Some(word) = self.word() {
            words.push(word);
        }
        for child in &self.children {
            child.collect_words(words);
        }
    }
}

/// Viewport position of the block whose coordinate space a line lives in.
#[derive(Debug, Clone, Copy, Default)]
struct Origin {
    x: f32,
    y: f32,
}

impl Origin {
    fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Inputs shared by the whole layout pass.
#[derive(Clone, Copy)]
pub struct LayoutContext<'a> {
    tree: &'a DomTree,
    styles: &'a StyleMap,
    metrics: &'a dyn TextMetrics,
}

impl<'a> LayoutContext<'a> {
    /// A layout pass over `tree` styled by `styles`, measuring text with
    /// `metrics`.
    #[must_use]
    pub fn new(tree: &'a DomTree, styles: &'a StyleMap, metrics: &'a dyn TextMetrics) -> Self {
        Self {
            tree,
            styles,
            metrics,
        }
    }

    fn style(&self, node: NodeId) -> ComputedStyle {
        self.styles.get(node).cloned().unwrap_or_default()
    }

    /// Lay out `node` and its subtree.
    ///
    /// `available_width` is the width of the containing block's content
    /// area. `line` is the inline cursor of the enclosing block; block
    /// boxes reset it to their own content area.
    pub fn create_layout_tree(
        &self,
        node: NodeId,
        available_width: f32,
        line: &mut LineState,
    ) -> LayoutBox {
        self.layout_node(node, available_width, line, Origin::default())
    }

    fn layout_node(
        &self,
        node: NodeId,
        available_width: f32,
        line: &mut LineState,
        origin: Origin,
    ) -> LayoutBox {
        let style = self.style(node);

        // STEP 1: display: none generates nothing.
        if style.display == DisplayType::None {
            return LayoutBox::new(node, BoxType::Skipped, style);
        }

        // STEP 2: Whitespace-only text has nothing to place.
        let text = self.tree.as_text(node);
        if text.is_some_and(|text| text.trim().is_empty()) {
            return LayoutBox::new(node, BoxType::Skipped, style);
        }

        // STEP 3: Blocks.
        if style.display == DisplayType::Block {
            return self.layout_block(node, style, available_width, line, origin);
        }

        // STEP 4: Text.
        if let Some(text) = text {
            return self.layout_text(node, style, text, line);
        }

        // STEP 5: Inline elements.
        self.layout_inline_element(node, style, available_width, line, origin)
    }

    /// [§ 10.3.3 Block-level, non-replaced elements in normal flow](https://www.w3.org/TR/CSS2/visudet.html#blockwidth)
    ///
    /// The block fills `available_width` minus its horizontal margins unless
    /// it has an explicit width. Block children stack vertically below each
    /// other; inline children share the block's line cursor. The height is
    /// explicit or the content height plus bottom padding.
    ///
    /// The block's own `x`/`y` are left at 0 for the parent to assign.
    fn layout_block(
        &self,
        node: NodeId,
        style: ComputedStyle,
        available_width: f32,
        line: &mut LineState,
        origin: Origin,
    ) -> LayoutBox {
        let width = style
            .explicit_width()
            .unwrap_or(available_width - style.margin.horizontal());
        let padding = style.padding;
        let content_width = width - padding.horizontal();

        let start_of_line = |y: f32| LineState {
            current_x: padding.left,
            current_y: y,
            line_height: 0.0,
            max_width: content_width,
            padding_left: padding.left,
        };

        *line = start_of_line(padding.top);
        let mut content_y = padding.top;
        let mut layout_box = LayoutBox::new(node, BoxType::Block, style);

        for &child in self.tree.children(node) {
            let child_style = self.style(child);
            let out_of_flow =
                child_style.position.is_out_of_flow() && child_style.display != DisplayType::None;
            let saved = *line;

            // Static position, used if the child is a block.
            let child_x = padding.left + child_style.margin.left;
            let child_y = content_y + child_style.margin.top;
            let child_origin = if child_style.display == DisplayType::Block {
                origin.offset(child_x, child_y)
            } else {
                origin
            };

            let mut child_box = self.layout_node(child, content_width, line, child_origin);
            let is_block = child_box.box_type == BoxType::Block;

            // Inline children pass their positioned descendants up, still in
            // this block's coordinates.
            let handed_up = if is_block {
                Vec::new()
            } else {
                std::mem::take(&mut child_box.positioned_children)
            };

            if is_block {
                child_box.rect.x = child_x;
                child_box.rect.y = child_y;
            }

            if out_of_flow {
                *line = saved;
                child_box.rect = child_box.rect.translate(origin.x, origin.y);
                layout_box.positioned_children.push(child_box);
            } else if is_block {
                content_y = child_y + child_box.rect.height + child_style.margin.bottom;
                *line = start_of_line(content_y);
                layout_box.children.push(child_box);
            } else {
                content_y = content_y.max(line.bottom());
                layout_box.children.push(child_box);
            }

            layout_box.positioned_children.extend(
                handed_up
                    .into_iter()
                    .map(|mut positioned| {
                        positioned.rect = positioned.rect.translate(origin.x, origin.y);
                        positioned
                    }),
            );
        }

        let height = layout_box
            .style
            .explicit_height()
            .unwrap_or(content_y + padding.bottom);
        layout_box.rect.width = width;
        layout_box.rect.height = height;
        layout_box
    }

    /// Place the words of a text node on the line. The text box is the
    /// bounding rect of its words, which are positioned relative to it.
    fn layout_text(
        &self,
        node: NodeId,
        style: ComputedStyle,
        text: &str,
        line: &mut LineState,
    ) -> LayoutBox {
        let font = style.font();
        let words = flow_words(text, &font, style.line_height, self.metrics, line);

        let bounds = words
            .iter()
            .map(|(_, rect)| *rect)
            .reduce(|acc, rect| acc.union(&rect))
            .unwrap_or_default();

        let mut layout_box = LayoutBox::new(node, BoxType::InlineText, style);
        layout_box.children = words
            .into_iter()
            .map(|(word, rect)| {
                let mut word_box = LayoutBox::new(node, BoxType::Word(word), layout_box.style.clone());
                word_box.rect = rect.translate(-bounds.x, -bounds.y);
                word_box
            })
            .collect();
        layout_box.rect = bounds;
        layout_box
    }

    /// [§ 9.2.2 Inline-level elements and inline boxes](https://www.w3.org/TR/CSS2/visuren.html#inline-boxes)
    ///
    /// Children continue on the enclosing block's line and are positioned
    /// relative to where this element started. The element's size is the
    /// extent of its children. A block child starts on a new line below the
    /// current one, and the line continues underneath it.
    fn layout_inline_element(
        &self,
        node: NodeId,
        style: ComputedStyle,
        available_width: f32,
        line: &mut LineState,
        origin: Origin,
    ) -> LayoutBox {
        let start_x = line.current_x;
        let start_y = line.current_y;
        let mut layout_box = LayoutBox::new(node, BoxType::InlineElement, style);

        for &child in self.tree.children(node) {
            let child_style = self.style(child);
            let out_of_flow =
                child_style.position.is_out_of_flow() && child_style.display != DisplayType::None;
            let saved = *line;

            let child_x = saved.padding_left + child_style.margin.left;
            let child_y = saved.bottom() + child_style.margin.top;
            let child_origin = if child_style.display == DisplayType::Block {
                origin.offset(child_x, child_y)
            } else {
                origin
            };

            let mut child_box = self.layout_node(child, available_width, line, child_origin);
            let is_block = child_box.box_type == BoxType::Block;
            let handed_up = if is_block {
                Vec::new()
            } else {
                std::mem::take(&mut child_box.positioned_children)
            };

            if is_block {
                child_box.rect.x = child_x;
                child_box.rect.y = child_y;
                *line = LineState {
                    current_x: saved.padding_left,
                    current_y: child_y + child_box.rect.height + child_style.margin.bottom,
                    line_height: 0.0,
                    ..saved
                };
            }

            if out_of_flow {
                *line = saved;
                layout_box.positioned_children.push(child_box);
            } else {
                child_box.rect = child_box.rect.translate(-start_x, -start_y);
                layout_box.children.push(child_box);
            }
            layout_box.positioned_children.extend(handed_up);
        }

        let (width, height) = layout_box
            .children
            .iter()
            .filter(|child| !child.is_skipped())
            .fold((0.0_f32, 0.0_f32), |(width, height), child| {
                (width.max(child.rect.right()), height.max(child.rect.bottom()))
            });
        layout_box.rect = Rect::new(start_x, start_y, width, height);
        layout_box
    }
}

/// Lay out a whole document for a viewport `viewport_width` px wide.
///
/// Returns `None` for a tree without a root.
#[must_use]
pub fn layout_document(
    tree: &DomTree,
    styles: &StyleMap,
    viewport_width: f32,
    metrics: &dyn TextMetrics,
) -> Option<LayoutBox> {
    let root = tree.root()?;
    let mut line = LineState::new(viewport_width);
    Some(LayoutContext::new(tree, styles, metrics).create_layout_tree(root, viewport_width, &mut line))
}

/// The right-most extent of any box in the tree, for sizing a scrollable
/// area. Skipped boxes and their subtrees contribute nothing.
#[must_use]
pub fn calculate_content_width(root: &LayoutBox) -> f32 {
    fn walk(layout_box: &LayoutBox, offset_x: f32, widest: &mut f32) {
        if layout_box.is_skipped() {
            return;
        }
        *widest = widest.max(offset_x + layout_box.rect.right());
        for child in &layout_box.children {
            walk(child, offset_x + layout_box.rect.x, widest);
        }
        // Positioned boxes are already in viewport coordinates.
        for positioned in &layout_box.positioned_children {
            walk(positioned, 0.0, widest);
        }
    }

    let mut widest = 0.0;
    walk(root, 0.0, &mut widest);
    widest
}
