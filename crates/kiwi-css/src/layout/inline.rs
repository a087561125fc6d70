//! CSS Inline Layout.
//!
//! [§ 9.4.2 Inline formatting contexts](https://www.w3.org/TR/CSS2/visuren.html#inline-formatting)
//!
//! "In an inline formatting context, boxes are laid out horizontally, one
//! after the other, beginning at the top of a containing block."
//!
//! Inline content is placed with a single cursor, [`LineState`], owned by
//! the nearest block and threaded through its inline descendants.

use super::box_model::Rect;

/// The font properties text is measured with.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// First family named by `font-family`.
    pub family: String,
    /// `font-size` in px.
    pub size_px: f32,
    /// `font-weight`, 100-900.
    pub weight: u16,
    /// Italic or oblique.
    pub italic: bool,
}

/// Text measurement interface used by layout.
///
/// [§ 10.8 Line height calculations](https://www.w3.org/TR/CSS2/visudet.html#line-height)
///
/// "CSS assumes that every font has font metrics that specify a
/// characteristic height above the baseline and a depth below it."
///
/// Implementations must be deterministic: layout output is only as
/// reproducible as the metrics it is given.
pub trait TextMetrics {
    /// Advance width of `text` in px.
    fn text_width(&self, text: &str, font: &FontDescriptor) -> f32;

    /// Height of one line of text in px.
    fn line_height(&self, font: &FontDescriptor) -> f32;

    /// Advance of the space placed after every word.
    fn space_width(&self, font: &FontDescriptor) -> f32 {
        self.text_width(" ", font)
    }
}

/// Approximate font metrics using fixed ratios.
///
/// Without font data, every character is 0.6 em wide (close to the average
/// Latin advance in Arial) and a line is 1.2 em tall, the upper end of the
/// recommended range for `line-height: normal`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproximateFontMetrics;

impl TextMetrics for ApproximateFontMetrics {
    #[allow(clippy::cast_precision_loss)]
    fn text_width(&self, text: &str, font: &FontDescriptor) -> f32 {
        const CHAR_WIDTH_RATIO: f32 = 0.6;
        text.chars().count() as f32 * font.size_px * CHAR_WIDTH_RATIO
    }

    fn line_height(&self, font: &FontDescriptor) -> f32 {
        const LINE_HEIGHT_RATIO: f32 = 1.2;
        font.size_px * LINE_HEIGHT_RATIO
    }
}

/// The inline cursor of one block formatting context.
///
/// Coordinates are relative to the block that owns the line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LineState {
    /// Where the next inline fragment starts.
    pub current_x: f32,
    /// Top of the current line.
    pub current_y: f32,
    /// Height of the current line so far.
    pub line_height: f32,
    /// Width available to a line.
    pub max_width: f32,
    /// Left edge of a line (the owning block's left padding).
    pub padding_left: f32,
}

impl LineState {
    /// A cursor at the origin of a `max_width` wide line.
    #[must_use]
    pub const fn new(max_width: f32) -> Self {
        Self {
            current_x: 0.0,
            current_y: 0.0,
            line_height: 0.0,
            max_width,
            padding_left: 0.0,
        }
    }

    /// Right edge a fragment may reach before the line wraps.
    #[must_use]
    pub fn right_edge(&self) -> f32 {
        self.padding_left + self.max_width
    }

    /// Whether anything has been placed on the current line.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.current_x > self.padding_left
    }

    /// Bottom of the current line.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.current_y + self.line_height
    }

    /// Move the cursor to the start of the next line.
    pub fn break_line(&mut self) {
        self.current_x = self.padding_left;
        self.current_y += self.line_height;
        self.line_height = 0.0;
    }
}

/// [§ 16.6 White space](https://www.w3.org/TR/CSS2/text.html#white-space-model)
///
/// Place each whitespace-separated word of `text` on the line, wrapping
/// before a word that would cross the right edge unless it is the first word
/// on its line. Returns each word with its rect in line coordinates.
///
/// The line grows to the larger of the font's line height and
/// `style_line_height`.
pub fn flow_words(
    text: &str,
    font: &FontDescriptor,
    style_line_height: f32,
    metrics: &dyn TextMetrics,
    line: &mut LineState,
) -> Vec<(String, Rect)> {
    let word_height = metrics.line_height(font);
    let space = metrics.space_width(font);

    text.split_whitespace()
        .map(|word| {
            let width = metrics.text_width(word, font);
            if line.current_x + width > line.right_edge() && line.has_content() {
                line.break_line();
            }
            let rect = Rect::new(line.current_x, line.current_y, width, word_height);
            line.current_x += width + space;
            line.line_height = line.line_height.max(word_height).max(style_line_height);
            (word.to_string(), rect)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn font(size_px: f32) -> FontDescriptor {
        FontDescriptor {
            family: "Arial".to_string(),
            size_px,
            weight: 400,
            italic: false,
        }
    }

    #[test]
    fn test_approximate_metrics() {
        let metrics = ApproximateFontMetrics;
        assert!((metrics.text_width("Hello", &font(10.0)) - 30.0).abs() < 0.001);
        assert!((metrics.space_width(&font(10.0)) - 6.0).abs() < 0.001);
        assert!((metrics.line_height(&font(10.0)) - 12.0).abs() < 0.001);
    }

    #[test]
    fn test_words_advance_with_space() {
        let mut line = LineState::new(1000.0);
        let words = flow_words("ab cd", &font(10.0), 0.0, &ApproximateFontMetrics, &mut line);
        assert_eq!(words[0].1, Rect::new(0.0, 0.0, 12.0, 12.0));
        assert_eq!(words[1].1, Rect::new(18.0, 0.0, 12.0, 12.0));
        assert!((line.line_height - 12.0).abs() < 0.001);
    }

    #[test]
    fn test_style_line_height_wins_when_taller() {
        let mut line = LineState::new(1000.0);
        let _ = flow_words("x", &font(10.0), 24.0, &ApproximateFontMetrics, &mut line);
        assert!((line.line_height - 24.0).abs() < 0.001);
    }

    #[test]
    fn test_overlong_word_is_placed_anyway() {
        let mut line = LineState::new(10.0);
        let words = flow_words("abcdefghij", &font(10.0), 0.0, &ApproximateFontMetrics, &mut line);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].1, Rect::new(0.0, 0.0, 60.0, 12.0));
    }
}
