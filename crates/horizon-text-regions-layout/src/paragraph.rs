//! Resolved paragraph geometry and range queries against it.

use std::ops::Range;

use horizon_text_regions::logging::targets;
use horizon_text_regions::{LayoutOracle, LayoutUnavailable, Rect};
use tracing::trace;

/// A shaped glyph cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphBox {
    /// The byte range in the document text this glyph represents.
    pub cluster: Range<usize>,
    /// X position relative to the paragraph origin.
    pub x: f32,
    /// Width of the glyph hitbox.
    pub width: f32,
    /// Whether the glyph belongs to a right-to-left run.
    pub rtl: bool,
}

impl GlyphBox {
    /// Get the rightmost x position of this glyph.
    pub fn x_end(&self) -> f32 {
        self.x + self.width
    }

    fn intersects(&self, range: &Range<usize>) -> bool {
        self.cluster.start < range.end && range.start < self.cluster.end
    }
}

/// A single visual line of a paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutLine {
    /// Y offset from the top of the paragraph to this line's top.
    pub top_y: f32,
    /// Height of this line.
    pub height: f32,
    /// Width of this line's content.
    pub width: f32,
    /// The byte range of the document this line covers.
    pub text_range: Range<usize>,
    /// The glyphs in this line, in visual order.
    pub glyphs: Vec<GlyphBox>,
}

impl LayoutLine {
    /// Check if this line is empty (no glyphs).
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Horizontal extent of the glyphs intersecting `range`.
    ///
    /// Works in visual order, so a range crossing a bidi boundary yields the
    /// span from its leftmost to its rightmost glyph.
    fn span_for_range(&self, range: &Range<usize>) -> Option<(f32, f32)> {
        self.glyphs
            .iter()
            .filter(|glyph| glyph.intersects(range))
            .fold(None, |span, glyph| match span {
                None => Some((glyph.x, glyph.x_end())),
                Some((left, right)) => Some((left.min(glyph.x), right.max(glyph.x_end()))),
            })
    }
}

/// The resolved geometry of one paragraph.
///
/// A `ParagraphLayout` answers [`LayoutOracle`] queries from its lines. A
/// [`pending`](Self::pending) layout has no geometry yet and reports
/// [`LayoutUnavailable`] to every query.
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphLayout {
    lines: Vec<LayoutLine>,
    text_len: usize,
    ready: bool,
}

impl ParagraphLayout {
    /// Create a layout from resolved lines.
    ///
    /// `text_len` is the byte length of the document the lines were shaped
    /// from.
    pub fn from_lines(lines: Vec<LayoutLine>, text_len: usize) -> Self {
        Self {
            lines,
            text_len,
            ready: true,
        }
    }

    /// A layout that has not been computed yet.
    pub fn pending() -> Self {
        Self {
            lines: Vec::new(),
            text_len: 0,
            ready: false,
        }
    }

    /// Check whether geometry is available.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// The lines, top to bottom.
    pub fn lines(&self) -> &[LayoutLine] {
        &self.lines
    }

    /// Get the number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Byte length of the shaped text.
    pub fn text_len(&self) -> usize {
        self.text_len
    }

    /// Width of the widest line.
    pub fn width(&self) -> f32 {
        self.lines.iter().map(|line| line.width).fold(0.0, f32::max)
    }

    /// Total height of the paragraph.
    pub fn height(&self) -> f32 {
        self.lines
            .iter()
            .map(|line| line.top_y + line.height)
            .fold(0.0, f32::max)
    }

    /// Find the line containing the given byte offset.
    pub fn line_for_offset(&self, offset: usize) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.text_range.contains(&offset))
    }
}

impl LayoutOracle for ParagraphLayout {
    fn rects_for_range(
        &self,
        range: Range<usize>,
        frame: Rect,
    ) -> Result<Vec<Rect>, LayoutUnavailable> {
        if !self.ready {
            return Err(LayoutUnavailable::new("paragraph has not been shaped"));
        }

        let range = range.start..range.end.min(self.text_len);
        if range.is_empty() {
            return Ok(Vec::new());
        }

        let rects: Vec<Rect> = self
            .lines
            .iter()
            .filter_map(|line| {
                let (left, right) = line.span_for_range(&range)?;
                Some(Rect::new(
                    frame.left() + left,
                    frame.top() + line.top_y,
                    right - left,
                    line.height,
                ))
            })
            .collect();

        trace!(
            target: targets::LAYOUT,
            start = range.start,
            end = range.end,
            rects = rects.len(),
            "resolved range geometry"
        );
        Ok(rects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Each byte is one 10 unit glyph.
    fn line(top_y: f32, text_range: Range<usize>) -> LayoutLine {
        let start = text_range.start;
        let glyphs: Vec<GlyphBox> = text_range
            .clone()
            .map(|i| GlyphBox {
                cluster: i..i + 1,
                x: (i - start) as f32 * 10.0,
                width: 10.0,
                rtl: false,
            })
            .collect();
        LayoutLine {
            top_y,
            height: 20.0,
            width: glyphs.len() as f32 * 10.0,
            text_range,
            glyphs,
        }
    }

    #[test]
    fn test_pending_layout_is_unavailable() {
        let layout = ParagraphLayout::pending();
        assert!(!layout.is_ready());
        assert!(layout.rects_for_range(0..1, Rect::ZERO).is_err());
    }

    #[test]
    fn test_single_line_range() {
        let layout = ParagraphLayout::from_lines(vec![line(0.0, 0..10)], 10);
        let frame = Rect::new(5.0, 7.0, 200.0, 40.0);

        let rects = layout.rects_for_range(2..5, frame).unwrap();
        assert_eq!(rects, vec![Rect::new(25.0, 7.0, 30.0, 20.0)]);
    }

    #[test]
    fn test_range_across_lines() {
        let layout = ParagraphLayout::from_lines(vec![line(0.0, 0..6), line(20.0, 6..12)], 12);
        let rects = layout.rects_for_range(4..8, Rect::ZERO).unwrap();

        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0], Rect::new(40.0, 0.0, 20.0, 20.0));
        assert_eq!(rects[1], Rect::new(0.0, 20.0, 20.0, 20.0));
        assert_eq!(layout.line_for_offset(7), Some(1));
        assert_eq!(layout.height(), 40.0);
    }

    #[test]
    fn test_rtl_run_spans_visual_extent() {
        // Bytes 3..6 are displayed right to left.
        let mut rtl_line = line(0.0, 0..6);
        for (i, glyph) in rtl_line.glyphs[3..6].iter_mut().enumerate() {
            glyph.x = (5 - i) as f32 * 10.0;
            glyph.rtl = true;
        }
        let layout = ParagraphLayout::from_lines(vec![rtl_line], 6);

        let rects = layout.rects_for_range(2..4, Rect::ZERO).unwrap();
        assert_eq!(rects, vec![Rect::new(20.0, 0.0, 40.0, 20.0)]);
    }

    #[test]
    fn test_empty_and_out_of_bounds_ranges() {
        let layout = ParagraphLayout::from_lines(vec![line(0.0, 0..4)], 4);
        assert!(layout.rects_for_range(2..2, Rect::ZERO).unwrap().is_empty());
        assert!(layout.rects_for_range(4..9, Rect::ZERO).unwrap().is_empty());
        assert_eq!(layout.rects_for_range(3..9, Rect::ZERO).unwrap().len(), 1);
    }
}
