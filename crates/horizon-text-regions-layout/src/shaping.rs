//! Shaping attributed documents into paragraph layouts with cosmic-text.

use cosmic_text::{Attrs, Buffer, Color, FontSystem, Metrics, Shaping, Style, Weight};
use horizon_text_regions::logging::targets;
use horizon_text_regions::{AttributedDocument, FragmentStyle};
use tracing::debug;

use crate::options::ParagraphOptions;
use crate::paragraph::{GlyphBox, LayoutLine, ParagraphLayout};

/// Shapes documents into [`ParagraphLayout`]s.
///
/// # Example
///
/// ```no_run
/// use cosmic_text::FontSystem;
/// use horizon_text_regions::{AccessibilityAttributes, AttributedDocument, LayoutOracle, Rect};
/// use horizon_text_regions_layout::{ParagraphOptions, ParagraphShaper, WrapMode};
///
/// let mut font_system = FontSystem::new();
/// let shaper = ParagraphShaper::new(ParagraphOptions::new().max_width(240.0).wrap(WrapMode::Word));
///
/// let document = AttributedDocument::builder()
///     .push_plain("Questions? ")
///     .push("Contact us", AccessibilityAttributes::link())
///     .build();
///
/// let layout = shaper.shape(&mut font_system, &document);
/// let rects = layout.rects_for_range(11..21, Rect::new(0.0, 0.0, 240.0, 100.0)).unwrap();
/// println!("link covers {} line(s)", rects.len());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParagraphShaper {
    options: ParagraphOptions,
}

impl ParagraphShaper {
    /// Create a shaper with the given options.
    pub fn new(options: ParagraphOptions) -> Self {
        Self { options }
    }

    /// The options used for shaping.
    pub fn options(&self) -> &ParagraphOptions {
        &self.options
    }

    /// Shape `document` and resolve its geometry.
    pub fn shape(&self, font_system: &mut FontSystem, document: &AttributedDocument) -> ParagraphLayout {
        let text = document.text();
        if text.is_empty() {
            return ParagraphLayout::from_lines(Vec::new(), 0);
        }

        let metrics = Metrics::new(
            self.options.font_size,
            self.options.line_height_for(self.options.font_size),
        );
        let mut buffer = Buffer::new(font_system, metrics);

        buffer.set_wrap(font_system, self.options.wrap.to_cosmic());
        buffer.set_size(font_system, self.options.max_width, self.options.max_height);

        let spans = self.spans(document);
        buffer.set_rich_text(font_system, spans, Attrs::new(), Shaping::Advanced);

        for line in buffer.lines.iter_mut() {
            line.set_align(Some(self.options.align.to_cosmic()));
        }

        buffer.shape_until_scroll(font_system, false);

        let lines = extract_lines(&buffer, text);
        debug!(
            target: targets::LAYOUT,
            bytes = text.len(),
            lines = lines.len(),
            "shaped paragraph"
        );
        ParagraphLayout::from_lines(lines, text.len())
    }

    /// Split the text into attributed spans covering it completely.
    ///
    /// Gaps between fragments get default attributes. Fragments that are
    /// empty, overlap their predecessor or fall outside the text are ignored.
    fn spans<'a>(&self, document: &'a AttributedDocument) -> Vec<(&'a str, Attrs<'static>)> {
        let text = document.text();
        let mut spans = Vec::with_capacity(document.fragments().len() + 1);
        let mut cursor = 0;

        for fragment in document.fragments() {
            if fragment.is_empty() || fragment.range.start < cursor {
                continue;
            }
            let Some(slice) = text.get(fragment.range.clone()) else {
                continue;
            };
            if let Some(gap) = text.get(cursor..fragment.range.start)
                && !gap.is_empty()
            {
                spans.push((gap, Attrs::new()));
            }
            spans.push((slice, self.attrs_for(&fragment.style)));
            cursor = fragment.range.end;
        }

        if let Some(rest) = text.get(cursor..)
            && !rest.is_empty()
        {
            spans.push((rest, Attrs::new()));
        }
        spans
    }

    fn attrs_for(&self, style: &FragmentStyle) -> Attrs<'static> {
        let mut attrs = Attrs::new();
        if style.bold {
            attrs = attrs.weight(Weight::BOLD);
        }
        if style.italic {
            attrs = attrs.style(Style::Italic);
        }
        if let Some(size) = style.font_size {
            attrs = attrs.metrics(Metrics::new(size, self.options.line_height_for(size)));
        }
        if let Some([r, g, b, a]) = style.color {
            attrs = attrs.color(Color::rgba(r, g, b, a));
        }
        attrs
    }
}

/// Extract lines from a shaped buffer.
///
/// Glyph clusters in cosmic-text are relative to their buffer line, one per
/// hard line break, so they are rebased onto document offsets here.
fn extract_lines(buffer: &Buffer, text: &str) -> Vec<LayoutLine> {
    let line_starts = buffer_line_starts(buffer, text);
    let mut lines: Vec<LayoutLine> = Vec::new();

    for run in buffer.layout_runs() {
        let base = line_starts.get(run.line_i).copied().unwrap_or(0);

        let glyphs: Vec<GlyphBox> = run
            .glyphs
            .iter()
            .map(|glyph| GlyphBox {
                cluster: base + glyph.start..base + glyph.end,
                x: glyph.x,
                width: glyph.w,
                rtl: glyph.level.is_rtl(),
            })
            .collect();

        let text_range = glyphs
            .iter()
            .fold(None, |range: Option<std::ops::Range<usize>>, glyph| match range {
                None => Some(glyph.cluster.clone()),
                Some(range) => Some(range.start.min(glyph.cluster.start)..range.end.max(glyph.cluster.end)),
            })
            .unwrap_or(base..base);

        lines.push(LayoutLine {
            top_y: run.line_top,
            height: run.line_height,
            width: run.line_w,
            text_range,
            glyphs,
        });
    }

    lines
}

/// Document offset at which each buffer line starts.
fn buffer_line_starts(buffer: &Buffer, text: &str) -> Vec<usize> {
    let mut starts = Vec::with_capacity(buffer.lines.len());
    let mut offset = 0;

    for line in &buffer.lines {
        starts.push(offset);
        offset += line.text().len();
        offset += line_ending_len(text.get(offset..).unwrap_or_default());
    }

    starts
}

fn line_ending_len(rest: &str) -> usize {
    if rest.starts_with("\r\n") || rest.starts_with("\n\r") {
        2
    } else if rest.starts_with('\n') || rest.starts_with('\r') {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_text_regions::{AccessibilityAttributes, Fragment, LayoutOracle, Rect};

    #[test]
    fn test_line_ending_len() {
        assert_eq!(line_ending_len("\r\nabc"), 2);
        assert_eq!(line_ending_len("\nabc"), 1);
        assert_eq!(line_ending_len("abc"), 0);
        assert_eq!(line_ending_len(""), 0);
    }

    #[test]
    fn test_spans_cover_text() {
        let document = AttributedDocument::from_parts(
            "one two three",
            vec![
                Fragment::new(4..7, AccessibilityAttributes::link(), FragmentStyle::new().bold()),
                Fragment::new(5..9, AccessibilityAttributes::new(), FragmentStyle::new()),
                Fragment::new(8..40, AccessibilityAttributes::new(), FragmentStyle::new()),
            ],
        );
        let spans = ParagraphShaper::default().spans(&document);
        let texts: Vec<&str> = spans.iter().map(|(text, _)| *text).collect();

        assert_eq!(texts, vec!["one ", "two", " three"]);
        assert_eq!(spans[1].1.weight, Weight::BOLD);
    }

    #[test]
    #[ignore = "requires system fonts"]
    fn test_shape_link_geometry() {
        let mut font_system = FontSystem::new();
        let document = AttributedDocument::builder()
            .push_plain("first line\n")
            .push("second", AccessibilityAttributes::link())
            .build();

        let layout = ParagraphShaper::default().shape(&mut font_system, &document);
        assert_eq!(layout.line_count(), 2);
        assert_eq!(layout.lines()[1].text_range, 11..17);

        let rects = layout.rects_for_range(11..17, Rect::ZERO).unwrap();
        assert_eq!(rects.len(), 1);
        assert!(rects[0].top() > 0.0);
        assert!(rects[0].width() > 0.0);
    }
}
