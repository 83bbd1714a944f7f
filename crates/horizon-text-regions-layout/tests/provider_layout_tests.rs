//! Integration tests driving a region provider from paragraph layouts.
//!
//! The font-dependent tests need system fonts. Run them with:
//! ```
//! cargo test --package horizon-text-regions-layout -- --ignored
//! ```

use std::cell::RefCell;
use std::ops::Range;
use std::rc::Rc;

use horizon_text_regions::{
    AccessibilityAttributes, AttributedDocument, LayoutOracle, LayoutUnavailable, Rect,
    RegionError, RegionProvider, RegionTraits,
};
use horizon_text_regions_layout::cosmic_text::FontSystem;
use horizon_text_regions_layout::{
    GlyphBox, LayoutLine, ParagraphLayout, ParagraphOptions, ParagraphShaper, WrapMode,
};

/// One 10 unit glyph per byte, wrapped at the given offsets.
fn monospace_layout(text_len: usize, breaks: &[usize]) -> ParagraphLayout {
    let mut bounds = vec![0];
    bounds.extend_from_slice(breaks);
    bounds.push(text_len);

    let lines = bounds
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let glyphs: Vec<GlyphBox> = (pair[0]..pair[1])
                .map(|offset| GlyphBox {
                    cluster: offset..offset + 1,
                    x: (offset - pair[0]) as f32 * 10.0,
                    width: 10.0,
                    rtl: false,
                })
                .collect();
            LayoutLine {
                top_y: i as f32 * 20.0,
                height: 20.0,
                width: glyphs.len() as f32 * 10.0,
                text_range: pair[0]..pair[1],
                glyphs,
            }
        })
        .collect();

    ParagraphLayout::from_lines(lines, text_len)
}

fn document() -> AttributedDocument {
    AttributedDocument::builder()
        .push_plain("Read our ")
        .push("privacy notice", AccessibilityAttributes::link())
        .push_plain(" today.")
        .build()
}

#[test]
fn test_wrapped_link_region() {
    // "Read our privacy " | "notice today."
    let layout = monospace_layout(30, &[17]);
    let frame = Rect::new(0.0, 0.0, 170.0, 40.0);
    let mut provider = RegionProvider::new(document(), frame, layout);

    let regions = provider.accessibility_elements().unwrap();
    assert_eq!(regions.len(), 3);

    let link = &regions[1];
    assert_eq!(link.traits, RegionTraits::LINK);
    assert_eq!(link.source_range, 9..23);
    // Line 1 covers x 90..170, line 2 covers x 0..60.
    assert_eq!(link.frame, Rect::new(0.0, 0.0, 170.0, 40.0));

    assert_eq!(regions[2].label, "today.");
    assert_eq!(regions[2].frame, Rect::new(60.0, 20.0, 70.0, 20.0));
}

/// A layout slot the host fills once shaping has happened.
struct LayoutSlot(RefCell<ParagraphLayout>);

impl LayoutOracle for LayoutSlot {
    fn rects_for_range(
        &self,
        range: Range<usize>,
        frame: Rect,
    ) -> Result<Vec<Rect>, LayoutUnavailable> {
        self.0.borrow().rects_for_range(range, frame)
    }
}

#[test]
fn test_pending_layout_then_ready() {
    let slot = Rc::new(LayoutSlot(RefCell::new(ParagraphLayout::pending())));
    let frame = Rect::new(0.0, 0.0, 400.0, 20.0);
    let mut provider = RegionProvider::new(document(), frame, Rc::clone(&slot));

    let err = provider.accessibility_elements().unwrap_err();
    assert!(matches!(err, RegionError::LayoutUnavailable(_)));

    *slot.0.borrow_mut() = monospace_layout(30, &[]);
    let regions = provider.accessibility_elements().unwrap();
    assert_eq!(regions.len(), 3);
    assert_eq!(regions[1].frame, Rect::new(90.0, 0.0, 140.0, 20.0));
}

#[test]
fn test_link_outside_visible_frame_is_dropped() {
    let layout = monospace_layout(30, &[9, 23]);
    // Only the first line is visible.
    let frame = Rect::new(0.0, 0.0, 300.0, 20.0);
    let mut provider = RegionProvider::new(document(), frame, layout);

    let regions = provider.accessibility_elements().unwrap();
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].label, "Read our");
}

#[test]
#[ignore = "requires system fonts"]
fn test_shaped_paragraph_regions() {
    let mut font_system = FontSystem::new();
    let shaper = ParagraphShaper::new(ParagraphOptions::new().max_width(120.0).wrap(WrapMode::Word));
    let layout = Rc::new(shaper.shape(&mut font_system, &document()));
    assert!(layout.line_count() > 1);

    let frame = Rect::new(0.0, 0.0, 120.0, layout.height());
    let mut provider = RegionProvider::new(document(), frame, Rc::downgrade(&layout));
    let regions = provider.accessibility_elements().unwrap();

    assert_eq!(regions.len(), 3);
    assert_eq!(regions[1].label, "privacy notice");
    assert!(regions[1].frame.width() > 0.0);
    assert!(frame.intersect(&regions[1].frame).is_some());
}
