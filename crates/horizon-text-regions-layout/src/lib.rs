//! cosmic-text backed layout oracle for Horizon Text Regions.
//!
//! [`ParagraphShaper`] shapes an [`AttributedDocument`] with cosmic-text and
//! produces a [`ParagraphLayout`]: the resolved lines and glyph clusters of
//! the paragraph. A `ParagraphLayout` implements [`LayoutOracle`], so it can
//! be handed straight to a [`RegionProvider`].
//!
//! ```no_run
//! use std::rc::Rc;
//! use cosmic_text::FontSystem;
//! use horizon_text_regions::{AccessibilityAttributes, AttributedDocument, Rect, RegionProvider};
//! use horizon_text_regions_layout::{ParagraphOptions, ParagraphShaper};
//!
//! let mut font_system = FontSystem::new();
//! let document = AttributedDocument::builder()
//!     .push_plain("See the ")
//!     .push("release notes", AccessibilityAttributes::link())
//!     .build();
//!
//! let shaper = ParagraphShaper::new(ParagraphOptions::new().max_width(320.0));
//! let layout = Rc::new(shaper.shape(&mut font_system, &document));
//!
//! // The provider observes the layout without keeping it alive.
//! let frame = Rect::new(0.0, 0.0, 320.0, layout.height());
//! let mut provider = RegionProvider::new(document, frame, Rc::downgrade(&layout));
//! for region in provider.accessibility_elements().unwrap() {
//!     println!("{:?} at {:?}", region.label, region.frame);
//! }
//! ```
//!
//! [`AttributedDocument`]: horizon_text_regions::AttributedDocument
//! [`LayoutOracle`]: horizon_text_regions::LayoutOracle
//! [`RegionProvider`]: horizon_text_regions::RegionProvider

mod options;
mod paragraph;
mod shaping;

pub use options::{HorizontalAlign, ParagraphOptions, WrapMode};
pub use paragraph::{GlyphBox, LayoutLine, ParagraphLayout};
pub use shaping::ParagraphShaper;

// Re-export cosmic-text so hosts share the same FontSystem type
pub use cosmic_text;
