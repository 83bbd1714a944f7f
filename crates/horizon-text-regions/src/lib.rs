//! Accessibility region synthesis for laid-out attributed text.
//!
//! A paragraph of styled text often contains parts a screen reader user must
//! be able to reach on their own: links, buttons, headers inside running
//! prose. This crate splits an [`AttributedDocument`] into such parts and
//! turns each one into an [`AccessibilityRegion`] with a label, a set of
//! [`RegionTraits`] and an on-screen frame.
//!
//! The pipeline has three stages:
//!
//! 1. [`decompose`] walks the fragments in order. Explicitly attributed
//!    fragments become their own ranges; runs of plain text between them
//!    collapse into one range each.
//! 2. [`synthesize`] asks a [`LayoutOracle`] for the geometry of each range
//!    and builds regions from the ones that have geometry and a readable
//!    label.
//! 3. [`RegionProvider`] ties both together for one text block, caching the
//!    result and using a [`StalenessGuard`] to decide when a new document
//!    invalidates it.
//!
//! # Getting Started
//!
//! ```
//! use std::ops::Range;
//! use horizon_text_regions::{
//!     AccessibilityAttributes, AttributedDocument, LayoutOracle, LayoutUnavailable, Rect,
//!     RegionProvider, RegionTraits,
//! };
//!
//! // Any resolved layout can answer geometry queries. Here every byte is
//! // 10 units wide on a single line.
//! struct Monospace;
//!
//! impl LayoutOracle for Monospace {
//!     fn rects_for_range(&self, range: Range<usize>, frame: Rect) -> Result<Vec<Rect>, LayoutUnavailable> {
//!         let width = (range.end - range.start) as f32 * 10.0;
//!         Ok(vec![Rect::new(frame.left() + range.start as f32 * 10.0, frame.top(), width, 20.0)])
//!     }
//! }
//!
//! let document = AttributedDocument::builder()
//!     .push_plain("Hello ")
//!     .push("world", AccessibilityAttributes::link().with_label("world-link"))
//!     .build();
//!
//! let mut provider = RegionProvider::new(document, Rect::new(0.0, 0.0, 300.0, 20.0), Monospace);
//! let regions = provider.accessibility_elements()?;
//!
//! assert_eq!(regions[0].label, "Hello");
//! assert_eq!(regions[0].traits, RegionTraits::STATIC_TEXT);
//! assert_eq!(regions[1].label, "world-link");
//! assert_eq!(regions[1].traits, RegionTraits::LINK);
//! # Ok::<(), horizon_text_regions::RegionError>(())
//! ```
//!
//! # Features
//!
//! - `accessibility` (default): AccessKit export in [`node`].
//! - `serde`: `Serialize`/`Deserialize` for documents, options and regions.

mod decompose;
mod document;
mod error;
mod geometry;
mod options;
mod oracle;
mod provider;
mod role;
mod staleness;
mod synthesize;

pub mod logging;
#[cfg(feature = "accessibility")]
pub mod node;

// Document model
pub use document::{
    AccessibilityAttributes, AttributedDocument, AttributedDocumentBuilder, Fragment,
    FragmentStyle,
};
pub use role::{AccessibilityRole, RegionTraits};

// Pipeline
pub use decompose::{decompose, DecomposedRange};
pub use oracle::LayoutOracle;
pub use options::{DefaultTextMode, SynthesisOptions};
pub use provider::RegionProvider;
pub use staleness::{DocumentSnapshot, StalenessGuard};
pub use synthesize::{synthesize, visible_text, AccessibilityRegion};

// Supporting types
pub use error::{LayoutUnavailable, RegionError, RegionResult};
pub use geometry::{Point, Rect, Size};

// Re-export accesskit for hosts consuming the tree updates
#[cfg(feature = "accessibility")]
pub use accesskit;
