//! The region provider: lazy, cached synthesis for one text block.
//!
//! A [`RegionProvider`] is created for a document, a reference frame and a
//! layout oracle. Regions are synthesized on the first call to
//! [`accessibility_elements`](RegionProvider::accessibility_elements) and
//! served from cache afterwards. Hosts re-render with a new document through
//! [`update_document`](RegionProvider::update_document), which only discards
//! the cache when the change is visible to assistive technology.
//!
//! # Example
//!
//! ```
//! use std::ops::Range;
//! use horizon_text_regions::{
//!     AccessibilityAttributes, AttributedDocument, LayoutOracle, LayoutUnavailable, Rect,
//!     RegionProvider,
//! };
//!
//! struct Monospace;
//!
//! impl LayoutOracle for Monospace {
//!     fn rects_for_range(&self, range: Range<usize>, frame: Rect) -> Result<Vec<Rect>, LayoutUnavailable> {
//!         let x = frame.left() + range.start as f32 * 8.0;
//!         Ok(vec![Rect::new(x, frame.top(), (range.end - range.start) as f32 * 8.0, 16.0)])
//!     }
//! }
//!
//! let document = AttributedDocument::builder()
//!     .push_plain("Agree to the ")
//!     .push("terms", AccessibilityAttributes::link())
//!     .build();
//!
//! let mut provider = RegionProvider::new(document.clone(), Rect::new(0.0, 0.0, 400.0, 16.0), Monospace);
//! let regions = provider.accessibility_elements().unwrap();
//! assert_eq!(regions.len(), 2);
//! assert_eq!(regions[1].label, "terms");
//!
//! assert!(provider.is_up_to_date(&document));
//! ```

use tracing::{debug, trace, warn};

use crate::decompose::decompose;
use crate::document::AttributedDocument;
use crate::error::RegionResult;
use crate::geometry::Rect;
use crate::logging::{targets, RegionListDebug};
use crate::options::SynthesisOptions;
use crate::oracle::LayoutOracle;
use crate::staleness::{DocumentSnapshot, StalenessGuard};
use crate::synthesize::{synthesize, AccessibilityRegion};

/// Serves the accessibility regions of one attributed text block.
///
/// The provider is single-threaded: it is driven from the thread that owns
/// the layout, and needs `&mut self` to fill its cache.
#[derive(Debug)]
pub struct RegionProvider<O: LayoutOracle> {
    document: AttributedDocument,
    frame: Rect,
    oracle: O,
    options: SynthesisOptions,
    guard: StalenessGuard,
    cache: Option<Vec<AccessibilityRegion>>,
}

impl<O: LayoutOracle> RegionProvider<O> {
    /// Create a provider with default options. No synthesis happens yet.
    pub fn new(document: AttributedDocument, frame: Rect, oracle: O) -> Self {
        Self::with_options(document, frame, oracle, SynthesisOptions::default())
    }

    /// Create a provider with custom options.
    pub fn with_options(
        document: AttributedDocument,
        frame: Rect,
        oracle: O,
        options: SynthesisOptions,
    ) -> Self {
        Self {
            document,
            frame,
            oracle,
            options,
            guard: StalenessGuard::new(),
            cache: None,
        }
    }

    /// The regions of the current document, synthesizing them if needed.
    ///
    /// On error nothing is cached, so the next call retries.
    pub fn accessibility_elements(&mut self) -> RegionResult<&[AccessibilityRegion]> {
        if self.cache.is_none() {
            let ranges = decompose(&self.document);
            let regions = synthesize(&self.document, &ranges, &self.oracle, self.frame, &self.options)
                .inspect_err(|err| {
                    warn!(target: targets::PROVIDER, %err, "region synthesis failed");
                })?;

            debug!(
                target: targets::PROVIDER,
                regions = regions.len(),
                "cached accessibility regions"
            );
            trace!(
                target: targets::PROVIDER,
                "\n{}",
                RegionListDebug::new().display(&regions)
            );

            self.guard.record_snapshot(&self.document);
            self.cache = Some(regions);
        }

        Ok(self.cache.as_deref().unwrap_or_default())
    }

    /// Check whether the cached regions would still be correct for
    /// `candidate`.
    ///
    /// Before the first successful synthesis this compares `candidate` with
    /// the document the provider was created with.
    pub fn is_up_to_date(&self, candidate: &AttributedDocument) -> bool {
        if self.guard.has_snapshot() {
            self.guard.is_up_to_date(candidate)
        } else {
            DocumentSnapshot::capture(&self.document).matches(candidate)
        }
    }

    /// Replace the document.
    ///
    /// Cached regions survive when the new document differs only in style.
    /// Returns `true` if regions will be resynthesized on the next request.
    pub fn update_document(&mut self, document: AttributedDocument) -> bool {
        if !self.is_up_to_date(&document) {
            debug!(target: targets::PROVIDER, "document changed, dropping cached regions");
            self.cache = None;
            self.guard.clear();
        }
        self.document = document;
        self.cache.is_none()
    }

    /// Move the reference frame. Cached regions are dropped if it changed.
    pub fn set_frame(&mut self, frame: Rect) {
        if self.frame != frame {
            trace!(target: targets::PROVIDER, ?frame, "reference frame changed");
            self.frame = frame;
            self.invalidate();
        }
    }

    /// Drop cached regions, for instance after the layout was recomputed.
    pub fn invalidate(&mut self) {
        self.cache = None;
        self.guard.clear();
    }

    /// Check whether regions are cached.
    pub fn is_cached(&self) -> bool {
        self.cache.is_some()
    }

    /// The current document.
    pub fn document(&self) -> &AttributedDocument {
        &self.document
    }

    /// The reference frame.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// The synthesis options.
    pub fn options(&self) -> &SynthesisOptions {
        &self.options
    }

    /// The layout oracle.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }
}
