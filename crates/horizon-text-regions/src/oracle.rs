//! The layout oracle: range-to-geometry queries against resolved layout.
//!
//! Region synthesis never computes layout itself. It asks a [`LayoutOracle`]
//! for the rectangles covering a byte range of the document. Oracles answer
//! from already-resolved layout data, so queries are synchronous and cheap.
//!
//! The oracle is a capability handed to the provider at construction. Hosts
//! that want the provider to observe the layout without owning it can pass a
//! weak handle: once the layout is dropped, queries report
//! [`LayoutUnavailable`].
//!
//! ```
//! use std::ops::Range;
//! use std::rc::Rc;
//! use horizon_text_regions::{LayoutOracle, LayoutUnavailable, Rect};
//!
//! struct OneLine;
//!
//! impl LayoutOracle for OneLine {
//!     fn rects_for_range(&self, range: Range<usize>, frame: Rect) -> Result<Vec<Rect>, LayoutUnavailable> {
//!         let width = (range.end - range.start) as f32 * 8.0;
//!         Ok(vec![Rect::new(frame.left() + range.start as f32 * 8.0, frame.top(), width, 16.0)])
//!     }
//! }
//!
//! let layout = Rc::new(OneLine);
//! let weak = Rc::downgrade(&layout);
//! assert!(weak.rects_for_range(0..4, Rect::ZERO).is_ok());
//!
//! drop(layout);
//! assert!(weak.rects_for_range(0..4, Rect::ZERO).is_err());
//! ```

use std::ops::Range;
use std::rc::{self, Rc};
use std::sync::{self, Arc};

use crate::error::LayoutUnavailable;
use crate::geometry::Rect;

/// Resolves document byte ranges into rendered geometry.
///
/// Implementations must be deterministic for a fixed document and frame, and
/// must return axis-aligned rectangles in the coordinate space of `frame`.
pub trait LayoutOracle {
    /// Rectangles covering the rendered glyphs of `range`, in reading order.
    ///
    /// An empty vector means the range has no visible geometry (collapsed or
    /// fully clipped). An error means geometry cannot be resolved at all.
    fn rects_for_range(
        &self,
        range: Range<usize>,
        frame: Rect,
    ) -> Result<Vec<Rect>, LayoutUnavailable>;
}

impl<T: LayoutOracle + ?Sized> LayoutOracle for &T {
    fn rects_for_range(
        &self,
        range: Range<usize>,
        frame: Rect,
    ) -> Result<Vec<Rect>, LayoutUnavailable> {
        (**self).rects_for_range(range, frame)
    }
}

impl<T: LayoutOracle + ?Sized> LayoutOracle for Box<T> {
    fn rects_for_range(
        &self,
        range: Range<usize>,
        frame: Rect,
    ) -> Result<Vec<Rect>, LayoutUnavailable> {
        (**self).rects_for_range(range, frame)
    }
}

impl<T: LayoutOracle + ?Sized> LayoutOracle for Rc<T> {
    fn rects_for_range(
        &self,
        range: Range<usize>,
        frame: Rect,
    ) -> Result<Vec<Rect>, LayoutUnavailable> {
        (**self).rects_for_range(range, frame)
    }
}

impl<T: LayoutOracle + ?Sized> LayoutOracle for Arc<T> {
    fn rects_for_range(
        &self,
        range: Range<usize>,
        frame: Rect,
    ) -> Result<Vec<Rect>, LayoutUnavailable> {
        (**self).rects_for_range(range, frame)
    }
}

impl<T: LayoutOracle> LayoutOracle for rc::Weak<T> {
    fn rects_for_range(
        &self,
        range: Range<usize>,
        frame: Rect,
    ) -> Result<Vec<Rect>, LayoutUnavailable> {
        let layout = self
            .upgrade()
            .ok_or_else(|| LayoutUnavailable::new("layout has been dropped"))?;
        layout.rects_for_range(range, frame)
    }
}

impl<T: LayoutOracle> LayoutOracle for sync::Weak<T> {
    fn rects_for_range(
        &self,
        range: Range<usize>,
        frame: Rect,
    ) -> Result<Vec<Rect>, LayoutUnavailable> {
        let layout = self
            .upgrade()
            .ok_or_else(|| LayoutUnavailable::new("layout has been dropped"))?;
        layout.rects_for_range(range, frame)
    }
}
