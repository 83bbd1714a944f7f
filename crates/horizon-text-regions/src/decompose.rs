//! Splitting a document into the ranges that become accessibility regions.
//!
//! Decomposition walks the fragments in document order:
//!
//! - contiguous default fragments collapse into one pending default span;
//! - an explicit fragment flushes the pending span and becomes its own range;
//! - an explicit fragment directly following another explicit fragment with
//!   identical attributes extends it instead (one link split across style
//!   runs stays one link);
//! - empty fragments, and fragments overlapping an earlier one, are skipped.

use std::ops::Range;

use tracing::{debug, trace, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::document::{AccessibilityAttributes, AttributedDocument, Fragment};
use crate::logging::targets;
use crate::role::{AccessibilityRole, RegionTraits};

/// A range of the document that becomes at most one accessibility region.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecomposedRange {
    /// Byte range in the document text.
    pub range: Range<usize>,
    /// Explicit label attribute, if any.
    pub label: Option<String>,
    /// Concatenated text of the fragments in this range.
    pub text: String,
    /// Role of the explicit fragment(s), `None` for default spans.
    pub role: Option<AccessibilityRole>,
    /// Traits implied by the role.
    pub traits: RegionTraits,
    /// Whether the range came from explicitly attributed fragments.
    pub is_explicit: bool,
}

impl DecomposedRange {
    fn from_fragment(fragment: &Fragment, text: &str) -> Self {
        let attributes = &fragment.attributes;
        Self {
            range: fragment.range.clone(),
            label: attributes.label.clone(),
            text: text.to_owned(),
            role: attributes.role,
            traits: attributes.traits(),
            is_explicit: attributes.is_explicit(),
        }
    }

    /// The label this range is announced with: the explicit label, or the
    /// range's plain text when no label is set.
    pub fn resolved_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.text)
    }

    fn extend(&mut self, fragment: &Fragment, text: &str) {
        self.range.end = fragment.range.end;
        self.text.push_str(text);
    }
}

/// Decompose `document` into ranges, in document order.
///
/// The result is empty for a document without fragments, and a single
/// default range for a document without explicit fragments.
pub fn decompose(document: &AttributedDocument) -> Vec<DecomposedRange> {
    let mut out: Vec<DecomposedRange> = Vec::new();
    let mut pending: Option<DecomposedRange> = None;
    // Attributes of the explicit range at the end of `out`, while it can
    // still absorb an identical neighbour.
    let mut open_explicit: Option<&AccessibilityAttributes> = None;
    let mut cursor = 0usize;

    for (index, fragment) in document.fragments().iter().enumerate() {
        if fragment.is_empty() {
            trace!(target: targets::DECOMPOSE, index, "skipping empty fragment");
            continue;
        }

        if fragment.range.start < cursor {
            warn!(
                target: targets::DECOMPOSE,
                index,
                start = fragment.range.start,
                previous_end = cursor,
                "skipping fragment that overlaps or precedes its predecessor"
            );
            continue;
        }
        cursor = fragment.range.end;

        let Some(text) = document.text_in(fragment.range.clone()) else {
            // Out of bounds: emit it alone so only this range is rejected
            // at synthesis time.
            flush(&mut out, &mut pending);
            open_explicit = None;
            out.push(DecomposedRange::from_fragment(fragment, ""));
            continue;
        };

        let attributes = &fragment.attributes;
        if !attributes.is_explicit() {
            open_explicit = None;
            if let Some(span) = pending.as_mut()
                && span.range.end == fragment.range.start
            {
                span.extend(fragment, text);
            } else {
                // Uncovered text between default fragments ends the span.
                flush(&mut out, &mut pending);
                pending = Some(DecomposedRange::from_fragment(fragment, text));
            }
            continue;
        }

        flush(&mut out, &mut pending);

        if let Some(previous) = open_explicit
            && previous == attributes
            && let Some(last) = out.last_mut()
            && last.range.end == fragment.range.start
        {
            trace!(
                target: targets::DECOMPOSE,
                index,
                "merging fragment into identical explicit neighbour"
            );
            last.extend(fragment, text);
            continue;
        }

        out.push(DecomposedRange::from_fragment(fragment, text));
        open_explicit = Some(attributes);
    }

    flush(&mut out, &mut pending);

    debug!(
        target: targets::DECOMPOSE,
        fragments = document.fragments().len(),
        ranges = out.len(),
        "decomposed document"
    );
    out
}

fn flush(out: &mut Vec<DecomposedRange>, pending: &mut Option<DecomposedRange>) {
    if let Some(span) = pending.take() {
        out.push(span);
    }
}
