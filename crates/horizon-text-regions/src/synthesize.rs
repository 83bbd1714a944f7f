//! Turning decomposed ranges into framed, labelled accessibility regions.

use std::ops::Range;

use tracing::{debug, trace, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::decompose::DecomposedRange;
use crate::document::AttributedDocument;
use crate::error::{RegionError, RegionResult};
use crate::geometry::Rect;
use crate::logging::targets;
use crate::options::{DefaultTextMode, SynthesisOptions};
use crate::oracle::LayoutOracle;
use crate::role::RegionTraits;

/// A labelled, traited, framed area that assistive technology can focus.
///
/// Regions are plain values with no identity beyond one synthesis pass. Hosts
/// that need stable identity can derive it from [`source_range`](Self::source_range).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AccessibilityRegion {
    /// Bounding frame in the reference frame's coordinate space.
    pub frame: Rect,
    /// The label announced for this region.
    pub label: String,
    /// Additional context announced after the label.
    pub hint: Option<String>,
    /// Traits of this region.
    pub traits: RegionTraits,
    /// Byte range of the document this region reads out.
    pub source_range: Range<usize>,
}

impl AccessibilityRegion {
    /// Check if this region reads as static text.
    pub fn is_static_text(&self) -> bool {
        self.traits.contains(RegionTraits::STATIC_TEXT)
    }

    /// Check if the user can activate this region.
    pub fn is_actionable(&self) -> bool {
        !self.traits.actionable().is_empty()
    }
}

/// Synthesize regions for `ranges`, preserving their order.
///
/// Each range is resolved to geometry through `oracle`. Ranges with no
/// geometry, no readable label, or bounds outside the document are skipped;
/// an oracle failure aborts the whole pass with
/// [`RegionError::LayoutUnavailable`].
pub fn synthesize<O: LayoutOracle + ?Sized>(
    document: &AttributedDocument,
    ranges: &[DecomposedRange],
    oracle: &O,
    frame: Rect,
    options: &SynthesisOptions,
) -> RegionResult<Vec<AccessibilityRegion>> {
    let regions = match options.default_text {
        DefaultTextMode::Spans => synthesize_spans(document, ranges, oracle, frame, options)?,
        DefaultTextMode::WholeText => {
            synthesize_whole_text(document, ranges, oracle, frame, options)?
        }
    };

    debug!(
        target: targets::SYNTHESIZE,
        ranges = ranges.len(),
        regions = regions.len(),
        mode = ?options.default_text,
        "synthesized accessibility regions"
    );
    Ok(regions)
}

fn synthesize_spans<O: LayoutOracle + ?Sized>(
    document: &AttributedDocument,
    ranges: &[DecomposedRange],
    oracle: &O,
    frame: Rect,
    options: &SynthesisOptions,
) -> RegionResult<Vec<AccessibilityRegion>> {
    let whole = 0..document.len();
    let mut regions = Vec::with_capacity(ranges.len());

    for range in ranges {
        // A default span covering the whole text stands for the document.
        let document_label = (!range.is_explicit && range.range == whole)
            .then(|| document.label())
            .flatten();

        let Some(mut region) = build_region(document, range, document_label, oracle, frame, options)?
        else {
            continue;
        };
        if document_label.is_some() {
            region.hint = document.description().map(str::to_owned);
        }
        regions.push(region);
    }

    Ok(regions)
}

fn synthesize_whole_text<O: LayoutOracle + ?Sized>(
    document: &AttributedDocument,
    ranges: &[DecomposedRange],
    oracle: &O,
    frame: Rect,
    options: &SynthesisOptions,
) -> RegionResult<Vec<AccessibilityRegion>> {
    if document.is_empty() {
        return Ok(Vec::new());
    }

    // The whole-text region uses the reference frame, but only once the
    // layout can resolve the text at all.
    oracle
        .rects_for_range(0..document.len(), frame)
        .inspect_err(|err| {
            warn!(target: targets::SYNTHESIZE, %err, "aborting synthesis");
        })?;

    let mut explicit = Vec::new();
    for range in ranges.iter().filter(|range| range.is_explicit) {
        if let Some(region) = build_region(document, range, None, oracle, frame, options)? {
            explicit.push(region);
        }
    }

    // An explicit region covering the entire text is folded into the
    // whole-text region instead of being announced twice.
    let whole_range = 0..document.len();
    let folded = explicit
        .iter()
        .position(|region| region.source_range == whole_range)
        .map(|index| explicit.remove(index));

    let whole_label = match (document.label(), &folded) {
        (Some(label), _) => label.to_owned(),
        (None, Some(folded)) => folded.label.clone(),
        (None, None) => visible_text(document.text()),
    };
    if whole_label.is_empty() {
        return Ok(explicit);
    }

    let mut whole = AccessibilityRegion {
        frame,
        label: whole_label,
        hint: None,
        traits: RegionTraits::STATIC_TEXT,
        source_range: whole_range,
    };

    if let Some(folded) = folded {
        trace!(
            target: targets::SYNTHESIZE,
            traits = ?folded.traits,
            "folding whole-text explicit region"
        );
        whole.traits = folded.traits;
    }

    let mut hint_parts: Vec<String> = Vec::new();
    if let Some(description) = document.description() {
        hint_parts.push(description.to_owned());
    }
    if options.summarize_actions
        && let Some(summary) = action_summary(&explicit)
    {
        hint_parts.push(summary);
    }
    if !hint_parts.is_empty() {
        whole.hint = Some(hint_parts.join("; "));
    }

    let mut regions = Vec::with_capacity(explicit.len() + 1);
    regions.push(whole);
    regions.extend(explicit);
    Ok(regions)
}

/// Resolve one decomposed range into a region.
///
/// Returns `Ok(None)` when the range is skipped.
fn build_region<O: LayoutOracle + ?Sized>(
    document: &AttributedDocument,
    range: &DecomposedRange,
    label_override: Option<&str>,
    oracle: &O,
    frame: Rect,
    options: &SynthesisOptions,
) -> RegionResult<Option<AccessibilityRegion>> {
    if document.text_in(range.range.clone()).is_none() {
        let err = RegionError::InvalidRange {
            range: range.range.clone(),
            len: document.len(),
        };
        warn!(target: targets::SYNTHESIZE, %err, "skipping range");
        return Ok(None);
    }

    let rects = oracle
        .rects_for_range(range.range.clone(), frame)
        .inspect_err(|err| {
            warn!(target: targets::SYNTHESIZE, %err, "aborting synthesis");
        })?;

    let Some(mut bounds) = Rect::bounding(rects.iter().filter(|rect| rect.is_finite())) else {
        trace!(
            target: targets::SYNTHESIZE,
            start = range.range.start,
            end = range.range.end,
            "dropping range without geometry"
        );
        return Ok(None);
    };

    if options.clip_to_frame {
        match bounds.intersect(&frame) {
            Some(clipped) => bounds = clipped,
            None => {
                trace!(
                    target: targets::SYNTHESIZE,
                    start = range.range.start,
                    end = range.range.end,
                    "dropping range clipped by the reference frame"
                );
                return Ok(None);
            }
        }
    }

    let explicit_label = label_override
        .or(range.label.as_deref())
        .filter(|label| !label.trim().is_empty());
    let label = match explicit_label {
        Some(label) => label.to_owned(),
        None => visible_text(&range.text),
    };
    if label.is_empty() {
        trace!(
            target: targets::SYNTHESIZE,
            start = range.range.start,
            end = range.range.end,
            "dropping range without readable text"
        );
        return Ok(None);
    }

    let mut traits = range.traits;
    if !range.is_explicit {
        traits |= RegionTraits::STATIC_TEXT;
    }

    Ok(Some(AccessibilityRegion {
        frame: bounds,
        label,
        hint: None,
        traits,
        source_range: range.range.clone(),
    }))
}

/// The characters of `text` a screen reader would read, trimmed.
///
/// Line and paragraph breaks and tabs read as spaces. Control characters,
/// zero-width formatting characters and the object replacement character
/// used for inline attachments are dropped.
pub fn visible_text(text: &str) -> String {
    let visible: String = text
        .chars()
        .filter_map(|c| match c {
            '\n' | '\r' | '\t' | '\u{2028}' | '\u{2029}' => Some(' '),
            '\u{00AD}' | '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{2060}' | '\u{FEFF}'
            | '\u{FFFC}' => None,
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect();
    visible.trim().to_owned()
}

/// "2 links, 1 button" style summary of actionable regions.
fn action_summary(regions: &[AccessibilityRegion]) -> Option<String> {
    let count = |traits: RegionTraits| {
        regions
            .iter()
            .filter(|region| region.traits.contains(traits))
            .count()
    };
    let links = count(RegionTraits::LINK);
    let buttons = count(RegionTraits::BUTTON);

    let mut parts = Vec::new();
    match links {
        0 => {}
        1 => parts.push("1 link".to_owned()),
        n => parts.push(format!("{n} links")),
    }
    match buttons {
        0 => {}
        1 => parts.push("1 button".to_owned()),
        n => parts.push(format!("{n} buttons")),
    }

    (!parts.is_empty()).then(|| parts.join(", "))
}
