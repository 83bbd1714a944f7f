//! Configuration for region synthesis.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How text without explicit accessibility attributes is exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DefaultTextMode {
    /// Each run of default text between explicit fragments becomes one
    /// static-text region, interleaved with the explicit regions in
    /// document order.
    #[default]
    Spans,

    /// A single leading region covers the whole text block and reads it
    /// out in full; explicit regions follow it. Default runs are not
    /// emitted separately.
    ///
    /// The leading region spans the whole text, so it overlaps the explicit
    /// regions after it. Strictly increasing, non-overlapping source ranges
    /// are only guaranteed in [`Spans`](Self::Spans) mode.
    WholeText,
}

/// Options controlling region synthesis.
///
/// # Example
///
/// ```
/// use horizon_text_regions::{DefaultTextMode, SynthesisOptions};
///
/// let options = SynthesisOptions::new()
///     .default_text(DefaultTextMode::WholeText)
///     .clip_to_frame(false);
///
/// assert_eq!(options.default_text, DefaultTextMode::WholeText);
/// assert!(options.summarize_actions);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SynthesisOptions {
    /// How default text is exposed.
    pub default_text: DefaultTextMode,
    /// Clip region frames to the reference frame. Ranges whose geometry lies
    /// entirely outside the frame are dropped.
    pub clip_to_frame: bool,
    /// In [`DefaultTextMode::WholeText`], add a hint to the whole-text region
    /// summarising the links and buttons that follow it.
    pub summarize_actions: bool,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            default_text: DefaultTextMode::Spans,
            clip_to_frame: true,
            summarize_actions: true,
        }
    }
}

impl SynthesisOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how default text is exposed.
    pub fn default_text(mut self, mode: DefaultTextMode) -> Self {
        self.default_text = mode;
        self
    }

    /// Set whether region frames are clipped to the reference frame.
    pub fn clip_to_frame(mut self, clip: bool) -> Self {
        self.clip_to_frame = clip;
        self
    }

    /// Set whether the whole-text region carries an action summary hint.
    pub fn summarize_actions(mut self, summarize: bool) -> Self {
        self.summarize_actions = summarize;
        self
    }
}
