//! Attributed documents: text plus ordered, range-addressed fragments.
//!
//! An [`AttributedDocument`] owns its text and a list of [`Fragment`]s that
//! address byte ranges of it. Each fragment carries two independent payloads:
//!
//! - [`AccessibilityAttributes`]: the label, role and accessibility flag that
//!   drive region decomposition.
//! - [`FragmentStyle`]: visual styling used by the layout engine only. Region
//!   synthesis and staleness checks never look at it.
//!
//! # Example
//!
//! ```
//! use horizon_text_regions::{AccessibilityAttributes, AttributedDocument};
//!
//! let document = AttributedDocument::builder()
//!     .push_plain("Read the ")
//!     .push("guide", AccessibilityAttributes::link().with_label("User guide"))
//!     .push_plain(" first.")
//!     .build();
//!
//! assert_eq!(document.text(), "Read the guide first.");
//! assert_eq!(document.fragments().len(), 3);
//! assert_eq!(document.fragments()[1].range, 9..14);
//! ```

use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::role::{AccessibilityRole, RegionTraits};

/// Accessibility-relevant attributes of a fragment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AccessibilityAttributes {
    /// Explicit accessible label. Falls back to the fragment text when unset.
    pub label: Option<String>,
    /// The fragment's role.
    pub role: Option<AccessibilityRole>,
    /// Whether the fragment was explicitly marked accessible.
    pub is_accessible: bool,
}

impl AccessibilityAttributes {
    /// Attributes with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attributes for a fragment with the given role.
    pub fn with_role(role: AccessibilityRole) -> Self {
        Self {
            role: Some(role),
            ..Self::default()
        }
    }

    /// Attributes for a link fragment.
    pub fn link() -> Self {
        Self::with_role(AccessibilityRole::Link)
    }

    /// Attributes for a button fragment.
    pub fn button() -> Self {
        Self::with_role(AccessibilityRole::Button)
    }

    /// Set the explicit label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Mark the fragment as accessible.
    pub fn accessible(mut self) -> Self {
        self.is_accessible = true;
        self
    }

    /// Check whether the fragment must become its own region.
    pub fn is_explicit(&self) -> bool {
        self.is_accessible || self.label.is_some() || self.role.is_some()
    }

    /// The traits implied by the role.
    pub fn traits(&self) -> RegionTraits {
        self.role.map(AccessibilityRole::traits).unwrap_or_default()
    }
}

/// Visual style of a fragment.
///
/// Opaque to region synthesis: only the layout engine reads it. Changing it
/// never invalidates previously synthesized regions.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FragmentStyle {
    /// Optional font size override.
    pub font_size: Option<f32>,
    /// Whether the text is bold.
    pub bold: bool,
    /// Whether the text is italic.
    pub italic: bool,
    /// Whether the text has underline.
    pub underline: bool,
    /// Whether the text has strikethrough.
    pub strikethrough: bool,
    /// Optional text color (RGBA).
    pub color: Option<[u8; 4]>,
}

impl FragmentStyle {
    /// Plain, unstyled text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set italic.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Set underline.
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Set the font size.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Set the text color.
    pub fn with_color(mut self, color: [u8; 4]) -> Self {
        self.color = Some(color);
        self
    }
}

/// A styled, range-addressed slice of a document.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fragment {
    /// Byte range of the fragment in the document text.
    pub range: Range<usize>,
    /// Attributes that drive decomposition.
    pub attributes: AccessibilityAttributes,
    /// Visual style, ignored by synthesis.
    pub style: FragmentStyle,
}

impl Fragment {
    /// Create a new fragment.
    pub fn new(range: Range<usize>, attributes: AccessibilityAttributes, style: FragmentStyle) -> Self {
        Self {
            range,
            attributes,
            style,
        }
    }

    /// Check if the fragment covers no text.
    pub fn is_empty(&self) -> bool {
        self.range.start >= self.range.end
    }
}

/// One styled text block: text, ordered fragments and document-level metadata.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AttributedDocument {
    text: String,
    fragments: Vec<Fragment>,
    label: Option<String>,
    description: Option<String>,
}

impl AttributedDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a document fragment by fragment.
    pub fn builder() -> AttributedDocumentBuilder {
        AttributedDocumentBuilder::default()
    }

    /// Create a document from text and pre-computed fragments.
    ///
    /// The fragments are taken as-is. Out-of-order, overlapping or
    /// out-of-bounds fragments are tolerated here and skipped during
    /// synthesis.
    pub fn from_parts(text: impl Into<String>, fragments: Vec<Fragment>) -> Self {
        Self {
            text: text.into(),
            fragments,
            label: None,
            description: None,
        }
    }

    /// Set the document-level label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the document-level description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The full document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the document text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check whether the document has no fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// The fragments, in document order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Text covered by `range`, or `None` if the range is out of bounds or
    /// splits a character.
    pub fn text_in(&self, range: Range<usize>) -> Option<&str> {
        self.text.get(range)
    }

    /// The document-level label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The document-level description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Builder that appends contiguous fragments to a document.
#[derive(Debug, Clone, Default)]
pub struct AttributedDocumentBuilder {
    text: String,
    fragments: Vec<Fragment>,
    label: Option<String>,
    description: Option<String>,
}

impl AttributedDocumentBuilder {
    /// Append a fragment with accessibility attributes and no style.
    pub fn push(self, text: &str, attributes: AccessibilityAttributes) -> Self {
        self.push_styled(text, attributes, FragmentStyle::default())
    }

    /// Append plain text with default attributes.
    pub fn push_plain(self, text: &str) -> Self {
        self.push_styled(text, AccessibilityAttributes::default(), FragmentStyle::default())
    }

    /// Append a fragment with both attributes and style.
    pub fn push_styled(
        mut self,
        text: &str,
        attributes: AccessibilityAttributes,
        style: FragmentStyle,
    ) -> Self {
        let start = self.text.len();
        self.text.push_str(text);
        self.fragments
            .push(Fragment::new(start..self.text.len(), attributes, style));
        self
    }

    /// Set the document-level label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the document-level description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Finish building.
    pub fn build(self) -> AttributedDocument {
        AttributedDocument {
            text: self.text,
            fragments: self.fragments,
            label: self.label,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_assigns_contiguous_ranges() {
        let doc = AttributedDocument::builder()
            .push_plain("Hello ")
            .push("world", AccessibilityAttributes::link())
            .build();

        assert_eq!(doc.text(), "Hello world");
        assert_eq!(doc.fragments()[0].range, 0..6);
        assert_eq!(doc.fragments()[1].range, 6..11);
        assert_eq!(doc.text_in(6..11), Some("world"));
    }

    #[test]
    fn text_in_rejects_bad_ranges() {
        let doc = AttributedDocument::builder().push_plain("héllo").build();
        assert_eq!(doc.text_in(0..20), None);
        // 'é' spans bytes 1..3
        assert_eq!(doc.text_in(0..2), None);
        assert_eq!(doc.text_in(0..3), Some("hé"));
    }

    #[test]
    fn explicit_attributes() {
        assert!(!AccessibilityAttributes::new().is_explicit());
        assert!(AccessibilityAttributes::link().is_explicit());
        assert!(AccessibilityAttributes::new().with_label("x").is_explicit());
        assert!(AccessibilityAttributes::new().accessible().is_explicit());
        assert_eq!(AccessibilityAttributes::new().traits(), RegionTraits::empty());
        assert_eq!(AccessibilityAttributes::button().traits(), RegionTraits::BUTTON);
    }

    #[test]
    fn zero_length_fragment_is_empty() {
        let doc = AttributedDocument::builder()
            .push_plain("")
            .push_plain("text")
            .build();
        assert!(doc.fragments()[0].is_empty());
        assert!(!doc.fragments()[1].is_empty());
    }

    #[test]
    fn document_metadata() {
        let doc = AttributedDocument::builder()
            .push_plain("Terms")
            .label("Terms of service")
            .description("Tap links to open")
            .build();
        assert_eq!(doc.label(), Some("Terms of service"));
        assert_eq!(doc.description(), Some("Tap links to open"));
        assert!(AttributedDocument::new().is_empty());
    }
}
