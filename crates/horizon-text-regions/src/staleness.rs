//! Detecting when cached regions no longer describe a document.

use std::ops::Range;

use crate::document::{AccessibilityAttributes, AttributedDocument};

/// The accessibility-relevant content of a document at synthesis time.
///
/// Holds the text, each fragment's range and attributes, and the
/// document-level label and description. Fragment styles are not recorded,
/// so restyling a document never makes its regions stale.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSnapshot {
    text: String,
    fragments: Vec<(Range<usize>, AccessibilityAttributes)>,
    label: Option<String>,
    description: Option<String>,
}

impl DocumentSnapshot {
    /// Capture the accessibility-relevant content of `document`.
    pub fn capture(document: &AttributedDocument) -> Self {
        Self {
            text: document.text().to_owned(),
            fragments: document
                .fragments()
                .iter()
                .map(|fragment| (fragment.range.clone(), fragment.attributes.clone()))
                .collect(),
            label: document.label().map(str::to_owned),
            description: document.description().map(str::to_owned),
        }
    }

    /// Check whether `document` has the same accessibility-relevant content.
    pub fn matches(&self, document: &AttributedDocument) -> bool {
        self.text == document.text()
            && self.label.as_deref() == document.label()
            && self.description.as_deref() == document.description()
            && self.fragments.len() == document.fragments().len()
            && self
                .fragments
                .iter()
                .zip(document.fragments())
                .all(|((range, attributes), fragment)| {
                    *range == fragment.range && *attributes == fragment.attributes
                })
    }
}

/// Remembers the document the current regions were synthesized from.
#[derive(Debug, Clone, Default)]
pub struct StalenessGuard {
    snapshot: Option<DocumentSnapshot>,
}

impl StalenessGuard {
    /// Create a guard with no snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether regions synthesized from the recorded document are
    /// still valid for `candidate`.
    ///
    /// Always false before a snapshot has been recorded.
    pub fn is_up_to_date(&self, candidate: &AttributedDocument) -> bool {
        self.snapshot
            .as_ref()
            .is_some_and(|snapshot| snapshot.matches(candidate))
    }

    /// Check whether a snapshot has been recorded.
    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }

    pub(crate) fn record_snapshot(&mut self, document: &AttributedDocument) {
        self.snapshot = Some(DocumentSnapshot::capture(document));
    }

    pub(crate) fn clear(&mut self) {
        self.snapshot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Fragment, FragmentStyle};

    fn document() -> AttributedDocument {
        AttributedDocument::builder()
            .push_plain("Call ")
            .push("support", AccessibilityAttributes::link())
            .build()
    }

    #[test]
    fn unset_guard_is_never_up_to_date() {
        let guard = StalenessGuard::new();
        assert!(!guard.has_snapshot());
        assert!(!guard.is_up_to_date(&document()));
        assert!(!guard.is_up_to_date(&AttributedDocument::new()));
    }

    #[test]
    fn identical_document_is_up_to_date() {
        let mut guard = StalenessGuard::new();
        guard.record_snapshot(&document());
        assert!(guard.has_snapshot());
        assert!(guard.is_up_to_date(&document()));
    }

    #[test]
    fn restyling_keeps_regions_valid() {
        let mut guard = StalenessGuard::new();
        guard.record_snapshot(&document());

        let restyled = AttributedDocument::builder()
            .push_styled("Call ", AccessibilityAttributes::new(), FragmentStyle::new().italic())
            .push_styled(
                "support",
                AccessibilityAttributes::link(),
                FragmentStyle::new().underline().with_color([0, 0, 255, 255]),
            )
            .build();
        assert!(guard.is_up_to_date(&restyled));
    }

    #[test]
    fn accessibility_changes_are_stale() {
        let mut guard = StalenessGuard::new();
        guard.record_snapshot(&document());

        let relabelled = AttributedDocument::builder()
            .push_plain("Call ")
            .push("support", AccessibilityAttributes::link().with_label("Support"))
            .build();
        assert!(!guard.is_up_to_date(&relabelled));

        let retyped = AttributedDocument::builder()
            .push_plain("Call ")
            .push("support", AccessibilityAttributes::button())
            .build();
        assert!(!guard.is_up_to_date(&retyped));

        let edited = AttributedDocument::builder()
            .push_plain("Call ")
            .push("sales", AccessibilityAttributes::link())
            .build();
        assert!(!guard.is_up_to_date(&edited));

        assert!(!guard.is_up_to_date(&document().with_description("24/7")));
    }

    #[test]
    fn resplit_fragments_are_stale() {
        let mut guard = StalenessGuard::new();
        guard.record_snapshot(&document());

        let resplit = AttributedDocument::from_parts(
            "Call support",
            vec![
                Fragment::new(0..4, AccessibilityAttributes::new(), FragmentStyle::new()),
                Fragment::new(4..12, AccessibilityAttributes::link(), FragmentStyle::new()),
            ],
        );
        assert!(!guard.is_up_to_date(&resplit));
    }

    #[test]
    fn clear_forgets_snapshot() {
        let mut guard = StalenessGuard::new();
        guard.record_snapshot(&document());
        guard.clear();
        assert!(!guard.is_up_to_date(&document()));
    }
}
