//! Error types for region synthesis.

use std::ops::Range;

use thiserror::Error;

/// The layout oracle could not resolve geometry.
///
/// Returned by [`LayoutOracle`](crate::LayoutOracle) implementations when the
/// underlying layout has not been computed yet or the oracle handle is gone.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("layout unavailable: {reason}")]
pub struct LayoutUnavailable {
    reason: String,
}

impl LayoutUnavailable {
    /// Create a new error with a human-readable reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The reason the layout could not be resolved.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Errors that can occur while synthesizing accessibility regions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegionError {
    /// The layout oracle cannot resolve geometry. Fatal to a synthesis pass.
    #[error(transparent)]
    LayoutUnavailable(#[from] LayoutUnavailable),

    /// A decomposed range falls outside the document text or splits a character.
    ///
    /// Synthesis skips the offending range and continues with the rest.
    #[error("range {range:?} does not address the document text (length {len})")]
    InvalidRange { range: Range<usize>, len: usize },
}

/// Result type for region operations.
pub type RegionResult<T> = Result<T, RegionError>;
