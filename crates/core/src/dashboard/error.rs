//! Dashboard error types.

use thiserror::Error;

use super::boundary::SectionId;

/// Illegal suspense boundary transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoundaryError {
    /// The section was already settled for this request.
    #[error("Section already settled: {0}")]
    AlreadySettled(SectionId),

    /// A section was reported back still pending.
    #[error("Section not settled: {0}")]
    NotSettled(SectionId),
}
