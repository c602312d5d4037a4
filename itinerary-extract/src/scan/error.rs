//! Scanner error types.

use crate::classify::InternalStateError;
use crate::domain::DayLabelError;
use crate::markup::StreamError;

/// Errors that stop the scan of a document.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The token source failed outside any travel block.
    #[error("document stream failed: {0}")]
    Stream(#[from] StreamError),

    /// A travel block does not have the expected shape.
    #[error("unexpected booking page structure: {0}")]
    InternalState(#[from] InternalStateError),

    /// A day-section header carries an unusable date.
    #[error("bad day section header: {0}")]
    DayLabel(#[from] DayLabelError),
}
