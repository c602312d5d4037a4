//! Classifier error types.

use std::fmt;

use crate::domain::TravelRecord;
use crate::markup::StreamError;

use super::state::Context;

/// Which direction-dependent label was met without a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionalLabel {
    TimeOfDay,
    Station,
}

impl fmt::Display for DirectionalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectionalLabel::TimeOfDay => f.write_str("time-of-day label"),
            DirectionalLabel::Station => f.write_str("station label"),
        }
    }
}

/// The document does not have the shape the classifier relies on.
///
/// This is an assumption violation, not a data-quality problem: processing
/// of the document should stop.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{label} outside a departure or arrival block (context: {context})")]
pub struct InternalStateError {
    pub label: DirectionalLabel,
    pub context: Context,
}

/// Failure while classifying one travel block.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    /// The token stream ended or failed before the block closed.
    ///
    /// `partial` holds whatever was collected; it must not be emitted.
    #[error("travel block not closed: {source}")]
    Stream {
        partial: Box<TravelRecord>,
        source: StreamError,
    },

    #[error(transparent)]
    InternalState(#[from] InternalStateError),
}

impl ClassifyError {
    pub(crate) fn stream(partial: TravelRecord, source: StreamError) -> Self {
        ClassifyError::Stream {
            partial: Box::new(partial),
            source,
        }
    }

    /// The partially built record, for stream failures.
    pub fn partial(&self) -> Option<&TravelRecord> {
        match self {
            ClassifyError::Stream { partial, .. } => Some(&**partial),
            ClassifyError::InternalState(_) => None,
        }
    }
}
