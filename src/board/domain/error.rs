//! Error types for board domain validation and parsing.

use super::PipelineId;
use thiserror::Error;

/// Errors returned while constructing board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// An identifier is empty after trimming.
    #[error("{kind} identifier must not be empty")]
    EmptyIdentifier {
        /// Which identifier was blank (`pipeline`, `stage`, `card`).
        kind: &'static str,
    },

    /// A display label or title is empty after trimming.
    #[error("{kind} must not be empty")]
    EmptyLabel {
        /// Which label was blank.
        kind: &'static str,
    },

    /// Stage display orders are not strictly increasing, stage ids repeat,
    /// or the pipeline has no stages.
    #[error("invalid stage order for pipeline '{pipeline_id}': {reason}")]
    InvalidStageOrder {
        /// Pipeline whose stage list was rejected.
        pipeline_id: PipelineId,
        /// Description of the violation.
        reason: String,
    },

    /// The card priority label is not recognised.
    #[error(transparent)]
    UnknownPriority(#[from] ParsePriorityError),
}

/// Error returned while parsing a priority label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);
