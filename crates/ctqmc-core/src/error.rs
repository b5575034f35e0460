//! Error types for the operator trace
//!
//! Every variant here is a precondition violation by the calling engine,
//! never an expected outcome of a correct proposal. A silently dropped or
//! duplicated operator corrupts all downstream measurements without
//! detectable symptoms, so the trace reports a hard error and leaves the
//! abort-vs-assert decision to its owner.

use thiserror::Error;

use crate::OperatorTime;

/// Errors raised by the operator trace and composite accessors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// Insert targeted an ordered position that is already occupied.
    #[error("duplicate key: an operator already occupies {0}")]
    DuplicateKey(OperatorTime),

    /// Erase or lookup targeted a key with no matching operator, e.g. a
    /// revert against a trace mutated out-of-band since recording.
    #[error("no matching operator at {0}")]
    NotFound(OperatorTime),

    /// Out-of-range channel access on an equal-time composite.
    #[error("channel index {index} out of range for arity {arity}")]
    InvalidIndex { index: usize, arity: usize },

    /// Composite construction from a buffer of the wrong length.
    #[error("expected {expected} channels, got {actual}")]
    ArityMismatch { expected: usize, actual: usize },
}

/// Result type for trace operations.
pub type CoreResult<T> = Result<T, CoreError>;
