//! Domain Errors for Node Lookup
//!
//! Only construction-time validation, configuration checks and identifier
//! arithmetic can fail.
//! Empty pops, unknown ids and empty windows are ordinary `Option`/empty
//! results, never errors.

use thiserror::Error;

/// Errors raised by the lookup domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// A candidate set was asked for a visible window of zero entries.
    #[error("Invalid capacity: maxsize must be greater than zero, got {maxsize}")]
    InvalidCapacity {
        /// The rejected capacity
        maxsize: usize,
    },

    /// A lookup was configured to send zero queries per round.
    #[error("Invalid parallelism: alpha must be greater than zero, got {alpha}")]
    InvalidParallelism {
        /// The rejected parallelism
        alpha: usize,
    },

    /// XOR distance requested between identifiers of different widths.
    #[error("Identifier length mismatch: expected {expected} bytes, got {actual}")]
    IdentifierLengthMismatch {
        /// Width of the left-hand (or reference) identifier in bytes
        expected: usize,
        /// Width of the offending identifier in bytes
        actual: usize,
    },
}
