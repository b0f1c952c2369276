//! Error types.

use thiserror::Error;

/// Errors returned by the checked row accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// The requested row does not exist in the current collection.
    #[error("row index {index} out of range for list of {len} items")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The collection length at the time of the request.
        len: usize,
    },
}
