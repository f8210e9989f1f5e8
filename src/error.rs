//! Error types for selection operations.

use thiserror::Error;

/// Errors from the strict selection entry points.
///
/// The permissive operations (`select`, `select_all`, `clear`) never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The item is not part of the current candidate list.
    #[error("item is not in the candidate list ({candidates} candidates)")]
    NotACandidate { candidates: usize },
}

/// A specialized Result type for selection operations.
pub type Result<T> = std::result::Result<T, SelectionError>;
