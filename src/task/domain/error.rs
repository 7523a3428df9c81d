//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing task domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The raw task type does not name a known type.
    #[error("unknown task type {0}, expected 0 (translate) or 1 (proofread)")]
    InvalidTaskType(i64),
}
