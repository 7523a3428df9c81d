//! Remote task client port.

use crate::task::domain::{Task, TaskRequest};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for remote task operations.
pub type TaskClientResult<T> = Result<T, TaskClientError>;

/// Task creation against the remote task service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskClient: Send + Sync {
    /// Creates a task from a tier-specific request.
    ///
    /// # Errors
    ///
    /// Returns [`TaskClientError::Remote`] for transport, authorization or
    /// remote validation failures.
    async fn add_task(&self, request: &TaskRequest) -> TaskClientResult<Task>;
}

/// Errors returned by remote task client implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskClientError {
    /// Remote call failure, reported verbatim.
    #[error("{0}")]
    Remote(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskClientError {
    /// Wraps a remote-call error.
    pub fn remote(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Remote(Arc::new(err))
    }
}
