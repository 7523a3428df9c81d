//! In-memory task client for orchestration tests and dry runs.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskId, TaskRequest},
    ports::{TaskClient, TaskClientError, TaskClientResult},
};

/// Task client that records requests and echoes them back as tasks.
///
/// Created tasks receive sequential identifiers starting at 1. A configured
/// failure applies to every later call and is still recorded.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskClient {
    state: Arc<RwLock<InMemoryTaskClientState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskClientState {
    submitted: Vec<TaskRequest>,
    next_id: u64,
    failure: Option<String>,
}

fn lock_error(err: impl std::fmt::Display) -> TaskClientError {
    TaskClientError::remote(std::io::Error::other(err.to_string()))
}

impl InMemoryTaskClient {
    /// Creates a client that accepts every request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `add_task` call fail with `message`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskClientError::Remote`] when lock acquisition fails.
    pub fn fail_with(&self, message: impl Into<String>) -> TaskClientResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.failure = Some(message.into());
        Ok(())
    }

    /// Returns every request received so far, in call order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskClientError::Remote`] when lock acquisition fails.
    pub fn submitted(&self) -> TaskClientResult<Vec<TaskRequest>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.submitted.clone())
    }
}

#[async_trait]
impl TaskClient for InMemoryTaskClient {
    async fn add_task(&self, request: &TaskRequest) -> TaskClientResult<Task> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.submitted.push(request.clone());

        if let Some(message) = &state.failure {
            return Err(TaskClientError::remote(std::io::Error::other(
                message.clone(),
            )));
        }

        state.next_id += 1;
        Ok(Task::echo(request).with_id(TaskId::new(state.next_id)))
    }
}
