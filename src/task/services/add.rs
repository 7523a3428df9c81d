//! Service layer for adding a task to a remote project.

use super::{TaskParameters, builder::build_request};
use crate::project::{
    domain::ProjectId,
    ports::ProjectClient,
    services::{ProjectResolver, ResolveError},
};
use crate::task::{
    domain::{Task, TaskDomainError, TaskType},
    ports::{TaskClient, TaskClientError},
};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Stage of a task-add run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskAddStage {
    /// Mapping file paths to remote file identifiers.
    Resolving,
    /// Assembling the tier-specific request.
    Building,
    /// Waiting on the remote task client.
    Submitting,
}

impl TaskAddStage {
    /// Returns the lowercase stage name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Resolving => "resolving",
            Self::Building => "building",
            Self::Submitting => "submitting",
        }
    }
}

impl fmt::Display for TaskAddStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service-level errors for adding a task.
#[derive(Debug, Error)]
pub enum TaskAddError {
    /// No file paths were given.
    #[error("at least one file must be specified for the task")]
    NoFiles,
    /// Path resolution failed.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    /// Request construction rejected the parameters.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The remote task client failed; the client error is kept as-is.
    #[error(transparent)]
    Submit(#[from] TaskClientError),
}

impl TaskAddError {
    /// Returns the stage in which the run failed.
    #[must_use]
    pub const fn stage(&self) -> TaskAddStage {
        match self {
            Self::NoFiles | Self::Resolve(_) => TaskAddStage::Resolving,
            Self::Domain(_) => TaskAddStage::Building,
            Self::Submit(_) => TaskAddStage::Submitting,
        }
    }
}

/// Result type for task-add operations.
pub type TaskAddResult<T> = Result<T, TaskAddError>;

/// Orchestrates resolution, request construction and submission of a task.
///
/// The product tier is fixed when the service is created. Each call to
/// [`TaskAddService::add`] makes exactly one project download and at most one
/// task submission, with no retries.
#[derive(Clone)]
pub struct TaskAddService<P, T>
where
    P: ProjectClient,
    T: TaskClient,
{
    resolver: ProjectResolver<P>,
    task_client: Arc<T>,
    enterprise: bool,
}

impl<P, T> TaskAddService<P, T>
where
    P: ProjectClient,
    T: TaskClient,
{
    /// Creates a task-add service for the given tier.
    #[must_use]
    pub const fn new(project_client: Arc<P>, task_client: Arc<T>, enterprise: bool) -> Self {
        Self {
            resolver: ProjectResolver::new(project_client),
            task_client,
            enterprise,
        }
    }

    /// Returns `true` when requests are built for the enterprise tier.
    #[must_use]
    pub const fn is_enterprise(&self) -> bool {
        self.enterprise
    }

    /// Adds a task covering the parameters' files to `project_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAddError::NoFiles`] before any remote call when no paths
    /// are given, [`TaskAddError::Resolve`] when a path or branch cannot be
    /// resolved, [`TaskAddError::Domain`] for an unknown task type, and
    /// [`TaskAddError::Submit`] carrying the task client's error unchanged.
    pub async fn add(&self, project_id: ProjectId, params: &TaskParameters) -> TaskAddResult<Task> {
        if params.file_paths().is_empty() {
            return Err(TaskAddError::NoFiles);
        }

        debug!(
            stage = %TaskAddStage::Resolving,
            %project_id,
            file_count = params.file_paths().len(),
            "resolving task files"
        );
        let file_ids = self
            .resolver
            .resolve(project_id, params.file_paths(), params.branch())
            .await
            .inspect_err(|err| warn!(stage = %TaskAddStage::Resolving, %err, "task add failed"))?;

        debug!(
            stage = %TaskAddStage::Building,
            enterprise = self.enterprise,
            "building task request"
        );
        let request = build_request(params, file_ids, self.enterprise)
            .inspect_err(|err| warn!(stage = %TaskAddStage::Building, %err, "task add failed"))?;

        debug!(stage = %TaskAddStage::Submitting, "submitting task request");
        let task = self
            .task_client
            .add_task(&request)
            .await
            .inspect_err(|err| warn!(stage = %TaskAddStage::Submitting, %err, "task add failed"))?;

        info!(
            %project_id,
            task_id = task.id().map(|id| id.value()),
            task_type = task.task_type().map(TaskType::as_str),
            file_count = task.file_ids().len(),
            enterprise = self.enterprise,
            "task added"
        );
        Ok(task)
    }
}
