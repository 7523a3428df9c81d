//! Shared world state for task-add BDD scenarios.

use std::sync::Arc;

use l10n_tasks::{
    project::{
        adapters::InMemoryProjectClient,
        domain::{FileId, ProjectId, ProjectTree},
    },
    task::{
        adapters::InMemoryTaskClient,
        domain::{Task, WorkflowStepId},
        services::{TaskAddError, TaskAddService},
    },
};
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestTaskAddService = TaskAddService<InMemoryProjectClient, InMemoryTaskClient>;

/// Scenario world for task-add behaviour tests.
pub struct TaskAddWorld {
    pub project_client: Arc<InMemoryProjectClient>,
    pub task_client: Arc<InMemoryTaskClient>,
    pub project_id: Option<ProjectId>,
    pub files: Vec<(String, FileId)>,
    pub workflow_step: Option<WorkflowStepId>,
    pub last_result: Option<Result<Task, TaskAddError>>,
}

impl TaskAddWorld {
    /// Creates a world with no project files and a standard-tier service.
    #[must_use]
    pub fn new() -> Self {
        Self {
            project_client: Arc::new(InMemoryProjectClient::new()),
            task_client: Arc::new(InMemoryTaskClient::new()),
            project_id: None,
            files: Vec::new(),
            workflow_step: None,
            last_result: None,
        }
    }

    /// Rebuilds the project snapshot served by the in-memory client.
    pub fn publish_tree(&self, project_id: ProjectId) -> Result<(), eyre::Report> {
        let tree = self
            .files
            .iter()
            .fold(ProjectTree::builder(project_id), |builder, (path, id)| {
                builder.add_file(path.clone(), "gettext", *id)
            })
            .build()?;
        self.project_client.insert_tree(tree)?;
        Ok(())
    }

    /// Creates a service bound to the world's clients and tier.
    #[must_use]
    pub fn service(&self) -> TestTaskAddService {
        TaskAddService::new(
            Arc::clone(&self.project_client),
            Arc::clone(&self.task_client),
            self.workflow_step.is_some(),
        )
    }
}

impl Default for TaskAddWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskAddWorld {
    TaskAddWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
