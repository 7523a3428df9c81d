//! Remote acknowledgment of a created task.

use super::{LabelId, TaskId, TaskRequest, TaskType, WorkflowStepId};
use crate::project::domain::FileId;
use serde::{Deserialize, Serialize};

/// Task as accepted by the remote system.
///
/// Carries the fields the remote side echoed back: a task type for the
/// standard tier, a workflow step for the enterprise tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Task {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<TaskId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    task_type: Option<TaskType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language_id: Option<String>,
    file_ids: Vec<FileId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    label_ids: Vec<LabelId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    workflow_step_id: Option<WorkflowStepId>,
}

impl Task {
    /// Builds the task a remote system echoes for `request`.
    ///
    /// The echo has no identifier; see [`Task::with_id`].
    #[must_use]
    pub fn echo(request: &TaskRequest) -> Self {
        match request {
            TaskRequest::Standard(standard) => Self {
                title: standard.title.clone(),
                task_type: standard.task_type,
                language_id: standard.language_id.clone(),
                file_ids: standard.file_ids.clone(),
                description: standard.description.clone(),
                label_ids: standard.label_ids.clone().unwrap_or_default(),
                ..Self::default()
            },
            TaskRequest::Enterprise(enterprise) => Self {
                title: enterprise.title.clone(),
                language_id: enterprise.language_id.clone(),
                file_ids: enterprise.file_ids.clone(),
                description: enterprise.description.clone(),
                label_ids: enterprise.label_ids.clone().unwrap_or_default(),
                workflow_step_id: enterprise.workflow_step_id,
                ..Self::default()
            },
        }
    }

    /// Sets the remote identifier.
    #[must_use]
    pub const fn with_id(mut self, id: TaskId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns the remote identifier, if the remote side reported one.
    #[must_use]
    pub const fn id(&self) -> Option<TaskId> {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the standard-tier task type.
    #[must_use]
    pub const fn task_type(&self) -> Option<TaskType> {
        self.task_type
    }

    /// Returns the target language code.
    #[must_use]
    pub fn language_id(&self) -> Option<&str> {
        self.language_id.as_deref()
    }

    /// Returns the files covered by the task.
    #[must_use]
    pub fn file_ids(&self) -> &[FileId] {
        &self.file_ids
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the attached labels.
    #[must_use]
    pub fn label_ids(&self) -> &[LabelId] {
        &self.label_ids
    }

    /// Returns the enterprise workflow step.
    #[must_use]
    pub const fn workflow_step_id(&self) -> Option<WorkflowStepId> {
        self.workflow_step_id
    }
}
