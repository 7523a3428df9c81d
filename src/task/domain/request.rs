//! Tier-specific task creation requests.

use super::{LabelId, TaskType, WorkflowStepId};
use crate::project::domain::FileId;
use serde::Serialize;

/// Task creation request for the standard product tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardTaskRequest {
    /// Task title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Kind of work requested.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub task_type: Option<TaskType>,
    /// Target language code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_id: Option<String>,
    /// Files covered by the task, in user order.
    pub file_ids: Vec<FileId>,
    /// Free-form task description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Skips strings already assigned to another task.
    pub skip_assigned_strings: bool,
    /// Restricts the task to strings that have pre-translations.
    pub include_pre_translated_strings_only: bool,
    /// Labels selecting the strings to include.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<LabelId>>,
}

/// Task creation request for the enterprise product tier.
///
/// Enterprise tasks are bound to a workflow step instead of a task type and
/// carry no pre-translation filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnterpriseTaskRequest {
    /// Task title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Target language code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_id: Option<String>,
    /// Files covered by the task, in user order.
    pub file_ids: Vec<FileId>,
    /// Free-form task description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Skips strings already assigned to another task.
    pub skip_assigned_strings: bool,
    /// Labels selecting the strings to include.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<LabelId>>,
    /// Workflow step the task belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_step_id: Option<WorkflowStepId>,
}

/// Task creation request for either product tier.
///
/// Serializes as the bare request body of the selected tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TaskRequest {
    /// Standard-tier request.
    Standard(StandardTaskRequest),
    /// Enterprise-tier request.
    Enterprise(EnterpriseTaskRequest),
}

impl TaskRequest {
    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Standard(request) => request.title.as_deref(),
            Self::Enterprise(request) => request.title.as_deref(),
        }
    }

    /// Returns the files covered by the task.
    #[must_use]
    pub fn file_ids(&self) -> &[FileId] {
        match self {
            Self::Standard(request) => &request.file_ids,
            Self::Enterprise(request) => &request.file_ids,
        }
    }

    /// Returns `true` for the enterprise variant.
    #[must_use]
    pub const fn is_enterprise(&self) -> bool {
        matches!(self, Self::Enterprise(_))
    }
}

impl From<StandardTaskRequest> for TaskRequest {
    fn from(value: StandardTaskRequest) -> Self {
        Self::Standard(value)
    }
}

impl From<EnterpriseTaskRequest> for TaskRequest {
    fn from(value: EnterpriseTaskRequest) -> Self {
        Self::Enterprise(value)
    }
}
