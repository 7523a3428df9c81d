//! User-level input for task creation.

use crate::task::domain::{LabelId, WorkflowStepId};

/// Parameters supplied by the user when adding a task.
///
/// Tier-specific values are accepted for both tiers; the request builder
/// drops whatever the selected tier does not support.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskParameters {
    title: Option<String>,
    task_type: Option<i64>,
    language_id: Option<String>,
    file_paths: Vec<String>,
    branch: Option<String>,
    description: Option<String>,
    skip_assigned_strings: bool,
    include_pre_translated_strings_only: bool,
    label_ids: Option<Vec<LabelId>>,
    workflow_step_id: Option<WorkflowStepId>,
}

impl TaskParameters {
    /// Creates parameters covering `file_paths`, in the given order.
    #[must_use]
    pub fn new(file_paths: impl IntoIterator<Item = String>) -> Self {
        Self {
            file_paths: file_paths.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Sets the task title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the raw task type code (standard tier only).
    #[must_use]
    pub const fn with_type(mut self, task_type: i64) -> Self {
        self.task_type = Some(task_type);
        self
    }

    /// Sets the target language code.
    #[must_use]
    pub fn with_language(mut self, language_id: impl Into<String>) -> Self {
        self.language_id = Some(language_id.into());
        self
    }

    /// Resolves file paths inside the named version branch.
    #[must_use]
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Skips strings already assigned to other tasks.
    #[must_use]
    pub const fn with_skip_assigned_strings(mut self, skip: bool) -> Self {
        self.skip_assigned_strings = skip;
        self
    }

    /// Restricts the task to pre-translated strings (standard tier only).
    #[must_use]
    pub const fn with_include_pre_translated_strings_only(mut self, include: bool) -> Self {
        self.include_pre_translated_strings_only = include;
        self
    }

    /// Sets the labels selecting the strings to include.
    #[must_use]
    pub fn with_label_ids(mut self, label_ids: impl IntoIterator<Item = LabelId>) -> Self {
        self.label_ids = Some(label_ids.into_iter().collect());
        self
    }

    /// Binds the task to a workflow step (enterprise tier only).
    #[must_use]
    pub const fn with_workflow_step_id(mut self, workflow_step_id: WorkflowStepId) -> Self {
        self.workflow_step_id = Some(workflow_step_id);
        self
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the raw task type code.
    #[must_use]
    pub const fn task_type(&self) -> Option<i64> {
        self.task_type
    }

    /// Returns the target language code.
    #[must_use]
    pub fn language_id(&self) -> Option<&str> {
        self.language_id.as_deref()
    }

    /// Returns the file paths in user order.
    #[must_use]
    pub fn file_paths(&self) -> &[String] {
        &self.file_paths
    }

    /// Returns the version branch name.
    #[must_use]
    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns whether assigned strings are skipped.
    #[must_use]
    pub const fn skip_assigned_strings(&self) -> bool {
        self.skip_assigned_strings
    }

    /// Returns whether only pre-translated strings are included.
    #[must_use]
    pub const fn include_pre_translated_strings_only(&self) -> bool {
        self.include_pre_translated_strings_only
    }

    /// Returns the label identifiers.
    #[must_use]
    pub fn label_ids(&self) -> Option<&[LabelId]> {
        self.label_ids.as_deref()
    }

    /// Returns the workflow step.
    #[must_use]
    pub const fn workflow_step_id(&self) -> Option<WorkflowStepId> {
        self.workflow_step_id
    }
}
