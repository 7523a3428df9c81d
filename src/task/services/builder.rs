//! Pure construction of tier-specific task requests.
//!
//! Nothing here performs I/O; equal inputs always yield equal requests.

use super::TaskParameters;
use crate::project::domain::FileId;
use crate::task::domain::{
    EnterpriseTaskRequest, LabelId, StandardTaskRequest, TaskDomainError, TaskRequest, TaskType,
    WorkflowStepId,
};

/// Builds a standard-tier request, copying every input verbatim.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidTaskType`] when `task_type` is present
/// and is not a known type code.
#[expect(
    clippy::too_many_arguments,
    reason = "Each argument maps one-to-one onto a request field"
)]
pub fn build_standard_request(
    title: Option<String>,
    task_type: Option<i64>,
    language_id: Option<String>,
    file_ids: Vec<FileId>,
    description: Option<String>,
    skip_assigned_strings: bool,
    include_pre_translated_strings_only: bool,
    label_ids: Option<Vec<LabelId>>,
) -> Result<StandardTaskRequest, TaskDomainError> {
    let task_type = task_type.map(TaskType::try_from).transpose()?;
    Ok(StandardTaskRequest {
        title,
        task_type,
        language_id,
        file_ids,
        description,
        skip_assigned_strings,
        include_pre_translated_strings_only,
        label_ids,
    })
}

/// Builds an enterprise-tier request, copying every input verbatim.
#[must_use]
pub const fn build_enterprise_request(
    title: Option<String>,
    language_id: Option<String>,
    file_ids: Vec<FileId>,
    description: Option<String>,
    skip_assigned_strings: bool,
    label_ids: Option<Vec<LabelId>>,
    workflow_step_id: Option<WorkflowStepId>,
) -> EnterpriseTaskRequest {
    EnterpriseTaskRequest {
        title,
        language_id,
        file_ids,
        description,
        skip_assigned_strings,
        label_ids,
        workflow_step_id,
    }
}

/// Builds the request for the selected tier from user parameters.
///
/// The enterprise branch ignores the task type and the pre-translation
/// filter; the standard branch ignores the workflow step.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidTaskType`] on the standard branch when
/// the raw type code is unknown.
pub fn build_request(
    params: &TaskParameters,
    file_ids: Vec<FileId>,
    enterprise: bool,
) -> Result<TaskRequest, TaskDomainError> {
    let title = params.title().map(str::to_owned);
    let language_id = params.language_id().map(str::to_owned);
    let description = params.description().map(str::to_owned);
    let label_ids = params.label_ids().map(<[LabelId]>::to_vec);

    if enterprise {
        return Ok(build_enterprise_request(
            title,
            language_id,
            file_ids,
            description,
            params.skip_assigned_strings(),
            label_ids,
            params.workflow_step_id(),
        )
        .into());
    }

    build_standard_request(
        title,
        params.task_type(),
        language_id,
        file_ids,
        description,
        params.skip_assigned_strings(),
        params.include_pre_translated_strings_only(),
        label_ids,
    )
    .map(TaskRequest::from)
}
