//! Request construction tests for both product tiers.

use crate::project::domain::FileId;
use crate::task::{
    domain::{LabelId, TaskDomainError, TaskRequest, TaskType, WorkflowStepId},
    services::{TaskParameters, build_enterprise_request, build_request, build_standard_request},
};
use rstest::{fixture, rstest};

fn file_ids() -> Vec<FileId> {
    vec![FileId::new(52), FileId::new(51)]
}

#[fixture]
fn params() -> TaskParameters {
    TaskParameters::new(vec!["second.txt".to_owned(), "first.txt".to_owned()])
        .with_title("My title")
        .with_type(1)
        .with_language("es")
        .with_description("It's description")
        .with_skip_assigned_strings(true)
        .with_include_pre_translated_strings_only(true)
        .with_label_ids(vec![LabelId::new(1), LabelId::new(4)])
        .with_workflow_step_id(WorkflowStepId::new(10))
}

#[rstest]
fn standard_builder_copies_inputs_verbatim() {
    let request = build_standard_request(
        Some("My title".to_owned()),
        Some(1),
        Some("es".to_owned()),
        file_ids(),
        Some("It's description".to_owned()),
        false,
        true,
        Some(vec![LabelId::new(3)]),
    )
    .expect("valid standard request");

    assert_eq!(request.title.as_deref(), Some("My title"));
    assert_eq!(request.task_type, Some(TaskType::Proofread));
    assert_eq!(request.language_id.as_deref(), Some("es"));
    assert_eq!(request.file_ids, file_ids());
    assert_eq!(request.description.as_deref(), Some("It's description"));
    assert!(!request.skip_assigned_strings);
    assert!(request.include_pre_translated_strings_only);
    assert_eq!(request.label_ids, Some(vec![LabelId::new(3)]));
}

#[rstest]
fn standard_builder_accepts_absent_type() {
    let request = build_standard_request(
        None,
        None,
        None,
        vec![FileId::new(1)],
        None,
        false,
        false,
        None,
    )
    .expect("absent type is allowed");

    assert_eq!(request.task_type, None);
    assert_eq!(request.title, None);
}

#[rstest]
#[case(2)]
#[case(-4)]
fn standard_builder_rejects_unknown_type(#[case] raw: i64) {
    let result =
        build_standard_request(None, Some(raw), None, file_ids(), None, false, false, None);

    assert_eq!(result, Err(TaskDomainError::InvalidTaskType(raw)));
}

#[rstest]
fn enterprise_builder_copies_inputs_verbatim() {
    let request = build_enterprise_request(
        Some("My title".to_owned()),
        Some("es".to_owned()),
        vec![FileId::new(51)],
        None,
        true,
        Some(vec![LabelId::new(1)]),
        Some(WorkflowStepId::new(10)),
    );

    assert_eq!(request.title.as_deref(), Some("My title"));
    assert_eq!(request.file_ids, vec![FileId::new(51)]);
    assert!(request.skip_assigned_strings);
    assert_eq!(request.label_ids, Some(vec![LabelId::new(1)]));
    assert_eq!(request.workflow_step_id, Some(WorkflowStepId::new(10)));
}

#[rstest]
#[case(false)]
#[case(true)]
fn build_request_is_pure(params: TaskParameters, #[case] enterprise: bool) {
    let first = build_request(&params, file_ids(), enterprise).expect("valid request");
    let second = build_request(&params, file_ids(), enterprise).expect("valid request");

    assert_eq!(first, second);
    assert_eq!(first.is_enterprise(), enterprise);
}

#[rstest]
fn build_request_standard_ignores_workflow_step(params: TaskParameters) {
    let request = build_request(&params, file_ids(), false).expect("valid request");

    let TaskRequest::Standard(standard) = request else {
        panic!("expected standard request");
    };
    assert_eq!(standard.task_type, Some(TaskType::Proofread));
    assert!(standard.include_pre_translated_strings_only);
    assert_eq!(standard.file_ids, file_ids());
    assert_eq!(
        standard.label_ids,
        Some(vec![LabelId::new(1), LabelId::new(4)])
    );
}

#[rstest]
fn build_request_enterprise_drops_type_and_pre_translation_filter(params: TaskParameters) {
    let request = build_request(&params, file_ids(), true).expect("valid request");

    let TaskRequest::Enterprise(enterprise) = request else {
        panic!("expected enterprise request");
    };
    assert_eq!(
        enterprise,
        build_enterprise_request(
            Some("My title".to_owned()),
            Some("es".to_owned()),
            file_ids(),
            Some("It's description".to_owned()),
            true,
            Some(vec![LabelId::new(1), LabelId::new(4)]),
            Some(WorkflowStepId::new(10)),
        )
    );
}

#[rstest]
fn build_request_enterprise_ignores_invalid_type() {
    let params = TaskParameters::new(vec!["first.txt".to_owned()]).with_type(9);

    let standard = build_request(&params, vec![FileId::new(51)], false);
    let enterprise = build_request(&params, vec![FileId::new(51)], true);

    assert_eq!(standard, Err(TaskDomainError::InvalidTaskType(9)));
    assert!(enterprise.is_ok());
}
