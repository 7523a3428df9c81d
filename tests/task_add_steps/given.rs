//! Given steps for task-add BDD scenarios.

use super::world::TaskAddWorld;
use l10n_tasks::{
    project::domain::{FileId, ProjectId},
    task::domain::WorkflowStepId,
};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"project {project_id:u64} contains file "{path}" with id {file_id:u64}"#)]
fn project_contains_file(
    world: &mut TaskAddWorld,
    project_id: u64,
    path: String,
    file_id: u64,
) -> Result<(), eyre::Report> {
    let id = ProjectId::new(project_id).wrap_err("construct project id")?;
    world.project_id = Some(id);
    world.files.push((path, FileId::new(file_id)));
    world.publish_tree(id).wrap_err("publish project tree")
}

#[given(r#"the task client fails with "{message}""#)]
fn task_client_fails(world: &mut TaskAddWorld, message: String) -> Result<(), eyre::Report> {
    world
        .task_client
        .fail_with(message)
        .wrap_err("configure task client failure")
}

#[given("the project uses the enterprise tier with workflow step {step:u64}")]
fn enterprise_tier(world: &mut TaskAddWorld, step: u64) {
    world.workflow_step = Some(WorkflowStepId::new(step));
}
