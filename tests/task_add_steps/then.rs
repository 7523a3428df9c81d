//! Then steps for task-add BDD scenarios.

use super::world::TaskAddWorld;
use l10n_tasks::task::{
    domain::{Task, TaskRequest},
    services::{TaskAddError, render_task_added},
};
use rstest_bdd_macros::then;

fn added_task(world: &TaskAddWorld) -> Result<&Task, eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task-add result in scenario world"))?;
    result
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected task-add failure: {err}"))
}

fn failure(world: &TaskAddWorld) -> Result<&TaskAddError, eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task-add result in scenario world"))?;
    result
        .as_ref()
        .err()
        .ok_or_else(|| eyre::eyre!("expected task add to fail"))
}

fn single_submission(world: &TaskAddWorld) -> Result<TaskRequest, eyre::Report> {
    let submitted = world.task_client.submitted()?;
    match submitted.as_slice() {
        [request] => Ok(request.clone()),
        other => Err(eyre::eyre!("expected one submission, found {}", other.len())),
    }
}

#[then("the task is added with id {task_id:u64}")]
fn task_added_with_id(world: &TaskAddWorld, task_id: u64) -> Result<(), eyre::Report> {
    let task = added_task(world)?;
    let actual = task.id().map(|id| id.value());
    if actual != Some(task_id) {
        return Err(eyre::eyre!("expected task id {task_id}, found {actual:?}"));
    }
    Ok(())
}

#[then("the submitted request covers {count:usize} files")]
fn submitted_request_covers(world: &TaskAddWorld, count: usize) -> Result<(), eyre::Report> {
    let request = single_submission(world)?;
    if request.file_ids().len() != count {
        return Err(eyre::eyre!(
            "expected {count} files, found {:?}",
            request.file_ids()
        ));
    }
    Ok(())
}

#[then("the submitted request targets workflow step {step:u64}")]
fn submitted_request_targets_step(world: &TaskAddWorld, step: u64) -> Result<(), eyre::Report> {
    let request = single_submission(world)?;
    let TaskRequest::Enterprise(enterprise) = &request else {
        return Err(eyre::eyre!("expected an enterprise request, got {request:?}"));
    };
    let actual = enterprise.workflow_step_id.map(|id| id.value());
    if actual != Some(step) {
        return Err(eyre::eyre!("expected workflow step {step}, found {actual:?}"));
    }
    Ok(())
}

#[then("the project was downloaded once")]
fn project_downloaded_once(world: &TaskAddWorld) -> Result<(), eyre::Report> {
    let downloads = world.project_client.downloads()?;
    if downloads.len() != 1 {
        return Err(eyre::eyre!("expected one download, found {downloads:?}"));
    }
    Ok(())
}

#[then(r#"the confirmation reads "{message}""#)]
fn confirmation_reads(world: &TaskAddWorld, message: String) -> Result<(), eyre::Report> {
    let rendered = render_task_added(added_task(world)?, false);
    if rendered != message {
        return Err(eyre::eyre!("expected '{message}', rendered '{rendered}'"));
    }
    Ok(())
}

#[then("task add fails while {stage}")]
fn task_add_fails_while(world: &TaskAddWorld, stage: String) -> Result<(), eyre::Report> {
    let err = failure(world)?;
    if err.stage().as_str() != stage {
        return Err(eyre::eyre!(
            "expected failure while {stage}, failed while {}",
            err.stage()
        ));
    }
    Ok(())
}

#[then(r#"the failure message is "{message}""#)]
fn failure_message_is(world: &TaskAddWorld, message: String) -> Result<(), eyre::Report> {
    let err = failure(world)?;
    if err.to_string() != message {
        return Err(eyre::eyre!("expected '{message}', got '{err}'"));
    }
    Ok(())
}

#[then("no task was submitted")]
fn no_task_submitted(world: &TaskAddWorld) -> Result<(), eyre::Report> {
    let submitted = world.task_client.submitted()?;
    if !submitted.is_empty() {
        return Err(eyre::eyre!("expected no submissions, found {submitted:?}"));
    }
    Ok(())
}
