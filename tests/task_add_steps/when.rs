//! When steps for task-add BDD scenarios.

use super::world::{TaskAddWorld, run_async};
use l10n_tasks::task::services::TaskParameters;
use rstest_bdd_macros::when;

#[when(
    r#"task "{title}" of type {task_type:u64} in language "{language}" is added for "{paths}""#
)]
fn add_task(
    world: &mut TaskAddWorld,
    title: String,
    task_type: u64,
    language: String,
    paths: String,
) -> Result<(), eyre::Report> {
    let project_id = world
        .project_id
        .ok_or_else(|| eyre::eyre!("missing project in scenario world"))?;
    let file_paths = paths.split(',').map(|path| path.trim().to_owned());
    let base = TaskParameters::new(file_paths)
        .with_title(title)
        .with_type(i64::try_from(task_type)?)
        .with_language(language);
    let params = world
        .workflow_step
        .into_iter()
        .fold(base, TaskParameters::with_workflow_step_id);

    let service = world.service();
    world.last_result = Some(run_async(service.add(project_id, &params)));
    Ok(())
}
