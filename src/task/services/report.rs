//! User-facing confirmation for an added task.

use crate::task::domain::Task;

/// Renders the confirmation line for `task`.
///
/// Plain output is the bare task identifier, suitable for scripting, and is
/// empty when the remote side reported none.
#[must_use]
pub fn render_task_added(task: &Task, plain: bool) -> String {
    if plain {
        return task.id().map(|id| id.to_string()).unwrap_or_default();
    }

    let title = task.title().unwrap_or_default();
    task.id().map_or_else(
        || format!("Task '{title}' was added"),
        |id| format!("Task #{id} '{title}' was added"),
    )
}
