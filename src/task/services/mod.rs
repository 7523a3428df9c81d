//! Application services for task creation.

mod add;
mod builder;
mod params;
mod report;

pub use add::{TaskAddError, TaskAddResult, TaskAddService, TaskAddStage};
pub use builder::{build_enterprise_request, build_request, build_standard_request};
pub use params::TaskParameters;
pub use report::render_task_added;
