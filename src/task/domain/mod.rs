//! Domain model for task creation.
//!
//! Requests come in two tier-specific shapes joined by [`TaskRequest`]; the
//! remote acknowledgment is a [`Task`].

mod error;
mod ids;
mod request;
mod task;
mod task_type;

pub use error::TaskDomainError;
pub use ids::{LabelId, TaskId, WorkflowStepId};
pub use request::{EnterpriseTaskRequest, StandardTaskRequest, TaskRequest};
pub use task::Task;
pub use task_type::TaskType;
