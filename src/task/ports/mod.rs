//! Port contracts for remote task management.

pub mod client;

#[cfg(test)]
pub use client::MockTaskClient;
pub use client::{TaskClient, TaskClientError, TaskClientResult};
