//! Port contracts for remote project access.

pub mod client;

#[cfg(test)]
pub use client::MockProjectClient;
pub use client::{ProjectClient, ProjectClientError, ProjectClientResult, ProjectFilter};
