//! Remote project client port.

use crate::project::domain::{ProjectId, ProjectTree};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for remote project operations.
pub type ProjectClientResult<T> = Result<T, ProjectClientError>;

/// Narrows a project download to part of the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFilter {
    branch: String,
}

impl ProjectFilter {
    /// Restricts the download to a single version branch.
    #[must_use]
    pub fn branch(name: impl Into<String>) -> Self {
        Self {
            branch: name.into(),
        }
    }

    /// Returns the selected branch name.
    #[must_use]
    pub fn branch_name(&self) -> &str {
        &self.branch
    }
}

/// Read access to remote project listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectClient: Send + Sync {
    /// Downloads the project listing.
    ///
    /// `None` requests the unfiltered tree with every branch and file.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectClientError::NotFound`] when the project does not
    /// exist and [`ProjectClientError::Remote`] for transport or
    /// authorization failures.
    async fn download_full_project(
        &self,
        project_id: ProjectId,
        filter: Option<ProjectFilter>,
    ) -> ProjectClientResult<ProjectTree>;
}

/// Errors returned by remote project client implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectClientError {
    /// The project does not exist or is not visible to the caller.
    #[error("project {0} not found")]
    NotFound(ProjectId),

    /// Remote call failure.
    #[error("remote project call failed: {0}")]
    Remote(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectClientError {
    /// Wraps a remote-call error.
    pub fn remote(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Remote(Arc::new(err))
    }
}
