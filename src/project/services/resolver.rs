//! Resolution of user-supplied file paths to remote file identifiers.

use crate::project::{
    domain::{FileId, ProjectBranch, ProjectId, ProjectPath},
    ports::{ProjectClient, ProjectClientError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors returned while resolving file paths.
#[derive(Debug, Clone, Error)]
pub enum ResolveError {
    /// A requested path has no file in the project snapshot.
    #[error("file '{0}' does not exist in the project")]
    UnresolvedPath(String),

    /// The requested branch is not part of the project snapshot.
    #[error("branch '{0}' does not exist in the project")]
    UnknownBranch(String),

    /// The client returned a snapshot of a different project.
    #[error("requested project {requested} but received project {returned}")]
    ProjectMismatch {
        /// Project the caller asked for.
        requested: ProjectId,
        /// Project the snapshot belongs to.
        returned: ProjectId,
    },

    /// Downloading the project snapshot failed.
    #[error(transparent)]
    Client(#[from] ProjectClientError),
}

/// Result type for path resolution.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Resolves project paths against a freshly downloaded project tree.
///
/// Each call downloads the complete project listing once; snapshots are
/// never reused between calls.
#[derive(Clone)]
pub struct ProjectResolver<P>
where
    P: ProjectClient,
{
    client: Arc<P>,
}

impl<P> ProjectResolver<P>
where
    P: ProjectClient,
{
    /// Creates a resolver backed by `client`.
    #[must_use]
    pub const fn new(client: Arc<P>) -> Self {
        Self { client }
    }

    /// Maps `file_paths` to file identifiers, preserving input order.
    ///
    /// When `branch` is set, paths are looked up inside that branch;
    /// otherwise only files at the project root match. Resolution is
    /// all-or-nothing: the first unmatched path aborts the call.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::UnresolvedPath`] for the first path with no
    /// matching file, [`ResolveError::UnknownBranch`] when `branch` is
    /// absent from the project, [`ResolveError::ProjectMismatch`] when the
    /// snapshot belongs to another project, or [`ResolveError::Client`] when
    /// the download fails.
    pub async fn resolve(
        &self,
        project_id: ProjectId,
        file_paths: &[String],
        branch: Option<&str>,
    ) -> ResolveResult<Vec<FileId>> {
        let tree = self.client.download_full_project(project_id, None).await?;
        if tree.project_id() != project_id {
            return Err(ResolveError::ProjectMismatch {
                requested: project_id,
                returned: tree.project_id(),
            });
        }
        debug!(
            %project_id,
            files = tree.files().len(),
            branches = tree.branches().len(),
            "downloaded project tree"
        );

        let branch_id = branch
            .map(|name| {
                tree.find_branch(name)
                    .map(ProjectBranch::id)
                    .ok_or_else(|| ResolveError::UnknownBranch(name.to_owned()))
            })
            .transpose()?;

        let index = tree.path_index(branch_id);
        file_paths
            .iter()
            .map(|raw| {
                ProjectPath::new(raw)
                    .ok()
                    .and_then(|path| index.get(&path).copied())
                    .ok_or_else(|| ResolveError::UnresolvedPath(raw.clone()))
            })
            .collect()
    }
}
