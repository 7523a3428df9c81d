//! In-memory project client for orchestration tests and local runs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::project::{
    domain::{ProjectId, ProjectTree},
    ports::{ProjectClient, ProjectClientError, ProjectClientResult, ProjectFilter},
};

/// Project client serving fixed snapshots from memory.
///
/// Every download is recorded so callers can assert how often, and with
/// which filter, the remote listing was requested.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectClient {
    state: Arc<RwLock<InMemoryProjectState>>,
}

#[derive(Debug, Default)]
struct InMemoryProjectState {
    trees: HashMap<ProjectId, ProjectTree>,
    downloads: Vec<(ProjectId, Option<ProjectFilter>)>,
    failure: Option<String>,
}

fn lock_error(err: impl std::fmt::Display) -> ProjectClientError {
    ProjectClientError::remote(std::io::Error::other(err.to_string()))
}

impl InMemoryProjectClient {
    /// Creates a client with no projects.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a client serving a single project snapshot.
    #[must_use]
    pub fn with_tree(tree: ProjectTree) -> Self {
        let mut state = InMemoryProjectState::default();
        state.trees.insert(tree.project_id(), tree);
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Adds or replaces the snapshot for the tree's project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectClientError::Remote`] when lock acquisition fails.
    pub fn insert_tree(&self, tree: ProjectTree) -> ProjectClientResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.trees.insert(tree.project_id(), tree);
        Ok(())
    }

    /// Makes every subsequent download fail with `message`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectClientError::Remote`] when lock acquisition fails.
    pub fn fail_with(&self, message: impl Into<String>) -> ProjectClientResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.failure = Some(message.into());
        Ok(())
    }

    /// Returns every download request received so far, in call order.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectClientError::Remote`] when lock acquisition fails.
    pub fn downloads(&self) -> ProjectClientResult<Vec<(ProjectId, Option<ProjectFilter>)>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.downloads.clone())
    }
}

#[async_trait]
impl ProjectClient for InMemoryProjectClient {
    async fn download_full_project(
        &self,
        project_id: ProjectId,
        filter: Option<ProjectFilter>,
    ) -> ProjectClientResult<ProjectTree> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.downloads.push((project_id, filter.clone()));

        if let Some(message) = &state.failure {
            return Err(ProjectClientError::remote(std::io::Error::other(
                message.clone(),
            )));
        }

        let tree = state
            .trees
            .get(&project_id)
            .ok_or(ProjectClientError::NotFound(project_id))?;

        let Some(branch_filter) = filter else {
            return Ok(tree.clone());
        };
        // Unknown branches yield an empty listing.
        Ok(tree
            .restricted_to_branch(branch_filter.branch_name())
            .unwrap_or_else(|| ProjectTree::empty(project_id)))
    }
}
