//! Error types for project domain validation.

use super::{BranchId, ProjectPath};
use thiserror::Error;

/// Errors returned while constructing project domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The project identifier is not a positive integer.
    #[error("invalid project identifier '{0}', expected a positive integer")]
    InvalidProjectId(String),

    /// The path has no segments once separators are stripped.
    #[error("project path must not be empty")]
    EmptyPath,

    /// Two files share the same path within the same branch.
    #[error("duplicate project path {path} in {}", branch_label(.branch))]
    DuplicatePath {
        /// Branch scope of the duplicate, `None` for the project root.
        branch: Option<BranchId>,
        /// Duplicated canonical path.
        path: ProjectPath,
    },

    /// Two branches share the same name.
    #[error("duplicate branch name '{0}'")]
    DuplicateBranch(String),

    /// A file references a branch that is not part of the tree.
    #[error("file {path} references unknown branch {branch}")]
    DanglingBranch {
        /// Missing branch identifier.
        branch: BranchId,
        /// Path of the referencing file.
        path: ProjectPath,
    },
}

fn branch_label(branch: &Option<BranchId>) -> String {
    branch.map_or_else(|| "project root".to_owned(), |id| format!("branch {id}"))
}
