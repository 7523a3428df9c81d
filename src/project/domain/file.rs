//! Files and branches listed in a project snapshot.

use super::{BranchId, FileId, ProjectPath};
use serde::{Deserialize, Serialize};

/// File entry in a remote project listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFile {
    id: FileId,
    path: ProjectPath,
    file_type: String,
    branch: Option<BranchId>,
}

impl ProjectFile {
    /// Creates a file entry at the project root.
    #[must_use]
    pub fn new(id: FileId, path: ProjectPath, file_type: impl Into<String>) -> Self {
        Self {
            id,
            path,
            file_type: file_type.into(),
            branch: None,
        }
    }

    /// Places the file inside a version branch, or at the project root for
    /// `None`.
    #[must_use]
    pub const fn with_branch(mut self, branch: Option<BranchId>) -> Self {
        self.branch = branch;
        self
    }

    /// Returns the remote file identifier.
    #[must_use]
    pub const fn id(&self) -> FileId {
        self.id
    }

    /// Returns the canonical path, relative to the branch when the file is
    /// branched.
    #[must_use]
    pub const fn path(&self) -> &ProjectPath {
        &self.path
    }

    /// Returns the remote file type, such as `txt` or `json`.
    #[must_use]
    pub fn file_type(&self) -> &str {
        &self.file_type
    }

    /// Returns the owning branch, if any.
    #[must_use]
    pub const fn branch(&self) -> Option<BranchId> {
        self.branch
    }
}

/// Version branch in a remote project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectBranch {
    id: BranchId,
    name: String,
}

impl ProjectBranch {
    /// Creates a branch entry.
    #[must_use]
    pub fn new(id: BranchId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the remote branch identifier.
    #[must_use]
    pub const fn id(&self) -> BranchId {
        self.id
    }

    /// Returns the branch name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
