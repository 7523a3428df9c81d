//! Project tree snapshot and its builder.

use super::{
    BranchId, FileId, ProjectBranch, ProjectDomainError, ProjectFile, ProjectId, ProjectPath,
};
use std::collections::{HashMap, HashSet};

/// Complete file listing of one remote project.
///
/// Within a snapshot, each `(branch, path)` pair names at most one file and
/// each branch name appears at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTree {
    project_id: ProjectId,
    branches: Vec<ProjectBranch>,
    files: Vec<ProjectFile>,
}

impl ProjectTree {
    /// Creates a validated snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::DuplicateBranch`] or
    /// [`ProjectDomainError::DuplicatePath`] when a key repeats, and
    /// [`ProjectDomainError::DanglingBranch`] when a file names a branch
    /// missing from `branches`.
    pub fn new(
        project_id: ProjectId,
        branches: Vec<ProjectBranch>,
        files: Vec<ProjectFile>,
    ) -> Result<Self, ProjectDomainError> {
        let mut branch_names = HashSet::with_capacity(branches.len());
        let mut branch_ids = HashSet::with_capacity(branches.len());
        for branch in &branches {
            if !branch_names.insert(branch.name()) {
                return Err(ProjectDomainError::DuplicateBranch(branch.name().to_owned()));
            }
            branch_ids.insert(branch.id());
        }

        let mut keys = HashSet::with_capacity(files.len());
        for file in &files {
            if let Some(branch) = file.branch()
                && !branch_ids.contains(&branch)
            {
                return Err(ProjectDomainError::DanglingBranch {
                    branch,
                    path: file.path().clone(),
                });
            }
            if !keys.insert((file.branch(), file.path())) {
                return Err(ProjectDomainError::DuplicatePath {
                    branch: file.branch(),
                    path: file.path().clone(),
                });
            }
        }

        Ok(Self {
            project_id,
            branches,
            files,
        })
    }

    /// Creates a snapshot with no branches and no files.
    #[must_use]
    pub const fn empty(project_id: ProjectId) -> Self {
        Self {
            project_id,
            branches: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Starts a builder for a snapshot of `project_id`.
    #[must_use]
    pub const fn builder(project_id: ProjectId) -> ProjectTreeBuilder {
        ProjectTreeBuilder::new(project_id)
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns all files in listing order.
    #[must_use]
    pub fn files(&self) -> &[ProjectFile] {
        &self.files
    }

    /// Returns all branches in listing order.
    #[must_use]
    pub fn branches(&self) -> &[ProjectBranch] {
        &self.branches
    }

    /// Finds a branch by exact name.
    #[must_use]
    pub fn find_branch(&self, name: &str) -> Option<&ProjectBranch> {
        self.branches.iter().find(|branch| branch.name() == name)
    }

    /// Indexes the files of one branch scope by path.
    ///
    /// `None` selects files at the project root, outside any branch.
    #[must_use]
    pub fn path_index(&self, branch: Option<BranchId>) -> HashMap<&ProjectPath, FileId> {
        self.files
            .iter()
            .filter(|file| file.branch() == branch)
            .map(|file| (file.path(), file.id()))
            .collect()
    }

    /// Returns a snapshot holding only the named branch and its files.
    ///
    /// Returns `None` when the branch is not part of this snapshot.
    #[must_use]
    pub fn restricted_to_branch(&self, name: &str) -> Option<Self> {
        let branch = self.find_branch(name)?.clone();
        let files = self
            .files
            .iter()
            .filter(|file| file.branch() == Some(branch.id()))
            .cloned()
            .collect();
        Some(Self {
            project_id: self.project_id,
            branches: vec![branch],
            files,
        })
    }
}

#[derive(Debug, Clone)]
struct PendingFile {
    id: FileId,
    path: String,
    file_type: String,
    branch: Option<BranchId>,
}

/// Incremental constructor for [`ProjectTree`] snapshots.
///
/// Paths are canonicalized and uniqueness is checked when
/// [`ProjectTreeBuilder::build`] runs.
#[derive(Debug, Clone)]
pub struct ProjectTreeBuilder {
    project_id: ProjectId,
    branches: Vec<ProjectBranch>,
    files: Vec<PendingFile>,
}

impl ProjectTreeBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub const fn new(project_id: ProjectId) -> Self {
        Self {
            project_id,
            branches: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Adds a version branch.
    #[must_use]
    pub fn add_branch(mut self, id: BranchId, name: impl Into<String>) -> Self {
        self.branches.push(ProjectBranch::new(id, name));
        self
    }

    /// Adds a file at the project root.
    #[must_use]
    pub fn add_file(
        mut self,
        path: impl Into<String>,
        file_type: impl Into<String>,
        id: FileId,
    ) -> Self {
        self.files.push(PendingFile {
            id,
            path: path.into(),
            file_type: file_type.into(),
            branch: None,
        });
        self
    }

    /// Adds a file inside a version branch.
    #[must_use]
    pub fn add_branch_file(
        mut self,
        branch: BranchId,
        path: impl Into<String>,
        file_type: impl Into<String>,
        id: FileId,
    ) -> Self {
        self.files.push(PendingFile {
            id,
            path: path.into(),
            file_type: file_type.into(),
            branch: Some(branch),
        });
        self
    }

    /// Builds the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyPath`] for a blank path, and the
    /// uniqueness errors of [`ProjectTree::new`].
    pub fn build(self) -> Result<ProjectTree, ProjectDomainError> {
        let files = self
            .files
            .into_iter()
            .map(|pending| {
                let path = ProjectPath::new(&pending.path)?;
                Ok(ProjectFile::new(pending.id, path, pending.file_type)
                    .with_branch(pending.branch))
            })
            .collect::<Result<Vec<_>, ProjectDomainError>>()?;
        ProjectTree::new(self.project_id, self.branches, files)
    }
}
