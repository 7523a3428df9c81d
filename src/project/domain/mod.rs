//! Domain model for remote project file listings.
//!
//! A [`ProjectTree`] is an immutable snapshot of one project's files and
//! branches. File paths are held in canonical form so that lookups compare
//! like with like regardless of the separator the user typed.

mod error;
mod file;
mod ids;
mod path;
mod tree;

pub use error::ProjectDomainError;
pub use file::{ProjectBranch, ProjectFile};
pub use ids::{BranchId, FileId, ProjectId};
pub use path::ProjectPath;
pub use tree::{ProjectTree, ProjectTreeBuilder};
