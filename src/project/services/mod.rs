//! Application services for project path resolution.

mod resolver;

pub use resolver::{ProjectResolver, ResolveError, ResolveResult};
