//! Step definitions for task-add BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
