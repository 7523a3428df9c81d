//! Task creation for a remote localisation project.
//!
//! This crate turns local file paths into a translation or proofreading task
//! on a remote project. It resolves the paths against a snapshot of the
//! project's file tree, builds a request for the project's product tier and
//! submits it through a task client.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Identifiers, project trees and task requests with no I/O
//! - **Ports**: Async traits for the remote project and task APIs
//! - **Adapters**: Concrete implementations of ports (in-memory clients)
//! - **Services**: Path resolution and task-add orchestration
//!
//! # Modules
//!
//! - [`config`]: Project properties and product tier detection
//! - [`project`]: Project file tree snapshots and path resolution
//! - [`task`]: Task requests, submission and confirmation output

pub mod config;
pub mod project;
pub mod task;
