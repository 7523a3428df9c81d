//! Task creation for localization projects.
//!
//! Adding a task resolves the user's file paths against a freshly downloaded
//! project tree, builds a request shaped for the active product tier, and
//! submits it once through the remote task client. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
