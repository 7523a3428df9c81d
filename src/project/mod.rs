//! Remote project snapshots and file path resolution.
//!
//! A project tree is downloaded in full for every resolution and discarded
//! afterwards; nothing in this module caches remote state. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Resolution services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
