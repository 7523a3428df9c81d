//! Adapter implementations for the project client port.

pub mod memory;

pub use memory::InMemoryProjectClient;
