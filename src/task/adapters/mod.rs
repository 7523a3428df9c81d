//! Adapter implementations for the task client port.

pub mod memory;

pub use memory::InMemoryTaskClient;
