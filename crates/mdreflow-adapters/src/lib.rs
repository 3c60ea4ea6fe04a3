//! Infrastructure adapters for mdreflow.
//!
//! This crate implements the ports defined in `mdreflow-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
