//! Application layer for mdreflow.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (DiscoveryService, ReflowService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! reflow logic itself. All line rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    DiscoveryService, FailedFile, FileOutcome, FileStatus, ReflowService,
    RunSummary, // DTO for reporting
};

// Re-export port traits (for adapter implementation)
pub use ports::Filesystem;

pub use error::ApplicationError;
