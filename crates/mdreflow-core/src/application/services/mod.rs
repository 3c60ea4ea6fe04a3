//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "find the documents" or "reflow them".

pub mod discovery_service;
pub mod reflow_service;

pub use discovery_service::DiscoveryService;
pub use reflow_service::{FailedFile, FileOutcome, FileStatus, ReflowService, RunSummary};
