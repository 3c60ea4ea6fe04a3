//! mdreflow Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the mdreflow
//! markdown line wrapper, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          mdreflow-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (DiscoveryService, ReflowService)     │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │          (Driven: Filesystem)           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    mdreflow-adapters (Infrastructure)   │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (LineKind, reflow, DiscoveryRules)     │
//! │            No I/O                       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use mdreflow_core::domain::{LineWidth, reflow};
//!
//! let text = format!("# Notes\n\n{}\n", "lorem ipsum ".repeat(12));
//! let outcome = reflow(&text, LineWidth::DEFAULT);
//!
//! assert!(outcome.modified);
//! assert!(outcome.text.lines().all(|l| l.chars().count() <= 80));
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DiscoveryService, FileOutcome, FileStatus, ReflowService, RunSummary,
        ports::Filesystem,
    };
    pub use crate::domain::{
        DiscoveryRules, LineKind, LineWidth, ReflowOutcome, WriteMode, reflow,
    };
    pub use crate::error::{ReflowError, ReflowResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
