// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for mdreflow.
//!
//! This module contains the pure reflow logic with no I/O. Reading and
//! writing documents is handled via ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Few crates**: std library, `regex` for line shapes, `thiserror`
//! - **Value types**: `LineWidth`, `DiscoveryRules` are Clone + PartialEq
//!
// Public API - what the world sees
pub mod discovery;
pub mod error;
pub mod line;
pub mod reflow;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;
mod wrap;

// Re-exports for convenience
pub use discovery::DiscoveryRules;
pub use error::DomainError;
pub use line::{LineKind, classify};
pub use reflow::{ReflowOutcome, reflow, reflow_lines};
pub use value_objects::{LineWidth, WriteMode};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn line_width_rejects_zero() {
        assert_eq!(
            LineWidth::new(0),
            Err(DomainError::InvalidWidth { width: 0 })
        );
        assert_eq!(LineWidth::new(1).unwrap().get(), 1);
    }

    #[test]
    fn line_width_default_is_eighty() {
        assert_eq!(LineWidth::default().get(), 80);
    }

    #[test]
    fn line_width_parses() {
        assert_eq!(LineWidth::from_str(" 100 ").unwrap().get(), 100);
        assert!(LineWidth::from_str("wide").is_err());
        assert!(LineWidth::from_str("0").is_err());
    }

    #[test]
    fn line_width_budget_saturates() {
        let width = LineWidth::new(10).unwrap();
        assert_eq!(width.budget_after(4), 6);
        assert_eq!(width.budget_after(40), 0);
    }

    #[test]
    fn write_mode_display() {
        assert_eq!(WriteMode::Apply.to_string(), "apply");
        assert_eq!(WriteMode::Check.to_string(), "check");
        assert!(WriteMode::Apply.writes());
        assert!(!WriteMode::Check.writes());
    }

    // ========================================================================
    // Validator Tests
    // ========================================================================

    #[test]
    fn validator_checks_width_and_rules() {
        assert!(DomainValidator::validate_width(0).is_err());
        assert!(DomainValidator::validate_width(72).is_ok());
        assert!(DomainValidator::validate_rules(&DiscoveryRules::default()).is_ok());
    }

    // ========================================================================
    // Error Tests
    // ========================================================================

    #[test]
    fn invalid_width_has_suggestions() {
        let err = DomainError::InvalidWidth { width: 0 };
        assert!(err.suggestions().iter().any(|s| s.contains("--width")));
    }

    // ========================================================================
    // Classification + Reflow Smoke Tests
    // ========================================================================

    #[test]
    fn classify_is_reexported() {
        let kind = classify("", false, LineWidth::DEFAULT);
        assert_eq!(kind, LineKind::Protected);
        assert!(!kind.is_reflowable());
    }

    #[test]
    fn reflow_is_reexported() {
        let out = reflow("short line", LineWidth::DEFAULT);
        assert!(!out.modified);
    }
}
