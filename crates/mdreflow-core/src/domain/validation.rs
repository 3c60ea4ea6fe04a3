use crate::domain::{DiscoveryRules, LineWidth, error::DomainError};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across callers.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_width(width: usize) -> Result<LineWidth, DomainError> {
        LineWidth::new(width)
    }

    pub fn validate_rules(rules: &DiscoveryRules) -> Result<(), DomainError> {
        rules.validate()
    }
}
