// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so summaries can carry them)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid line width {width}: must be at least 1 column")]
    InvalidWidth { width: usize },

    #[error("Invalid discovery rules: {0}")]
    InvalidRules(String),

    #[error("Invalid file extension '{extension}'")]
    InvalidExtension { extension: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidWidth { width } => vec![
                format!("A width of {} leaves no room for text", width),
                "Pass a positive value, e.g. --width 80".into(),
                "Or set wrap.max_width in your config file".into(),
            ],
            Self::InvalidRules(msg) => vec![
                "Check the [discovery] section of your configuration".into(),
                format!("Details: {}", msg),
            ],
            Self::InvalidExtension { extension } => vec![
                format!("'{}' is not a usable extension", extension),
                "Use a bare extension without a dot, e.g. \"md\"".into(),
            ],
        }
    }
}
