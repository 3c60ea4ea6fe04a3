//! Domain value objects: LineWidth, WriteMode.
//!
//! # Design
//!
//! These are pure value types: `Copy` and compared by value.
//! Construction validates; once you hold one, it is usable.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── LineWidth ────────────────────────────────────────────────────────────────

/// Maximum number of columns a reflowed line may occupy.
///
/// Columns are counted in `char`s. Invariant: never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct LineWidth(usize);

impl LineWidth {
    /// Width used when nothing else is configured.
    pub const DEFAULT: Self = Self(80);

    /// Fallible constructor.
    pub fn new(width: usize) -> Result<Self, DomainError> {
        if width == 0 {
            Err(DomainError::InvalidWidth { width })
        } else {
            Ok(Self(width))
        }
    }

    pub const fn get(self) -> usize {
        self.0
    }

    /// Columns left after a prefix of `prefix_len` chars, floored at zero.
    pub const fn budget_after(self, prefix_len: usize) -> usize {
        self.0.saturating_sub(prefix_len)
    }
}

impl Default for LineWidth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for LineWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LineWidth {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let width = s
            .trim()
            .parse::<usize>()
            .map_err(|_| DomainError::InvalidWidth { width: 0 })?;
        Self::new(width)
    }
}

impl TryFrom<usize> for LineWidth {
    type Error = DomainError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LineWidth> for usize {
    fn from(width: LineWidth) -> Self {
        width.0
    }
}

// ── WriteMode ────────────────────────────────────────────────────────────────

/// Whether reflowed documents are persisted or only reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Rewrite modified documents in place.
    #[default]
    Apply,
    /// Report what would change; never write.
    Check,
}

impl WriteMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Apply => "apply",
            Self::Check => "check",
        }
    }

    pub const fn writes(self) -> bool {
        matches!(self, Self::Apply)
    }
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
