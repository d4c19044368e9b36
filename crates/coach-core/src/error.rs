//! Error types for goal validation
//!
//! Validation itself is total: every subject produces a result. Errors only
//! occur at the parsing boundary, when a caller hands us a category tag that
//! does not name a known category.

use thiserror::Error;

/// Errors raised when parsing category tags from external input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryError {
    /// The tag does not name a validation category
    #[error("unknown validation category: {0}")]
    UnknownValidationCategory(String),

    /// The tag does not name a goal category
    #[error("unknown goal category: {0}")]
    UnknownGoalCategory(String),
}
