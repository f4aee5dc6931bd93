// ============================================================================
// domain/error.rs - PURE LOGIC FAILURES
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (services re-wrap them freely)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    // ========================================================================
    // Missing Anchors
    // ========================================================================
    #[error("Placeholder '{placeholder}' not found in documentation file")]
    PlaceholderMissing { placeholder: String },

    #[error("No WP_DEBUG definition found, cannot insert the debug block")]
    DebugFlagMissing,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name, reason } => vec![
                format!("'{}' cannot be used: {}", name, reason),
                "Use words separated by spaces, hyphens or underscores".into(),
                "Examples: \"Card Box\", icon-list, PricingTable".into(),
            ],
            Self::PlaceholderMissing { placeholder } => vec![
                format!("Add the marker {} where the metadata should go", placeholder),
                "The marker must appear on its own line in the widget's Markdown file".into(),
            ],
            Self::DebugFlagMissing => vec![
                "Add define('WP_DEBUG', true); to wp-config.php first".into(),
                "Then run: sfwp debug on".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. } => ErrorCategory::Validation,
            Self::PlaceholderMissing { .. } | Self::DebugFlagMissing => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
