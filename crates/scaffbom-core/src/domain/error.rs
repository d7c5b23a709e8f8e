// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
///
/// A missing catalog entry is deliberately absent: it resolves to an empty
/// designation and never surfaces as an error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("unrecognized stabilization mode '{token}'")]
    UnrecognizedStabilizationMode { token: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("unknown reference code '{0}'")]
    UnknownRefCode(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { field, reason } => vec![
                format!("Check the value given for '{}'", field),
                format!("Details: {}", reason),
                "Length and height must be positive, trapdoor count must not be negative".into(),
            ],
            Self::UnrecognizedStabilizationMode { token } => vec![
                format!("'{}' is not a stabilization mode", token),
                "Use one of: stabilisateurs, amarrage, aucun".into(),
                "Or pass --lenient to treat unknown modes as 'aucun'".into(),
            ],
            Self::MissingRequiredField { field } => {
                vec![format!("Provide a value for '{}'", field)]
            }
            Self::UnknownRefCode(code) => vec![
                format!("'{}' is not part of the reference catalog", code),
                "Try: scaffbom rules to list every reference code".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. }
            | Self::UnrecognizedStabilizationMode { .. }
            | Self::MissingRequiredField { .. } => ErrorCategory::Validation,
            Self::UnknownRefCode(_) => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
