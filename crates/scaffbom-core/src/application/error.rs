//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The catalog source exists but could not be read.
    #[error("Catalog '{source_name}' could not be read: {reason}")]
    CatalogUnavailable { source_name: String, reason: String },

    /// The catalog source was read but is not a key-value document.
    #[error("Catalog '{source_name}' is malformed: {reason}")]
    CatalogMalformed { source_name: String, reason: String },

    /// Unsupported catalog format (by file extension).
    #[error("Unsupported catalog format '{extension}'")]
    UnsupportedCatalogFormat { extension: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::CatalogUnavailable { source_name, .. } => vec![
                format!("Failed to read: {}", source_name),
                "Check that the file is readable".into(),
                "Omit --catalog to use the built-in catalog".into(),
            ],
            Self::CatalogMalformed { source_name, .. } => vec![
                format!("Fix the syntax of {}", source_name),
                "A catalog maps reference codes to designations, e.g. {\"ALTASV5\": \"...\"}"
                    .into(),
            ],
            Self::UnsupportedCatalogFormat { .. } => {
                vec!["Use a .json or .toml catalog file".into()]
            }
        }
    }

    /// Every application failure is a catalog setup problem.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CatalogUnavailable { .. }
            | Self::CatalogMalformed { .. }
            | Self::UnsupportedCatalogFormat { .. } => ErrorCategory::Configuration,
        }
    }
}
