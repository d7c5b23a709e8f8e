//! Catalog document formats.
//!
//! A catalog document is a flat key-value map from reference code to
//! designation:
//!
//! ```json
//! { "ALTASV5": "Socle à vérin", "ALTKPI5": "Plinthe 2,50 m" }
//! ```
//!
//! ```toml
//! ALTASV5 = "Socle à vérin"
//! ALTKPI5 = "Plinthe 2,50 m"
//! ```

use std::{collections::BTreeMap, fmt, path::Path};

use scaffbom_core::{
    application::ApplicationError,
    domain::Catalog,
    error::BomResult,
};

/// Serialization format of a catalog document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Toml,
}

impl CatalogFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, ApplicationError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(ApplicationError::UnsupportedCatalogFormat { extension }),
        }
    }

    /// Parse a document. `source_name` only feeds error messages.
    pub fn parse(self, text: &str, source_name: &str) -> BomResult<Catalog> {
        let pairs: BTreeMap<String, String> = match self {
            Self::Json => serde_json::from_str(text).map_err(|e| malformed(source_name, e))?,
            Self::Toml => toml::from_str(text).map_err(|e| malformed(source_name, e))?,
        };
        Ok(Catalog::from_raw(pairs))
    }
}

impl fmt::Display for CatalogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Toml => f.write_str("toml"),
        }
    }
}

fn malformed(source_name: &str, err: impl fmt::Display) -> ApplicationError {
    ApplicationError::CatalogMalformed {
        source_name: source_name.to_string(),
        reason: err.to_string(),
    }
}
