//! The catalog shipped with the binary.

use scaffbom_core::{
    application::ports::CatalogSource,
    domain::Catalog,
    error::{BomError, BomResult},
};

use super::CatalogFormat;

const BUILTIN_REFERENCES: &str = include_str!("../../data/references.json");

/// Designations for every reference code, embedded at build time.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalogSource;

impl BuiltinCatalogSource {
    pub fn new() -> Self {
        Self
    }
}

impl CatalogSource for BuiltinCatalogSource {
    fn describe(&self) -> String {
        "builtin".into()
    }

    fn load(&self) -> BomResult<Catalog> {
        CatalogFormat::Json
            .parse(BUILTIN_REFERENCES, "builtin")
            .map_err(|e| BomError::Internal {
                message: format!("embedded catalog is invalid: {e}"),
            })
    }
}
