//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `scaffbom-adapters` crate provides implementations.

use crate::domain::Catalog;
use crate::error::BomResult;

/// Port for loading the reference catalog.
///
/// Implemented by:
/// - `scaffbom_adapters::catalog::FileCatalogSource` (JSON / TOML file)
/// - `scaffbom_adapters::catalog::BuiltinCatalogSource` (embedded default)
/// - `scaffbom_adapters::catalog::InMemoryCatalogSource` (testing)
///
/// ## Design Notes
///
/// - Called once at startup; the result is shared read-only
/// - A missing source is not an error: return an empty catalog
/// - Only an existing but unreadable or malformed source fails
#[cfg_attr(test, mockall::automock)]
pub trait CatalogSource: Send + Sync {
    /// Short description for logs and error messages (a path, "builtin", ...).
    fn describe(&self) -> String;

    /// Load the catalog.
    fn load(&self) -> BomResult<Catalog>;
}
