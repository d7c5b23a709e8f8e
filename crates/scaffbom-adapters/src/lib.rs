//! Infrastructure adapters for Scaffbom.
//!
//! This crate implements the ports defined in `scaffbom-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod catalog;

// Re-export commonly used adapters
pub use catalog::{BuiltinCatalogSource, CatalogFormat, FileCatalogSource, InMemoryCatalogSource};
