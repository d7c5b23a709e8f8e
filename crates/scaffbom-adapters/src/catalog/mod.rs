//! `CatalogSource` implementations.

mod builtin;
mod file;
mod format;
mod memory;

pub use builtin::BuiltinCatalogSource;
pub use file::FileCatalogSource;
pub use format::CatalogFormat;
pub use memory::InMemoryCatalogSource;
