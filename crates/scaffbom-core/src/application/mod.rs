//! Application layer for Scaffbom.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (BomService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Request**: The transport-level request DTO and its token parsing
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! quantity logic itself. All formulas live in `crate::domain::rules`.

pub mod error;
pub mod ports;
pub mod request;
pub mod services;

// Re-export main services
pub use services::{BomReport, BomService};

pub use request::{BomRequest, Toggle, TokenPolicy};

// Re-export port traits (for adapter implementation)
pub use ports::CatalogSource;

pub use error::ApplicationError;
