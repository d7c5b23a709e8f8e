//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "compute the BOM for this request".

pub mod bom_service;

pub use bom_service::{BomReport, BomService};
