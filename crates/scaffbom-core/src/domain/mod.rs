// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Scaffbom.
//!
//! This module contains pure business logic with no I/O. Catalog loading
//! goes through the `CatalogSource` port of the application layer; request
//! decoding and rendering belong to the CLI.
//!
//! ## Pipeline
//!
//! ```text
//! ProjectSpec ──► ParameterNormalizer ──► Metrics
//!                                           │
//!                                           ▼
//!                              QuantityRuleEngine (RULE_REGISTRY)
//!                                           │
//!                                           ▼
//!                 Catalog ──► BomAssembler ◄── QuantityMap
//!                                  │
//!                                  ▼
//!                                 Bom
//! ```
//!
//! - **No async**: every stage is synchronous
//! - **No I/O**: no filesystem, network, or external calls
//! - **Pure**: the same spec always yields the same BOM
pub mod assembler;
pub mod catalog;
pub mod entities;
pub mod error;
pub mod metrics;
pub mod rules;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use assembler::BomAssembler;
pub use catalog::Catalog;
pub use entities::{Bom, BomLine, ProjectSpec, ProjectSpecBuilder, QuantityMap};
pub use error::{DomainError, ErrorCategory};
pub use metrics::{Metrics, ParameterNormalizer};
pub use rules::{QuantityRuleEngine, RULE_REGISTRY, RuleDef, find_rule};
pub use value_objects::{
    ComponentFamily, RefCode, StabilizationMode, WidthClass, parse_flag,
};

pub use validation::DomainValidator;
