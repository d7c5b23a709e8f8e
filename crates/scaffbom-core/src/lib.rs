//! Scaffbom Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Scaffbom
//! bill-of-materials engine, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          scaffbom-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │       (BomService, BomRequest)          │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │          (Driven: CatalogSource)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    scaffbom-adapters (Infrastructure)   │
//! │ (FileCatalogSource, BuiltinCatalog, ..) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProjectSpec, Metrics, Rules, Catalog)  │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use scaffbom_core::{
//!     application::BomService,
//!     domain::{Catalog, ProjectSpec, RefCode, StabilizationMode},
//! };
//!
//! let spec = ProjectSpec::builder()
//!     .length(5.0)
//!     .height(4.0)
//!     .width(0.70)
//!     .stabilization(StabilizationMode::None)
//!     .build()
//!     .unwrap();
//!
//! let service = BomService::new(Arc::new(Catalog::empty()));
//! let bom = service.compute(&spec);
//!
//! assert_eq!(bom.quantity_of(RefCode::Altklc1), 8);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BomReport, BomRequest, BomService, TokenPolicy, Toggle, ports::CatalogSource,
    };
    pub use crate::domain::{
        Bom, BomAssembler, BomLine, Catalog, ComponentFamily, Metrics, ParameterNormalizer,
        ProjectSpec, ProjectSpecBuilder, QuantityMap, QuantityRuleEngine, RefCode,
        StabilizationMode, WidthClass,
    };
    pub use crate::error::{BomError, BomResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
