//! BOM Service - main application orchestrator.
//!
//! This service coordinates the whole computation:
//! 1. Validate the request into a `ProjectSpec`
//! 2. Normalize it into `Metrics`
//! 3. Evaluate the rule registry
//! 4. Assemble the BOM against the catalog
//!
//! It implements the driving port (incoming) and uses the catalog loaded
//! through the driven `CatalogSource` port.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::CatalogSource,
        request::{BomRequest, TokenPolicy},
    },
    domain::{
        Bom, BomAssembler, Catalog, DomainValidator as validator, Metrics, ParameterNormalizer,
        ProjectSpec, QuantityMap, QuantityRuleEngine, RuleDef,
    },
    error::{BomError, BomResult},
};

/// A BOM together with what it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BomReport {
    pub project: ProjectSpec,
    pub metrics: Metrics,
    pub bom: Bom,
}

/// Main BOM service.
///
/// Holds only immutable state, so one instance can serve any number of
/// concurrent computations.
#[derive(Debug, Clone)]
pub struct BomService {
    normalizer: ParameterNormalizer,
    engine: QuantityRuleEngine,
    assembler: BomAssembler,
    policy: TokenPolicy,
}

impl BomService {
    /// Create a service around an already-loaded catalog.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            normalizer: ParameterNormalizer::new(),
            engine: QuantityRuleEngine::new(),
            assembler: BomAssembler::new(catalog),
            policy: TokenPolicy::default(),
        }
    }

    /// Load the catalog once from `source` and build a service around it.
    #[instrument(skip_all, fields(source = %source.describe()))]
    pub fn from_source(source: &dyn CatalogSource) -> BomResult<Self> {
        let catalog = source.load()?;
        info!(entries = catalog.len(), "Catalog loaded");
        if !catalog.missing().is_empty() {
            debug!(missing = ?catalog.missing(), "Catalog has no designation for some codes");
        }
        Ok(Self::new(Arc::new(catalog)))
    }

    /// How unknown stabilization tokens are handled by [`Self::handle`].
    pub fn with_policy(mut self, policy: TokenPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> TokenPolicy {
        self.policy
    }

    pub fn catalog(&self) -> &Catalog {
        self.assembler.catalog()
    }

    /// The rule registry, in BOM order.
    pub fn rules(&self) -> &'static [RuleDef] {
        self.engine.rules()
    }

    /// Raw quantities for every rule, zeroes included.
    pub fn quantities(&self, spec: &ProjectSpec) -> QuantityMap {
        let metrics = self.normalizer.normalize(spec);
        self.engine.evaluate(&metrics)
    }

    /// Compute the BOM for an already-validated spec.
    pub fn compute(&self, spec: &ProjectSpec) -> Bom {
        self.report(spec).bom
    }

    /// Compute the BOM and keep the derived metrics alongside it.
    #[instrument(skip_all, fields(project = %spec))]
    pub fn report(&self, spec: &ProjectSpec) -> BomReport {
        let metrics = self.normalizer.normalize(spec);
        let quantities = self.engine.evaluate(&metrics);
        let bom = self.assembler.assemble(&quantities);

        debug_assert!(validator::validate_bom(&bom).is_ok());
        info!(lines = bom.len(), pieces = bom.total_pieces(), "BOM assembled");

        BomReport {
            project: spec.clone(),
            metrics,
            bom,
        }
    }

    /// Validate a raw request and compute its BOM.
    ///
    /// Invalid input is rejected before any rule runs.
    #[instrument(skip_all)]
    pub fn handle(&self, request: &BomRequest) -> BomResult<BomReport> {
        let spec = request.to_spec(self.policy).map_err(BomError::Domain)?;
        validator::validate_project_spec(&spec)?;
        Ok(self.report(&spec))
    }
}
