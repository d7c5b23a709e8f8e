//! BOM assembly: positive quantities plus designations, in rule order.

use std::sync::Arc;

use crate::domain::{
    catalog::Catalog,
    entities::{Bom, BomLine, QuantityMap},
    value_objects::RefCode,
};

/// Turns a [`QuantityMap`] into a [`Bom`].
#[derive(Debug, Clone)]
pub struct BomAssembler {
    catalog: Arc<Catalog>,
}

impl BomAssembler {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Keep strictly positive quantities and attach the catalog designation
    /// (empty when unknown).
    ///
    /// Lines follow [`RefCode::ALL`] whatever order the map was built in.
    pub fn assemble(&self, quantities: &QuantityMap) -> Bom {
        Bom::new(
            RefCode::ALL
                .into_iter()
                .filter_map(|reference| {
                    let quantity = quantities.get(reference);
                    (quantity > 0).then(|| BomLine {
                        reference,
                        designation: self.catalog.lookup(reference).to_string(),
                        quantity,
                    })
                })
                .collect(),
        )
    }
}
