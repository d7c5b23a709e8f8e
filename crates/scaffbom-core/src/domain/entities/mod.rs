// ENTITIES
pub mod bom;
pub mod project_spec;

pub use bom::{Bom, BomLine, QuantityMap};
pub use project_spec::{ProjectSpec, ProjectSpecBuilder};
