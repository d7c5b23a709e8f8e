use std::collections::HashSet;

use crate::domain::{
    entities::{Bom, ProjectSpec},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_project_spec(spec: &ProjectSpec) -> Result<(), DomainError> {
        spec.validate()
    }

    /// Checks the BOM invariant: unique references, strictly positive quantities.
    pub fn validate_bom(bom: &Bom) -> Result<(), DomainError> {
        let mut seen = HashSet::with_capacity(bom.len());
        for line in bom {
            if line.quantity == 0 {
                return Err(DomainError::InvalidInput {
                    field: "quantity",
                    reason: format!("{} has a zero quantity", line.reference),
                });
            }
            if !seen.insert(line.reference) {
                return Err(DomainError::InvalidInput {
                    field: "reference",
                    reason: format!("{} appears more than once", line.reference),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BomLine, RefCode};

    fn line(reference: RefCode, quantity: u64) -> BomLine {
        BomLine {
            reference,
            designation: String::new(),
            quantity,
        }
    }

    #[test]
    fn accepts_well_formed_bom() {
        let bom = Bom::new(vec![line(RefCode::Altasv5, 6), line(RefCode::Altkpi5, 8)]);
        assert!(DomainValidator::validate_bom(&bom).is_ok());
    }

    #[test]
    fn rejects_duplicates_and_zeroes() {
        let dup = Bom::new(vec![line(RefCode::Altasv5, 6), line(RefCode::Altasv5, 6)]);
        assert!(DomainValidator::validate_bom(&dup).is_err());

        let zero = Bom::new(vec![line(RefCode::Altasv5, 0)]);
        assert!(DomainValidator::validate_bom(&zero).is_err());
    }
}
