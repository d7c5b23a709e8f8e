//! Quantity maps and bills of materials.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::RefCode;

/// Quantities produced by the rule engine, one per rule, in rule order.
///
/// Zero quantities are kept; filtering is the assembler's job. Built fresh
/// for each computation and never shared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuantityMap {
    entries: Vec<(RefCode, u64)>,
}

impl QuantityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quantity for `code`, or zero when no rule produced it.
    pub fn get(&self, code: RefCode) -> u64 {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map_or(0, |(_, q)| *q)
    }

    /// Entries in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (RefCode, u64)> + '_ {
        self.entries.iter().copied()
    }

    /// Entries with a strictly positive quantity, in evaluation order.
    pub fn positive(&self) -> impl Iterator<Item = (RefCode, u64)> + '_ {
        self.iter().filter(|(_, q)| *q > 0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(RefCode, u64)> for QuantityMap {
    /// Later duplicates of a code overwrite the earlier value in place.
    fn from_iter<I: IntoIterator<Item = (RefCode, u64)>>(iter: I) -> Self {
        let mut entries: Vec<(RefCode, u64)> = Vec::with_capacity(RefCode::ALL.len());
        for (code, quantity) in iter {
            match entries.iter_mut().find(|(c, _)| *c == code) {
                Some(slot) => slot.1 = quantity,
                None => entries.push((code, quantity)),
            }
        }
        Self { entries }
    }
}

/// One line of a bill of materials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomLine {
    pub reference: RefCode,
    pub designation: String,
    /// Always strictly positive.
    pub quantity: u64,
}

/// An ordered bill of materials.
///
/// Invariant: no duplicate references, no zero quantities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bom {
    pub items: Vec<BomLine>,
}

impl Bom {
    pub fn new(items: Vec<BomLine>) -> Self {
        Self { items }
    }

    pub fn line(&self, code: RefCode) -> Option<&BomLine> {
        self.items.iter().find(|l| l.reference == code)
    }

    /// Quantity ordered for `code`; zero when the code is absent.
    pub fn quantity_of(&self, code: RefCode) -> u64 {
        self.line(code).map_or(0, |l| l.quantity)
    }

    pub fn total_pieces(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |acc, l| acc.saturating_add(l.quantity))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BomLine> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a Bom {
    type Item = &'a BomLine;
    type IntoIter = std::slice::Iter<'a, BomLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
