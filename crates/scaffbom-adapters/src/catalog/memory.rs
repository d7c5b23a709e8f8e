//! In-memory catalog source.

use scaffbom_core::{application::ports::CatalogSource, domain::Catalog, error::BomResult};

/// Catalog source backed by a fixed list of key-value pairs.
///
/// Useful for tests and for running without any designations.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogSource {
    pairs: Vec<(String, String)>,
}

impl InMemoryCatalogSource {
    /// A source that yields an empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl CatalogSource for InMemoryCatalogSource {
    fn describe(&self) -> String {
        format!("memory ({} entries)", self.pairs.len())
    }

    fn load(&self) -> BomResult<Catalog> {
        Ok(Catalog::from_raw(self.pairs.iter().cloned()))
    }
}
