//! Reference catalog: designation text for each reference code.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::value_objects::RefCode;

/// Read-only mapping from reference code to designation.
///
/// Built once at startup (see the `CatalogSource` port) and then shared
/// behind an `Arc`. Lookups never fail: an absent code has an empty
/// designation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: HashMap<RefCode, String>,
}

impl Catalog {
    /// A catalog with no designations at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from typed entries. Later entries win.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (RefCode, S)>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(code, designation)| (code, designation.into()))
                .collect(),
        }
    }

    /// Build from an untyped key-value document.
    ///
    /// Keys that are not reference codes are skipped.
    pub fn from_raw<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut entries = HashMap::new();
        for (key, designation) in pairs {
            match key.as_ref().parse::<RefCode>() {
                Ok(code) => {
                    entries.insert(code, designation.into());
                }
                Err(_) => debug!(key = key.as_ref(), "Ignoring unknown catalog key"),
            }
        }
        Self { entries }
    }

    /// Designation for `code`, or `""` when the catalog has none.
    pub fn lookup(&self, code: RefCode) -> &str {
        self.entries.get(&code).map_or("", String::as_str)
    }

    pub fn contains(&self, code: RefCode) -> bool {
        self.entries.contains_key(&code)
    }

    /// Codes of the closed universe that have no designation.
    pub fn missing(&self) -> Vec<RefCode> {
        RefCode::ALL
            .into_iter()
            .filter(|c| !self.contains(*c))
            .collect()
    }

    /// Entries in declared code order.
    pub fn iter(&self) -> impl Iterator<Item = (RefCode, &str)> + '_ {
        RefCode::ALL
            .into_iter()
            .filter_map(|c| self.entries.get(&c).map(|d| (c, d.as_str())))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_defaults_to_empty() {
        let catalog = Catalog::from_entries([(RefCode::Altasv5, "Socle à vérin")]);

        assert_eq!(catalog.lookup(RefCode::Altasv5), "Socle à vérin");
        assert_eq!(catalog.lookup(RefCode::Altrlev), "");
    }

    #[test]
    fn from_raw_skips_unknown_keys() {
        let catalog = Catalog::from_raw([
            ("ALTKPI5", "Plinthe"),
            ("altrlev", "Crochet de levage"),
            ("NOT-A-CODE", "?"),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.lookup(RefCode::Altrlev), "Crochet de levage");
    }

    #[test]
    fn iter_follows_code_order() {
        let catalog = Catalog::from_entries([
            (RefCode::Altkfsv, "c"),
            (RefCode::Altasv5, "a"),
            (RefCode::Altkpi5, "b"),
        ]);

        let codes: Vec<_> = catalog.iter().map(|(c, _)| c).collect();
        assert_eq!(
            codes,
            vec![RefCode::Altasv5, RefCode::Altkpi5, RefCode::Altkfsv]
        );
        assert_eq!(catalog.missing().len(), 21);
    }

    #[test]
    fn catalog_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }
}
