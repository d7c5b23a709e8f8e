//! Command handlers, one module per subcommand.

use std::path::Path;

use tracing::debug;

use scaffbom_adapters::{BuiltinCatalogSource, FileCatalogSource};
use scaffbom_core::application::{BomService, TokenPolicy, ports::CatalogSource};

use crate::{config::AppConfig, error::CliResult};

pub mod catalog;
pub mod completions;
pub mod compute;
pub mod config;
pub mod init;
pub mod rules;

/// Pick the catalog source: `--catalog`, then `catalog.path`, then builtin.
fn catalog_source(flag: Option<&Path>, config: &AppConfig) -> Box<dyn CatalogSource> {
    match flag.or_else(|| config.catalog_path()) {
        Some(path) => Box::new(FileCatalogSource::new(path)),
        None => Box::new(BuiltinCatalogSource::new()),
    }
}

/// Build a service around the selected catalog.
fn build_service(flag: Option<&Path>, config: &AppConfig, lenient: bool) -> CliResult<BomService> {
    let source = catalog_source(flag, config);
    debug!(source = %source.describe(), "Loading catalog");

    let policy = if lenient || config.parsing.lenient_tokens {
        TokenPolicy::Lenient
    } else {
        TokenPolicy::Strict
    };

    Ok(BomService::from_source(source.as_ref())?.with_policy(policy))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn builtin_catalog_by_default() {
        let source = catalog_source(None, &AppConfig::default());
        assert_eq!(source.describe(), "builtin");
    }

    #[test]
    fn flag_wins_over_config() {
        let mut config = AppConfig::default();
        config.catalog.path = Some(PathBuf::from("from-config.json"));

        let source = catalog_source(Some(Path::new("from-flag.json")), &config);
        assert_eq!(source.describe(), "from-flag.json");

        let source = catalog_source(None, &config);
        assert_eq!(source.describe(), "from-config.json");
    }

    #[test]
    fn lenient_from_flag_or_config() {
        let mut config = AppConfig::default();
        assert_eq!(
            build_service(None, &config, false).unwrap().policy(),
            TokenPolicy::Strict
        );
        assert_eq!(
            build_service(None, &config, true).unwrap().policy(),
            TokenPolicy::Lenient
        );

        config.parsing.lenient_tokens = true;
        assert_eq!(
            build_service(None, &config, false).unwrap().policy(),
            TokenPolicy::Lenient
        );
    }
}
