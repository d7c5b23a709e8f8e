//! `scaffbom catalog`: show designations from the active catalog.

use std::collections::BTreeMap;

use scaffbom_core::{
    domain::RefCode,
    error::BomError,
};

use crate::{
    cli::{CatalogArgs, ListFormat, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

use super::build_service;

pub fn execute(args: CatalogArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = build_service(args.catalog.as_deref(), &config, false)?;
    let catalog = service.catalog();

    let format = if output.format() == OutputFormat::Json {
        ListFormat::Json
    } else {
        args.format
    };

    if let Some(code) = args.code.as_deref() {
        let code: RefCode = code.parse().map_err(BomError::from)?;
        let designation = catalog.lookup(code);
        match format {
            ListFormat::Json => println!("{}", render_json([(code, designation)])?),
            ListFormat::Table | ListFormat::List if designation.is_empty() => {
                output.warning(&format!("{code} has no designation in this catalog"))?;
            }
            ListFormat::Table | ListFormat::List => println!("{designation}"),
        }
        return Ok(());
    }

    match format {
        ListFormat::Table => {
            output.header(&format!("Catalog ({} of {} codes):", catalog.len(), RefCode::ALL.len()))?;
            for (code, designation) in catalog.iter() {
                output.print(&format!("  {code:<10} {designation}"))?;
            }
            let missing = catalog.missing();
            if !missing.is_empty() {
                let codes: Vec<_> = missing.iter().map(RefCode::as_str).collect();
                output.warning(&format!("No designation for: {}", codes.join(", ")))?;
            }
        }

        ListFormat::Json => println!("{}", render_json(catalog.iter())?),

        ListFormat::List => {
            for (code, _) in catalog.iter() {
                println!("{code}");
            }
        }
    }

    Ok(())
}

/// Flat `{"CODE": "designation"}` object, the same shape a catalog file has.
fn render_json<'a>(entries: impl IntoIterator<Item = (RefCode, &'a str)>) -> CliResult<String> {
    let entries: BTreeMap<&str, &str> = entries
        .into_iter()
        .map(|(code, designation)| (code.as_str(), designation))
        .collect();

    serde_json::to_string_pretty(&entries).map_err(|e| {
        CliError::Core(BomError::Internal {
            message: format!("catalog serialization failed: {e}"),
        })
    })
}
