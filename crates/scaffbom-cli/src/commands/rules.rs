//! `scaffbom rules`: list the quantity rules in BOM order.

use scaffbom_core::{domain::RULE_REGISTRY, error::BomError};

use crate::{
    cli::{GlobalArgs, ListFormat, RulesArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: RulesArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let format = if global.machine_output() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Quantity rules:")?;
            for rule in RULE_REGISTRY {
                output.print(&format!(
                    "  {:<10} {:<14} {}",
                    rule.code, rule.family, rule.formula
                ))?;
            }
        }

        // Bypasses OutputManager so the payload stays parseable.
        ListFormat::Json => {
            let json = serde_json::to_string_pretty(RULE_REGISTRY).map_err(|e| {
                CliError::Core(BomError::Internal {
                    message: format!("rule serialization failed: {e}"),
                })
            })?;
            println!("{json}");
        }

        ListFormat::List => {
            for rule in RULE_REGISTRY {
                println!("{}", rule.code);
            }
        }
    }

    Ok(())
}
