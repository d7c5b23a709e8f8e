//! `scaffbom compute`: turn project parameters into a bill of materials.

use std::{fs, io, path::Path};

use clap::ValueEnum;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use scaffbom_core::{
    application::{BomReport, BomRequest, Toggle},
    domain::{Bom, DomainError, WidthClass},
    error::BomError,
};

use crate::{
    cli::{ComputeArgs, OutputFormat, ReportFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

use super::build_service;

const STDIN_MARKER: &str = "-";

#[instrument(skip_all)]
pub fn execute(args: ComputeArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let format = resolve_format(args.format, &output, &config)?;

    let request = match args.request.as_deref() {
        Some(path) => read_request(path)?,
        None => request_from_flags(&args)?,
    };
    debug!(?request, "Request decoded");

    let service = build_service(args.catalog.as_deref(), &config, args.lenient)?;
    let report = service.handle(&request)?;

    match format {
        ReportFormat::Table => print_table(&report, &output)?,
        ReportFormat::Json => println!("{}", render_json(&report.bom)?),
        ReportFormat::Csv => print!("{}", render_csv(&report.bom)),
    }

    Ok(())
}

/// `--format`, then `--output-format json`, then `output.format` from config.
fn resolve_format(
    flag: Option<ReportFormat>,
    output: &OutputManager,
    config: &AppConfig,
) -> CliResult<ReportFormat> {
    if let Some(format) = flag {
        return Ok(format);
    }
    if output.format() == OutputFormat::Json {
        return Ok(ReportFormat::Json);
    }
    ReportFormat::from_str(&config.output.format, true).map_err(|e| CliError::ConfigError {
        message: format!("output.format: {e}"),
        source: None,
    })
}

fn read_request(path: &Path) -> CliResult<BomRequest> {
    let (origin, text) = if path == Path::new(STDIN_MARKER) {
        let text = io::read_to_string(io::stdin()).with_cli_context(|| "Failed to read stdin")?;
        ("stdin".to_string(), text)
    } else {
        let text = fs::read_to_string(path)
            .with_cli_context(|| format!("Failed to read request '{}'", path.display()))?;
        (path.display().to_string(), text)
    };

    serde_json::from_str(&text).map_err(|e| CliError::InvalidRequest {
        origin,
        reason: e.to_string(),
    })
}

fn request_from_flags(args: &ComputeArgs) -> CliResult<BomRequest> {
    Ok(BomRequest {
        length: required(args.length, "length")?,
        height: required(args.height, "height")?,
        width: required(args.width, "width")?,
        trapdoor_count: args.trapdoors,
        wall_protection: Toggle::from(args.wall_protection.as_str()),
        crane_lift: Toggle::from(args.crane_lift.as_str()),
        stabilization: args.stabilization.clone(),
        plastic_wedges: Toggle::from(args.plastic_wedges.as_str()),
    })
}

fn required(value: Option<f64>, field: &'static str) -> CliResult<f64> {
    value.ok_or_else(|| BomError::from(DomainError::MissingRequiredField { field }).into())
}

fn print_table(report: &BomReport, output: &OutputManager) -> CliResult<()> {
    output.header(&format!("Bill of materials for {}", report.project))?;
    output.print(&format!(
        "  {} bay(s), {} level(s)",
        report.metrics.bays, report.metrics.levels
    ))?;

    if report.project.width_class() == WidthClass::NonStandard {
        output.warning(&format!(
            "Width {} m is neither {:.2} nor {:.2}; width-specific parts are omitted",
            report.project.width(),
            WidthClass::NARROW_METERS,
            WidthClass::WIDE_METERS,
        ))?;
    }

    output.print("")?;
    output.print(&format!("  {:<10} {:>8}  {}", "Reference", "Quantity", "Designation"))?;
    for line in &report.bom {
        let quantity = format!("{:>8}", line.quantity);
        let quantity = if output.supports_color() {
            quantity.bold().to_string()
        } else {
            quantity
        };
        output.print(&format!(
            "  {:<10} {}  {}",
            line.reference, quantity, line.designation
        ))?;
    }
    output.print("")?;

    output.success(&format!(
        "{} reference(s), {} piece(s)",
        report.bom.len(),
        report.bom.total_pieces()
    ))?;
    Ok(())
}

fn render_json(bom: &Bom) -> CliResult<String> {
    serde_json::to_string_pretty(bom).map_err(|e| {
        CliError::Core(BomError::Internal {
            message: format!("BOM serialization failed: {e}"),
        })
    })
}

fn render_csv(bom: &Bom) -> String {
    let mut out = String::from("reference,designation,quantity\n");
    for line in bom {
        out.push_str(&format!(
            "{},{},{}\n",
            line.reference,
            csv_field(&line.designation),
            line.quantity
        ));
    }
    out
}

/// Quote a field when it holds a separator, a quote or a line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
