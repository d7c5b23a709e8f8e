//! Tracing subscriber for the binary.
//!
//! Core and adapters only emit events; this is the one place that decides
//! where they go. Everything is written to stderr so a BOM on stdout stays
//! clean for pipes.
//!
//! With `--output-format json` each event is one JSON object per line.
//! `RUST_LOG` replaces the level chosen by `-v`/`-q`.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events pass the filter.
const LOG_TARGETS: [&str; 3] = ["scaffbom", "scaffbom_core", "scaffbom_adapters"];

/// Install the global subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_directives(args.log_level())))?;

    let registry = tracing_subscriber::registry().with(filter);

    let installed = if args.machine_output() {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_span_list(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    // Which crate spoke only matters once rule-level detail is on.
                    .with_target(args.verbose >= 2)
                    .with_ansi(!args.no_color && std::io::stderr().is_terminal())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    installed.map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn filter_directives(level: LevelFilter) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
