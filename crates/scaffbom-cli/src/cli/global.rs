//! Flags accepted before or after any subcommand.

use std::path::PathBuf;

use clap::Args;
use tracing::level_filters::LevelFilter;

/// Logging, color and configuration flags shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more to stderr (-v, -vv, -vvv)",
        long_help = "Log more to stderr:
    (none)  - warnings only, e.g. a missing catalog file
    -v      - catalog loaded, BOM assembled
    -vv     - derived metrics and every rule quantity
    -vvv    - everything

RUST_LOG, when set, replaces this setting."
    )]
    pub verbose: u8,

    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print only the BOM and errors"
    )]
    pub quiet: bool,

    /// Also set by `NO_COLOR` (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read settings from FILE instead of the default config",
        long_help = "Read settings from FILE instead of the default config file.

FILE must exist. Without this flag the file at `scaffbom config path` is
read when present.

Every key can be overridden from the environment as
SCAFFBOM__<SECTION>__<KEY>, which wins over the file:
    SCAFFBOM__CATALOG__PATH=refs.toml
    SCAFFBOM__PARSING__LENIENT_TOKENS=true
    SCAFFBOM__OUTPUT__FORMAT=csv"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How messages are rendered; `json` also makes logs and listings JSON"
    )]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Subscriber level for the scaffbom crates.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Stdout and stderr are meant for another program.
    pub fn machine_output(&self) -> bool {
        self.output_format == OutputFormat::Json
    }
}

/// How the CLI renders messages around the BOM.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human when stdout is a terminal, plain otherwise.
    #[default]
    Auto,
    Human,
    Plain,
    Json,
}
