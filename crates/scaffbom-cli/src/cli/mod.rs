//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "scaffbom",
    bin_name = "scaffbom",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Bill of materials for modular scaffolding",
    long_about = "Scaffbom derives the list of scaffold components (reference, \
                  designation, quantity) needed for a façade of the given \
                  length, height and width.",
    after_help = "EXAMPLES:\n\
        \x20 scaffbom compute --length 20 --height 6 --width 1.00 --stabilization stabilisateurs\n\
        \x20 scaffbom compute --request chantier.json --format json\n\
        \x20 scaffbom rules\n\
        \x20 scaffbom completions bash > /usr/share/bash-completion/completions/scaffbom",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute the bill of materials for a scaffold.
    #[command(
        visible_alias = "c",
        about = "Compute a bill of materials",
        after_help = "EXAMPLES:\n\
            \x20 scaffbom compute -L 5 -H 4 -W 0.70\n\
            \x20 scaffbom compute -L 30 -H 8 -W 0.70 --stabilization amarrage --format csv\n\
            \x20 echo '{\"L\": 20, \"H\": 6, \"largeur\": 1.0}' | scaffbom compute --request -"
    )]
    Compute(ComputeArgs),

    /// List the quantity rules.
    #[command(
        about = "List quantity rules in BOM order",
        after_help = "EXAMPLES:\n\
            \x20 scaffbom rules\n\
            \x20 scaffbom rules --format json"
    )]
    Rules(RulesArgs),

    /// Show catalog designations.
    #[command(
        about = "Show catalog designations",
        after_help = "EXAMPLES:\n\
            \x20 scaffbom catalog\n\
            \x20 scaffbom catalog ALTKLC1\n\
            \x20 scaffbom catalog --catalog ./references.toml"
    )]
    Catalog(CatalogArgs),

    /// Initialise a Scaffbom configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 scaffbom init          # default location\n\
            \x20 scaffbom init --force  # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 scaffbom completions bash > ~/.local/share/bash-completion/completions/scaffbom\n\
            \x20 scaffbom completions zsh  > ~/.zfunc/_scaffbom\n\
            \x20 scaffbom completions fish > ~/.config/fish/completions/scaffbom.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Scaffbom configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 scaffbom config get parsing.lenient_tokens\n\
            \x20 scaffbom config list\n\
            \x20 scaffbom config path"
    )]
    Config(ConfigCommands),
}

// ── compute ───────────────────────────────────────────────────────────────────

const REQUEST_FIELDS: [&str; 8] = [
    "length",
    "height",
    "width",
    "trapdoors",
    "wall_protection",
    "crane_lift",
    "stabilization",
    "plastic_wedges",
];

/// Arguments for `scaffbom compute`.
#[derive(Debug, Args)]
pub struct ComputeArgs {
    /// Façade length in metres.
    #[arg(
        short = 'L',
        long = "length",
        value_name = "METRES",
        allow_negative_numbers = true,
        required_unless_present = "request",
        help = "Façade length in metres"
    )]
    pub length: Option<f64>,

    /// Working height in metres.
    #[arg(
        short = 'H',
        long = "height",
        value_name = "METRES",
        allow_negative_numbers = true,
        required_unless_present = "request",
        help = "Working height in metres"
    )]
    pub height: Option<f64>,

    /// Deck width in metres. Only 0.70 and 1.00 select width-specific parts.
    #[arg(
        short = 'W',
        long = "width",
        value_name = "METRES",
        allow_negative_numbers = true,
        required_unless_present = "request",
        help = "Deck width in metres (0.70 or 1.00)"
    )]
    pub width: Option<f64>,

    /// Number of trapdoor floors.
    #[arg(
        short = 'F',
        long = "trapdoors",
        value_name = "COUNT",
        default_value_t = 0,
        allow_negative_numbers = true,
        help = "Number of trapdoor floors"
    )]
    pub trapdoors: i64,

    /// Wall protection flag. Only `OUI` turns it on.
    #[arg(
        long = "wall-protection",
        value_name = "OUI|NON",
        default_value = "NON",
        help = "Wall protection (OUI/NON)"
    )]
    pub wall_protection: String,

    /// Crane-lift flag. Only `OUI` turns it on.
    #[arg(
        long = "crane-lift",
        value_name = "OUI|NON",
        default_value = "NON",
        help = "Crane lifting (OUI/NON)"
    )]
    pub crane_lift: String,

    /// Stabilization mode token.
    #[arg(
        short = 's',
        long = "stabilization",
        value_name = "MODE",
        default_value = "aucun",
        help = "Stabilization mode (stabilisateurs, amarrage, aucun)"
    )]
    pub stabilization: String,

    /// Plastic wedges flag. Only `OUI` turns it on.
    #[arg(
        long = "plastic-wedges",
        value_name = "OUI|NON",
        default_value = "NON",
        help = "Plastic wedges (OUI/NON)"
    )]
    pub plastic_wedges: String,

    /// Read a JSON request instead of individual flags (`-` for stdin).
    #[arg(
        short = 'r',
        long = "request",
        value_name = "FILE",
        conflicts_with_all = REQUEST_FIELDS,
        help = "Read a JSON request from FILE (- for stdin)"
    )]
    pub request: Option<PathBuf>,

    /// Catalog file overriding the configured one.
    #[arg(long = "catalog", value_name = "FILE", help = "Catalog file (JSON or TOML)")]
    pub catalog: Option<PathBuf>,

    /// Output format; falls back to `output.format` from the config.
    #[arg(short = 'f', long = "format", value_enum, help = "Output format")]
    pub format: Option<ReportFormat>,

    /// Treat unknown stabilization tokens as `aucun` instead of failing.
    #[arg(long = "lenient", help = "Accept unknown stabilization tokens as none")]
    pub lenient: bool,
}

/// Output format for a computed BOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Aligned human-readable table.
    Table,
    /// `{"items": [...]}` document.
    Json,
    /// `reference,designation,quantity` rows.
    Csv,
}

// ── rules ─────────────────────────────────────────────────────────────────────

/// Arguments for `scaffbom rules`.
#[derive(Debug, Args)]
pub struct RulesArgs {
    /// Output format.
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One reference per line.
    List,
    /// JSON array.
    Json,
}

// ── catalog ───────────────────────────────────────────────────────────────────

/// Arguments for `scaffbom catalog`.
#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Reference code to look up; omit to list the whole catalog.
    #[arg(value_name = "CODE", help = "Reference code, e.g. ALTKLC1")]
    pub code: Option<String>,

    /// Catalog file overriding the configured one.
    #[arg(long = "catalog", value_name = "FILE", help = "Catalog file (JSON or TOML)")]
    pub catalog: Option<PathBuf>,

    /// Output format.
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `scaffbom init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `scaffbom completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `scaffbom config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `parsing.lenient_tokens`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
