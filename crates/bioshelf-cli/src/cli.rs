//! CLI argument definitions for the BioShelf inventory tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bioshelf",
    version,
    about = "BioShelf - Laboratory materials inventory tracker",
    long_about = "Track laboratory materials (reagents, samples, equipment, consumables).\n\n\
                  Imports inventory from CSV uploads, derives stock status\n\
                  (in stock / low / expired) and unit-formatted quantities."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the JSON database file.
    #[arg(long = "db", value_name = "PATH", default_value = "db.json", global = true)]
    pub db: PathBuf,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Import materials from a CSV file.
    Import(ImportArgs),

    /// List the inventory with derived status and formatted quantities.
    Inventory(InventoryArgs),

    /// Show stock statistics with low-stock and expiring-soon previews.
    Dashboard(DashboardArgs),

    /// Show one material in full.
    Show(ShowArgs),

    /// Delete a material.
    Remove(RemoveArgs),

    /// List the known material types and their allowed units.
    Types,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Path to the CSV file to import.
    #[arg(value_name = "CSV_FILE")]
    pub file: PathBuf,

    /// Parse and preview without writing anything to the database.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct InventoryArgs {
    /// Column to sort by.
    #[arg(long = "sort", value_enum, default_value = "name")]
    pub sort: SortKeyArg,

    /// Sort in descending order.
    #[arg(long = "desc")]
    pub desc: bool,

    /// Page to show (pages hold ten materials).
    #[arg(long = "page", value_name = "N", default_value_t = 1)]
    pub page: usize,

    /// Emit the page as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct DashboardArgs {
    /// Emit the statistics as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Id of the material to show.
    #[arg(value_name = "ID")]
    pub id: String,

    /// Emit the record as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct RemoveArgs {
    /// Id of the material to delete.
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Inventory sort columns.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKeyArg {
    Name,
    Quantity,
    Expiry,
    Location,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
