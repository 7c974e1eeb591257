use std::path::PathBuf;

use clap::{Args, Subcommand};
use satcat_core::enums::DistributionRegion;
use satcat_market::{DEFAULT_CAPACITY_KG, DEFAULT_PRICE_PER_KG_EUR};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Download the catalog, aggregate it, and write the dashboard snapshot.
    Ingest(IngestArgs),
    /// Size the addressable market for a launcher capacity.
    Size(SizeArgs),
    /// Export addressable satellites as CSV.
    Export(ExportArgs),
}

/// Arguments for `satcat ingest`.
#[derive(Clone, Debug, Args)]
pub struct IngestArgs {
    /// Catalog URL (overrides `source.url`)
    #[arg(long)]
    pub url: Option<String>,
    /// Read the catalog from a local TSV file instead of downloading it
    #[arg(long, conflicts_with = "url")]
    pub input: Option<PathBuf>,
    /// Earliest launch year to keep (overrides `filter.min_year`)
    #[arg(long)]
    pub min_year: Option<i32>,
    /// Snapshot path to write (overrides `output.path`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Snapshot and query selection shared by `size` and `export`.
#[derive(Clone, Debug, Args)]
pub struct QueryArgs {
    /// Snapshot to read (defaults to `output.path`)
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
    /// Launcher capacity in kilograms
    #[arg(long, default_value_t = DEFAULT_CAPACITY_KG)]
    pub capacity: u64,
    /// Single launch year (defaults to the latest year in the snapshot)
    #[arg(long, conflicts_with_all = ["from", "to"])]
    pub year: Option<i32>,
    /// First year of an inclusive range
    #[arg(long, requires = "to")]
    pub from: Option<i32>,
    /// Last year of an inclusive range
    #[arg(long, requires = "from")]
    pub to: Option<i32>,
    /// Region: global, western-europe, western-aligned
    #[arg(long, default_value = "global")]
    pub region: DistributionRegion,
    /// Launch price in EUR per kilogram
    #[arg(long, default_value_t = DEFAULT_PRICE_PER_KG_EUR)]
    pub price: f64,
}

/// Arguments for `satcat size`.
#[derive(Clone, Debug, Args)]
pub struct SizeArgs {
    #[command(flatten)]
    pub query: QueryArgs,
    /// Max addressable satellites to list (table output defaults to 100)
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for `satcat export`.
#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub query: QueryArgs,
    /// CSV path (defaults to a name derived from the query)
    #[arg(long)]
    pub out: Option<PathBuf>,
}
