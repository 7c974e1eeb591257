use satcat_config::SatcatConfig;
use satcat_market::{export_file_name, export_to_path, size};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportArgs;
use crate::commands::query::{build_query, load_snapshot};
use crate::output::output;

#[derive(Debug, Serialize)]
struct ExportResponse {
    path: String,
    rows: usize,
    period: String,
    region: String,
    capacity_kg: u64,
}

/// Handle `satcat export`.
pub fn handle(args: &ExportArgs, config: &SatcatConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let document = load_snapshot(&args.query, config)?;
    let query = build_query(&args.query, &document)?;
    let report = size(&document, &query)?;

    let path = args
        .out
        .clone()
        .unwrap_or_else(|| export_file_name(&query).into());
    export_to_path(&path, &report.addressable)?;

    output(
        &ExportResponse {
            path: path.display().to_string(),
            rows: report.addressable.len(),
            period: query.period.to_string(),
            region: query.region.to_string(),
            capacity_kg: query.capacity_kg,
        },
        flags.format,
    )
}
