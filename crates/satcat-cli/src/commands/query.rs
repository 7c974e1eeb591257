use std::path::PathBuf;

use anyhow::Context;
use satcat_config::SatcatConfig;
use satcat_core::document::OutputDocument;
use satcat_market::{MarketQuery, Period, load_document};

use crate::cli::root_commands::QueryArgs;

/// Snapshot path from `--snapshot`, else the configured output path.
pub fn snapshot_path(args: &QueryArgs, config: &SatcatConfig) -> PathBuf {
    args.snapshot
        .clone()
        .unwrap_or_else(|| config.output.path.clone())
}

/// Load the snapshot the query runs against.
pub fn load_snapshot(args: &QueryArgs, config: &SatcatConfig) -> anyhow::Result<OutputDocument> {
    let path = snapshot_path(args, config);
    load_document(&path).with_context(|| {
        format!(
            "failed to load snapshot {} (run `satcat ingest` first)",
            path.display()
        )
    })
}

/// Build a query from flags. Without `--year` or `--from/--to`, the latest
/// year in the snapshot is used.
pub fn build_query(args: &QueryArgs, document: &OutputDocument) -> anyhow::Result<MarketQuery> {
    let period = match (args.year, args.from, args.to) {
        (Some(year), _, _) => Period::Single { year },
        (None, Some(from), Some(to)) => Period::Range { from, to },
        _ => {
            let latest = document
                .years
                .last()
                .context("snapshot has no launch years; pass --year explicitly")?;
            let year = latest
                .parse()
                .with_context(|| format!("snapshot year `{latest}` is not a number"))?;
            Period::Single { year }
        }
    };

    let query = MarketQuery {
        capacity_kg: args.capacity,
        period,
        region: args.region,
        price_per_kg_eur: args.price,
    };
    query.validate()?;
    Ok(query)
}
