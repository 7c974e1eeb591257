use satcat_config::SatcatConfig;
use satcat_market::{SizingReport, size};

use crate::cli::root_commands::SizeArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::query::{build_query, load_snapshot};
use crate::output::{output, render_key_values, render_rows};

/// Addressable rows listed in table output when `--limit` is absent.
const DEFAULT_TABLE_LIMIT: usize = 100;

/// Handle `satcat size`.
pub fn handle(args: &SizeArgs, config: &SatcatConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let document = load_snapshot(&args.query, config)?;
    let query = build_query(&args.query, &document)?;
    let mut report = size(&document, &query)?;

    let limit = match flags.format {
        OutputFormat::Table => Some(args.limit.unwrap_or(DEFAULT_TABLE_LIMIT)),
        OutputFormat::Json | OutputFormat::Raw => args.limit,
    };
    let listed_total = report.addressable.len();
    if let Some(limit) = limit {
        report.addressable.truncate(limit);
    }

    if flags.format == OutputFormat::Table {
        print_table(&report, listed_total)
    } else {
        output(&report, flags.format)
    }
}

fn print_table(report: &SizingReport, listed_total: usize) -> anyhow::Result<()> {
    let query = &report.query;
    println!(
        "Launcher capacity {} kg, {} {}, {:.0} EUR/kg",
        query.capacity_kg, query.region, query.period, query.price_per_kg_eur
    );
    println!();
    println!("{}", render_key_values(&report.kpis)?);

    let histogram = report
        .histogram
        .iter()
        .enumerate()
        .map(|(index, bin)| {
            let fit = if bin.addressable {
                "yes"
            } else if bin.partially_addressable {
                "partial"
            } else {
                "no"
            };
            let marker = if report.reference_bin == Some(index) { "<" } else { "" };
            vec![
                bin.label.clone(),
                bin.count.to_string(),
                format!("{:.1}", bin.mass_tonnes),
                fit.to_string(),
                marker.to_string(),
            ]
        })
        .collect::<Vec<_>>();
    println!();
    println!(
        "{}",
        render_rows(&["bin", "count", "tonnes", "addressable", "capacity"], &histogram)
    );

    let rows = report
        .addressable
        .iter()
        .map(|sat| {
            vec![
                sat.name.clone(),
                sat.launch_date.clone(),
                sat.mass_kg.to_string(),
                sat.owner.clone(),
                sat.state.clone(),
                sat.orbit.to_string(),
            ]
        })
        .collect::<Vec<_>>();
    println!();
    println!(
        "{}",
        render_rows(&["name", "launch date", "mass kg", "owner", "state", "orbit"], &rows)
    );
    if listed_total > report.addressable.len() {
        println!(
            "Showing first {} of {listed_total} satellites. Use `satcat export` for the full list.",
            report.addressable.len()
        );
    }
    Ok(())
}
