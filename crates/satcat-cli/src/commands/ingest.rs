use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use satcat_config::SatcatConfig;
use satcat_core::document::OutputDocument;
use satcat_fetch::{CatalogClient, ClientOptions, megabytes};
use satcat_ingest::aggregate::{DEFAULT_SUMMARY_YEARS, yearly_summary};
use satcat_ingest::normalize::RegionTables;
use satcat_ingest::{PipelineOptions, ProcessStats, process};
use serde::Serialize;

use crate::cli::root_commands::IngestArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::{output, render_rows};
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct YearBreakdown {
    year: String,
    satellites: u64,
    tonnes: f64,
}

#[derive(Debug, Serialize)]
struct IngestResponse {
    source: String,
    output: String,
    total_data_rows: usize,
    skipped_no_mass: usize,
    skipped_no_date: usize,
    skipped_before_min_year: usize,
    min_year: i32,
    valid_satellites: usize,
    years_covered: Option<String>,
    total_satellites: usize,
    file_size_mb: f64,
    global_breakdown: Vec<YearBreakdown>,
}

/// Handle `satcat ingest`.
pub async fn handle(
    args: &IngestArgs,
    config: &SatcatConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let min_year = args.min_year.unwrap_or(config.filter.min_year);
    let output_path = args.output.clone().unwrap_or_else(|| config.output.path.clone());

    let (source, text) = match &args.input {
        Some(path) => (path.display().to_string(), read_local(path)?),
        None => {
            let url = args.url.as_deref().unwrap_or(&config.source.url);
            (url.to_string(), download(url, config).await?)
        }
    };

    let regions = RegionTables::from_lists(&config.regions.western_europe, &config.regions.excluded);
    let overlap = regions.overlapping_codes();
    if !overlap.is_empty() {
        tracing::warn!(
            codes = %overlap.join(", "),
            "state codes listed as both Western Europe and excluded; classifying as Western Europe"
        );
    }

    let options = PipelineOptions::new(
        min_year,
        regions,
        config.mass_bins.clone(),
        config.metadata.attribution(),
        chrono::Utc::now().date_naive(),
    );
    let processed = process(&text, &options).context("failed to process catalog")?;

    let file_size = write_document(&processed.document, &output_path)?;

    let response = summarize(
        source,
        &output_path,
        &processed.stats,
        min_year,
        &processed.document,
        file_size,
    );
    print_response(&response, flags.format)
}

fn read_local(path: &Path) -> anyhow::Result<String> {
    tracing::info!(path = %path.display(), "reading local catalog");
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file {}", path.display()))
}

async fn download(url: &str, config: &SatcatConfig) -> anyhow::Result<String> {
    let client = CatalogClient::new(&ClientOptions {
        user_agent: config.source.user_agent.clone(),
        timeout: Duration::from_secs(config.source.timeout_secs),
        max_redirects: config.source.max_redirects,
    })?;

    let spinner = Progress::spinner(&format!("Downloading {url}"));
    match client.fetch_text(url).await {
        Ok(text) => {
            spinner.finish_ok(&format!("Downloaded {:.2} MB", megabytes(text.len())));
            Ok(text)
        }
        Err(error) => {
            spinner.finish_err("Download failed");
            Err(error).with_context(|| format!("failed to download catalog from {url}"))
        }
    }
}

/// Write the pretty-printed snapshot, replacing any previous file. Returns
/// the size written in bytes.
fn write_document(document: &OutputDocument, path: &Path) -> anyhow::Result<usize> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(document).context("failed to serialize snapshot")?;
    std::fs::write(path, &json)
        .with_context(|| format!("failed to write snapshot {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = json.len(), "wrote snapshot");
    Ok(json.len())
}

fn summarize(
    source: String,
    output_path: &Path,
    stats: &ProcessStats,
    min_year: i32,
    document: &OutputDocument,
    file_size: usize,
) -> IngestResponse {
    let years_covered = match (document.years.first(), document.years.last()) {
        (Some(first), Some(last)) => Some(format!("{first} - {last}")),
        _ => None,
    };
    let global_breakdown = yearly_summary(document, DEFAULT_SUMMARY_YEARS)
        .into_iter()
        .map(|year| YearBreakdown {
            year: year.year,
            satellites: year.total_count,
            tonnes: year.total_mass_tonnes,
        })
        .collect();

    IngestResponse {
        source,
        output: output_path.display().to_string(),
        total_data_rows: stats.total_data_lines,
        skipped_no_mass: stats.skipped_no_mass,
        skipped_no_date: stats.skipped_no_date,
        skipped_before_min_year: stats.skipped_old_date,
        min_year,
        valid_satellites: stats.valid,
        years_covered,
        total_satellites: document.metadata.total_satellites,
        file_size_mb: (megabytes(file_size) * 100.0).round() / 100.0,
        global_breakdown,
    }
}

fn print_response(response: &IngestResponse, format: OutputFormat) -> anyhow::Result<()> {
    if format != OutputFormat::Table {
        return output(response, format);
    }

    let rows = [
        ("source", response.source.clone()),
        ("output", response.output.clone()),
        ("total data rows", response.total_data_rows.to_string()),
        ("skipped (no mass)", response.skipped_no_mass.to_string()),
        ("skipped (no date)", response.skipped_no_date.to_string()),
        (
            "skipped (before min year)",
            format!("{} (< {})", response.skipped_before_min_year, response.min_year),
        ),
        ("valid satellites", response.valid_satellites.to_string()),
        (
            "years covered",
            response.years_covered.clone().unwrap_or_else(|| "-".into()),
        ),
        ("total satellites", response.total_satellites.to_string()),
        ("file size (MB)", format!("{:.2}", response.file_size_mb)),
    ]
    .into_iter()
    .map(|(key, value)| vec![key.to_string(), value])
    .collect::<Vec<_>>();
    println!("{}", render_rows(&["summary", "value"], &rows));

    let breakdown = response
        .global_breakdown
        .iter()
        .map(|y| vec![y.year.clone(), y.satellites.to_string(), format!("{:.1}", y.tonnes)])
        .collect::<Vec<_>>();
    println!();
    println!("Yearly breakdown (Global)");
    println!("{}", render_rows(&["year", "satellites", "tonnes"], &breakdown));
    Ok(())
}
