//! # satcat-ingest
//!
//! Turns raw GCAT catalog text into the dashboard's [`OutputDocument`].
//!
//! The stages are pure and synchronous:
//! - [`tsv`]: split the text and resolve logical columns from the header
//! - [`normalize`]: parse dates and masses, classify regions and orbits
//! - [`records`]: fold rows into records and skip counters
//! - [`aggregate`]: bin and cumulative statistics per region and year
//!
//! [`pipeline::process`] runs all of them in order.
//!
//! [`OutputDocument`]: satcat_core::document::OutputDocument

pub mod aggregate;
mod error;
pub mod normalize;
pub mod pipeline;
pub mod records;
pub mod tsv;

pub use error::IngestError;
pub use pipeline::{PipelineOptions, ProcessStats, Processed, process};
