//! # satcat-core
//!
//! Core types and error types for satcat.
//!
//! This crate provides the foundational types shared across all satcat crates:
//! - The normalized [`record::SatelliteRecord`] entity
//! - Region and orbit classification tags
//! - The static mass-bin table and its validation
//! - The output document written for the dashboard
//! - Default state-code tables used by the region classifier
//! - Cross-cutting error types

pub mod bins;
pub mod document;
pub mod enums;
pub mod errors;
pub mod record;
pub mod regions;
pub mod units;
