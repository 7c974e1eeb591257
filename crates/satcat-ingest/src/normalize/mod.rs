//! Field normalizers: one catalog cell in, one typed value out.
//!
//! None of these fail. An unusable value comes back as `None` (date, mass)
//! or as a default bucket (region, orbit) and the caller decides what that
//! means for the row.

mod date;
mod mass;
mod orbit;
mod region;

pub use date::{LaunchDate, parse_date};
pub use mass::parse_mass;
pub use orbit::classify_orbit;
pub use region::{RegionTables, classify_region};
