//! Sizing query parameters.

use std::fmt;

use satcat_core::enums::DistributionRegion;
use satcat_core::record::SatelliteRecord;
use serde::Serialize;

use crate::error::MarketError;

/// Default launcher capacity, 15 t.
pub const DEFAULT_CAPACITY_KG: u64 = 15_000;
/// Default launch price in EUR per kilogram.
pub const DEFAULT_PRICE_PER_KG_EUR: f64 = 15_000.0;

/// Launch years a query covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "mode")]
pub enum Period {
    Single { year: i32 },
    /// Inclusive on both ends.
    Range { from: i32, to: i32 },
}

impl Period {
    #[must_use]
    pub const fn contains(self, year: i32) -> bool {
        match self {
            Self::Single { year: y } => y == year,
            Self::Range { from, to } => year >= from && year <= to,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single { year } => write!(f, "{year}"),
            Self::Range { from, to } => write!(f, "{from}-{to}"),
        }
    }
}

/// What a launcher can carry, when, for whom, and at what price.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketQuery {
    pub capacity_kg: u64,
    pub period: Period,
    pub region: DistributionRegion,
    pub price_per_kg_eur: f64,
}

impl MarketQuery {
    /// Query with the dashboard's default capacity, price and region.
    #[must_use]
    pub const fn for_period(period: Period) -> Self {
        Self {
            capacity_kg: DEFAULT_CAPACITY_KG,
            period,
            region: DistributionRegion::Global,
            price_per_kg_eur: DEFAULT_PRICE_PER_KG_EUR,
        }
    }

    /// # Errors
    ///
    /// Returns [`MarketError::InvalidQuery`] for a zero capacity, a reversed
    /// year range, or a negative or non-finite price.
    pub fn validate(&self) -> Result<(), MarketError> {
        if self.capacity_kg == 0 {
            return Err(MarketError::InvalidQuery(
                "capacity must be greater than zero".into(),
            ));
        }
        if let Period::Range { from, to } = self.period
            && from > to
        {
            return Err(MarketError::InvalidQuery(format!(
                "year range {from}-{to} is reversed"
            )));
        }
        if !self.price_per_kg_eur.is_finite() || self.price_per_kg_eur < 0.0 {
            return Err(MarketError::InvalidQuery(format!(
                "price per kg must be a non-negative number, got {}",
                self.price_per_kg_eur
            )));
        }
        Ok(())
    }

    /// Whether `record` falls in the query's period and region.
    #[must_use]
    pub const fn selects(&self, record: &SatelliteRecord) -> bool {
        self.period.contains(record.year) && self.region.includes(record.region)
    }

    /// Whether `record` both matches and fits under the capacity.
    #[must_use]
    pub const fn addresses(&self, record: &SatelliteRecord) -> bool {
        self.selects(record) && record.mass_kg <= self.capacity_kg
    }
}
