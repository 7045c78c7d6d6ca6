//! Allocation models for portfolio breakdown by category.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The categorical breakdowns the dashboard offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AllocationDimension {
    /// Breakdown by industry sector
    Sector,
    /// Breakdown by market capitalization band
    MarketCap,
}

impl AllocationDimension {
    /// Display name of the dimension.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sector => "Sector",
            Self::MarketCap => "Market Cap",
        }
    }
}

/// Allocation bucket for a single category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSlice {
    /// Display name of the category (e.g. "Financials", "Large Cap")
    pub label: String,
    /// Total value held in the category, in portfolio currency
    pub value: Decimal,
    /// Share of the whole portfolio as a fraction in 0..=1
    pub percentage: Decimal,
    /// Number of distinct holdings aggregated into this bucket
    pub holdings_count: u32,
}
