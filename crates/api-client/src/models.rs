//! Wire DTOs for the dashboard API.
//!
//! These structs mirror the backend JSON exactly, field for field. They are
//! deserialize-only: the consumer converts them into its own domain types at
//! its boundary. Unknown fields in the payload are ignored, so additive
//! backend changes do not break the client.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Error body the backend sends on non-2xx responses.
///
/// The server reports failures as `{"detail": "..."}`; anything else in
/// an error body (proxy HTML, empty string) falls back to a synthesized
/// message built from the status code.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// One row of the holdings table, as served by `/portfolio/holdings`.
///
/// This endpoint uses snake_case keys, unlike the aggregate endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct HoldingRow {
    pub symbol: String,
    pub company_name: String,
    pub quantity: Decimal,
    pub avg_price: Decimal,
    pub current_price: Decimal,
    pub sector: String,
    pub market_cap: String,
    pub exchange: String,
    pub value: Decimal,
    pub gain_loss: Decimal,
    pub gain_loss_percent: Decimal,
}

/// One allocation bucket from `/portfolio/sector-allocation` or
/// `/portfolio/market-cap`.
///
/// The two endpoints are identical except for the label key (`sector`
/// vs `marketCap`); both decode into [`label`](Self::label).
/// `percentage` is a fraction of the whole portfolio in `0..=1`.
#[derive(Debug, Clone, Deserialize)]
pub struct AllocationRow {
    #[serde(rename = "sector", alias = "marketCap")]
    pub label: String,
    pub value: Decimal,
    pub percentage: Decimal,
    #[serde(rename = "holdingsCount")]
    pub holdings_count: u32,
}

/// One day of cumulative return history from
/// `/portfolio/historical-performance`.
///
/// Returns are cumulative fractions since inception (0.21 means +21%).
/// The endpoint also ships raw index levels alongside the returns;
/// those are not needed here and fall away on decode.
#[derive(Debug, Clone, Deserialize)]
pub struct PerformanceRow {
    pub date: NaiveDate,
    pub portfolio_return: Decimal,
    pub nifty_50_return: Decimal,
    pub gold_return: Decimal,
}

/// Aggregate metrics from `/portfolio/summary`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDto {
    pub total_value: Decimal,
    pub total_invested: Decimal,
    pub total_gain_loss: Decimal,
    pub total_gain_loss_percent: Decimal,
    pub number_of_holdings: u32,
    pub diversification_score: Decimal,
    pub risk_level: RiskLevelDto,
}

/// Risk band reported by the backend.
///
/// The backend spells the middle band "Moderate"; anything it starts
/// emitting that we do not recognize decodes as [`Unknown`](Self::Unknown)
/// rather than failing the whole summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RiskLevelDto {
    Low,
    #[serde(alias = "Moderate")]
    Medium,
    High,
    #[serde(other)]
    Unknown,
}

/// One side of the best/worst pair from `/portfolio/top-performers`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformerDto {
    pub symbol: String,
    pub name: String,
    pub gain_percent: Decimal,
}

/// Payload of `/portfolio/top-performers`.
///
/// The backend refuses this request with a 404 when the portfolio holds
/// nothing, so an empty portfolio never reaches this type.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPerformersDto {
    pub best_performer: PerformerDto,
    pub worst_performer: PerformerDto,
}
