//! Aggregate metrics and top-performer models.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Coarse risk banding for the whole portfolio.
///
/// `Unknown` covers bands this version does not recognize, so a new band
/// introduced upstream degrades gracefully instead of failing the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Unknown,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Unknown => "Unknown",
        };
        write!(f, "{}", label)
    }
}

/// Aggregate portfolio metrics shown in the overview header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetrics {
    /// Current market value of the whole portfolio
    pub total_value: Decimal,
    /// Total cost basis across all holdings
    pub total_invested: Decimal,
    pub total_gain_loss: Decimal,
    pub total_gain_loss_percent: Decimal,
    pub number_of_holdings: u32,
    /// Concentration-based score in 0..=10, higher is more diversified
    pub diversification_score: Decimal,
    pub risk_level: RiskLevel,
}

/// One side of the best/worst performer pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerformerInfo {
    pub symbol: String,
    pub name: String,
    pub gain_percent: Decimal,
}

/// Best and worst holdings by percentage gain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopPerformers {
    pub best: PerformerInfo,
    pub worst: PerformerInfo,
}
