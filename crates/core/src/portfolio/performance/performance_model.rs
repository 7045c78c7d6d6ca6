use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One day of cumulative return history for the portfolio and its
/// benchmarks.
///
/// Returns are cumulative fractions since inception: 0.21 means the series
/// is up 21% from its starting level, -1 means it went to zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerformancePoint {
    pub date: NaiveDate,
    pub portfolio_return: Decimal,
    pub nifty_50_return: Decimal,
    pub gold_return: Decimal,
}

/// Look-back windows offered by the performance view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ReturnWindow {
    Month,
    Quarter,
    #[default]
    Year,
}

impl ReturnWindow {
    /// All windows, in ascending length.
    pub const ALL: [ReturnWindow; 3] = [Self::Month, Self::Quarter, Self::Year];

    /// Calendar days the window reaches back from the latest observation.
    pub fn days(&self) -> i64 {
        match self {
            Self::Month => 30,
            Self::Quarter => 90,
            Self::Year => 365,
        }
    }

    /// Short display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Month => "30D",
            Self::Quarter => "90D",
            Self::Year => "1Y",
        }
    }
}

impl std::str::FromStr for ReturnWindow {
    type Err = crate::Error;

    /// Parses the window keys accepted from views ("30d", "90d", "1y").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "30d" | "1m" | "month" => Ok(Self::Month),
            "90d" | "3m" | "quarter" => Ok(Self::Quarter),
            "1y" | "365d" | "year" => Ok(Self::Year),
            other => Err(crate::errors::ValidationError::UnknownWindow(other.to_string()).into()),
        }
    }
}

/// Returns of every series over one look-back window, as display percents.
///
/// A series is `None` when its return is undefined over the window: the
/// anchor observation sits at exactly -1 (the level reached zero), so
/// there is no base to measure growth against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WindowReturns {
    pub portfolio: Option<Decimal>,
    pub nifty_50: Option<Decimal>,
    pub gold: Option<Decimal>,
}
