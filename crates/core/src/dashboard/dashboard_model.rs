//! Ready-to-render payloads, one per dashboard view.

use serde::Serialize;

use crate::charts::{NamedSeries, PieSlice};
use crate::portfolio::{
    returns_over, visible_holdings, AllocationSlice, Holding, PerformancePoint, ReturnWindow,
    SortState, SummaryMetrics, TopPerformers, WindowReturns,
};

/// Everything the overview page shows.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OverviewData {
    pub summary: SummaryMetrics,
    pub sector_slices: Vec<PieSlice>,
    /// Window the header returns were computed over
    pub window: ReturnWindow,
    /// `None` when there is not enough history for the window
    pub window_returns: Option<WindowReturns>,
    pub growth: Vec<NamedSeries>,
}

/// Both allocation breakdowns, as source rows and as chart slices.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllocationData {
    pub sector: Vec<AllocationSlice>,
    pub market_cap: Vec<AllocationSlice>,
    pub sector_slices: Vec<PieSlice>,
    pub market_cap_slices: Vec<PieSlice>,
}

/// The holdings table's source snapshot.
///
/// The fetched rows are kept untouched; every render derives its visible
/// rows fresh from here with the current query and sort.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingsData {
    pub holdings: Vec<Holding>,
}

impl HoldingsData {
    /// The rows one render of the table shows: filtered, then sorted.
    pub fn visible_rows(&self, query: &str, sort: Option<SortState>) -> Vec<Holding> {
        visible_holdings(&self.holdings, query, sort)
    }
}

/// Normalized performance history plus its chart series.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceData {
    /// Ascending by date, one point per date
    pub points: Vec<PerformancePoint>,
    pub growth: Vec<NamedSeries>,
}

impl PerformanceData {
    /// Window returns against this history; `None` below two points.
    pub fn returns_for(&self, window: ReturnWindow) -> Option<WindowReturns> {
        returns_over(&self.points, window)
    }
}

/// Summary plus the best/worst pair for the insights page.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InsightsData {
    pub summary: SummaryMetrics,
    /// `None` for an empty portfolio, which has no performers to rank
    pub top: Option<TopPerformers>,
}
