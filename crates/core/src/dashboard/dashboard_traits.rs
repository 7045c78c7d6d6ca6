//! Data-source trait the orchestrator fetches through.

use async_trait::async_trait;

use crate::errors::Result;
use crate::portfolio::{
    AllocationSlice, Holding, PerformancePoint, SummaryMetrics, TopPerformers,
};

/// The six read operations a dashboard needs, in domain types.
///
/// The production implementation wraps the HTTP client and converts wire
/// DTOs at this boundary; tests substitute canned data. Nothing above this
/// trait knows whether bytes moved.
#[async_trait]
pub trait PortfolioDataSource: Send + Sync {
    /// Aggregate portfolio metrics.
    async fn summary(&self) -> Result<SummaryMetrics>;

    /// Every position, in backend order.
    async fn holdings(&self) -> Result<Vec<Holding>>;

    /// Allocation breakdown by sector.
    async fn sector_allocations(&self) -> Result<Vec<AllocationSlice>>;

    /// Allocation breakdown by market-cap band.
    async fn market_cap_allocations(&self) -> Result<Vec<AllocationSlice>>;

    /// Cumulative return history, in backend order (not necessarily
    /// ascending or date-unique; the orchestrator normalizes).
    async fn performance_history(&self) -> Result<Vec<PerformancePoint>>;

    /// Best and worst holdings. Answers a not-found error when the
    /// portfolio is empty.
    async fn top_performers(&self) -> Result<TopPerformers>;
}
