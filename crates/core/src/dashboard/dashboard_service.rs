//! The orchestrator: one `load_*` operation per dashboard view.

use std::sync::Arc;

use futures::try_join;
use log::debug;

use crate::charts::{normalized_growth, pie_slices};
use crate::errors::Result;
use crate::portfolio::{normalize_history, returns_over, AllocationDimension, ReturnWindow};

use super::{
    AllocationData, Fetchable, HoldingsData, InsightsData, OverviewData, PerformanceData,
    PortfolioDataSource,
};

/// Fetches and transforms per view, over any [`PortfolioDataSource`].
///
/// A view's independent fetches run concurrently and are joined before
/// anything is produced: the first failure fails the whole view. Nothing
/// is retried and nothing is cached; a reload runs the same loads again
/// from scratch.
pub struct DashboardService<S: PortfolioDataSource> {
    source: Arc<S>,
}

impl<S: PortfolioDataSource> DashboardService<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Data for the overview page: summary card, sector donut, growth
    /// chart, and returns over the default window.
    pub async fn load_overview(&self) -> Fetchable<OverviewData> {
        self.overview().await.into()
    }

    /// Data for the allocation page: both breakdowns.
    pub async fn load_allocations(&self) -> Fetchable<AllocationData> {
        self.allocations().await.into()
    }

    /// Data for the holdings table.
    pub async fn load_holdings(&self) -> Fetchable<HoldingsData> {
        self.holdings().await.into()
    }

    /// Data for the performance page.
    pub async fn load_performance(&self) -> Fetchable<PerformanceData> {
        self.performance().await.into()
    }

    /// Data for the insights page: summary plus best/worst performers.
    pub async fn load_insights(&self) -> Fetchable<InsightsData> {
        self.insights().await.into()
    }

    async fn overview(&self) -> Result<OverviewData> {
        let (summary, sectors, history) = try_join!(
            self.source.summary(),
            self.source.sector_allocations(),
            self.source.performance_history(),
        )?;

        let points = normalize_history(history);
        let window = ReturnWindow::default();

        Ok(OverviewData {
            summary,
            sector_slices: pie_slices(&sectors, AllocationDimension::Sector),
            window,
            window_returns: returns_over(&points, window),
            growth: normalized_growth(&points),
        })
    }

    async fn allocations(&self) -> Result<AllocationData> {
        // The two breakdowns do not depend on each other.
        let (sector, market_cap) = try_join!(
            self.source.sector_allocations(),
            self.source.market_cap_allocations(),
        )?;

        let sector_slices = pie_slices(&sector, AllocationDimension::Sector);
        let market_cap_slices = pie_slices(&market_cap, AllocationDimension::MarketCap);

        Ok(AllocationData {
            sector,
            market_cap,
            sector_slices,
            market_cap_slices,
        })
    }

    async fn holdings(&self) -> Result<HoldingsData> {
        let holdings = self.source.holdings().await?;
        Ok(HoldingsData { holdings })
    }

    async fn performance(&self) -> Result<PerformanceData> {
        let history = self.source.performance_history().await?;
        let points = normalize_history(history);
        let growth = normalized_growth(&points);
        Ok(PerformanceData { points, growth })
    }

    async fn insights(&self) -> Result<InsightsData> {
        let (summary, top) = futures::join!(self.source.summary(), self.source.top_performers());
        let summary = summary?;

        // An empty portfolio has no performers to rank; the backend says
        // not-found and the page renders without that card.
        let top = match top {
            Ok(top) => Some(top),
            Err(e) if e.is_not_found() => {
                debug!("No top performers available: {}", e);
                None
            }
            Err(e) => return Err(e),
        };

        Ok(InsightsData { summary, top })
    }
}
