//! Production data source backed by the dashboard API client.
//!
//! This is the only place wire DTOs appear inside the core crate: they
//! arrive from `folioview-api-client`, convert into domain types here, and
//! never travel further up.

use async_trait::async_trait;

use folioview_api_client::{
    AllocationRow, HoldingRow, PerformanceRow, PerformerDto, PortfolioApiClient, RiskLevelDto,
    SummaryDto, TopPerformersDto,
};

use crate::errors::Result;
use crate::portfolio::{
    AllocationSlice, Holding, PerformancePoint, PerformerInfo, RiskLevel, SummaryMetrics,
    TopPerformers,
};

use super::PortfolioDataSource;

/// [`PortfolioDataSource`] over HTTP.
pub struct ApiDataSource {
    client: PortfolioApiClient,
}

impl ApiDataSource {
    pub fn new(client: PortfolioApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PortfolioDataSource for ApiDataSource {
    async fn summary(&self) -> Result<SummaryMetrics> {
        Ok(self.client.fetch_summary().await?.into())
    }

    async fn holdings(&self) -> Result<Vec<Holding>> {
        let rows = self.client.fetch_holdings().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn sector_allocations(&self) -> Result<Vec<AllocationSlice>> {
        let rows = self.client.fetch_sector_allocations().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn market_cap_allocations(&self) -> Result<Vec<AllocationSlice>> {
        let rows = self.client.fetch_market_cap_allocations().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn performance_history(&self) -> Result<Vec<PerformancePoint>> {
        let rows = self.client.fetch_performance().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn top_performers(&self) -> Result<TopPerformers> {
        Ok(self.client.fetch_top_performers().await?.into())
    }
}

// === Wire-to-domain conversions ===

impl From<HoldingRow> for Holding {
    fn from(row: HoldingRow) -> Self {
        Holding {
            symbol: row.symbol,
            company_name: row.company_name,
            quantity: row.quantity,
            avg_price: row.avg_price,
            current_price: row.current_price,
            sector: row.sector,
            market_cap: row.market_cap,
            exchange: row.exchange,
            value: row.value,
            gain_loss: row.gain_loss,
            gain_loss_percent: row.gain_loss_percent,
        }
    }
}

impl From<AllocationRow> for AllocationSlice {
    fn from(row: AllocationRow) -> Self {
        AllocationSlice {
            label: row.label,
            value: row.value,
            percentage: row.percentage,
            holdings_count: row.holdings_count,
        }
    }
}

impl From<PerformanceRow> for PerformancePoint {
    fn from(row: PerformanceRow) -> Self {
        PerformancePoint {
            date: row.date,
            portfolio_return: row.portfolio_return,
            nifty_50_return: row.nifty_50_return,
            gold_return: row.gold_return,
        }
    }
}

impl From<RiskLevelDto> for RiskLevel {
    fn from(dto: RiskLevelDto) -> Self {
        match dto {
            RiskLevelDto::Low => RiskLevel::Low,
            RiskLevelDto::Medium => RiskLevel::Medium,
            RiskLevelDto::High => RiskLevel::High,
            RiskLevelDto::Unknown => RiskLevel::Unknown,
        }
    }
}

impl From<SummaryDto> for SummaryMetrics {
    fn from(dto: SummaryDto) -> Self {
        SummaryMetrics {
            total_value: dto.total_value,
            total_invested: dto.total_invested,
            total_gain_loss: dto.total_gain_loss,
            total_gain_loss_percent: dto.total_gain_loss_percent,
            number_of_holdings: dto.number_of_holdings,
            diversification_score: dto.diversification_score,
            risk_level: dto.risk_level.into(),
        }
    }
}

impl From<PerformerDto> for PerformerInfo {
    fn from(dto: PerformerDto) -> Self {
        PerformerInfo {
            symbol: dto.symbol,
            name: dto.name,
            gain_percent: dto.gain_percent,
        }
    }
}

impl From<TopPerformersDto> for TopPerformers {
    fn from(dto: TopPerformersDto) -> Self {
        TopPerformers {
            best: dto.best_performer.into(),
            worst: dto.worst_performer.into(),
        }
    }
}
