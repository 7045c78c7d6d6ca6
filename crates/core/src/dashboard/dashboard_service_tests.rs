//! Tests for the dashboard orchestrator and the fetch state wrapper.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use folioview_api_client::ApiError;

    use crate::dashboard::{DashboardService, Fetchable, PortfolioDataSource};
    use crate::errors::{Error, Result};
    use crate::portfolio::{
        AllocationSlice, Holding, HoldingColumn, PerformancePoint, PerformerInfo, ReturnWindow,
        RiskLevel, SortState, SummaryMetrics, TopPerformers,
    };

    // =========================================================================
    // Mock Data Source
    // =========================================================================

    /// Canned data source. Each endpoint can be switched to fail with a
    /// given HTTP status.
    #[derive(Default)]
    struct MockSource {
        fail_summary: Option<u16>,
        fail_market_cap: Option<u16>,
        fail_top_performers: Option<u16>,
        history: Vec<PerformancePoint>,
    }

    fn http_error(status: u16) -> Error {
        Error::Api(ApiError::Http {
            status,
            status_text: "error".to_string(),
            message: format!("backend answered {}", status),
        })
    }

    fn summary_fixture() -> SummaryMetrics {
        SummaryMetrics {
            total_value: dec!(150000),
            total_invested: dec!(125000),
            total_gain_loss: dec!(25000),
            total_gain_loss_percent: dec!(20),
            number_of_holdings: 2,
            diversification_score: dec!(6.5),
            risk_level: RiskLevel::Medium,
        }
    }

    fn holding(symbol: &str, value: Decimal) -> Holding {
        Holding {
            symbol: symbol.to_string(),
            company_name: format!("{} Ltd", symbol),
            quantity: dec!(10),
            avg_price: dec!(100),
            current_price: value / dec!(10),
            sector: "Financials".to_string(),
            market_cap: "Large Cap".to_string(),
            exchange: "NSE".to_string(),
            value,
            gain_loss: value - dec!(1000),
            gain_loss_percent: (value - dec!(1000)) / dec!(10),
        }
    }

    fn point(date: (i32, u32, u32), portfolio: Decimal) -> PerformancePoint {
        PerformancePoint {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            portfolio_return: portfolio,
            nifty_50_return: dec!(0.05),
            gold_return: dec!(0.02),
        }
    }

    fn slice(label: &str, value: Decimal, percentage: Decimal) -> AllocationSlice {
        AllocationSlice {
            label: label.to_string(),
            value,
            percentage,
            holdings_count: 1,
        }
    }

    #[async_trait]
    impl PortfolioDataSource for MockSource {
        async fn summary(&self) -> Result<SummaryMetrics> {
            match self.fail_summary {
                Some(status) => Err(http_error(status)),
                None => Ok(summary_fixture()),
            }
        }

        async fn holdings(&self) -> Result<Vec<Holding>> {
            Ok(vec![holding("INFY", dec!(1500)), holding("TCS", dec!(1200))])
        }

        async fn sector_allocations(&self) -> Result<Vec<AllocationSlice>> {
            Ok(vec![
                slice("Financials", dec!(90000), dec!(0.6)),
                slice("Energy", dec!(60000), dec!(0.4)),
            ])
        }

        async fn market_cap_allocations(&self) -> Result<Vec<AllocationSlice>> {
            match self.fail_market_cap {
                Some(status) => Err(http_error(status)),
                None => Ok(vec![slice("Large Cap", dec!(150000), dec!(1.0))]),
            }
        }

        async fn performance_history(&self) -> Result<Vec<PerformancePoint>> {
            Ok(self.history.clone())
        }

        async fn top_performers(&self) -> Result<TopPerformers> {
            match self.fail_top_performers {
                Some(status) => Err(http_error(status)),
                None => Ok(TopPerformers {
                    best: PerformerInfo {
                        symbol: "INFY".to_string(),
                        name: "Infosys".to_string(),
                        gain_percent: dec!(12.5),
                    },
                    worst: PerformerInfo {
                        symbol: "TCS".to_string(),
                        name: "Tata Consultancy Services".to_string(),
                        gain_percent: dec!(-4.2),
                    },
                }),
            }
        }
    }

    fn year_of_history() -> Vec<PerformancePoint> {
        vec![
            point((2023, 3, 15), dec!(0)),
            point((2024, 2, 14), dec!(0.10)),
            point((2024, 3, 15), dec!(0.21)),
        ]
    }

    fn service(source: MockSource) -> DashboardService<MockSource> {
        DashboardService::new(Arc::new(source))
    }

    // =========================================================================
    // Overview Tests
    // =========================================================================

    #[tokio::test]
    async fn test_load_overview_composes_all_parts() {
        let svc = service(MockSource {
            history: year_of_history(),
            ..Default::default()
        });

        let overview = match svc.load_overview().await {
            Fetchable::Ready(data) => data,
            other => panic!("Expected Ready, got {:?}", other),
        };

        assert_eq!(overview.summary.number_of_holdings, 2);
        assert_eq!(overview.window, ReturnWindow::Year);
        assert_eq!(overview.sector_slices.len(), 2);
        assert_eq!(overview.sector_slices[0].label, "Financials");
        assert_eq!(overview.sector_slices[0].percentage, dec!(60.00));
        assert_eq!(overview.growth.len(), 3);
        assert_eq!(overview.growth[0].points.len(), 3);

        // The 1Y target lands next to 2023-03-15, which anchors the
        // window: (1.21 / 1.00 - 1) * 100 = 21%.
        let returns = overview.window_returns.expect("enough history");
        assert_eq!(returns.portfolio, Some(dec!(21.00)));
    }

    #[tokio::test]
    async fn test_load_overview_with_no_history_has_no_returns() {
        let svc = service(MockSource::default());

        let overview = match svc.load_overview().await {
            Fetchable::Ready(data) => data,
            other => panic!("Expected Ready, got {:?}", other),
        };

        // No history is a gap, not a failure: the view still renders,
        // showing "no data" where the returns would be.
        assert!(overview.window_returns.is_none());
        assert!(overview.growth.iter().all(|s| s.points.is_empty()));
    }

    #[tokio::test]
    async fn test_load_overview_fails_whole_view_when_one_fetch_fails() {
        let svc = service(MockSource {
            fail_summary: Some(500),
            history: year_of_history(),
            ..Default::default()
        });

        let overview = svc.load_overview().await;
        let message = overview.error().expect("view should fail as a whole");
        assert!(message.contains("500"));
        assert!(!overview.is_ready());
    }

    // =========================================================================
    // Allocation Tests
    // =========================================================================

    #[tokio::test]
    async fn test_load_allocations_carries_rows_and_slices() {
        let svc = service(MockSource::default());

        let data = match svc.load_allocations().await {
            Fetchable::Ready(data) => data,
            other => panic!("Expected Ready, got {:?}", other),
        };

        assert_eq!(data.sector.len(), 2);
        assert_eq!(data.market_cap.len(), 1);
        assert_eq!(data.sector_slices.len(), 2);
        assert_eq!(data.market_cap_slices[0].percentage, dec!(100.00));
    }

    #[tokio::test]
    async fn test_load_allocations_all_or_nothing() {
        let svc = service(MockSource {
            fail_market_cap: Some(503),
            ..Default::default()
        });

        // The sector fetch succeeds, but the view never shows half a page.
        let data = svc.load_allocations().await;
        assert!(data.error().unwrap().contains("503"));
    }

    // =========================================================================
    // Holdings Tests
    // =========================================================================

    #[tokio::test]
    async fn test_load_holdings_keeps_source_rows_and_derives_views() {
        let svc = service(MockSource::default());

        let data = match svc.load_holdings().await {
            Fetchable::Ready(data) => data,
            other => panic!("Expected Ready, got {:?}", other),
        };

        assert_eq!(data.holdings.len(), 2);

        let sorted = data.visible_rows(
            "",
            Some(SortState::new(HoldingColumn::Value)),
        );
        assert_eq!(sorted[0].symbol, "TCS");
        assert_eq!(sorted[1].symbol, "INFY");

        // Deriving a view leaves the snapshot untouched.
        assert_eq!(data.holdings[0].symbol, "INFY");

        let filtered = data.visible_rows("infy", None);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].symbol, "INFY");
    }

    // =========================================================================
    // Performance Tests
    // =========================================================================

    #[tokio::test]
    async fn test_load_performance_normalizes_history() {
        // Out of order, with a duplicate date; the later arrival wins.
        let svc = service(MockSource {
            history: vec![
                point((2024, 3, 15), dec!(0.21)),
                point((2023, 3, 15), dec!(0)),
                point((2024, 3, 15), dec!(0.22)),
            ],
            ..Default::default()
        });

        let data = match svc.load_performance().await {
            Fetchable::Ready(data) => data,
            other => panic!("Expected Ready, got {:?}", other),
        };

        assert_eq!(data.points.len(), 2);
        assert!(data.points[0].date < data.points[1].date);
        assert_eq!(data.points[1].portfolio_return, dec!(0.22));

        let returns = data.returns_for(ReturnWindow::Year).unwrap();
        assert_eq!(returns.portfolio, Some(dec!(22.00)));
    }

    #[tokio::test]
    async fn test_returns_for_single_point_is_no_data() {
        let svc = service(MockSource {
            history: vec![point((2024, 3, 15), dec!(0.21))],
            ..Default::default()
        });

        let data = match svc.load_performance().await {
            Fetchable::Ready(data) => data,
            other => panic!("Expected Ready, got {:?}", other),
        };

        for window in ReturnWindow::ALL {
            assert!(data.returns_for(window).is_none());
        }
    }

    // =========================================================================
    // Insights Tests
    // =========================================================================

    #[tokio::test]
    async fn test_load_insights_ready_with_performers() {
        let svc = service(MockSource::default());

        let data = match svc.load_insights().await {
            Fetchable::Ready(data) => data,
            other => panic!("Expected Ready, got {:?}", other),
        };

        let top = data.top.expect("performers present");
        assert_eq!(top.best.symbol, "INFY");
        assert_eq!(top.worst.gain_percent, dec!(-4.2));
    }

    #[tokio::test]
    async fn test_load_insights_tolerates_missing_performers() {
        // Empty portfolio: the backend 404s on top performers.
        let svc = service(MockSource {
            fail_top_performers: Some(404),
            ..Default::default()
        });

        let data = match svc.load_insights().await {
            Fetchable::Ready(data) => data,
            other => panic!("Expected Ready, got {:?}", other),
        };

        assert!(data.top.is_none());
        assert_eq!(data.summary.number_of_holdings, 2);
    }

    #[tokio::test]
    async fn test_load_insights_fails_on_other_performer_errors() {
        let svc = service(MockSource {
            fail_top_performers: Some(500),
            ..Default::default()
        });

        let data = svc.load_insights().await;
        assert!(data.error().unwrap().contains("500"));
    }

    // =========================================================================
    // Fetchable Tests
    // =========================================================================

    #[test]
    fn test_fetchable_accessors() {
        let loading: Fetchable<u32> = Fetchable::Loading;
        assert!(loading.is_loading());
        assert!(loading.ready().is_none());
        assert!(loading.error().is_none());

        let ready = Fetchable::Ready(7);
        assert!(ready.is_ready());
        assert_eq!(ready.ready(), Some(&7));

        let failed: Fetchable<u32> = Fetchable::Error("boom".to_string());
        assert_eq!(failed.error(), Some("boom"));
    }

    #[test]
    fn test_fetchable_map_carries_states_through() {
        let ready = Fetchable::Ready(2).map(|n| n * 10);
        assert_eq!(ready, Fetchable::Ready(20));

        let failed: Fetchable<u32> = Fetchable::Error("boom".to_string());
        assert_eq!(failed.map(|n| n * 10), Fetchable::Error("boom".to_string()));

        let loading: Fetchable<u32> = Fetchable::Loading;
        assert_eq!(loading.map(|n| n * 10), Fetchable::Loading);
    }

    #[test]
    fn test_fetchable_from_result() {
        let ok: Result<u32> = Ok(5);
        assert_eq!(Fetchable::from(ok), Fetchable::Ready(5));

        let err: Result<u32> = Err(http_error(500));
        let fetchable = Fetchable::from(err);
        assert!(fetchable.error().unwrap().contains("500"));
    }
}
