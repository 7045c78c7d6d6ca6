//! HTTP client for the dashboard API.
//!
//! One client instance per base URL. Requests attach the process-wide
//! bearer token when one is stored; a 401 response revokes it.

use log::{debug, warn};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::errors::ApiError;
use crate::models::{
    AllocationRow, ErrorBody, HoldingRow, PerformanceRow, SummaryDto, TopPerformersDto,
};
use crate::token;

const SUMMARY_PATH: &str = "/portfolio/summary";
const HOLDINGS_PATH: &str = "/portfolio/holdings";
const SECTOR_ALLOCATIONS_PATH: &str = "/portfolio/sector-allocation";
const MARKET_CAP_ALLOCATIONS_PATH: &str = "/portfolio/market-cap";
const PERFORMANCE_PATH: &str = "/portfolio/historical-performance";
const TOP_PERFORMERS_PATH: &str = "/portfolio/top-performers";

/// Client for the read-only dashboard endpoints.
///
/// Holds no state beyond the HTTP connection pool and the base URL; the
/// bearer credential lives in the [`token`](crate::token) store so it is
/// shared by every client in the process.
pub struct PortfolioApiClient {
    client: Client,
    base_url: String,
}

impl PortfolioApiClient {
    /// Create a client bound to `base_url` (e.g. `http://127.0.0.1:8000/api`).
    ///
    /// The URL is validated up front so a typo fails at construction, not
    /// on the first fetch. A trailing slash is tolerated and stripped.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = base_url.into();
        let trimmed = base_url.trim_end_matches('/');

        reqwest::Url::parse(trimmed)
            .map_err(|e| ApiError::Config(format!("invalid base URL '{}': {}", base_url, e)))?;

        Ok(PortfolioApiClient {
            client: Client::new(),
            base_url: trimmed.to_string(),
        })
    }

    /// GET `/portfolio/summary`.
    pub async fn fetch_summary(&self) -> Result<SummaryDto, ApiError> {
        self.get_json(SUMMARY_PATH).await
    }

    /// GET `/portfolio/holdings`.
    pub async fn fetch_holdings(&self) -> Result<Vec<HoldingRow>, ApiError> {
        self.get_json(HOLDINGS_PATH).await
    }

    /// GET `/portfolio/sector-allocation`.
    pub async fn fetch_sector_allocations(&self) -> Result<Vec<AllocationRow>, ApiError> {
        self.get_json(SECTOR_ALLOCATIONS_PATH).await
    }

    /// GET `/portfolio/market-cap`.
    pub async fn fetch_market_cap_allocations(&self) -> Result<Vec<AllocationRow>, ApiError> {
        self.get_json(MARKET_CAP_ALLOCATIONS_PATH).await
    }

    /// GET `/portfolio/historical-performance`.
    ///
    /// Rows come back in whatever order the backend produced them;
    /// ordering and dedup are the consumer's concern.
    pub async fn fetch_performance(&self) -> Result<Vec<PerformanceRow>, ApiError> {
        self.get_json(PERFORMANCE_PATH).await
    }

    /// GET `/portfolio/top-performers`.
    ///
    /// The backend answers 404 when the portfolio is empty; that surfaces
    /// as [`ApiError::Http`] with status 404 (see [`ApiError::is_not_found`]).
    pub async fn fetch_top_performers(&self) -> Result<TopPerformersDto, ApiError> {
        self.get_json(TOP_PERFORMERS_PATH).await
    }

    /// Perform a GET against `path` and decode the response body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let mut request = self.client.get(&url);
        if let Some(bearer) = token::current_token() {
            request = request.bearer_auth(bearer);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            // Revoke the credential for the whole process; retrying with
            // the same token would just fail again.
            token::clear_token();
            warn!("Bearer token rejected on {}, cleared stored credential", path);
            return Err(ApiError::Unauthorized);
        }

        let body = response.text().await?;
        Self::parse_body(status, &body, path)
    }

    /// Decode a response body.
    ///
    /// Success responses carry the payload directly. Error responses carry
    /// `{"detail": "..."}`; when the body is not that shape (a proxy page,
    /// an empty string), the message is synthesized from the status code.
    fn parse_body<T: DeserializeOwned>(
        status: StatusCode,
        body: &str,
        endpoint: &str,
    ) -> Result<T, ApiError> {
        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(body)
                .ok()
                .map(|e| e.detail)
                .filter(|detail| !detail.is_empty())
                .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));

            return Err(ApiError::Http {
                status: status.as_u16(),
                status_text: status
                    .canonical_reason()
                    .unwrap_or("Unknown")
                    .to_string(),
                message,
            });
        }

        serde_json::from_str(body).map_err(|e| ApiError::Deserialization {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })
    }
}
