//! Folioview API Client Crate
//!
//! This crate provides typed HTTP access to the portfolio dashboard API
//! for the Folioview application.
//!
//! # Overview
//!
//! The API client supports:
//! - The six read-only dashboard endpoints (summary, holdings, sector and
//!   market-cap allocations, historical performance, top performers)
//! - Typed decoding of response payloads and `{"detail": ...}` error bodies
//! - Bearer-token authentication with a process-wide token store
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |   Domain Layer   | --> | PortfolioApiClient|  (endpoint methods)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |   TokenStore     |  (bearer credential)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    Wire DTOs     |  (HoldingRow, SummaryDto, ...)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`PortfolioApiClient`] - HTTP client bound to a base URL
//! - [`HoldingRow`], [`AllocationRow`], [`PerformanceRow`] - tabular payloads
//! - [`SummaryDto`], [`TopPerformersDto`] - aggregate payloads
//! - [`ApiError`] - Everything that can go wrong on the wire
//!
//! DTOs mirror the backend JSON exactly. Conversion into richer domain
//! types is the consumer's job, not this crate's.

pub mod client;
pub mod errors;
pub mod models;
pub mod token;

pub use client::PortfolioApiClient;
pub use errors::ApiError;
pub use models::{
    AllocationRow, ErrorBody, HoldingRow, PerformanceRow, PerformerDto, RiskLevelDto, SummaryDto,
    TopPerformersDto,
};
pub use token::{clear_token, current_token, set_token};
