//! Folioview Core - Domain models, calculators, and orchestration.
//!
//! This crate contains the client-side analytics for the Folioview
//! dashboard. It turns the raw payloads served by the portfolio API into
//! typed view data: sortable holdings tables, allocation pies, indexed
//! growth series, and period return summaries. It performs no rendering
//! and no persistence; views consume what it produces.

pub mod charts;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod portfolio;

// Re-export common types from the portfolio and chart modules
pub use charts::*;
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
