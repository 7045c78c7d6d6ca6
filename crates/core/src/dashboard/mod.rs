//! Dashboard orchestration: fetch, convert, transform, expose.
//!
//! Each view of the dashboard maps to one `load_*` operation on
//! [`DashboardService`]. The service fetches whatever the view needs
//! (concurrently when the fetches are independent), runs the shared
//! transforms, and answers a single [`Fetchable`] the view renders as-is.

mod api_source;
mod dashboard_model;
mod dashboard_service;
mod dashboard_traits;
mod fetchable;

pub use api_source::*;
pub use dashboard_model::*;
pub use dashboard_service::*;
pub use dashboard_traits::*;
pub use fetchable::*;

#[cfg(test)]
mod dashboard_service_tests;
