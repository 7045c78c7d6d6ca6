//! Chart building: renderer-neutral series and deterministic colors.

mod chart_model;
mod chart_service;
mod palette;

pub use chart_model::*;
pub use chart_service::*;
pub use palette::*;
