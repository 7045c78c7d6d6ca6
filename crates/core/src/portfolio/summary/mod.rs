//! Portfolio summary module: aggregate metrics and top performers.

mod summary_model;

pub use summary_model::*;
