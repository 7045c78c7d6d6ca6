//! Holdings module: position view model and the table sort/filter engine.

mod holdings_model;
mod holdings_table;

pub use holdings_model::*;
pub use holdings_table::*;

#[cfg(test)]
mod holdings_model_tests;
