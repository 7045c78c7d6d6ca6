//! Portfolio domain: holdings, allocations, performance history, summary.

pub mod allocation;
pub mod holdings;
pub mod performance;
pub mod summary;

pub use allocation::*;
pub use holdings::*;
pub use performance::*;
pub use summary::*;
