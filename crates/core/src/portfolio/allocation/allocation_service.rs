//! Consistency checks for allocation breakdowns.

use log::warn;
use rust_decimal::Decimal;

use crate::constants::PERCENTAGE_SUM_TOLERANCE;

use super::{AllocationDimension, AllocationSlice};

/// Checks that the slice percentages of a complete breakdown sum to 1.
///
/// Backend percentages are fractions of the whole portfolio, so a full
/// breakdown should account for everything. Drift beyond the tolerance
/// means buckets were dropped upstream or rounded too aggressively; the
/// data is still used, this only logs a warning and reports the outcome.
///
/// An empty breakdown reconciles trivially.
pub fn percentages_reconcile(slices: &[AllocationSlice], dimension: AllocationDimension) -> bool {
    if slices.is_empty() {
        return true;
    }

    let sum: Decimal = slices.iter().map(|s| s.percentage).sum();
    let drift = (sum - Decimal::ONE).abs();
    if drift > PERCENTAGE_SUM_TOLERANCE {
        warn!(
            "{} allocation percentages sum to {} (drift {} exceeds tolerance)",
            dimension.label(),
            sum,
            drift
        );
        return false;
    }
    true
}

/// Total value across all buckets of a breakdown.
pub fn total_value(slices: &[AllocationSlice]) -> Decimal {
    slices.iter().map(|s| s.value).sum()
}
