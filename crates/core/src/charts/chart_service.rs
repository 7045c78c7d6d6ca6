//! Builders that turn domain collections into chart series.
//!
//! One implementation per transform, shared by every view that charts the
//! data. Input order is preserved throughout; nothing here re-sorts.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::{DISPLAY_DECIMAL_PRECISION, GROWTH_BASELINE};
use crate::portfolio::{
    percentages_reconcile, AllocationDimension, AllocationSlice, PerformancePoint,
};

use super::palette::color_for;
use super::{NamedSeries, PieSlice, SeriesPoint};

/// Display name of the portfolio growth series.
pub const PORTFOLIO_SERIES: &str = "Portfolio";
/// Display name of the Nifty 50 benchmark series.
pub const NIFTY_50_SERIES: &str = "Nifty 50";
/// Display name of the gold benchmark series.
pub const GOLD_SERIES: &str = "Gold";

/// Growth-of-100 line series for the portfolio and both benchmarks.
///
/// Each cumulative return fraction `r` maps to the level `(1 + r) * 100`
/// on its own: 0.25 becomes 125, -0.5 becomes 50. The series all start at
/// the baseline because every cumulative series starts at 0, not because
/// anything is rebased to the displayed window.
///
/// Empty history yields three empty series with stable names, so legends
/// render the same whether or not data arrived.
pub fn normalized_growth(points: &[PerformancePoint]) -> Vec<NamedSeries> {
    let mut portfolio = NamedSeries::new(PORTFOLIO_SERIES);
    let mut nifty_50 = NamedSeries::new(NIFTY_50_SERIES);
    let mut gold = NamedSeries::new(GOLD_SERIES);

    for point in points {
        portfolio.points.push(SeriesPoint {
            x: point.date,
            y: growth_level(point.portfolio_return),
        });
        nifty_50.points.push(SeriesPoint {
            x: point.date,
            y: growth_level(point.nifty_50_return),
        });
        gold.points.push(SeriesPoint {
            x: point.date,
            y: growth_level(point.gold_return),
        });
    }

    vec![portfolio, nifty_50, gold]
}

/// Pie slices for one allocation breakdown.
///
/// Slices keep the input order and take their colors from the palette by
/// position. Percentages are converted from wire fractions to display
/// percents here, rounded for presentation, and carried on every slice.
pub fn pie_slices(slices: &[AllocationSlice], dimension: AllocationDimension) -> Vec<PieSlice> {
    // Logs a warning when the breakdown does not account for the whole
    // portfolio; the slices are still charted as-is.
    percentages_reconcile(slices, dimension);

    slices
        .iter()
        .enumerate()
        .map(|(i, slice)| PieSlice {
            label: slice.label.clone(),
            value: slice.value,
            percentage: (slice.percentage * dec!(100)).round_dp(DISPLAY_DECIMAL_PRECISION),
            color: color_for(i).to_string(),
        })
        .collect()
}

/// Level of an initial 100 units after a cumulative return of `r`.
fn growth_level(r: Decimal) -> Decimal {
    (Decimal::ONE + r) * GROWTH_BASELINE
}
