//! Window return calculations over cumulative return history.
//!
//! One implementation serves every view that shows a period return; there
//! is no per-view variant of these formulas.

use chrono::Duration;
use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::DISPLAY_DECIMAL_PRECISION;

use super::{PerformancePoint, ReturnWindow, WindowReturns};

/// Return of one series over a window, from cumulative fractions.
///
/// `latest` and `anchor` are cumulative returns since inception; the result
/// is the percent change of the underlying level between the two
/// observations: `((1 + latest) / (1 + anchor) - 1) * 100`.
///
/// `None` when the anchor level is zero (cumulative -100%), where the
/// ratio is undefined.
pub fn window_return(latest: Decimal, anchor: Decimal) -> Option<Decimal> {
    let anchor_level = Decimal::ONE + anchor;
    if anchor_level.is_zero() {
        return None;
    }
    let latest_level = Decimal::ONE + latest;
    Some((latest_level / anchor_level - Decimal::ONE) * dec!(100))
}

/// Window returns for the portfolio and both benchmarks.
///
/// The anchor is the observation whose date lies closest to
/// `latest date - window`, measured in calendar days; when two observations
/// are equally close the earlier one wins. With fewer than two observations
/// there is nothing to anchor against and the whole result is `None` -
/// callers render that as "no data", not as an error.
///
/// `points` must be ascending by date (see [`normalize_history`]).
pub fn returns_over(points: &[PerformancePoint], window: ReturnWindow) -> Option<WindowReturns> {
    if points.len() < 2 {
        warn!(
            "Not enough performance history for a {} window ({} points)",
            window.label(),
            points.len()
        );
        return None;
    }

    let latest = &points[points.len() - 1];
    let target = latest.date - Duration::days(window.days());

    // Strict < keeps the first of equally distant observations.
    let mut anchor = &points[0];
    let mut best_distance = (anchor.date - target).num_days().abs();
    for point in &points[1..] {
        let distance = (point.date - target).num_days().abs();
        if distance < best_distance {
            best_distance = distance;
            anchor = point;
        }
    }

    debug!(
        "{} window anchored at {} for target {}",
        window.label(),
        anchor.date,
        target
    );

    Some(WindowReturns {
        portfolio: rounded_return(latest.portfolio_return, anchor.portfolio_return),
        nifty_50: rounded_return(latest.nifty_50_return, anchor.nifty_50_return),
        gold: rounded_return(latest.gold_return, anchor.gold_return),
    })
}

/// Sorts history ascending by date and collapses duplicate dates, keeping
/// the row that arrived last for each date.
///
/// Calculators and chart builders assume ascending, date-unique input;
/// this is the single place that establishes it.
pub fn normalize_history(mut points: Vec<PerformancePoint>) -> Vec<PerformancePoint> {
    // Stable sort: rows sharing a date keep their arrival order, so the
    // later arrival ends up last within its date run.
    points.sort_by_key(|p| p.date);

    let mut normalized: Vec<PerformancePoint> = Vec::with_capacity(points.len());
    for point in points {
        match normalized.last_mut() {
            Some(last) if last.date == point.date => {
                debug!("Duplicate performance row for {}, keeping the later one", point.date);
                *last = point;
            }
            _ => normalized.push(point),
        }
    }
    normalized
}

fn rounded_return(latest: Decimal, anchor: Decimal) -> Option<Decimal> {
    window_return(latest, anchor).map(|r| r.round_dp(DISPLAY_DECIMAL_PRECISION))
}
