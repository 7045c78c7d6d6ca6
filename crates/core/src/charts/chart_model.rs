//! Renderer-neutral chart structures.
//!
//! These carry everything a renderer needs on the structure itself, so no
//! chart widget ever has to look values up in a parallel array or match
//! slices by label.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One observation of a line series.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SeriesPoint {
    pub x: NaiveDate,
    pub y: Decimal,
}

/// A labeled line series sharing the date axis with its siblings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NamedSeries {
    pub name: String,
    pub points: Vec<SeriesPoint>,
}

impl NamedSeries {
    /// Empty series under `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
        }
    }
}

/// One slice of a pie or donut chart.
///
/// The percentage rides on the slice itself, as a display percent in
/// `0..=100`. Tooltips read it from here directly instead of re-deriving
/// it by matching the slice label against the source rows, which falls
/// apart as soon as two categories share a name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PieSlice {
    pub label: String,
    pub value: Decimal,
    pub percentage: Decimal,
    /// Hex color assigned from the fixed palette by position
    pub color: String,
}
