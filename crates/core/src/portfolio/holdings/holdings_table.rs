//! Sort and filter engine for the holdings table.
//!
//! The engine is stateless: the consumer keeps the source rows and the
//! current [`SortState`], and every render recomputes the visible rows from
//! scratch with [`visible_holdings`]. Derived rows are never mutated in
//! place across interactions.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, ValidationError};

use super::Holding;

/// Sortable columns of the holdings table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HoldingColumn {
    Symbol,
    CompanyName,
    Quantity,
    AvgPrice,
    CurrentPrice,
    Sector,
    MarketCap,
    Exchange,
    Value,
    GainLoss,
    GainLossPercent,
}

impl FromStr for HoldingColumn {
    type Err = Error;

    /// Parses the column keys used by views and the wire.
    ///
    /// Unknown keys are an error: a typo'd key silently sorting nothing
    /// is much harder to notice than one that fails.
    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "symbol" => Ok(Self::Symbol),
            "company_name" => Ok(Self::CompanyName),
            "quantity" => Ok(Self::Quantity),
            "avg_price" => Ok(Self::AvgPrice),
            "current_price" => Ok(Self::CurrentPrice),
            "sector" => Ok(Self::Sector),
            "market_cap" => Ok(Self::MarketCap),
            "exchange" => Ok(Self::Exchange),
            "value" => Ok(Self::Value),
            "gain_loss" => Ok(Self::GainLoss),
            "gain_loss_percent" => Ok(Self::GainLossPercent),
            other => Err(ValidationError::UnknownSortKey(other.to_string()).into()),
        }
    }
}

/// Sort direction for a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// The active sort selection of a holdings table.
///
/// Owned by the consumer across interactions; the engine only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortState {
    pub column: HoldingColumn,
    pub direction: SortDirection,
}

impl SortState {
    /// Fresh ascending sort on `column`.
    pub fn new(column: HoldingColumn) -> Self {
        Self {
            column,
            direction: SortDirection::Ascending,
        }
    }

    /// The state after the user selects `column`: re-selecting the active
    /// column flips the direction, selecting a new column starts ascending.
    pub fn select(self, column: HoldingColumn) -> Self {
        if self.column == column {
            Self {
                column,
                direction: self.direction.toggle(),
            }
        } else {
            Self::new(column)
        }
    }
}

/// Case-insensitive substring filter over symbol and company name.
///
/// A blank or whitespace-only query keeps every row.
pub fn filter_holdings(rows: &[Holding], query: &str) -> Vec<Holding> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }

    rows.iter()
        .filter(|h| {
            h.symbol.to_lowercase().contains(&needle)
                || h.company_name.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Sorts rows in place by `column`.
///
/// The underlying sort is stable, so rows with equal keys keep their
/// relative order; sorting an already sorted slice changes nothing.
pub fn sort_holdings(rows: &mut [Holding], column: HoldingColumn, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ordering = compare_by_column(a, b, column);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Filter then sort: the visible rows for one render of the table.
pub fn visible_holdings(rows: &[Holding], query: &str, sort: Option<SortState>) -> Vec<Holding> {
    let mut visible = filter_holdings(rows, query);
    if let Some(state) = sort {
        sort_holdings(&mut visible, state.column, state.direction);
    }
    visible
}

fn compare_by_column(a: &Holding, b: &Holding, column: HoldingColumn) -> Ordering {
    match column {
        HoldingColumn::Symbol => compare_text(&a.symbol, &b.symbol),
        HoldingColumn::CompanyName => compare_text(&a.company_name, &b.company_name),
        HoldingColumn::Quantity => a.quantity.cmp(&b.quantity),
        HoldingColumn::AvgPrice => a.avg_price.cmp(&b.avg_price),
        HoldingColumn::CurrentPrice => a.current_price.cmp(&b.current_price),
        HoldingColumn::Sector => compare_text(&a.sector, &b.sector),
        HoldingColumn::MarketCap => compare_text(&a.market_cap, &b.market_cap),
        HoldingColumn::Exchange => compare_text(&a.exchange, &b.exchange),
        HoldingColumn::Value => a.value.cmp(&b.value),
        HoldingColumn::GainLoss => a.gain_loss.cmp(&b.gain_loss),
        HoldingColumn::GainLossPercent => a.gain_loss_percent.cmp(&b.gain_loss_percent),
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
