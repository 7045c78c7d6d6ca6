//! Table rendering for the terminal.

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use folioview_core::charts::{NamedSeries, PieSlice};
use folioview_core::portfolio::{
    Holding, ReturnWindow, SummaryMetrics, TopPerformers, WindowReturns,
};

const NO_DATA: &str = "no data available";

fn base_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers);
    table
}

fn number_cell(value: impl ToString) -> Cell {
    Cell::new(value.to_string()).set_alignment(CellAlignment::Right)
}

pub fn print_summary(summary: &SummaryMetrics) {
    let mut table = base_table(vec!["Metric", "Value"]);
    table.add_row(vec![Cell::new("Total value"), number_cell(summary.total_value)]);
    table.add_row(vec![
        Cell::new("Total invested"),
        number_cell(summary.total_invested),
    ]);
    table.add_row(vec![
        Cell::new("Total gain/loss"),
        number_cell(format!(
            "{} ({}%)",
            summary.total_gain_loss, summary.total_gain_loss_percent
        )),
    ]);
    table.add_row(vec![
        Cell::new("Holdings"),
        number_cell(summary.number_of_holdings),
    ]);
    table.add_row(vec![
        Cell::new("Diversification score"),
        number_cell(summary.diversification_score),
    ]);
    table.add_row(vec![Cell::new("Risk level"), Cell::new(summary.risk_level.to_string())]);
    println!("{table}");
}

pub fn print_holdings(rows: &[Holding]) {
    if rows.is_empty() {
        println!("No holdings match.");
        return;
    }

    let mut table = base_table(vec![
        "Symbol", "Company", "Qty", "Avg Price", "Price", "Sector", "Mkt Cap", "Exchange",
        "Value", "Gain/Loss", "Gain %",
    ]);
    for h in rows {
        table.add_row(vec![
            Cell::new(&h.symbol),
            Cell::new(&h.company_name),
            number_cell(h.quantity),
            number_cell(h.avg_price),
            number_cell(h.current_price),
            Cell::new(&h.sector),
            Cell::new(&h.market_cap),
            Cell::new(&h.exchange),
            number_cell(h.value),
            number_cell(h.gain_loss),
            number_cell(format!("{}%", h.gain_loss_percent)),
        ]);
    }
    println!("{table}");
}

pub fn print_allocation(title: &str, slices: &[PieSlice]) {
    println!("{title}");
    if slices.is_empty() {
        println!("  {NO_DATA}");
        return;
    }

    let mut table = base_table(vec!["Category", "Value", "Share"]);
    for slice in slices {
        table.add_row(vec![
            Cell::new(&slice.label),
            number_cell(slice.value),
            number_cell(format!("{}%", slice.percentage)),
        ]);
    }
    println!("{table}");
}

pub fn print_window_returns(window: ReturnWindow, returns: Option<&WindowReturns>) {
    let Some(returns) = returns else {
        println!("{} returns: {NO_DATA}", window.label());
        return;
    };

    let fmt = |r: Option<rust_decimal::Decimal>| match r {
        Some(value) => format!("{value}%"),
        None => NO_DATA.to_string(),
    };
    println!(
        "{} returns — portfolio: {}  nifty 50: {}  gold: {}",
        window.label(),
        fmt(returns.portfolio),
        fmt(returns.nifty_50),
        fmt(returns.gold),
    );
}

/// Growth-of-100 history as one row per date.
///
/// The series share the date axis, so the first series drives the rows and
/// the rest are read by position.
pub fn print_growth(series: &[NamedSeries]) {
    let Some(first) = series.first() else {
        println!("{NO_DATA}");
        return;
    };
    if first.points.is_empty() {
        println!("{NO_DATA}");
        return;
    }

    let mut headers = vec!["Date".to_string()];
    headers.extend(series.iter().map(|s| s.name.clone()));
    let mut table = base_table(headers.iter().map(String::as_str).collect());

    for (i, point) in first.points.iter().enumerate() {
        let mut row = vec![Cell::new(point.x.to_string())];
        for s in series {
            row.push(number_cell(s.points[i].y.round_dp(2)));
        }
        table.add_row(row);
    }
    println!("{table}");
}

pub fn print_performers(top: Option<&TopPerformers>) {
    let Some(top) = top else {
        println!("Top performers: {NO_DATA}");
        return;
    };

    let mut table = base_table(vec!["", "Symbol", "Company", "Gain %"]);
    for (tag, p) in [("Best", &top.best), ("Worst", &top.worst)] {
        table.add_row(vec![
            Cell::new(tag),
            Cell::new(&p.symbol),
            Cell::new(&p.name),
            number_cell(format!("{}%", p.gain_percent)),
        ]);
    }
    println!("{table}");
}
