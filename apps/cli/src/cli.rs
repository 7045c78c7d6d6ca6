//! Command-line surface of the terminal dashboard.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Terminal dashboard for a Folioview portfolio.
#[derive(Parser)]
#[command(name = "folioview", author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the dashboard API (overrides FOLIOVIEW_API_BASE_URL).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summary metrics, sector breakdown and one-year returns.
    Overview,
    /// The holdings table, filterable and sortable.
    Holdings(HoldingsArgs),
    /// Allocation breakdowns by sector and market cap.
    Allocations(AllocationsArgs),
    /// Performance history and trailing window returns.
    Performance(PerformanceArgs),
    /// Best and worst performers.
    Insights,
}

#[derive(Args)]
pub struct HoldingsArgs {
    /// Substring to match against symbol or company name (case-insensitive).
    #[arg(long)]
    pub query: Option<String>,

    /// Column to sort by (e.g. "value", "gain_loss_percent").
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending instead of ascending.
    #[arg(long, requires = "sort")]
    pub desc: bool,
}

#[derive(Args)]
pub struct AllocationsArgs {
    /// Which breakdown to show; both when omitted.
    #[arg(long, value_enum)]
    pub dimension: Option<DimensionArg>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DimensionArg {
    Sector,
    MarketCap,
}

#[derive(Args)]
pub struct PerformanceArgs {
    /// Trailing window for the returns line ("30d", "90d" or "1y").
    #[arg(long, default_value = "1y")]
    pub window: String,
}
