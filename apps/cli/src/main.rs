mod cli;
mod config;
mod render;

use std::str::FromStr;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use folioview_api_client::PortfolioApiClient;
use folioview_core::dashboard::{ApiDataSource, DashboardService, Fetchable};
use folioview_core::portfolio::{
    HoldingColumn, ReturnWindow, SortDirection, SortState,
};

use cli::{AllocationsArgs, Cli, Commands, DimensionArg, HoldingsArgs, PerformanceArgs};
use config::ClientConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ClientConfig::from_env();
    init_tracing(&config.log_format);

    let args = Cli::parse();

    if let Some(token) = &config.token {
        folioview_api_client::set_token(token);
    }

    let base_url = args.base_url.unwrap_or(config.base_url);
    tracing::debug!("Using API base URL {}", base_url);
    let client = PortfolioApiClient::new(base_url.as_str())?;
    let service = DashboardService::new(Arc::new(ApiDataSource::new(client)));

    match args.command {
        Commands::Overview => overview(&service).await,
        Commands::Holdings(args) => holdings(&service, args).await,
        Commands::Allocations(args) => allocations(&service, args).await,
        Commands::Performance(args) => performance(&service, args).await,
        Commands::Insights => insights(&service).await,
    }
}

fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }
}

/// Unwraps a finished view load; a failed view exits nonzero with the
/// fetch's message.
fn view<T>(state: Fetchable<T>) -> anyhow::Result<T> {
    match state {
        Fetchable::Ready(data) => Ok(data),
        Fetchable::Error(message) => anyhow::bail!(message),
        Fetchable::Loading => anyhow::bail!("view never finished loading"),
    }
}

async fn overview(service: &DashboardService<ApiDataSource>) -> anyhow::Result<()> {
    let data = view(service.load_overview().await)?;
    render::print_summary(&data.summary);
    render::print_allocation("Sector allocation", &data.sector_slices);
    render::print_window_returns(data.window, data.window_returns.as_ref());
    Ok(())
}

async fn holdings(
    service: &DashboardService<ApiDataSource>,
    args: HoldingsArgs,
) -> anyhow::Result<()> {
    // Resolve the sort key before fetching anything: a typo'd column
    // should fail immediately, not after a network round trip.
    let sort = args
        .sort
        .as_deref()
        .map(HoldingColumn::from_str)
        .transpose()?
        .map(|column| SortState {
            column,
            direction: if args.desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            },
        });

    let data = view(service.load_holdings().await)?;
    let rows = data.visible_rows(args.query.as_deref().unwrap_or(""), sort);
    render::print_holdings(&rows);
    Ok(())
}

async fn allocations(
    service: &DashboardService<ApiDataSource>,
    args: AllocationsArgs,
) -> anyhow::Result<()> {
    let data = view(service.load_allocations().await)?;

    let dimension = args.dimension;
    if dimension != Some(DimensionArg::MarketCap) {
        render::print_allocation("Sector allocation", &data.sector_slices);
    }
    if dimension != Some(DimensionArg::Sector) {
        render::print_allocation("Market-cap allocation", &data.market_cap_slices);
    }
    Ok(())
}

async fn performance(
    service: &DashboardService<ApiDataSource>,
    args: PerformanceArgs,
) -> anyhow::Result<()> {
    let window = ReturnWindow::from_str(&args.window)?;

    let data = view(service.load_performance().await)?;
    render::print_growth(&data.growth);
    render::print_window_returns(window, data.returns_for(window).as_ref());
    Ok(())
}

async fn insights(service: &DashboardService<ApiDataSource>) -> anyhow::Result<()> {
    let data = view(service.load_insights().await)?;
    render::print_summary(&data.summary);
    render::print_performers(data.top.as_ref());
    Ok(())
}
