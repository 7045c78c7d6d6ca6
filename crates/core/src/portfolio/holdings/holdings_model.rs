use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Position view model for the holdings table.
///
/// Every field is populated by the backend; there are no partially known
/// rows. Values are in the portfolio's base currency.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Exchange ticker (e.g. "INFY")
    pub symbol: String,
    /// Full company name, searched alongside the symbol
    pub company_name: String,
    pub quantity: Decimal,
    /// Average acquisition price per unit
    pub avg_price: Decimal,
    pub current_price: Decimal,
    /// Industry sector (e.g. "Financials")
    pub sector: String,
    /// Market capitalization band (e.g. "Large Cap")
    pub market_cap: String,
    /// Exchange the position trades on (e.g. "NSE")
    pub exchange: String,
    /// Market value of the position
    pub value: Decimal,
    pub gain_loss: Decimal,
    /// Gain or loss as a percent of cost
    pub gain_loss_percent: Decimal,
}
