//! Tests for the holdings view model.

#[cfg(test)]
mod tests {
    use crate::portfolio::holdings::Holding;
    use rust_decimal_macros::dec;

    fn sample_holding() -> Holding {
        Holding {
            symbol: "INFY".to_string(),
            company_name: "Infosys".to_string(),
            quantity: dec!(10),
            avg_price: dec!(1400.50),
            current_price: dec!(1500),
            sector: "Information Technology".to_string(),
            market_cap: "Large Cap".to_string(),
            exchange: "NSE".to_string(),
            value: dec!(15000),
            gain_loss: dec!(995),
            gain_loss_percent: dec!(7.1),
        }
    }

    // ==================== Serialization Tests ====================

    #[test]
    fn test_holding_serializes_camel_case() {
        let json = serde_json::to_value(sample_holding()).unwrap();

        assert!(json.get("companyName").is_some());
        assert!(json.get("avgPrice").is_some());
        assert!(json.get("marketCap").is_some());
        assert!(json.get("gainLossPercent").is_some());
        assert!(json.get("company_name").is_none());
    }

    #[test]
    fn test_holding_round_trips() {
        let holding = sample_holding();
        let json = serde_json::to_string(&holding).unwrap();
        let back: Holding = serde_json::from_str(&json).unwrap();
        assert_eq!(back, holding);
    }
}
