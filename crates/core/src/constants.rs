use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Allowed drift when allocation percentage fractions are summed against 1
pub const PERCENTAGE_SUM_TOLERANCE: Decimal = dec!(0.01);

/// Baseline level that normalized growth series are indexed to
pub const GROWTH_BASELINE: Decimal = dec!(100);
