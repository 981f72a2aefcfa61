// Shared domain types for the pricing core
// Provides the discount descriptor and the money rounding policy

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discount applied to an order amount
///
/// Tagged variant so that the discount kind and its magnitude always travel
/// together; there is no way to construct a descriptor with an unknown kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Discount {
    /// Percentage of the amount (e.g., 10 = 10% off). Values above 100
    /// are treated as 100 at application time.
    Percentage(Decimal),

    /// Fixed amount subtracted from the price (e.g., 500 = 500 off)
    FixedAmount(Decimal),
}

impl Discount {
    /// The numeric magnitude carried by the descriptor
    pub fn value(&self) -> Decimal {
        match self {
            Discount::Percentage(value) => *value,
            Discount::FixedAmount(value) => *value,
        }
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discount::Percentage(value) => write!(f, "{}%", value),
            Discount::FixedAmount(value) => write!(f, "{}", value),
        }
    }
}

/// Round a monetary amount to the currency's minor unit (2 decimal places),
/// half-up away from zero. This is the single rounding policy of the crate;
/// repeated calls over the same input are bit-reproducible.
pub fn round_to_minor_unit(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
