// Discount Engine
//
// Applies promo discounts to order amounts and computes order totals with
// the platform commission. All operations are total: out-of-range numeric
// input is handled by clamping or pass-through, never by failing.

use crate::types::{round_to_minor_unit, Discount};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Platform commission charged on paid orders, as a percentage
pub const DEFAULT_COMMISSION_RATE_PERCENT: u32 = 6;

/// The platform commission as a fractional rate (0.06)
pub fn default_commission_rate() -> Decimal {
    Decimal::new(DEFAULT_COMMISSION_RATE_PERCENT as i64, 2)
}

/// Amount breakdown for an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub base_amount: Decimal,
    pub commission_amount: Decimal,
    pub total_amount: Decimal,
}

impl OrderTotals {
    fn zero() -> Self {
        Self {
            base_amount: Decimal::ZERO,
            commission_amount: Decimal::ZERO,
            total_amount: Decimal::ZERO,
        }
    }
}

/// Discount Engine
///
/// Pure numeric rules for discount application and order totals.
pub struct DiscountEngine;

impl DiscountEngine {
    /// Apply a discount to an order amount
    ///
    /// Negative amounts and negative discount values are passed through
    /// unchanged: they are already-invalid upstream data, and discounting
    /// them further would compound the error. For non-negative input the
    /// result always lands in `[0, original_amount]`:
    /// - percentages above 100 count as 100
    /// - fixed amounts larger than the order clamp the result to zero
    pub fn apply_discount(original_amount: Decimal, discount: &Discount) -> Decimal {
        if original_amount < Decimal::ZERO || discount.value() < Decimal::ZERO {
            return original_amount;
        }

        let discounted = match discount {
            Discount::Percentage(value) => {
                let clamped = if *value > Decimal::ONE_HUNDRED {
                    tracing::debug!(%value, "percentage discount above 100, clamping");
                    Decimal::ONE_HUNDRED
                } else {
                    *value
                };
                original_amount - original_amount * clamped / Decimal::ONE_HUNDRED
            }
            Discount::FixedAmount(value) => original_amount - *value,
        };

        discounted.max(Decimal::ZERO)
    }

    /// Compute the payable breakdown for an order
    ///
    /// `base_amount = base_price * quantity`; the commission is
    /// `base_amount * commission_rate` rounded half-up to the currency's
    /// minor unit, so repeated calls are bit-reproducible. Free events
    /// (`base_price == 0`) short-circuit to all-zero amounts regardless of
    /// the commission rate.
    pub fn order_total(
        base_price: Decimal,
        quantity: u32,
        commission_rate: Decimal,
    ) -> OrderTotals {
        if base_price.is_zero() {
            return OrderTotals::zero();
        }

        let base_amount = base_price * Decimal::from(quantity);
        let commission_amount = round_to_minor_unit(base_amount * commission_rate);

        OrderTotals {
            base_amount,
            commission_amount,
            total_amount: base_amount + commission_amount,
        }
    }
}
