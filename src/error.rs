// Error types for the pricing core
//
// Price resolution and discount application are total functions and never
// fail; errors only arise for promo eligibility rejections and for invalid
// input to the default schedule generator.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the pricing core
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Promo code has been disabled by an organizer
    #[error("promo code is not active")]
    PromoInactive,

    /// Promo code validity window has not opened yet
    #[error("promo code is not valid before {valid_from}")]
    PromoNotStarted { valid_from: DateTime<Utc> },

    /// Promo code validity window has closed
    #[error("promo code expired at {valid_until}")]
    PromoExpired { valid_until: DateTime<Utc> },

    /// Promo code has been redeemed its maximum number of times
    #[error("promo code has reached its usage limit of {max_uses}")]
    PromoExhausted { max_uses: u32 },

    /// Order is too small for the promo code's minimum amount
    #[error("order amount {amount} is below the promo minimum of {minimum}")]
    OrderBelowMinimum { minimum: Decimal, amount: Decimal },

    /// A default tier schedule was requested for an event that already started
    #[error("event start {event_start} is not in the future")]
    EventAlreadyStarted { event_start: DateTime<Utc> },

    /// A default tier schedule was requested with a negative base price
    #[error("base price {price} is negative")]
    NegativeBasePrice { price: Decimal },
}

/// Result type alias for pricing operations
pub type PricingResult<T> = Result<T, PricingError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        assert_eq!(
            PricingError::PromoInactive.to_string(),
            "promo code is not active"
        );

        let error = PricingError::PromoExhausted { max_uses: 50 };
        assert_eq!(
            error.to_string(),
            "promo code has reached its usage limit of 50"
        );

        let error = PricingError::OrderBelowMinimum {
            minimum: dec!(1000),
            amount: dec!(750),
        };
        assert_eq!(
            error.to_string(),
            "order amount 750 is below the promo minimum of 1000"
        );
    }
}
