// Promo Code Eligibility
//
// Decides whether a promo code may be applied to an order and, when it may,
// delegates the numeric discount to the discount engine. The engine only
// reads immutable snapshots; recording redemptions is the caller's concern.

use crate::discount::DiscountEngine;
use crate::error::{PricingError, PricingResult};
use crate::types::Discount;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Snapshot of a promotional code
///
/// `valid_until` is an inclusive bound, like a price tier's `end_date`.
/// `use_count` reflects redemptions recorded so far by the owning
/// application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromoCode {
    pub id: Uuid,
    pub code: String,
    pub discount: Discount,
    pub is_active: bool,
    pub valid_from: DateTime<Utc>,
    pub valid_until: Option<DateTime<Utc>>,
    pub max_uses: Option<u32>,
    pub use_count: u32,
    pub min_order_amount: Option<Decimal>,
}

/// Promo Engine
///
/// Eligibility rules for promo codes over order amounts.
pub struct PromoEngine;

impl PromoEngine {
    /// Check whether a promo code may be applied to an order
    ///
    /// Rejections, in evaluation order: code disabled, validity window not
    /// yet open, validity window closed, usage limit reached, order below
    /// the code's minimum amount.
    pub fn check(
        promo: &PromoCode,
        order_amount: Decimal,
        now: DateTime<Utc>,
    ) -> PricingResult<()> {
        if !promo.is_active {
            return Err(PricingError::PromoInactive);
        }
        if now < promo.valid_from {
            return Err(PricingError::PromoNotStarted {
                valid_from: promo.valid_from,
            });
        }
        if let Some(valid_until) = promo.valid_until {
            if now > valid_until {
                return Err(PricingError::PromoExpired { valid_until });
            }
        }
        if let Some(max_uses) = promo.max_uses {
            if promo.use_count >= max_uses {
                return Err(PricingError::PromoExhausted { max_uses });
            }
        }
        if let Some(minimum) = promo.min_order_amount {
            if order_amount < minimum {
                return Err(PricingError::OrderBelowMinimum {
                    minimum,
                    amount: order_amount,
                });
            }
        }
        Ok(())
    }

    /// Apply an eligible promo code to an order amount
    pub fn apply(
        promo: &PromoCode,
        order_amount: Decimal,
        now: DateTime<Utc>,
    ) -> PricingResult<Decimal> {
        Self::check(promo, order_amount, now)?;
        tracing::debug!(code = %promo.code, %order_amount, "applying promo code");
        Ok(DiscountEngine::apply_discount(order_amount, &promo.discount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rust_decimal_macros::dec;

    fn reference_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    fn promo(discount: Discount) -> PromoCode {
        let now = reference_time();
        PromoCode {
            id: Uuid::new_v4(),
            code: "VERANO25".to_string(),
            discount,
            is_active: true,
            valid_from: now - Duration::days(7),
            valid_until: Some(now + Duration::days(7)),
            max_uses: Some(100),
            use_count: 10,
            min_order_amount: None,
        }
    }

    #[test]
    fn test_eligible_promo_applies_discount() {
        let promo = promo(Discount::Percentage(dec!(25)));
        let result = PromoEngine::apply(&promo, dec!(1000), reference_time()).unwrap();
        assert_eq!(result, dec!(750));
    }

    #[test]
    fn test_inactive_promo_is_rejected() {
        let mut promo = promo(Discount::Percentage(dec!(25)));
        promo.is_active = false;
        assert_eq!(
            PromoEngine::check(&promo, dec!(1000), reference_time()),
            Err(PricingError::PromoInactive)
        );
    }

    #[test]
    fn test_promo_before_window_is_rejected() {
        let now = reference_time();
        let mut promo = promo(Discount::Percentage(dec!(25)));
        promo.valid_from = now + Duration::days(1);
        assert_eq!(
            PromoEngine::check(&promo, dec!(1000), now),
            Err(PricingError::PromoNotStarted {
                valid_from: promo.valid_from
            })
        );
    }

    #[test]
    fn test_expired_promo_is_rejected() {
        let now = reference_time();
        let mut promo = promo(Discount::Percentage(dec!(25)));
        promo.valid_until = Some(now - Duration::days(1));
        assert_eq!(
            PromoEngine::check(&promo, dec!(1000), now),
            Err(PricingError::PromoExpired {
                valid_until: now - Duration::days(1)
            })
        );
    }

    #[test]
    fn test_valid_until_bound_is_inclusive() {
        let now = reference_time();
        let mut promo = promo(Discount::Percentage(dec!(25)));
        promo.valid_until = Some(now);
        assert!(PromoEngine::check(&promo, dec!(1000), now).is_ok());
    }

    #[test]
    fn test_exhausted_promo_is_rejected() {
        let mut promo = promo(Discount::FixedAmount(dec!(200)));
        promo.max_uses = Some(10);
        promo.use_count = 10;
        assert_eq!(
            PromoEngine::check(&promo, dec!(1000), reference_time()),
            Err(PricingError::PromoExhausted { max_uses: 10 })
        );
    }

    #[test]
    fn test_unlimited_promo_ignores_use_count() {
        let mut promo = promo(Discount::FixedAmount(dec!(200)));
        promo.max_uses = None;
        promo.use_count = 100_000;
        assert!(PromoEngine::check(&promo, dec!(1000), reference_time()).is_ok());
    }

    #[test]
    fn test_order_below_minimum_is_rejected() {
        let mut promo = promo(Discount::Percentage(dec!(25)));
        promo.min_order_amount = Some(dec!(1000));
        assert_eq!(
            PromoEngine::check(&promo, dec!(750), reference_time()),
            Err(PricingError::OrderBelowMinimum {
                minimum: dec!(1000),
                amount: dec!(750)
            })
        );
        assert!(PromoEngine::check(&promo, dec!(1000), reference_time()).is_ok());
    }
}
