// Validation utilities module
// Provides custom validation functions for the tier-editing form boundary

use crate::tiers::PriceTier;
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::ValidationError;

/// Validates that a currency code is three ASCII uppercase letters
pub fn validate_currency_code(code: &str) -> Result<(), ValidationError> {
    if code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_currency_code"))
    }
}

/// Validates that a monetary amount is not negative
pub fn validate_non_negative_price(price: Decimal) -> Result<(), ValidationError> {
    if price < Decimal::ZERO {
        Err(ValidationError::new("price_must_be_non_negative"))
    } else {
        Ok(())
    }
}

/// Validates that a tier's end date, when present, does not precede its start
pub fn validate_tier_window(tier: &PriceTier) -> Result<(), ValidationError> {
    match tier.end_date {
        Some(end) if end < tier.start_date => Err(ValidationError::new("tier_window_inverted")),
        _ => Ok(()),
    }
}

/// Validates that a commission rate is a fraction between 0 and 1
pub fn validate_commission_rate(rate: Decimal) -> Result<(), ValidationError> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        Err(ValidationError::new("commission_rate_out_of_range"))
    } else {
        Ok(())
    }
}

/// Finds pairs of active tiers whose windows intersect
///
/// Overlaps are tolerated at resolution time (most recent start wins), so
/// this scan is advisory: the tier-editing form surfaces the returned pairs
/// as warnings rather than rejecting the configuration.
pub fn overlapping_tier_pairs(tiers: &[PriceTier]) -> Vec<(Uuid, Uuid)> {
    let mut pairs = Vec::new();
    for (i, a) in tiers.iter().enumerate() {
        if !a.is_active {
            continue;
        }
        for b in &tiers[i + 1..] {
            if b.is_active && windows_intersect(a, b) {
                pairs.push((a.id, b.id));
            }
        }
    }
    pairs
}

// Inclusive-bound interval intersection; an absent end is open-ended.
fn windows_intersect(a: &PriceTier, b: &PriceTier) -> bool {
    let a_reaches_b = a.end_date.map_or(true, |end| end >= b.start_date);
    let b_reaches_a = b.end_date.map_or(true, |end| end >= a.start_date);
    a_reaches_b && b_reaches_a
}
