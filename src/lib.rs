// Ticket Pricing Core
//
// Pure pricing logic for the ticketing platform. It manages three core
// capabilities:
// - Price tier resolution: pick the active time-bounded tier for a ticket
//   type, flag early-bird/premium pricing, and preview the next change
// - Discounts and order totals: apply percentage/fixed promo discounts
//   under clamping rules and compute totals with the platform commission
// - Promo code eligibility: decide whether a code may be applied at all
//
// Every operation is a pure function over an immutable snapshot: no I/O,
// no shared state, and the reference instant is an explicit parameter
// (the `*_now` helpers wrap the wall clock for live use). Persistence,
// HTTP handling, and form validation belong to the owning application.

pub mod discount;
pub mod error;
pub mod format;
pub mod promo;
pub mod tiers;
pub mod types;
pub mod validation;

// Re-export commonly used types for convenience
pub use discount::{
    default_commission_rate, DiscountEngine, OrderTotals, DEFAULT_COMMISSION_RATE_PERCENT,
};
pub use error::{PricingError, PricingResult};
pub use format::format_time_until_change;
pub use promo::{PromoCode, PromoEngine};
pub use tiers::{
    NextPriceChange, PriceQuote, PriceTier, TicketType, TierResolver,
    EARLY_BIRD_CUTOFF_DAYS, EARLY_BIRD_DISCOUNT_PERCENT, LAST_MINUTE_LEAD_DAYS,
    LAST_MINUTE_MARKUP_PERCENT,
};
pub use types::{round_to_minor_unit, Discount};
