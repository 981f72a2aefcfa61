// Price Tier Resolution
//
// Resolves the currently active price tier for a ticket type at a point in
// time, previews the next scheduled price change, and generates the default
// tier schedule used when an organizer has configured no custom tiers.
//
// All operations take the reference instant as an explicit parameter; the
// `*_now` variants are thin wrappers over the wall clock for live use.

use crate::error::{PricingError, PricingResult};
use crate::types::round_to_minor_unit;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Percentage knocked off the base price during the early-bird window
pub const EARLY_BIRD_DISCOUNT_PERCENT: u32 = 20;

/// Markup over the base price during the last-minute window
pub const LAST_MINUTE_MARKUP_PERCENT: u32 = 25;

/// Early-bird sales stop this many days before the event starts
pub const EARLY_BIRD_CUTOFF_DAYS: i64 = 30;

/// The last-minute window covers this many final days before the event
pub const LAST_MINUTE_LEAD_DAYS: i64 = 7;

/// Time-bounded price override for a ticket type
///
/// Both date bounds are inclusive; an absent `end_date` means the tier stays
/// active until superseded or until the event ends. Inactive tiers are never
/// selected regardless of their dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTier {
    pub id: Uuid,
    pub ticket_type_id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub currency: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub is_active: bool,
}

impl PriceTier {
    /// Whether this tier is selectable at the given instant
    pub fn is_current_at(&self, now: DateTime<Utc>) -> bool {
        self.is_active
            && self.start_date <= now
            && self.end_date.map_or(true, |end| end >= now)
    }
}

/// Immutable pricing snapshot of a purchasable ticket category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketType {
    pub id: Uuid,
    pub name: String,
    pub base_price: Decimal,
    pub currency: String,
    pub price_tiers: Vec<PriceTier>,
}

/// Resolved price for a ticket type at a point in time
///
/// `tier_name` is absent when no tier matched and the base price applies.
/// `is_early_bird` and `is_premium` are mutually exclusive since they compare
/// a single resolved price against the base price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceQuote {
    pub price: Decimal,
    pub tier_name: Option<String>,
    pub is_early_bird: bool,
    pub is_premium: bool,
}

/// The soonest upcoming price change for a ticket type
#[derive(Debug, Clone)]
pub struct NextPriceChange {
    pub tier: PriceTier,
    pub time_until: Duration,
}

/// Price Tier Resolver
///
/// Pure functions over immutable tier snapshots; never mutates its inputs
/// and always produces a result.
pub struct TierResolver;

impl TierResolver {
    /// Resolve the price of a ticket type at the given instant
    ///
    /// Selection:
    /// 1. Keep tiers that are active and whose window contains `now`.
    /// 2. No match: the ticket type's base price applies.
    /// 3. Several matches (overlapping windows): the most recently started
    ///    tier wins; equal starts are broken by smallest id so the outcome
    ///    stays deterministic.
    pub fn resolve_at(ticket_type: &TicketType, now: DateTime<Utc>) -> PriceQuote {
        let current: Vec<&PriceTier> = ticket_type
            .price_tiers
            .iter()
            .filter(|tier| tier.is_current_at(now))
            .collect();

        if current.len() > 1 {
            tracing::debug!(
                ticket_type = %ticket_type.id,
                matches = current.len(),
                "overlapping active tiers, most recent start wins"
            );
        }

        let selected = current.into_iter().max_by(|a, b| {
            a.start_date
                .cmp(&b.start_date)
                .then_with(|| b.id.cmp(&a.id))
        });

        match selected {
            None => PriceQuote {
                price: ticket_type.base_price,
                tier_name: None,
                is_early_bird: false,
                is_premium: false,
            },
            Some(tier) => PriceQuote {
                price: tier.price,
                tier_name: Some(tier.name.clone()),
                is_early_bird: tier.price < ticket_type.base_price,
                is_premium: tier.price > ticket_type.base_price,
            },
        }
    }

    /// Resolve the price of a ticket type against the wall clock
    pub fn resolve_now(ticket_type: &TicketType) -> PriceQuote {
        Self::resolve_at(ticket_type, Utc::now())
    }

    /// Find the soonest tier that starts after the given instant
    ///
    /// Only active tiers are considered. Returns `None` when every tier has
    /// already started.
    pub fn next_change_at(
        ticket_type: &TicketType,
        now: DateTime<Utc>,
    ) -> Option<NextPriceChange> {
        let next = ticket_type
            .price_tiers
            .iter()
            .filter(|tier| tier.is_active && tier.start_date > now)
            .min_by(|a, b| {
                a.start_date
                    .cmp(&b.start_date)
                    .then_with(|| a.id.cmp(&b.id))
            })?;

        Some(NextPriceChange {
            tier: next.clone(),
            time_until: next.start_date - now,
        })
    }

    /// Find the soonest upcoming price change against the wall clock
    pub fn next_change_now(ticket_type: &TicketType) -> Option<NextPriceChange> {
        Self::next_change_at(ticket_type, Utc::now())
    }

    /// Generate the default tier schedule for a ticket type
    ///
    /// Used to pre-populate the tier form when an organizer has configured
    /// nothing. Produces up to three consecutive windows anchored to the
    /// event start:
    /// - "Early Bird" at a discount, from `now` until
    ///   [`EARLY_BIRD_CUTOFF_DAYS`] before the event
    /// - "Regular" at the base price until [`LAST_MINUTE_LEAD_DAYS`] before
    ///   the event
    /// - "Last Minute" at a markup for the final days up to the event start
    ///
    /// Windows the timeline has already passed are omitted, so an event three
    /// days away gets a single "Last Minute" tier. The generated windows are
    /// chronologically ordered and strictly non-overlapping (each inclusive
    /// `end_date` sits one second before the next window opens).
    pub fn default_schedule(
        ticket_type_id: Uuid,
        base_price: Decimal,
        currency: &str,
        event_start: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> PricingResult<Vec<PriceTier>> {
        if event_start <= now {
            return Err(PricingError::EventAlreadyStarted { event_start });
        }
        if base_price < Decimal::ZERO {
            return Err(PricingError::NegativeBasePrice { price: base_price });
        }

        let early_bird_end = event_start - Duration::days(EARLY_BIRD_CUTOFF_DAYS);
        let last_minute_start = event_start - Duration::days(LAST_MINUTE_LEAD_DAYS);

        let early_bird_price = round_to_minor_unit(
            base_price * Decimal::from(100 - EARLY_BIRD_DISCOUNT_PERCENT) / Decimal::ONE_HUNDRED,
        );
        let last_minute_price = round_to_minor_unit(
            base_price * Decimal::from(100 + LAST_MINUTE_MARKUP_PERCENT) / Decimal::ONE_HUNDRED,
        );

        let mut tiers = Vec::new();
        let mut cursor = now;

        if early_bird_end > cursor {
            tiers.push(Self::schedule_tier(
                ticket_type_id,
                "Early Bird",
                early_bird_price,
                currency,
                cursor,
                early_bird_end - Duration::seconds(1),
            ));
            cursor = early_bird_end;
        }

        if last_minute_start > cursor {
            tiers.push(Self::schedule_tier(
                ticket_type_id,
                "Regular",
                base_price,
                currency,
                cursor,
                last_minute_start - Duration::seconds(1),
            ));
            cursor = last_minute_start;
        }

        tiers.push(Self::schedule_tier(
            ticket_type_id,
            "Last Minute",
            last_minute_price,
            currency,
            cursor,
            event_start,
        ));

        Ok(tiers)
    }

    fn schedule_tier(
        ticket_type_id: Uuid,
        name: &str,
        price: Decimal,
        currency: &str,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> PriceTier {
        PriceTier {
            id: Uuid::new_v4(),
            ticket_type_id,
            name: name.to_string(),
            price,
            currency: currency.to_string(),
            start_date,
            end_date: Some(end_date),
            is_active: true,
        }
    }
}
