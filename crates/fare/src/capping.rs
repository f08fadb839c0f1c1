//! Fare pricing and cap clamping.
//!
//! A trip is priced at the worse of its two zones, then clamped against
//! the remaining headroom under the day, week and month caps, in that
//! order. Each clamp works on the fare left over by the previous one.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use tracing::trace;

use crate::models::calendar::{MonthKey, WeekKey};
use crate::models::traits::Zone;
use crate::models::types::{CapKind, Money, Trip};

// ============================================================================
// Configuration
// ============================================================================

/// What to do when history already exceeds a cap and clamping goes below zero
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NegativeFarePolicy {
    /// Charge nothing instead of a negative amount
    #[default]
    FloorAtZero,
    /// Keep the negative amount as computed
    PassThrough,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CappingPolicy {
    pub negative_fares: NegativeFarePolicy,
}

impl CappingPolicy {
    pub fn pass_through() -> Self {
        Self {
            negative_fares: NegativeFarePolicy::PassThrough,
        }
    }
}

// ============================================================================
// Data Structures
// ============================================================================

/// Per-window amounts, one for each [`CapKind`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CapAmounts {
    pub day: Money,
    pub week: Money,
    pub month: Money,
}

impl CapAmounts {
    pub fn get(&self, kind: CapKind) -> Money {
        match kind {
            CapKind::Day => self.day,
            CapKind::Week => self.week,
            CapKind::Month => self.month,
        }
    }
}

/// Spending ceilings that apply to one trip
pub type CapLimits = CapAmounts;

/// Amounts already charged in the windows containing "now"
pub type SpentTotals = CapAmounts;

/// Outcome of pricing a single trip
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FareQuote {
    /// Single-journey price before any cap
    pub base: Money,
    /// Amount actually charged
    pub charged: Money,
    /// Last cap that lowered the fare, if any did
    pub capped_by: Option<CapKind>,
}

impl FareQuote {
    pub fn is_capped(&self) -> bool {
        self.capped_by.is_some()
    }
}

// ============================================================================
// History Summation
// ============================================================================

/// Spend totals over a card's trip history
pub trait TripHistory {
    fn spent_on_day(&self, date: NaiveDate) -> Money;
    fn spent_in_week(&self, week: WeekKey) -> Money;
    fn spent_in_month(&self, month: MonthKey) -> Money;

    /// Totals for the day, week and month that contain `now`
    fn spent_in_windows(&self, now: NaiveDateTime) -> SpentTotals {
        let today = now.date();
        SpentTotals {
            day: self.spent_on_day(today),
            week: self.spent_in_week(WeekKey::of(today)),
            month: self.spent_in_month(MonthKey::of(today)),
        }
    }
}

impl TripHistory for [Trip] {
    fn spent_on_day(&self, date: NaiveDate) -> Money {
        sum_where(self, |d| d == date)
    }

    fn spent_in_week(&self, week: WeekKey) -> Money {
        sum_where(self, |d| WeekKey::of(d) == week)
    }

    fn spent_in_month(&self, month: MonthKey) -> Money {
        sum_where(self, |d| MonthKey::of(d) == month)
    }
}

fn sum_where(trips: &[Trip], in_window: impl Fn(NaiveDate) -> bool) -> Money {
    trips
        .iter()
        .filter(|trip| in_window(trip.date().date()))
        .map(Trip::cost)
        .sum()
}

// ============================================================================
// Pricing
// ============================================================================

/// The more expensive zone of the pair sets the single-journey price
pub fn base_fare(from: &dyn Zone, to: &dyn Zone) -> Money {
    from.cost_per_single_journey()
        .max(to.cost_per_single_journey())
}

/// Each cap is the higher of the two zones' limits
pub fn applicable_limits(from: &dyn Zone, to: &dyn Zone) -> CapLimits {
    CapLimits {
        day: from.cost_per_day_limit().max(to.cost_per_day_limit()),
        week: from.cost_per_week_limit().max(to.cost_per_week_limit()),
        month: from.cost_per_month_limit().max(to.cost_per_month_limit()),
    }
}

/// Clamp `base` against each cap in turn, day then week then month
pub fn clamp(
    base: Money,
    limits: &CapLimits,
    spent: &SpentTotals,
    policy: &CappingPolicy,
) -> FareQuote {
    let mut charged = base;
    let mut capped_by = None;

    for kind in CapKind::ORDERED {
        let headroom = limits.get(kind) - spent.get(kind);
        if headroom < charged {
            trace!(cap = %kind, %headroom, fare = %charged, "cap lowers fare");
            charged = headroom;
            capped_by = Some(kind);
        }
    }

    if charged < Decimal::ZERO && policy.negative_fares == NegativeFarePolicy::FloorAtZero {
        charged = Decimal::ZERO;
    }

    FareQuote {
        base,
        charged,
        capped_by,
    }
}

/// Price a trip between two zones given the card's history up to `now`
pub fn price_trip(
    from: &dyn Zone,
    to: &dyn Zone,
    history: &[Trip],
    now: NaiveDateTime,
    policy: &CappingPolicy,
) -> FareQuote {
    let base = base_fare(from, to);
    let limits = applicable_limits(from, to);
    let spent = history.spent_in_windows(now);

    trace!(%base, ?limits, ?spent, "pricing trip");

    clamp(base, &limits, &spent, policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifiers::ZoneIdentifier;
    use crate::provider::zone::ZoneImpl;
    use rust_decimal_macros::dec;

    fn zone(single: Money, day: Money, week: Money, month: Money) -> ZoneImpl {
        ZoneImpl::new(ZoneIdentifier::new("z"), single, day, week, month).unwrap()
    }

    fn limits(day: Money, week: Money, month: Money) -> CapLimits {
        CapLimits { day, week, month }
    }

    #[test]
    fn test_base_fare_takes_more_expensive_zone() {
        let cheap = zone(dec!(2.5), dec!(10), dec!(40), dec!(100));
        let dear = zone(dec!(3), dec!(8), dec!(30), dec!(90));

        assert_eq!(base_fare(&cheap, &dear), dec!(3));
        assert_eq!(base_fare(&dear, &cheap), dec!(3));
    }

    #[test]
    fn test_limits_take_highest_per_kind() {
        let a = zone(dec!(2.5), dec!(10), dec!(30), dec!(100));
        let b = zone(dec!(3), dec!(8), dec!(40), dec!(90));

        assert_eq!(applicable_limits(&a, &b), limits(dec!(10), dec!(40), dec!(100)));
    }

    #[test]
    fn test_clamp_without_spend_keeps_base() {
        let quote = clamp(
            dec!(2.5),
            &limits(dec!(7), dec!(40), dec!(145)),
            &SpentTotals::default(),
            &CappingPolicy::default(),
        );

        assert_eq!(quote.charged, dec!(2.5));
        assert_eq!(quote.capped_by, None);
        assert!(!quote.is_capped());
    }

    #[test]
    fn test_clamp_day_cap() {
        let spent = SpentTotals {
            day: dec!(2.5),
            week: dec!(2.5),
            month: dec!(2.5),
        };
        let quote = clamp(
            dec!(2.5),
            &limits(dec!(4.5), dec!(40), dec!(145)),
            &spent,
            &CappingPolicy::default(),
        );

        assert_eq!(quote.base, dec!(2.5));
        assert_eq!(quote.charged, dec!(2.0));
        assert_eq!(quote.capped_by, Some(CapKind::Day));
    }

    #[test]
    fn test_clamp_uses_running_fare() {
        // Day leaves 2, week leaves 3: week must not raise the fare back up,
        // and month leaving 1 lowers the already-reduced fare again.
        let spent = SpentTotals {
            day: dec!(5),
            week: dec!(27),
            month: dec!(99),
        };
        let quote = clamp(
            dec!(4),
            &limits(dec!(7), dec!(30), dec!(100)),
            &spent,
            &CappingPolicy::default(),
        );

        assert_eq!(quote.charged, dec!(1));
        assert_eq!(quote.capped_by, Some(CapKind::Month));
    }

    #[test]
    fn test_clamp_exhausted_cap_charges_zero() {
        let spent = SpentTotals {
            day: dec!(4.5),
            week: dec!(4.5),
            month: dec!(4.5),
        };
        let quote = clamp(
            dec!(2.5),
            &limits(dec!(4.5), dec!(40), dec!(145)),
            &spent,
            &CappingPolicy::default(),
        );

        assert_eq!(quote.charged, Decimal::ZERO);
        assert_eq!(quote.capped_by, Some(CapKind::Day));
    }

    #[test]
    fn test_negative_fare_policy() {
        let spent = SpentTotals {
            day: dec!(8),
            week: dec!(8),
            month: dec!(8),
        };
        let caps = limits(dec!(4.5), dec!(40), dec!(145));

        let floored = clamp(dec!(2.5), &caps, &spent, &CappingPolicy::default());
        assert_eq!(floored.charged, Decimal::ZERO);

        let raw = clamp(dec!(2.5), &caps, &spent, &CappingPolicy::pass_through());
        assert_eq!(raw.charged, dec!(-3.5));
    }
}
