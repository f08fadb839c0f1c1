//! Core data types and enums for fare data.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::models::traits::Station;

/// Monetary amount. Exact base-10 arithmetic, no currency attached.
pub type Money = Decimal;

// ============================================================================
// Enums
// ============================================================================

/// Whether a card currently has an open trip
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JourneyState {
    Idle,
    Traveling,
}

/// The spending windows a trip can be capped by, in the order they are applied
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CapKind {
    Day,
    Week,
    Month,
}

impl CapKind {
    pub const ORDERED: [CapKind; 3] = [CapKind::Day, CapKind::Week, CapKind::Month];
}

impl fmt::Display for CapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CapKind::Day => "day",
            CapKind::Week => "week",
            CapKind::Month => "month",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Data Structures
// ============================================================================

/// A completed, priced movement between two stations
///
/// Trips are only produced by ending a journey (or by seeding a card's
/// history) and never change afterwards.
#[derive(Clone)]
pub struct Trip {
    date: NaiveDateTime,
    from: Arc<dyn Station>,
    to: Arc<dyn Station>,
    cost: Money,
}

impl Trip {
    pub fn new(
        date: NaiveDateTime,
        from: Arc<dyn Station>,
        to: Arc<dyn Station>,
        cost: Money,
    ) -> Self {
        Self { date, from, to, cost }
    }

    /// Moment the trip was completed
    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    pub fn from(&self) -> &Arc<dyn Station> {
        &self.from
    }

    pub fn to(&self) -> &Arc<dyn Station> {
        &self.to
    }

    pub fn cost(&self) -> Money {
        self.cost
    }
}

impl PartialEq for Trip {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
            && self.from.id() == other.from.id()
            && self.to.id() == other.to.id()
            && self.cost == other.cost
    }
}

impl fmt::Debug for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trip")
            .field("date", &self.date)
            .field("from", &self.from.id())
            .field("to", &self.to.id())
            .field("cost", &self.cost)
            .finish()
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FareError {
    /// A required value was missing or malformed at a boundary
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// The card is in a state that forbids the requested action
    #[error("Invalid operation: {0}")]
    InvalidOperation(&'static str),
}

impl FareError {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FareError>;
