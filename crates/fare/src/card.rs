//! The card: open-trip tracking, trip history and fare capping.
//!
//! A card is either idle or traveling. Swiping in at a station opens a
//! trip; swiping out closes it, prices it against the card's history and
//! appends it. Tapping out at the station the trip started from cancels
//! the trip without charging anything.
//!
//! A card is not synchronized internally. Callers serialize access to a
//! given card.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::capping::{price_trip, CappingPolicy, FareQuote, NegativeFarePolicy, TripHistory};
use crate::identifiers::CardIdentifier;
use crate::models::calendar::{MonthKey, WeekKey};
use crate::models::{traits::*, types::*};

const ALREADY_UNDERWAY: &str = "A journey is already underway";
const NOT_UNDERWAY: &str = "No journey currently underway";

pub struct Card {
    id: CardIdentifier,
    clock: Arc<dyn Clock>,
    policy: CappingPolicy,
    open_trip_origin: Option<Arc<dyn Station>>,
    history: Vec<Trip>,
}

impl Card {
    /// An idle card with no history and the default capping policy
    pub fn new(id: CardIdentifier, clock: Arc<dyn Clock>) -> Self {
        Self {
            id,
            clock,
            policy: CappingPolicy::default(),
            open_trip_origin: None,
            history: Vec::new(),
        }
    }

    pub fn builder(id: impl Into<CardIdentifier>) -> CardBuilder {
        CardBuilder {
            id: id.into(),
            clock: None,
            policy: CappingPolicy::default(),
            history: Vec::new(),
            started_from: None,
        }
    }

    pub fn id(&self) -> &CardIdentifier {
        &self.id
    }

    pub fn policy(&self) -> &CappingPolicy {
        &self.policy
    }

    pub fn state(&self) -> JourneyState {
        if self.open_trip_origin.is_some() {
            JourneyState::Traveling
        } else {
            JourneyState::Idle
        }
    }

    pub fn is_traveling(&self) -> bool {
        self.state() == JourneyState::Traveling
    }

    /// Station the open trip started from
    pub fn current_journey_start(&self) -> Option<&Arc<dyn Station>> {
        self.open_trip_origin.as_ref()
    }

    /// Completed trips, oldest first
    pub fn history(&self) -> &[Trip] {
        &self.history
    }

    pub fn start_journey(&mut self, station: Arc<dyn Station>) -> Result<()> {
        if self.open_trip_origin.is_some() {
            return Err(FareError::InvalidOperation(ALREADY_UNDERWAY));
        }

        debug!(card = %self.id, station = %station.id(), "journey started");
        self.open_trip_origin = Some(station);
        Ok(())
    }

    /// Close the open trip at `station`
    ///
    /// Returns `Ok(None)` when `station` is the one the trip started from;
    /// nothing is charged or recorded in that case.
    pub fn end_journey(&mut self, station: Arc<dyn Station>) -> Result<Option<Trip>> {
        let origin = self
            .open_trip_origin
            .take()
            .ok_or(FareError::InvalidOperation(NOT_UNDERWAY))?;

        if origin.id() == station.id() {
            debug!(card = %self.id, station = %station.id(), "journey cancelled at origin");
            return Ok(None);
        }

        let now = self.clock.now();
        let quote = price_trip(origin.zone(), station.zone(), &self.history, now, &self.policy);

        debug!(
            card = %self.id,
            from = %origin.id(),
            to = %station.id(),
            base = %quote.base,
            charged = %quote.charged,
            capped_by = ?quote.capped_by,
            "journey completed"
        );

        let trip = Trip::new(now, origin, station, quote.charged);
        self.history.push(trip.clone());
        Ok(Some(trip))
    }

    /// Price ending the open trip at `station` right now, without ending it
    ///
    /// `Ok(None)` means ending there would cancel the trip.
    pub fn quote(&self, station: &dyn Station) -> Result<Option<FareQuote>> {
        let origin = self
            .open_trip_origin
            .as_ref()
            .ok_or(FareError::InvalidOperation(NOT_UNDERWAY))?;

        if origin.id() == station.id() {
            return Ok(None);
        }

        Ok(Some(price_trip(
            origin.zone(),
            station.zone(),
            &self.history,
            self.clock.now(),
            &self.policy,
        )))
    }

    pub fn spent_today(&self) -> Money {
        self.history.spent_on_day(self.clock.now().date())
    }

    pub fn spent_this_week(&self) -> Money {
        self.history.spent_in_week(WeekKey::of(self.clock.now().date()))
    }

    pub fn spent_this_month(&self) -> Money {
        self.history.spent_in_month(MonthKey::of(self.clock.now().date()))
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Card")
            .field("id", &self.id)
            .field("policy", &self.policy)
            .field("open_trip_origin", &self.open_trip_origin.as_ref().map(|s| s.id()))
            .field("history", &self.history)
            .finish()
    }
}

/// Assembles a [`Card`] with a chosen policy, prior history or open trip
pub struct CardBuilder {
    id: CardIdentifier,
    clock: Option<Arc<dyn Clock>>,
    policy: CappingPolicy,
    history: Vec<Trip>,
    started_from: Option<Arc<dyn Station>>,
}

impl CardBuilder {
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn policy(mut self, policy: CappingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Trips already taken, oldest first
    ///
    /// Negative costs are rejected unless the policy passes them through.
    pub fn history(mut self, history: impl IntoIterator<Item = Trip>) -> Self {
        self.history.extend(history);
        self
    }

    pub fn journey_started_from(mut self, station: Arc<dyn Station>) -> Self {
        self.started_from = Some(station);
        self
    }

    pub fn build(self) -> Result<Card> {
        let clock = self
            .clock
            .ok_or_else(|| FareError::invalid_argument("clock", "a card needs a time source"))?;

        // Only a flooring card guarantees costs >= 0
        let floors = self.policy.negative_fares == NegativeFarePolicy::FloorAtZero;
        if let Some(trip) = self
            .history
            .iter()
            .find(|t| floors && t.cost() < Money::ZERO)
        {
            return Err(FareError::invalid_argument(
                "history",
                format!("trip at {} has negative cost {}", trip.date(), trip.cost()),
            ));
        }

        Ok(Card {
            id: self.id,
            clock,
            policy: self.policy,
            open_trip_origin: self.started_from,
            history: self.history,
        })
    }
}
