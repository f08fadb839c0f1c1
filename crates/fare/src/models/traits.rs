//! Core traits for fare entities.
//!
//! These traits are the seams between the capping engine and whatever
//! builds zones, stations and clocks. The engine only ever reads them.

use chrono::NaiveDateTime;

use crate::identifiers::*;
use crate::models::types::Money;

// ============================================================================
// Core Entity Traits
// ============================================================================

/// A pricing domain attached to a station
///
/// All figures are expected to be non-negative. Whether each limit is at
/// least the single-journey cost is up to whoever defines the zone.
pub trait Zone: Send + Sync {
    fn id(&self) -> &ZoneIdentifier;

    /// Price of one trip that starts and ends in this zone
    fn cost_per_single_journey(&self) -> Money;

    fn cost_per_day_limit(&self) -> Money;
    fn cost_per_week_limit(&self) -> Money;
    fn cost_per_month_limit(&self) -> Money;
}

/// A place a card can be swiped in or out
///
/// Two stations are the same station when their identifiers are equal.
pub trait Station: Send + Sync {
    fn id(&self) -> &StationIdentifier;
    fn name(&self) -> &str;

    /// Zone this station prices trips with. Fixed for the station's lifetime.
    fn zone(&self) -> &dyn Zone;
}

// ============================================================================
// Time Source
// ============================================================================

/// Supplies "now" for timestamping trips and choosing cap windows
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}
