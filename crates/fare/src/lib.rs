//! # clam-fare
//!
//! Fare-capping engine for contactless transit cards.
//!
//! ## Features
//!
//! - **Trip lifecycle**: swipe in, swipe out, cancel by tapping out at the origin
//! - **Worst-zone pricing**: a trip costs the dearer of its two zones' single fares
//! - **Spending caps**: day, week and month ceilings clamp each fare in turn
//! - **Pluggable collaborators**: zones, stations and clocks are traits
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use clam_fare::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let zone: Arc<dyn Zone> = Arc::new(
//!     ZoneImpl::new("zone_1".into(), dec!(2.5), dec!(4.5), dec!(40), dec!(145)).unwrap(),
//! );
//! let bank = Arc::new(StationImpl::new("bank".into(), "Bank", zone.clone()));
//! let oval = Arc::new(StationImpl::new("oval".into(), "Oval", zone));
//!
//! let now = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap().and_hms_opt(8, 0, 0).unwrap();
//! let mut card = Card::new("card_1".into(), Arc::new(FixedClock(now)));
//!
//! bank.swipe_in(&mut card).unwrap();
//! let first = oval.swipe_out(&mut card).unwrap().unwrap();
//! assert_eq!(first.cost(), dec!(2.5));
//!
//! oval.swipe_in(&mut card).unwrap();
//! let second = bank.swipe_out(&mut card).unwrap().unwrap();
//! assert_eq!(second.cost(), dec!(2.0)); // day cap of 4.5 reached
//! ```

pub mod capping;
pub mod card;
pub mod identifiers;
pub mod models;
pub mod provider;

// Re-exports for convenience
pub mod prelude {
    pub use crate::capping::{
        CapAmounts, CapLimits, CappingPolicy, FareQuote, NegativeFarePolicy, SpentTotals,
        TripHistory,
    };
    pub use crate::card::{Card, CardBuilder};
    pub use crate::identifiers::*;
    pub use crate::models::{calendar::*, traits::*, types::*};
    pub use crate::provider::{
        FixedClock, ManualClock, StationBuilder, StationImpl, SwipeGateway, SystemClock, ZoneImpl,
    };
}

pub use prelude::*;
