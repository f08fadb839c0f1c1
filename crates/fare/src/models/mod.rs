//! Fare data models, types, and traits.

pub mod calendar;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use calendar::{week_of_year, MonthKey, WeekKey};
pub use traits::{Clock, Station, Zone};
pub use types::{CapKind, FareError, JourneyState, Money, Result, Trip};
