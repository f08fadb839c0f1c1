//! Concrete zones, stations and clocks.

pub mod clock;
pub mod station;
pub mod zone;

pub use clock::{FixedClock, ManualClock, SystemClock};
pub use station::{StationBuilder, StationImpl, SwipeGateway};
pub use zone::ZoneImpl;
