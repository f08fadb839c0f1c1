//! Names for stations, zones and cards.
//!
//! A station's identifier is its identity: a card that taps out at a
//! station with the same identifier as its origin has not travelled.

use std::fmt;
use std::sync::Arc;

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $name(Arc<str>);

        impl $name {
            pub fn new(s: impl AsRef<str>) -> Self {
                Self(s.as_ref().into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s.into())
            }
        }
    };
}

identifier!(
    /// Decides whether a tap-out happens at the trip's origin
    StationIdentifier
);
identifier!(ZoneIdentifier);
identifier!(
    /// Tags log events for one card
    CardIdentifier
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::traits::{Station, Zone};
    use crate::provider::{StationImpl, ZoneImpl};
    use rust_decimal_macros::dec;

    fn zone(id: &str) -> Arc<dyn Zone> {
        Arc::new(
            ZoneImpl::new(id.into(), dec!(2.5), dec!(7), dec!(40), dec!(145)).unwrap(),
        )
    }

    #[test]
    fn test_station_identity_ignores_name_and_zone() {
        let platform_1 = StationImpl::new("bank".into(), "Bank (Northern)", zone("zone_1"));
        let platform_2 = StationImpl::new(
            StationIdentifier::from(String::from("bank")),
            "Bank (Central)",
            zone("zone_2"),
        );

        assert_eq!(platform_1.id(), platform_2.id());
        assert_ne!(platform_1.id(), &StationIdentifier::new("monument"));
    }

    #[test]
    fn test_identifier_display_is_raw_name() {
        assert_eq!(CardIdentifier::new("card_0042").to_string(), "card_0042");
        assert_eq!(format!("{:>6}", ZoneIdentifier::new("z1")), "    z1");
    }
}
