//! Fixed-tariff zone.

use rust_decimal::Decimal;

use crate::identifiers::ZoneIdentifier;
use crate::models::{traits::Zone, types::*};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneImpl {
    #[cfg_attr(feature = "serde", serde(with = "zone_id_serde"))]
    pub id: ZoneIdentifier,
    pub cost_per_single_journey: Money,
    pub cost_per_day_limit: Money,
    pub cost_per_week_limit: Money,
    pub cost_per_month_limit: Money,
}

impl ZoneImpl {
    /// Create a zone, rejecting negative figures
    ///
    /// Limits below the single-journey cost are accepted as given.
    pub fn new(
        id: ZoneIdentifier,
        cost_per_single_journey: Money,
        cost_per_day_limit: Money,
        cost_per_week_limit: Money,
        cost_per_month_limit: Money,
    ) -> Result<Self> {
        for (name, value) in [
            ("cost_per_single_journey", cost_per_single_journey),
            ("cost_per_day_limit", cost_per_day_limit),
            ("cost_per_week_limit", cost_per_week_limit),
            ("cost_per_month_limit", cost_per_month_limit),
        ] {
            if value < Decimal::ZERO {
                return Err(FareError::invalid_argument(
                    name,
                    format!("must not be negative, got {value}"),
                ));
            }
        }

        Ok(Self {
            id,
            cost_per_single_journey,
            cost_per_day_limit,
            cost_per_week_limit,
            cost_per_month_limit,
        })
    }
}

impl Zone for ZoneImpl {
    fn id(&self) -> &ZoneIdentifier {
        &self.id
    }

    fn cost_per_single_journey(&self) -> Money {
        self.cost_per_single_journey
    }

    fn cost_per_day_limit(&self) -> Money {
        self.cost_per_day_limit
    }

    fn cost_per_week_limit(&self) -> Money {
        self.cost_per_week_limit
    }

    fn cost_per_month_limit(&self) -> Money {
        self.cost_per_month_limit
    }
}

#[cfg(feature = "serde")]
mod zone_id_serde {
    use super::ZoneIdentifier;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(id: &ZoneIdentifier, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(id.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ZoneIdentifier, D::Error> {
        String::deserialize(deserializer).map(ZoneIdentifier::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zone_accessors() {
        let zone = ZoneImpl::new(
            ZoneIdentifier::new("a"),
            dec!(2.5),
            dec!(7),
            dec!(40),
            dec!(145),
        )
        .unwrap();

        assert_eq!(zone.id().as_str(), "a");
        assert_eq!(zone.cost_per_single_journey(), dec!(2.5));
        assert_eq!(zone.cost_per_day_limit(), dec!(7));
        assert_eq!(zone.cost_per_week_limit(), dec!(40));
        assert_eq!(zone.cost_per_month_limit(), dec!(145));
    }

    #[test]
    fn test_negative_figure_rejected() {
        let err = ZoneImpl::new(
            ZoneIdentifier::new("a"),
            dec!(2.5),
            dec!(7),
            dec!(-1),
            dec!(145),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            FareError::InvalidArgument { name: "cost_per_week_limit", .. }
        ));
    }

    #[test]
    fn test_limit_below_single_is_allowed() {
        let zone = ZoneImpl::new(
            ZoneIdentifier::new("odd"),
            dec!(3),
            dec!(1),
            dec!(1),
            dec!(1),
        );
        assert!(zone.is_ok());
    }
}
