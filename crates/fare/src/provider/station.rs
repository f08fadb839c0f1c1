//! Stations and the swipe gateway.

use std::fmt;
use std::sync::Arc;

use crate::card::Card;
use crate::identifiers::StationIdentifier;
use crate::models::{traits::*, types::*};

#[derive(Clone)]
pub struct StationImpl {
    pub id: StationIdentifier,
    pub name: Arc<str>,
    pub zone: Arc<dyn Zone>,
}

impl StationImpl {
    pub fn new(id: StationIdentifier, name: impl Into<Arc<str>>, zone: Arc<dyn Zone>) -> Self {
        Self {
            id,
            name: name.into(),
            zone,
        }
    }

    pub fn builder(id: impl Into<StationIdentifier>) -> StationBuilder {
        StationBuilder {
            id: id.into(),
            name: None,
            zone: None,
        }
    }
}

impl Station for StationImpl {
    fn id(&self) -> &StationIdentifier {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn zone(&self) -> &dyn Zone {
        self.zone.as_ref()
    }
}

impl fmt::Debug for StationImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StationImpl")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("zone", self.zone.id())
            .finish()
    }
}

/// Assembles a [`StationImpl`] whose zone may not be known up front
pub struct StationBuilder {
    id: StationIdentifier,
    name: Option<Arc<str>>,
    zone: Option<Arc<dyn Zone>>,
}

impl StationBuilder {
    pub fn name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn zone(mut self, zone: Arc<dyn Zone>) -> Self {
        self.zone = Some(zone);
        self
    }

    /// Fails with `InvalidArgument("zone")` when no zone was given.
    /// The name defaults to the identifier.
    pub fn build(self) -> Result<StationImpl> {
        let zone = self
            .zone
            .ok_or_else(|| FareError::invalid_argument("zone", "a station needs a zone"))?;
        let name = self.name.unwrap_or_else(|| self.id.as_str().into());

        Ok(StationImpl {
            id: self.id,
            name,
            zone,
        })
    }
}

// ============================================================================
// Swipe Gateway
// ============================================================================

/// Forwards card swipes to the card, tagged with this station
///
/// All trip state lives on the [`Card`]; the gateway only supplies itself
/// as the station being swiped at.
pub trait SwipeGateway {
    fn swipe_in(&self, card: &mut Card) -> Result<()>;

    /// Returns `None` when the card taps out where it tapped in
    fn swipe_out(&self, card: &mut Card) -> Result<Option<Trip>>;
}

impl SwipeGateway for Arc<dyn Station> {
    fn swipe_in(&self, card: &mut Card) -> Result<()> {
        card.start_journey(Arc::clone(self))
    }

    fn swipe_out(&self, card: &mut Card) -> Result<Option<Trip>> {
        card.end_journey(Arc::clone(self))
    }
}

impl<S: Station + 'static> SwipeGateway for Arc<S> {
    fn swipe_in(&self, card: &mut Card) -> Result<()> {
        card.start_journey(Arc::clone(self) as Arc<dyn Station>)
    }

    fn swipe_out(&self, card: &mut Card) -> Result<Option<Trip>> {
        card.end_journey(Arc::clone(self) as Arc<dyn Station>)
    }
}
