use crate::catalog::{Archetype, Catalog};
use crate::error::{PlannerError, Result};
use crate::geometry::{Footprint, Position, QuarterTurn};

use super::core::{OmitReason, Omission, PlacedFurniture, RoomConfig};

/// Accumulates placements for one strategy run.
///
/// Required items fail the whole request when they cannot be placed;
/// optional items are dropped and recorded as omissions.
pub(crate) struct Placer<'a> {
    catalog: &'a Catalog,
    room: RoomConfig,
    items: Vec<PlacedFurniture>,
    omitted: Vec<Omission>,
}

impl<'a> Placer<'a> {
    pub(crate) fn new(catalog: &'a Catalog, room: RoomConfig) -> Self {
        Self {
            catalog,
            room,
            items: Vec::new(),
            omitted: Vec::new(),
        }
    }

    pub(crate) fn room(&self) -> RoomConfig {
        self.room
    }

    pub(crate) fn archetype(&self, id: &str) -> Result<&'a Archetype> {
        self.catalog.get(id)
    }

    pub(crate) fn footprints(&self) -> impl Iterator<Item = Footprint> + '_ {
        self.items.iter().map(PlacedFurniture::footprint)
    }

    /// Place an item the strategy cannot do without.
    pub(crate) fn require(
        &mut self,
        archetype: &Archetype,
        center: Position,
        rotation: QuarterTurn,
    ) -> Result<Footprint> {
        let candidate = PlacedFurniture::new(archetype, center, rotation);
        let footprint = candidate.footprint();
        if self.check(&footprint).is_err() {
            return Err(PlannerError::RoomTooSmall {
                item: archetype.id.clone(),
                width: self.room.width,
                depth: self.room.depth,
            });
        }
        self.items.push(candidate);
        Ok(footprint)
    }

    /// Place a secondary item when `span_fits` holds and the footprint is
    /// clear; otherwise record why it was skipped.
    pub(crate) fn offer(
        &mut self,
        archetype: &Archetype,
        center: Position,
        rotation: QuarterTurn,
        span_fits: bool,
    ) -> Option<Footprint> {
        let candidate = PlacedFurniture::new(archetype, center, rotation);
        let footprint = candidate.footprint();
        let verdict = if span_fits {
            self.check(&footprint)
        } else {
            Err(OmitReason::WallSpan)
        };

        match verdict {
            Ok(()) => {
                self.items.push(candidate);
                Some(footprint)
            }
            Err(reason) => {
                self.omitted.push(Omission {
                    id: archetype.id.clone(),
                    reason,
                });
                None
            }
        }
    }

    /// Whether an item could be placed here, without recording anything.
    pub(crate) fn is_clear(
        &self,
        archetype: &Archetype,
        center: Position,
        rotation: QuarterTurn,
    ) -> bool {
        let footprint = PlacedFurniture::new(archetype, center, rotation).footprint();
        self.check(&footprint).is_ok()
    }

    pub(crate) fn finish(self) -> (Vec<PlacedFurniture>, Vec<Omission>) {
        (self.items, self.omitted)
    }

    fn check(&self, footprint: &Footprint) -> std::result::Result<(), OmitReason> {
        if !self.room.floor().contains(footprint) {
            return Err(OmitReason::OutsideRoom);
        }
        match self
            .items
            .iter()
            .find(|item| item.footprint().intersects(footprint))
        {
            Some(item) => Err(OmitReason::Collides {
                with: item.archetype.id.clone(),
            }),
            None => Ok(()),
        }
    }
}
