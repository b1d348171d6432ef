use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{Archetype, ArchetypeId, Catalog, RoomType};
use crate::error::{PlannerError, Result};
use crate::geometry::{Footprint, Position, QuarterTurn};

use super::placer::Placer;
use super::strategies;

/// Minimum width (meters) for the spacious strategies.
pub const SPACIOUS_MIN_WIDTH: f64 = 3.0;
/// Minimum depth (meters) for the spacious strategies.
pub const SPACIOUS_MIN_DEPTH: f64 = 3.0;

const CENTIMETERS_PER_METER: f64 = 100.0;

/// Room to furnish, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomConfig {
    pub width: f64,
    pub depth: f64,
    pub room_type: RoomType,
}

impl RoomConfig {
    pub const fn new(width: f64, depth: f64, room_type: RoomType) -> Self {
        Self {
            width,
            depth,
            room_type,
        }
    }

    /// Build a config from centimeter input, the unit room forms collect.
    pub fn from_centimeters(width_cm: f64, depth_cm: f64, room_type: RoomType) -> Self {
        Self::new(
            width_cm / CENTIMETERS_PER_METER,
            depth_cm / CENTIMETERS_PER_METER,
            room_type,
        )
    }

    pub fn validate(&self) -> Result<()> {
        let valid = |value: f64| value.is_finite() && value > 0.0;
        if valid(self.width) && valid(self.depth) {
            Ok(())
        } else {
            Err(PlannerError::InvalidRoom {
                width: self.width,
                depth: self.depth,
            })
        }
    }

    pub fn size_tier(&self) -> SizeTier {
        SizeTier::classify(self.width, self.depth)
    }

    pub fn left_wall(&self) -> f64 {
        -self.width / 2.0
    }

    pub fn right_wall(&self) -> f64 {
        self.width / 2.0
    }

    pub fn back_wall(&self) -> f64 {
        -self.depth / 2.0
    }

    pub fn front_wall(&self) -> f64 {
        self.depth / 2.0
    }

    pub fn floor(&self) -> Footprint {
        Footprint::new(self.left_wall(), self.back_wall(), self.width, self.depth)
    }
}

/// Size bucket used to pick between compact and spacious strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizeTier {
    Compact,
    Spacious,
}

impl SizeTier {
    pub fn classify(width: f64, depth: f64) -> Self {
        if width >= SPACIOUS_MIN_WIDTH && depth >= SPACIOUS_MIN_DEPTH {
            SizeTier::Spacious
        } else {
            SizeTier::Compact
        }
    }
}

type PlacementFn = fn(&mut Placer<'_>) -> Result<()>;

/// Named placement rule set, keyed by room type and size tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutStrategy {
    SpaciousBedroom,
    CompactBedroom,
    SpaciousLivingRoom,
    CompactLivingRoom,
    Office,
}

impl LayoutStrategy {
    pub const ALL: [LayoutStrategy; 5] = [
        LayoutStrategy::SpaciousBedroom,
        LayoutStrategy::CompactBedroom,
        LayoutStrategy::SpaciousLivingRoom,
        LayoutStrategy::CompactLivingRoom,
        LayoutStrategy::Office,
    ];

    pub fn for_room(room_type: RoomType, tier: SizeTier) -> Self {
        match (room_type, tier) {
            (RoomType::Bedroom, SizeTier::Spacious) => LayoutStrategy::SpaciousBedroom,
            (RoomType::Bedroom, SizeTier::Compact) => LayoutStrategy::CompactBedroom,
            (RoomType::LivingRoom, SizeTier::Spacious) => LayoutStrategy::SpaciousLivingRoom,
            (RoomType::LivingRoom, SizeTier::Compact) => LayoutStrategy::CompactLivingRoom,
            (RoomType::Office, _) => LayoutStrategy::Office,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LayoutStrategy::SpaciousBedroom => "spacious-bedroom",
            LayoutStrategy::CompactBedroom => "compact-bedroom",
            LayoutStrategy::SpaciousLivingRoom => "spacious-living-room",
            LayoutStrategy::CompactLivingRoom => "compact-living-room",
            LayoutStrategy::Office => "office",
        }
    }

    /// Catalog ids the strategy looks up.
    pub fn archetype_ids(self) -> &'static [&'static str] {
        match self {
            LayoutStrategy::SpaciousBedroom => strategies::SPACIOUS_BEDROOM_IDS,
            LayoutStrategy::CompactBedroom => strategies::COMPACT_BEDROOM_IDS,
            LayoutStrategy::SpaciousLivingRoom => strategies::SPACIOUS_LIVING_ROOM_IDS,
            LayoutStrategy::CompactLivingRoom => strategies::COMPACT_LIVING_ROOM_IDS,
            LayoutStrategy::Office => strategies::OFFICE_IDS,
        }
    }

    fn placement_fn(self) -> PlacementFn {
        match self {
            LayoutStrategy::SpaciousBedroom => strategies::spacious_bedroom,
            LayoutStrategy::CompactBedroom => strategies::compact_bedroom,
            LayoutStrategy::SpaciousLivingRoom => strategies::spacious_living_room,
            LayoutStrategy::CompactLivingRoom => strategies::compact_living_room,
            LayoutStrategy::Office => strategies::office,
        }
    }
}

impl fmt::Display for LayoutStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Archetype copy augmented with a concrete floor position and yaw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedFurniture {
    #[serde(flatten)]
    pub archetype: Archetype,
    pub position: Position,
    pub rotation: QuarterTurn,
}

impl PlacedFurniture {
    pub fn new(archetype: &Archetype, position: Position, rotation: QuarterTurn) -> Self {
        Self {
            archetype: archetype.clone(),
            position,
            rotation,
        }
    }

    pub fn id(&self) -> &str {
        &self.archetype.id
    }

    pub fn footprint(&self) -> Footprint {
        let (width, depth) = self.archetype.dimensions.floor_extent(self.rotation);
        Footprint::centered(self.position, width, depth)
    }
}

/// Why a secondary item was left out of a layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum OmitReason {
    /// The wall span predicate failed.
    WallSpan,
    /// The footprint would cross a wall.
    OutsideRoom,
    /// The footprint would overlap an item placed earlier.
    Collides { with: ArchetypeId },
}

impl fmt::Display for OmitReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OmitReason::WallSpan => f.write_str("wall span too short"),
            OmitReason::OutsideRoom => f.write_str("outside room bounds"),
            OmitReason::Collides { with } => write!(f, "collides with `{with}`"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Omission {
    pub id: ArchetypeId,
    pub reason: OmitReason,
}

/// Result of one layout request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub room: RoomConfig,
    pub strategy: LayoutStrategy,
    pub items: Vec<PlacedFurniture>,
    pub omitted: Vec<Omission>,
}

impl Layout {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedFurniture> {
        self.items.iter()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    pub fn count(&self, id: &str) -> usize {
        self.items.iter().filter(|item| item.id() == id).count()
    }

    pub fn was_omitted(&self, id: &str) -> bool {
        self.omitted.iter().any(|omission| omission.id == id)
    }

    /// First placement of every distinct archetype, in layout order.
    pub fn unique_items(&self) -> Vec<&PlacedFurniture> {
        let mut seen = Vec::new();
        self.items
            .iter()
            .filter(|item| {
                if seen.contains(&item.id()) {
                    false
                } else {
                    seen.push(item.id());
                    true
                }
            })
            .collect()
    }

    /// Sum of every placed item's price, duplicates included.
    pub fn total_price(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.archetype.price))
            .sum()
    }

    /// Stable digest of ids, positions and rotations.
    pub fn fingerprint(&self) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.strategy.name().as_bytes());
        for item in &self.items {
            hasher.update(item.id().as_bytes());
            hasher.update(&item.position.x.to_le_bytes());
            hasher.update(&item.position.z.to_le_bytes());
            hasher.update(&item.rotation.degrees().to_le_bytes());
        }
        hasher.finalize()
    }
}

/// Pick a strategy for `room` and place furniture from `catalog`.
///
/// Stateless: equal inputs always yield equal layouts. Secondary items that do
/// not fit are recorded in [`Layout::omitted`] rather than failing the call.
pub fn select_layout(catalog: &Catalog, room: &RoomConfig) -> Result<Layout> {
    room.validate()?;
    let strategy = LayoutStrategy::for_room(room.room_type, room.size_tier());

    let mut placer = Placer::new(catalog, *room);
    (strategy.placement_fn())(&mut placer)?;
    let (items, omitted) = placer.finish();

    Ok(Layout {
        room: *room,
        strategy,
        items,
        omitted,
    })
}
