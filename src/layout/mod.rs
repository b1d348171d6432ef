//! Layout module orchestrator.
//!
//! Downstream code imports the selector and its value types from here while
//! the placement rules live in the private `strategies` module.

mod core;
mod placer;
mod strategies;

pub use self::core::{
    Layout, LayoutStrategy, OmitReason, Omission, PlacedFurniture, RoomConfig,
    SPACIOUS_MIN_DEPTH, SPACIOUS_MIN_WIDTH, SizeTier, select_layout,
};
pub use self::strategies::{
    ARMCHAIR_GAP, BOOKSHELF_MARGIN, CABINET_GAP, CHAIR_CLEARANCE, COFFEE_TABLE_CLEARANCE,
    COFFEE_TABLE_SHIFT, MAX_VIEWING_DISTANCE, STORAGE_GAP, WALL_CLEARANCE,
};
