//! Deterministic furniture layout engine for the room visualizer.
//!
//! A room request (width, depth, room type) is classified into a size tier,
//! mapped to one placement strategy, and turned into a [`Layout`] of catalog
//! items positioned against the walls. The crate stops at the data: a
//! [`ScenePlan`] hands the result to a 3D renderer and [`FloorPlanRenderer`]
//! draws a quick text plan for terminals and logs.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod render;
pub mod scene;
pub mod width;

pub use catalog::{Archetype, ArchetypeId, Catalog, RoomType};
pub use engine::{LayoutEngine, PlannerConfig};
pub use error::{PlannerError, Result};
pub use geometry::{Dimensions, Footprint, Position, QuarterTurn, Wall};
pub use layout::{
    Layout, LayoutStrategy, OmitReason, Omission, PlacedFurniture, RoomConfig, SizeTier,
    select_layout,
};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink,
};
pub use metrics::{MetricSnapshot, PlannerMetrics};
pub use render::{FloorPlanRenderer, FloorPlanSettings};
pub use scene::{DEFAULT_WALL_HEIGHT, ScenePlan, SceneItem, WallPanel};
pub use width::display_width;
