//! Text floor-plan rendering for layouts.

mod core;

pub use self::core::{FloorPlanRenderer, FloorPlanSettings};
