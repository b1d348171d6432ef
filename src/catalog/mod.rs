//! Furniture catalog orchestrator.
//!
//! Archetypes and the lookup table live in `core`; the default furniture
//! table lives in `builtin`.

mod builtin;
mod core;

pub use self::core::{Archetype, ArchetypeId, Catalog, RoomType};
