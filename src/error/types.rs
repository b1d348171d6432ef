use thiserror::Error;

/// Unified result type for the room planner crate.
pub type Result<T> = std::result::Result<T, PlannerError>;

/// Errors surfaced by the catalog and the layout selector.
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("archetype `{0}` not found in catalog")]
    ArchetypeNotFound(String),
    #[error("archetype `{0}` is defined more than once")]
    DuplicateArchetype(String),
    #[error("archetype `{id}` is invalid: {reason}")]
    InvalidArchetype { id: String, reason: String },
    #[error("room dimensions must be positive and finite, got {width} x {depth}")]
    InvalidRoom { width: f64, depth: f64 },
    #[error("room of {width} x {depth} m cannot hold `{item}`")]
    RoomTooSmall { item: String, width: f64, depth: f64 },
    #[error("unknown room type `{0}`")]
    UnknownRoomType(String),
    #[error("catalog json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
