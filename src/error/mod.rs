//! Error module orchestrator.
//!
//! The error enum lives in `types`; callers import it from here or from the
//! crate root.

mod types;

pub use types::{PlannerError, Result};
