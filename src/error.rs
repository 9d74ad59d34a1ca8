//! Error taxonomy for plan assembly.
//!
//! The engines themselves cannot fail: normalization defaults malformed
//! records to empty meeting lists, and unmappable day codes are skipped
//! per meeting. Errors surface only from the planner, are informational,
//! and leave the timetable unchanged.

use thiserror::Error;

/// Errors reported by [`crate::planner::Planner`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The selected course defines no meetings to place on the grid.
    #[error("course '{0}' has no scheduled meetings")]
    NoSchedule(String),

    /// The grouping key does not exist in the catalog.
    #[error("unknown course '{0}'")]
    UnknownCourse(String),
}
