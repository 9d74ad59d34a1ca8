//! Timetable domain models.
//!
//! Provides the core data types for the planning engine: raw catalog
//! records as published per section, the normalized logical courses the
//! engine works with, and the scheduled meetings that make up a plan.
//!
//! # Entity Mapping
//!
//! | Raw catalog | Normalized | Scheduled |
//! |-------------|------------|-----------|
//! | `RawSessionRecord` (one per section/session) | `LogicalCourse` (merged lectures, standalone labs) | `ScheduledMeeting` (one grid block) |

mod course;
mod day;
mod record;
mod timetable;

pub use course::{LogicalCourse, Meeting};
pub use day::{slot_to_hour, Weekday, GRID_DAYS, GRID_HOURS, HOUR_OFFSET};
pub use record::{RawSessionRecord, SessionKind};
pub use timetable::{ScheduledMeeting, Timetable};
