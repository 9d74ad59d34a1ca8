//! Weekly class timetable engine.
//!
//! Assembles a student's weekly timetable from a catalog of course
//! sessions: normalizes raw per-section session records into logical
//! courses, counts slot-level time conflicts against the evolving
//! schedule, ranks search results, and adds or removes a course together
//! with its linked lab and problem-session meetings.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `RawSessionRecord`, `SessionKind`,
//!   `LogicalCourse`, `Meeting`, `Weekday`, `ScheduledMeeting`, `Timetable`
//! - **`catalog`**: Normalizes the raw session map into logical courses
//! - **`conflict`**: Advisory conflict counting against the schedule
//! - **`search`**: Query matching and conflict-aware result ranking
//! - **`planner`**: Plan assembly: adding/removing courses and dependents
//! - **`error`**: Error taxonomy
//!
//! # Data Flow
//!
//! Raw catalog → [`catalog::Catalog`] → [`search::search`] (consulting
//! [`conflict::count_conflicts`] against the current
//! [`models::Timetable`]) → ranked results → [`planner::Planner`]
//! add/remove → updated timetable → fed back into the next search.
//!
//! Conflict detection is advisory: conflicting courses may still be
//! added to the plan.

pub mod catalog;
pub mod conflict;
pub mod error;
pub mod models;
pub mod planner;
pub mod search;
