//! The schedule store.
//!
//! A [`Timetable`] is the single mutable collection of scheduled
//! meetings. It is driven exclusively by the planner (see
//! [`crate::planner::Planner`]); the conflict detector and search engine
//! only read it, so every search observes the schedule as of the last
//! completed add/remove.

use serde::{Deserialize, Serialize};

use super::{SessionKind, Weekday};

/// One concrete block on the weekly grid.
///
/// Created only by the planner when a course is added; destroyed only by
/// explicit removal or a full clear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledMeeting {
    /// Unique per scheduled meeting; fresh ids are issued on every add.
    pub instance_id: u64,
    /// Course code this block belongs to. Dependent lab/problem-session
    /// blocks carry their own record's code.
    pub code: String,
    /// Course name.
    pub name: String,
    /// Day of the meeting.
    pub day: Weekday,
    /// Absolute clock hour the meeting starts at.
    pub start_hour: u8,
    /// Meeting length in hours (1 in this model).
    pub duration_hours: u8,
    /// Display color assigned at add time.
    pub color: String,
    /// Instructor name.
    pub instructor: String,
    /// Room label, empty when unpublished.
    pub room: String,
    /// Session classification.
    pub kind: SessionKind,
}

impl ScheduledMeeting {
    /// Whether `hour` falls within `[start_hour, start_hour + duration_hours)`.
    #[inline]
    pub fn covers_hour(&self, hour: u8) -> bool {
        hour >= self.start_hour && hour < self.start_hour + self.duration_hours
    }

    /// First hour after the meeting ends.
    #[inline]
    pub fn end_hour(&self) -> u8 {
        self.start_hour + self.duration_hours
    }
}

/// The current weekly plan: an ordered collection of scheduled meetings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timetable {
    meetings: Vec<ScheduledMeeting>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// All scheduled meetings, in insertion order.
    pub fn meetings(&self) -> &[ScheduledMeeting] {
        &self.meetings
    }

    /// Appends one meeting.
    pub fn push(&mut self, meeting: ScheduledMeeting) {
        self.meetings.push(meeting);
    }

    /// Appends a batch of meetings in one step.
    pub fn extend(&mut self, meetings: Vec<ScheduledMeeting>) {
        self.meetings.extend(meetings);
    }

    /// Removes the meeting with the given instance id, if present.
    pub fn remove_by_instance(&mut self, instance_id: u64) {
        self.meetings.retain(|m| m.instance_id != instance_id);
    }

    /// Removes every meeting whose code equals `code` exactly.
    pub fn remove_by_code(&mut self, code: &str) {
        self.meetings.retain(|m| m.code != code);
    }

    /// Empties the timetable.
    pub fn clear(&mut self) {
        self.meetings.clear();
    }

    /// Whether any scheduled meeting carries the given code.
    ///
    /// This is the "is this course currently added" predicate the UI
    /// toggles its add/remove buttons on.
    pub fn is_scheduled(&self, code: &str) -> bool {
        self.meetings.iter().any(|m| m.code == code)
    }

    /// All meetings for a given course code.
    pub fn meetings_for_code(&self, code: &str) -> Vec<&ScheduledMeeting> {
        self.meetings.iter().filter(|m| m.code == code).collect()
    }

    /// All meetings occupying a given grid cell.
    pub fn meetings_at(&self, day: Weekday, hour: u8) -> Vec<&ScheduledMeeting> {
        self.meetings
            .iter()
            .filter(|m| m.day == day && m.covers_hour(hour))
            .collect()
    }

    /// Number of scheduled meetings.
    pub fn len(&self) -> usize {
        self.meetings.len()
    }

    /// Whether the timetable is empty.
    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty()
    }
}
