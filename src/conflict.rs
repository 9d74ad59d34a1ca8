//! Conflict detection.
//!
//! Counts how many of a candidate course's meetings collide with the
//! current timetable. The count is advisory: it annotates search results
//! but never blocks an add.
//!
//! # Counting
//! One count per candidate meeting that hits at least one overlap, not
//! one per overlapping scheduled block. A meeting with an unmappable day
//! code contributes nothing. Scheduled meetings of the candidate's own
//! code never conflict with it.

use crate::models::{slot_to_hour, LogicalCourse, Timetable, Weekday};

/// Counts the candidate's meetings that overlap a scheduled meeting of a
/// different course.
pub fn count_conflicts(course: &LogicalCourse, timetable: &Timetable) -> usize {
    course
        .meetings
        .iter()
        .filter(|meeting| {
            let day = match Weekday::from_code(&meeting.day_code) {
                Some(day) => day,
                None => return false,
            };
            let hour = slot_to_hour(meeting.slot);

            timetable.meetings().iter().any(|scheduled| {
                scheduled.code != course.code
                    && scheduled.day == day
                    && scheduled.covers_hour(hour)
            })
        })
        .count()
}
