//! Logical course model.
//!
//! A logical course is the normalized, possibly-merged representation of
//! one or more raw catalog records sharing identity for scheduling
//! purposes: lecture records with the same course code collapse into one
//! entity accumulating all their meetings, while lab and problem-session
//! records stay standalone.

use serde::{Deserialize, Serialize};

use super::{slot_to_hour, RawSessionRecord, SessionKind, Weekday};

/// Semester identifier used in registration-site links.
const REGISTRATION_TERM: &str = "2025/2026-2";

/// One meeting of a course: day code, hour slot, room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// Raw catalog day code (see [`Weekday::from_code`]).
    pub day_code: String,
    /// Raw slot index; absolute hour = slot + 8.
    pub slot: u8,
    /// Room label, empty when unpublished.
    pub room: String,
}

impl Meeting {
    /// Creates a new meeting.
    pub fn new(day_code: impl Into<String>, slot: u8, room: impl Into<String>) -> Self {
        Self {
            day_code: day_code.into(),
            slot,
            room: room.into(),
        }
    }
}

/// A normalized course entity.
///
/// `grouping_key` is the merge identity: the trimmed course code for
/// lectures (so multi-record lectures collapse), the raw session key for
/// lab/problem-session entries (so they never collapse).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicalCourse {
    /// Merge identity within the catalog.
    pub grouping_key: String,
    /// Trimmed course code (e.g. `"CMPE 150.01"`).
    pub code: String,
    /// Course name.
    pub name: String,
    /// Local credit value.
    pub credits: Option<f64>,
    /// ECTS credit value.
    pub ects: Option<f64>,
    /// Instructor name.
    pub instructor: String,
    /// Session classification.
    pub kind: SessionKind,
    /// Accumulated meetings, positionally aligned day/slot/room.
    pub meetings: Vec<Meeting>,
}

impl LogicalCourse {
    /// Creates a course with the given identity and kind.
    pub fn new(
        grouping_key: impl Into<String>,
        code: impl Into<String>,
        kind: SessionKind,
    ) -> Self {
        Self {
            grouping_key: grouping_key.into(),
            code: code.into(),
            name: String::new(),
            credits: None,
            ects: None,
            instructor: String::new(),
            kind,
            meetings: Vec::new(),
        }
    }

    /// Sets the course name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the instructor name.
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = instructor.into();
        self
    }

    /// Sets local and ECTS credit values.
    pub fn with_credits(mut self, credits: f64, ects: f64) -> Self {
        self.credits = Some(credits);
        self.ects = Some(ects);
        self
    }

    /// Adds a meeting.
    pub fn with_meeting(mut self, meeting: Meeting) -> Self {
        self.meetings.push(meeting);
        self
    }

    /// Starts an empty lecture group carrying the record's metadata.
    ///
    /// Meetings are appended separately, record by record.
    pub(crate) fn lecture_group(code: &str, record: &RawSessionRecord) -> Self {
        Self {
            grouping_key: code.to_string(),
            code: code.to_string(),
            name: record.name.clone(),
            credits: record.credits,
            ects: record.ects,
            instructor: record.instructor.clone(),
            kind: SessionKind::Lecture,
            meetings: Vec::new(),
        }
    }

    /// Builds a standalone (lab/problem-session) course from one record.
    pub(crate) fn standalone(key: String, kind: SessionKind, record: &RawSessionRecord) -> Self {
        Self {
            grouping_key: key,
            code: record.code.trim().to_string(),
            name: record.name.clone(),
            credits: record.credits,
            ects: record.ects,
            instructor: record.instructor.clone(),
            kind,
            meetings: record.meetings(),
        }
    }

    /// Whether this course has any meetings to place on a grid.
    #[inline]
    pub fn has_meetings(&self) -> bool {
        !self.meetings.is_empty()
    }

    /// Renders the meeting list for display, e.g.
    /// `"Monday (10:00) / Tuesday (12:00)"`.
    ///
    /// Meetings with unmappable day codes are skipped.
    pub fn schedule_summary(&self) -> String {
        self.meetings
            .iter()
            .filter_map(|m| {
                let day = Weekday::from_code(&m.day_code)?;
                Some(format!("{} ({}:00)", day, slot_to_hour(m.slot)))
            })
            .collect::<Vec<_>>()
            .join(" / ")
    }

    /// Builds the registration-site course description URL.
    ///
    /// The code splits at its last `.` into course and section
    /// (`"MIS 214.01"` → course `MIS 214`, section `01`). Returns `None`
    /// when the code carries no section separator.
    pub fn description_url(&self) -> Option<String> {
        let code = self.code.trim();
        let dot = code.rfind('.')?;
        let course = code[..dot].replace(' ', "%20");
        let section = &code[dot + 1..];
        Some(format!(
            "https://registration.bogazici.edu.tr/scripts/schedule/coursedescription.asp?course={course}&section={section}&term={REGISTRATION_TERM}"
        ))
    }
}
