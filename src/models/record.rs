//! Raw catalog records and session-kind classification.
//!
//! The catalog is published as a flat JSON object mapping a session key
//! (e.g. `"CMPE 150.01"`, `"CMPE150.01 LAB 1"`) to one record per
//! section or dependent session. Records carry positionally aligned
//! `days`/`hours`/`rooms` sequences: index *i* across all three
//! describes one meeting.
//!
//! Session kind is inferred from marker substrings in the key exactly
//! once, at the catalog boundary; everything downstream switches on the
//! [`SessionKind`] tag, never on string content.

use serde::{Deserialize, Serialize};

use super::Meeting;

/// Classification of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionKind {
    /// A main lecture section. Lecture records sharing a course code
    /// merge into one logical course.
    Lecture,
    /// A lab session attached to a lecture. Never merged.
    Lab,
    /// A problem session attached to a lecture. Never merged.
    ProblemSession,
}

impl SessionKind {
    /// Classifies a session key by its marker substrings.
    pub fn from_key(key: &str) -> Self {
        if key.contains(" LAB ") || key.ends_with(" LAB") {
            return Self::Lab;
        }
        if key.contains(" P.S. ") || key.ends_with(" P.S.") {
            return Self::ProblemSession;
        }
        Self::Lecture
    }

    /// Whether this is a main lecture section.
    #[inline]
    pub fn is_lecture(&self) -> bool {
        matches!(self, Self::Lecture)
    }
}

/// One raw catalog entry, as published.
///
/// `days`, `hours`, and `rooms` may be missing or `null`; a missing
/// sequence is treated as empty. When present they are aligned by index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSessionRecord {
    /// Course code, possibly with surrounding whitespace (e.g. `"CMPE 150.01"`).
    pub code: String,
    /// Course name.
    pub name: String,
    /// Local credit value.
    pub credits: Option<f64>,
    /// ECTS credit value.
    pub ects: Option<f64>,
    /// Day code per meeting (see [`super::Weekday::from_code`]).
    pub days: Option<Vec<String>>,
    /// Slot index per meeting, aligned with `days`.
    pub hours: Option<Vec<u8>>,
    /// Instructor name.
    pub instructor: String,
    /// Room per meeting, aligned with `days`. Missing ⇒ empty strings.
    pub rooms: Option<Vec<String>>,
}

impl RawSessionRecord {
    /// Zips the aligned sequences into meeting triples.
    ///
    /// Truncates to the shorter of `days`/`hours`; missing rooms are
    /// padded with empty strings to preserve positional alignment.
    pub fn meetings(&self) -> Vec<Meeting> {
        let days = self.days.as_deref().unwrap_or_default();
        let hours = self.hours.as_deref().unwrap_or_default();
        let rooms = self.rooms.as_deref().unwrap_or_default();

        days.iter()
            .zip(hours.iter())
            .enumerate()
            .map(|(i, (day, &slot))| {
                Meeting::new(day.clone(), slot, rooms.get(i).cloned().unwrap_or_default())
            })
            .collect()
    }
}
