//! Catalog normalization.
//!
//! Turns the flat raw session map into logical courses:
//! - Lecture records sharing a (trimmed) course code merge into one
//!   course accumulating all their meetings, supporting lectures whose
//!   sections meet several times a week across several records.
//! - Lab and problem-session records pass through one-to-one under
//!   their raw key and never merge.
//!
//! Normalization is a pure function over the input map; it never fails.
//! Malformed records (missing `days`/`hours`/`rooms`) contribute empty
//! meeting lists instead of errors. Output order is unspecified;
//! ranking happens downstream in [`crate::search`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{LogicalCourse, RawSessionRecord, SessionKind};

/// The normalized course catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    courses: Vec<LogicalCourse>,
}

impl Catalog {
    /// Normalizes a raw session map into logical courses.
    ///
    /// For merged lectures, the first record seen for a code supplies
    /// the name/instructor/credit metadata; subsequent records only
    /// append meetings.
    pub fn from_records(records: &HashMap<String, RawSessionRecord>) -> Self {
        let mut grouped: HashMap<String, LogicalCourse> = HashMap::new();

        for (key, record) in records {
            let kind = SessionKind::from_key(key);

            if !kind.is_lecture() {
                grouped.insert(
                    key.clone(),
                    LogicalCourse::standalone(key.clone(), kind, record),
                );
                continue;
            }

            let code = record.code.trim().to_string();
            let entry = grouped
                .entry(code.clone())
                .or_insert_with(|| LogicalCourse::lecture_group(&code, record));
            entry.meetings.extend(record.meetings());
        }

        Self {
            courses: grouped.into_values().collect(),
        }
    }

    /// Builds a catalog from already-normalized courses.
    pub fn from_courses(courses: Vec<LogicalCourse>) -> Self {
        Self { courses }
    }

    /// All logical courses, in unspecified order.
    pub fn courses(&self) -> &[LogicalCourse] {
        &self.courses
    }

    /// Iterates over all logical courses.
    pub fn iter(&self) -> impl Iterator<Item = &LogicalCourse> {
        self.courses.iter()
    }

    /// Finds a course by its grouping key.
    pub fn get(&self, grouping_key: &str) -> Option<&LogicalCourse> {
        self.courses.iter().find(|c| c.grouping_key == grouping_key)
    }

    /// All lab/problem-session courses attached to the given lecture code.
    ///
    /// Dependents are matched by exact equality of their own (trimmed)
    /// course code with `code`.
    pub fn dependents_of<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a LogicalCourse> {
        self.courses
            .iter()
            .filter(move |c| !c.kind.is_lecture() && c.code == code)
    }

    /// Number of logical courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog holds no courses.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
