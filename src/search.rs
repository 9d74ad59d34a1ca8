//! Course search and ranking.
//!
//! Filters the normalized catalog by a live query string, annotates the
//! surviving lectures with conflict counts against the current
//! timetable, and orders the result.
//!
//! # Query Handling
//! Two reserved sentinel queries (see [`QUICK_FILTERS`]) select all
//! courses whose code carries a fixed prefix, bypassing substring
//! matching; these back the UI's quick-filter buttons. Otherwise the
//! query is trimmed and lowercased: empty yields nothing, 1–2 characters
//! match the course code only, 3 or more match code or name.
//!
//! Lab and problem-session entries never surface here; they attach
//! automatically when their lecture is added (see [`crate::planner`]).
//!
//! # Ordering
//! Ascending conflict count, then codes starting with the query before
//! codes merely containing it, then code order. The result is capped at
//! [`MAX_RESULTS`] after sorting. Given unchanged inputs the result is
//! identical call to call.

use crate::catalog::Catalog;
use crate::conflict::count_conflicts;
use crate::models::{LogicalCourse, Timetable};

/// Maximum number of results returned by [`search`].
pub const MAX_RESULTS: usize = 100;

/// Sentinel query → code prefix pairs backing the quick-filter buttons.
pub const QUICK_FILTERS: [(&str, &str); 2] = [("QUICK_TK", "TK"), ("QUICK_HTR", "HTR")];

/// Result-set filter applied after conflict annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchFilter {
    /// Keep every match.
    #[default]
    All,
    /// Keep only matches with zero conflicts.
    NoConflict,
}

/// One ranked search result: a catalog course plus its live conflict
/// count against the schedule the search ran with.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCourse<'a> {
    /// The matched course.
    pub course: &'a LogicalCourse,
    /// Meetings of `course` overlapping an already-scheduled meeting of
    /// a different course.
    pub conflict_count: usize,
}

/// Searches the catalog, annotating and ranking matches against the
/// current timetable.
pub fn search<'a>(
    query: &str,
    catalog: &'a Catalog,
    timetable: &Timetable,
    filter: SearchFilter,
) -> Vec<RankedCourse<'a>> {
    let term = query.trim().to_lowercase();

    let matched: Vec<&LogicalCourse> = if let Some(prefix) = quick_prefix(query) {
        catalog.iter().filter(|c| c.code.starts_with(prefix)).collect()
    } else if term.is_empty() {
        return Vec::new();
    } else if term.chars().count() < 3 {
        catalog
            .iter()
            .filter(|c| c.code.to_lowercase().contains(&term))
            .collect()
    } else {
        catalog
            .iter()
            .filter(|c| {
                c.code.to_lowercase().contains(&term) || c.name.to_lowercase().contains(&term)
            })
            .collect()
    };

    let mut results: Vec<RankedCourse<'a>> = matched
        .into_iter()
        .filter(|c| c.kind.is_lecture())
        .map(|course| RankedCourse {
            conflict_count: count_conflicts(course, timetable),
            course,
        })
        .filter(|r| filter == SearchFilter::All || r.conflict_count == 0)
        .collect();

    results.sort_by(|a, b| {
        a.conflict_count
            .cmp(&b.conflict_count)
            .then_with(|| {
                let a_starts = a.course.code.to_lowercase().starts_with(&term);
                let b_starts = b.course.code.to_lowercase().starts_with(&term);
                b_starts.cmp(&a_starts)
            })
            .then_with(|| a.course.code.cmp(&b.course.code))
    });
    results.truncate(MAX_RESULTS);
    results
}

/// Resolves a sentinel query to its code prefix.
fn quick_prefix(query: &str) -> Option<&'static str> {
    QUICK_FILTERS
        .iter()
        .find(|(sentinel, _)| *sentinel == query)
        .map(|&(_, prefix)| prefix)
}
