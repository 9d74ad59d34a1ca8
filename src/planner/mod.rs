//! Timetable assembly.
//!
//! The [`Planner`] is the single writer of the schedule: it expands a
//! logical course into concrete scheduled meetings, attaches the
//! lecture's dependent lab/problem-session courses, and removes courses
//! by instance or by code.
//!
//! # Algorithm (add)
//!
//! 1. Resolve the grouping key in the catalog; fail with
//!    `UnknownCourse` if absent, `NoSchedule` if the course has no
//!    meetings. No mutation on failure.
//! 2. Stage one [`ScheduledMeeting`] per mappable meeting, all sharing
//!    one base color chosen for this add.
//! 3. For a lecture, stage every dependent of its trimmed code the same
//!    way, each dependent with its own kind-appropriate color.
//! 4. Append the staged meetings to the timetable in one step; an add
//!    is all-or-nothing with respect to the lecture and its dependents.

mod color;

pub use color::{
    color_for, ColorSource, RandomColors, RoundRobinColors, LAB_COLOR, PALETTE, PS_COLOR,
};

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::PlanError;
use crate::models::{slot_to_hour, LogicalCourse, ScheduledMeeting, Timetable, Weekday};
use crate::search::{search, RankedCourse, SearchFilter};

/// Assembles the weekly plan from catalog courses.
///
/// Owns the catalog, the timetable, the lecture color source, and the
/// instance-id counter. All schedule mutations go through here.
///
/// # Example
///
/// ```
/// use course_planner::catalog::Catalog;
/// use course_planner::models::{LogicalCourse, Meeting, SessionKind};
/// use course_planner::planner::Planner;
///
/// let course = LogicalCourse::new("MATH 101.01", "MATH 101.01", SessionKind::Lecture)
///     .with_name("Calculus I")
///     .with_meeting(Meeting::new("M", 2, "B101"));
/// let mut planner = Planner::new(Catalog::from_courses(vec![course]));
///
/// planner.add("MATH 101.01").unwrap();
/// assert!(planner.is_scheduled("MATH 101.01"));
/// assert_eq!(planner.timetable().len(), 1);
/// ```
#[derive(Debug)]
pub struct Planner {
    catalog: Catalog,
    timetable: Timetable,
    colors: Box<dyn ColorSource>,
    next_instance: u64,
}

impl Planner {
    /// Creates a planner over the given catalog with an empty timetable
    /// and OS-seeded lecture colors.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            timetable: Timetable::new(),
            colors: Box::new(RandomColors::new()),
            next_instance: 1,
        }
    }

    /// Replaces the lecture color source.
    pub fn with_color_source(mut self, source: Box<dyn ColorSource>) -> Self {
        self.colors = source;
        self
    }

    /// The normalized catalog this planner draws from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current plan.
    pub fn timetable(&self) -> &Timetable {
        &self.timetable
    }

    /// Whether any scheduled meeting carries the given code.
    pub fn is_scheduled(&self, code: &str) -> bool {
        self.timetable.is_scheduled(code)
    }

    /// Searches the catalog against the current plan.
    pub fn search(&self, query: &str, filter: SearchFilter) -> Vec<RankedCourse<'_>> {
        search(query, &self.catalog, &self.timetable, filter)
    }

    /// Adds a course (and, for lectures, its dependents) to the plan.
    ///
    /// Fails without mutating when the key is unknown or the course has
    /// no meetings. A dependent without meetings contributes nothing and
    /// is not an error. Meetings with unmappable day codes are skipped.
    pub fn add(&mut self, grouping_key: &str) -> Result<(), PlanError> {
        let course = self
            .catalog
            .get(grouping_key)
            .cloned()
            .ok_or_else(|| PlanError::UnknownCourse(grouping_key.to_string()))?;

        if !course.has_meetings() {
            return Err(PlanError::NoSchedule(course.code.clone()));
        }

        let mut staged = Vec::new();
        let base = color_for(course.kind, self.colors.as_mut());
        self.expand(&course, base, &mut staged);

        if course.kind.is_lecture() {
            let dependents: Vec<LogicalCourse> = self
                .catalog
                .dependents_of(course.code.trim())
                .cloned()
                .collect();
            for dependent in &dependents {
                let dependent_color = color_for(dependent.kind, self.colors.as_mut());
                self.expand(dependent, dependent_color, &mut staged);
            }
        }

        debug!("added {} meeting(s) for {}", staged.len(), course.code);
        self.timetable.extend(staged);
        Ok(())
    }

    /// Removes exactly one scheduled meeting; no-op if absent.
    pub fn remove_by_instance(&mut self, instance_id: u64) {
        self.timetable.remove_by_instance(instance_id);
    }

    /// Removes every scheduled meeting with the given code.
    ///
    /// Dependents attached by [`Planner::add`] carry their own record's
    /// code, which equals the parent lecture's, so removing the parent
    /// code clears its attached lab/problem-session meetings too.
    pub fn remove_by_code(&mut self, code: &str) {
        debug!("removing all meetings for {}", code);
        self.timetable.remove_by_code(code);
    }

    /// Empties the plan.
    pub fn clear(&mut self) {
        debug!("clearing timetable");
        self.timetable.clear();
    }

    /// Stages one scheduled meeting per mappable meeting of `course`,
    /// all with the same base color.
    fn expand(&mut self, course: &LogicalCourse, color: &str, staged: &mut Vec<ScheduledMeeting>) {
        for meeting in &course.meetings {
            let day = match Weekday::from_code(&meeting.day_code) {
                Some(day) => day,
                None => continue,
            };

            staged.push(ScheduledMeeting {
                instance_id: self.next_instance_id(),
                code: course.code.clone(),
                name: course.name.clone(),
                day,
                start_hour: slot_to_hour(meeting.slot),
                duration_hours: 1,
                color: color.to_string(),
                instructor: course.instructor.clone(),
                room: meeting.room.clone(),
                kind: course.kind,
            });
        }
    }

    fn next_instance_id(&mut self) -> u64 {
        let id = self.next_instance;
        self.next_instance += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RawSessionRecord, SessionKind};
    use std::collections::HashMap;

    fn raw(code: &str, days: Vec<&str>, hours: Vec<u8>) -> RawSessionRecord {
        RawSessionRecord {
            code: code.into(),
            name: "Sample Course".into(),
            credits: Some(3.0),
            ects: Some(6.0),
            days: Some(days.into_iter().map(String::from).collect()),
            hours: Some(hours),
            instructor: "A. Instructor".into(),
            rooms: None,
        }
    }

    fn raw_unscheduled(code: &str) -> RawSessionRecord {
        RawSessionRecord {
            code: code.into(),
            name: "Unscheduled Course".into(),
            credits: None,
            ects: None,
            days: None,
            hours: None,
            instructor: String::new(),
            rooms: None,
        }
    }

    /// Lecture "CMPE 150.01" (Monday slot 2) with an attached lab
    /// (Tuesday slot 4) and an unrelated lecture.
    fn sample_planner() -> Planner {
        let mut records = HashMap::new();
        records.insert("CMPE 150.01".to_string(), raw("CMPE 150.01", vec!["M"], vec![2]));
        records.insert(
            "CMPE150.01 LAB 1".to_string(),
            raw("CMPE 150.01", vec!["T"], vec![4]),
        );
        records.insert("MATH 101.01".to_string(), raw("MATH 101.01", vec!["W"], vec![3]));
        records.insert("HTR 311.01".to_string(), raw_unscheduled("HTR 311.01"));

        Planner::new(Catalog::from_records(&records))
            .with_color_source(Box::new(RoundRobinColors::new()))
    }

    #[test]
    fn test_add_lecture_schedules_dependents() {
        let mut planner = sample_planner();
        planner.add("CMPE 150.01").unwrap();

        let timetable = planner.timetable();
        assert_eq!(timetable.len(), 2);

        let lecture = timetable
            .meetings()
            .iter()
            .find(|m| m.kind.is_lecture())
            .unwrap();
        assert_eq!(lecture.day, Weekday::Monday);
        assert_eq!(lecture.start_hour, 10);
        assert_eq!(lecture.duration_hours, 1);

        let lab = timetable
            .meetings()
            .iter()
            .find(|m| m.kind == SessionKind::Lab)
            .unwrap();
        assert_eq!(lab.day, Weekday::Tuesday);
        assert_eq!(lab.start_hour, 12);
        assert_eq!(lab.code, "CMPE 150.01");
    }

    #[test]
    fn test_kind_colors() {
        let mut planner = sample_planner();
        planner.add("CMPE 150.01").unwrap();

        let meetings = planner.timetable().meetings();
        let lecture = meetings.iter().find(|m| m.kind.is_lecture()).unwrap();
        let lab = meetings.iter().find(|m| m.kind == SessionKind::Lab).unwrap();
        assert_eq!(lecture.color, PALETTE[0]);
        assert_eq!(lab.color, LAB_COLOR);
    }

    #[test]
    fn test_lecture_color_rerolled_per_add() {
        let mut planner = sample_planner();
        planner.add("CMPE 150.01").unwrap();
        planner.add("MATH 101.01").unwrap();

        let math = planner.timetable().meetings_for_code("MATH 101.01");
        assert_eq!(math[0].color, PALETTE[1]);
    }

    #[test]
    fn test_add_unknown_course() {
        let mut planner = sample_planner();
        assert_eq!(
            planner.add("NOPE 1.01"),
            Err(PlanError::UnknownCourse("NOPE 1.01".into()))
        );
        assert!(planner.timetable().is_empty());
    }

    #[test]
    fn test_add_without_meetings_leaves_plan_unchanged() {
        let mut planner = sample_planner();
        planner.add("MATH 101.01").unwrap();
        let before = planner.timetable().clone();

        assert_eq!(
            planner.add("HTR 311.01"),
            Err(PlanError::NoSchedule("HTR 311.01".into()))
        );
        assert_eq!(planner.timetable(), &before);
    }

    #[test]
    fn test_remove_by_code_clears_dependents() {
        let mut planner = sample_planner();
        planner.add("CMPE 150.01").unwrap();
        assert_eq!(planner.timetable().len(), 2);

        planner.remove_by_code("CMPE 150.01");
        assert!(planner.timetable().is_empty());
        assert!(!planner.is_scheduled("CMPE 150.01"));
    }

    #[test]
    fn test_remove_by_code_absent_is_noop() {
        let mut planner = sample_planner();
        planner.add("MATH 101.01").unwrap();
        planner.remove_by_code("CHEM 110.01");
        assert_eq!(planner.timetable().len(), 1);
    }

    #[test]
    fn test_remove_by_instance() {
        let mut planner = sample_planner();
        planner.add("CMPE 150.01").unwrap();

        let lab_id = planner
            .timetable()
            .meetings()
            .iter()
            .find(|m| m.kind == SessionKind::Lab)
            .unwrap()
            .instance_id;
        planner.remove_by_instance(lab_id);

        assert_eq!(planner.timetable().len(), 1);
        // The lecture block remains, so the course still counts as added
        assert!(planner.is_scheduled("CMPE 150.01"));
    }

    #[test]
    fn test_clear() {
        let mut planner = sample_planner();
        planner.add("CMPE 150.01").unwrap();
        planner.add("MATH 101.01").unwrap();
        planner.clear();
        assert!(planner.timetable().is_empty());
    }

    #[test]
    fn test_instance_ids_are_unique_and_fresh_per_add() {
        let mut planner = sample_planner();
        planner.add("CMPE 150.01").unwrap();
        planner.remove_by_code("CMPE 150.01");
        planner.add("CMPE 150.01").unwrap();

        let ids: Vec<u64> = planner
            .timetable()
            .meetings()
            .iter()
            .map(|m| m.instance_id)
            .collect();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
        // Re-adding issues fresh ids, never reusing the removed ones
        assert!(ids.iter().all(|&id| id > 2));
    }

    #[test]
    fn test_unmappable_days_are_skipped() {
        let mut records = HashMap::new();
        records.insert(
            "GEO 101.01".to_string(),
            raw("GEO 101.01", vec!["M", "??"], vec![2, 3]),
        );
        let mut planner = Planner::new(Catalog::from_records(&records));

        planner.add("GEO 101.01").unwrap();
        assert_eq!(planner.timetable().len(), 1);
        assert_eq!(planner.timetable().meetings()[0].day, Weekday::Monday);
    }

    #[test]
    fn test_all_unmappable_days_still_succeeds() {
        let mut records = HashMap::new();
        records.insert(
            "GEO 102.01".to_string(),
            raw("GEO 102.01", vec!["??"], vec![2]),
        );
        let mut planner = Planner::new(Catalog::from_records(&records));

        planner.add("GEO 102.01").unwrap();
        assert!(planner.timetable().is_empty());
    }

    #[test]
    fn test_search_facade_sees_latest_plan() {
        let mut planner = sample_planner();
        planner.add("CMPE 150.01").unwrap();

        // MATH 101.01 meets Wednesday slot 3; no overlap with the plan
        let results = planner.search("math", SearchFilter::All);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].conflict_count, 0);

        // A course on Monday slot 2 would conflict with the lecture
        let results = planner.search("cmpe", SearchFilter::All);
        assert_eq!(results.len(), 1);
        // Own code never conflicts with its own scheduled meetings
        assert_eq!(results[0].conflict_count, 0);
    }

    #[test]
    fn test_seeded_colors_are_deterministic() {
        let build = || {
            let mut records = HashMap::new();
            records.insert("CMPE 150.01".to_string(), raw("CMPE 150.01", vec!["M"], vec![2]));
            records.insert("MATH 101.01".to_string(), raw("MATH 101.01", vec!["W"], vec![3]));
            let mut planner = Planner::new(Catalog::from_records(&records))
                .with_color_source(Box::new(RandomColors::seeded(42)));
            planner.add("CMPE 150.01").unwrap();
            planner.add("MATH 101.01").unwrap();
            planner
        };

        let a = build();
        let b = build();
        let colors = |p: &Planner| {
            p.timetable()
                .meetings()
                .iter()
                .map(|m| m.color.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(colors(&a), colors(&b));
        assert!(colors(&a).iter().all(|c| PALETTE.contains(&c.as_str())));
    }
}
