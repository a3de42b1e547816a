//! Timetable (solution) model.
//!
//! A timetable is the result of one generation run: the committed
//! course-lecturer-venue-timeslot assignments, a reason for every course
//! that could not be placed, and a status describing how the search ended.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::{CourseId, LecturerId, TimeslotId, VenueId};

/// The result of one generation run.
///
/// Every input course appears exactly once, either in `assignments` or in
/// `unscheduled`. Both lists are sorted by course ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timetable {
    /// Committed assignments (course → lecturer × venue × timeslot).
    pub assignments: Vec<Assignment>,
    /// Courses left without an assignment, each with a reason.
    pub unscheduled: Vec<Unscheduled>,
    /// How the search terminated.
    pub status: TimetableStatus,
    /// Search effort counters.
    #[serde(default)]
    pub stats: SearchStats,
}

/// A committed course-lecturer-venue-timeslot assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Scheduled course.
    pub course_id: CourseId,
    /// Teaching lecturer.
    pub lecturer_id: LecturerId,
    /// Hosting venue.
    pub venue_id: VenueId,
    /// Teaching period.
    pub timeslot_id: TimeslotId,
}

/// A course the engine could not place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unscheduled {
    /// The course left out.
    pub course_id: CourseId,
    /// Why it was left out.
    pub reason: UnscheduledReason,
}

/// Why a course has no assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UnscheduledReason {
    /// No lecturer could teach the course at any timeslot.
    NoAvailableLecturer,
    /// No venue meets the capacity threshold and lab requirement,
    /// independent of timeslot.
    NoSuitableVenue,
    /// A lecturer/venue pairing existed, but no timeslot had both free.
    NoFeasibleTimeslot,
    /// The node, time or cancellation bound stopped the search first.
    SearchBoundExceeded,
}

/// How a generation run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimetableStatus {
    /// Every course is assigned.
    #[default]
    Complete,
    /// A node, time or cancellation bound stopped the search.
    PartialBounded,
    /// The search space was fully explored; some courses cannot be placed.
    PartialExhausted,
}

/// Search effort counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    /// Search nodes entered.
    pub nodes_visited: u64,
    /// Commitments undone.
    pub backtracks: u64,
    /// Deepest number of simultaneous commitments reached.
    pub max_depth: u64,
}

/// A constraint breach found when auditing a timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    /// Type of breach.
    pub kind: ConflictKind,
    /// Course whose assignment is in breach.
    pub course_id: CourseId,
    /// Human-readable description.
    pub message: String,
}

/// Classification of timetable breaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConflictKind {
    /// Lecturer holds two courses in one timeslot.
    LecturerDoubleBooked,
    /// Venue holds two courses in one timeslot.
    VenueDoubleBooked,
    /// Lecturer is not available in the assigned timeslot.
    LecturerUnavailable,
    /// Venue fails the capacity threshold or the lab requirement.
    VenueUnsuitable,
    /// Assignment names a course, lecturer, venue or timeslot that does not exist.
    UnknownReference,
    /// Course is assigned more than once, or both assigned and unscheduled.
    DuplicateCourse,
    /// Course appears neither in the assignments nor in the unscheduled list.
    MissingCourse,
}

impl Assignment {
    /// Creates an assignment.
    pub fn new(
        course_id: CourseId,
        lecturer_id: LecturerId,
        venue_id: VenueId,
        timeslot_id: TimeslotId,
    ) -> Self {
        Self {
            course_id,
            lecturer_id,
            venue_id,
            timeslot_id,
        }
    }
}

impl UnscheduledReason {
    /// Human-readable explanation for administrators.
    pub fn message(self) -> &'static str {
        match self {
            UnscheduledReason::NoAvailableLecturer => {
                "no lecturer is available to teach this course"
            }
            UnscheduledReason::NoSuitableVenue => {
                "no venue meets the capacity threshold and lab requirement"
            }
            UnscheduledReason::NoFeasibleTimeslot => {
                "no timeslot has both a free lecturer and a free suitable venue"
            }
            UnscheduledReason::SearchBoundExceeded => {
                "search stopped at its node, time or cancellation bound"
            }
        }
    }
}

impl fmt::Display for UnscheduledReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Conflict {
    /// Creates a conflict record.
    pub fn new(kind: ConflictKind, course_id: CourseId, message: impl Into<String>) -> Self {
        Self {
            kind,
            course_id,
            message: message.into(),
        }
    }
}

impl Timetable {
    /// Creates an empty, complete timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an assignment, keeping the list sorted by course ID.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        let pos = self
            .assignments
            .partition_point(|a| a.course_id < assignment.course_id);
        self.assignments.insert(pos, assignment);
    }

    /// Records an unscheduled course, keeping the list sorted by course ID.
    pub fn add_unscheduled(&mut self, course_id: CourseId, reason: UnscheduledReason) {
        let pos = self.unscheduled.partition_point(|u| u.course_id < course_id);
        self.unscheduled
            .insert(pos, Unscheduled { course_id, reason });
    }

    /// Whether every course was assigned.
    pub fn is_complete(&self) -> bool {
        self.status == TimetableStatus::Complete && self.unscheduled.is_empty()
    }

    /// Finds the assignment for a given course.
    pub fn assignment_for_course(&self, course_id: CourseId) -> Option<&Assignment> {
        self.assignments
            .binary_search_by_key(&course_id, |a| a.course_id)
            .ok()
            .map(|i| &self.assignments[i])
    }

    /// Returns the reason a course was left unscheduled, if it was.
    pub fn unscheduled_reason(&self, course_id: CourseId) -> Option<UnscheduledReason> {
        self.unscheduled
            .binary_search_by_key(&course_id, |u| u.course_id)
            .ok()
            .map(|i| self.unscheduled[i].reason)
    }

    /// Returns all assignments taught by a lecturer.
    pub fn assignments_for_lecturer(&self, lecturer_id: LecturerId) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.lecturer_id == lecturer_id)
            .collect()
    }

    /// Returns all assignments held in a venue.
    pub fn assignments_for_venue(&self, venue_id: VenueId) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.venue_id == venue_id)
            .collect()
    }

    /// Returns all assignments in a timeslot.
    pub fn assignments_for_timeslot(&self, timeslot_id: TimeslotId) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.timeslot_id == timeslot_id)
            .collect()
    }

    /// Number of scheduled courses.
    pub fn scheduled_count(&self) -> usize {
        self.assignments.len()
    }

    /// Number of unscheduled courses.
    pub fn unscheduled_count(&self) -> usize {
        self.unscheduled.len()
    }

    /// Unscheduled course count per reason.
    pub fn unscheduled_by_reason(&self) -> BTreeMap<UnscheduledReason, usize> {
        let mut counts = BTreeMap::new();
        for u in &self.unscheduled {
            *counts.entry(u.reason).or_insert(0) += 1;
        }
        counts
    }
}
