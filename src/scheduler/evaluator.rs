//! Constraint evaluation.
//!
//! A candidate (lecturer, venue, timeslot) is legal for a course iff all
//! four predicates hold:
//!
//! 1. **Lecturer free**: the lecturer has no committed course in the timeslot.
//! 2. **Venue free**: the venue has no committed course in the timeslot.
//! 3. **Lecturer available**: the timeslot is in the lecturer's effective
//!    availability.
//! 4. **Venue suitable**: capacity ≥ the minimum threshold, and lab-required
//!    courses only go to labs.
//!
//! Predicates 1-2 read a [`BusyIndex`]; 3-4 depend only on the snapshot.
//! Every check is O(1).

use std::collections::HashSet;

use crate::models::{Conflict, ConflictKind, Course, Timeslot, Timetable, Venue};
use crate::snapshot::DomainSnapshot;

/// A candidate triple, by snapshot position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Candidate {
    pub lecturer: usize,
    pub venue: usize,
    pub timeslot: usize,
}

/// Committed occupancy: busy-lecturer-by-timeslot and busy-venue-by-timeslot.
///
/// Dense row-major tables holding the occupying course position.
#[derive(Debug, Clone)]
pub(crate) struct BusyIndex {
    n_slots: usize,
    lecturer: Vec<Option<usize>>,
    venue: Vec<Option<usize>>,
}

impl BusyIndex {
    pub fn new(snapshot: &DomainSnapshot) -> Self {
        let n_slots = snapshot.timeslots().len();
        Self {
            n_slots,
            lecturer: vec![None; snapshot.lecturers().len() * n_slots],
            venue: vec![None; snapshot.venues().len() * n_slots],
        }
    }

    #[inline]
    pub fn lecturer_at(&self, lecturer: usize, timeslot: usize) -> Option<usize> {
        self.lecturer[lecturer * self.n_slots + timeslot]
    }

    #[inline]
    pub fn venue_at(&self, venue: usize, timeslot: usize) -> Option<usize> {
        self.venue[venue * self.n_slots + timeslot]
    }

    pub fn occupy(&mut self, course: usize, c: Candidate) {
        self.lecturer[c.lecturer * self.n_slots + c.timeslot] = Some(course);
        self.venue[c.venue * self.n_slots + c.timeslot] = Some(course);
    }

    pub fn vacate(&mut self, c: Candidate) {
        self.lecturer[c.lecturer * self.n_slots + c.timeslot] = None;
        self.venue[c.venue * self.n_slots + c.timeslot] = None;
    }
}

/// Decides legality of candidates against a snapshot and a capacity threshold.
///
/// Holds no search state; committed assignments are passed in.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintEvaluator<'a> {
    snapshot: &'a DomainSnapshot,
    min_venue_capacity: i32,
}

impl<'a> ConstraintEvaluator<'a> {
    /// Creates an evaluator.
    pub fn new(snapshot: &'a DomainSnapshot, min_venue_capacity: i32) -> Self {
        Self {
            snapshot,
            min_venue_capacity,
        }
    }

    /// The capacity threshold in force.
    pub fn min_venue_capacity(&self) -> i32 {
        self.min_venue_capacity
    }

    /// Predicate 4: the venue meets the capacity threshold and, for
    /// lab-required courses, is a lab.
    pub fn venue_suitable(&self, course: &Course, venue: &Venue) -> bool {
        venue.capacity >= self.min_venue_capacity && (!course.lab_required || venue.is_lab())
    }

    /// Predicate 1.
    #[inline]
    pub(crate) fn lecturer_free(&self, busy: &BusyIndex, lecturer: usize, timeslot: usize) -> bool {
        busy.lecturer_at(lecturer, timeslot).is_none()
    }

    /// Predicate 2.
    #[inline]
    pub(crate) fn venue_free(&self, busy: &BusyIndex, venue: usize, timeslot: usize) -> bool {
        busy.venue_at(venue, timeslot).is_none()
    }

    /// Predicate 3.
    #[inline]
    pub(crate) fn lecturer_available(&self, lecturer: usize, timeslot: usize) -> bool {
        self.snapshot.available_at(lecturer, timeslot)
    }

    /// All four predicates for a course position and candidate.
    pub(crate) fn is_legal(&self, course: usize, c: Candidate, busy: &BusyIndex) -> bool {
        self.lecturer_free(busy, c.lecturer, c.timeslot)
            && self.venue_free(busy, c.venue, c.timeslot)
            && self.lecturer_available(c.lecturer, c.timeslot)
            && self.venue_suitable(
                &self.snapshot.courses()[course],
                &self.snapshot.venues()[c.venue],
            )
    }

    /// Re-checks a timetable against the snapshot.
    ///
    /// Reports every assignment that breaks a predicate or names an unknown
    /// entity, every course assigned twice or both assigned and unscheduled,
    /// and every snapshot course that appears in neither list. Assignments
    /// are checked in list order; for double bookings the later assignment
    /// is the one reported.
    pub fn audit(&self, timetable: &Timetable) -> Vec<Conflict> {
        let snapshot = self.snapshot;
        let mut conflicts = Vec::new();
        let mut busy = BusyIndex::new(snapshot);
        let mut seen = HashSet::new();

        for a in &timetable.assignments {
            if !seen.insert(a.course_id) {
                conflicts.push(Conflict::new(
                    ConflictKind::DuplicateCourse,
                    a.course_id,
                    format!("course {} is assigned more than once", a.course_id),
                ));
                continue;
            }

            let positions = (
                snapshot.course_position(a.course_id),
                snapshot.lecturer_position(a.lecturer_id),
                snapshot.venue_position(a.venue_id),
                snapshot.timeslot_position(a.timeslot_id),
            );
            let (Some(course), Some(lecturer), Some(venue), Some(timeslot)) = positions else {
                conflicts.push(Conflict::new(
                    ConflictKind::UnknownReference,
                    a.course_id,
                    format!(
                        "assignment (course {}, lecturer {}, venue {}, timeslot {}) names an unknown entity",
                        a.course_id, a.lecturer_id, a.venue_id, a.timeslot_id
                    ),
                ));
                continue;
            };
            let c = Candidate {
                lecturer,
                venue,
                timeslot,
            };

            let slot = describe_slot(&snapshot.timeslots()[timeslot]);
            if !self.lecturer_free(&busy, lecturer, timeslot) {
                conflicts.push(Conflict::new(
                    ConflictKind::LecturerDoubleBooked,
                    a.course_id,
                    format!("lecturer {} already teaches in timeslot {slot}", a.lecturer_id),
                ));
            }
            if !self.venue_free(&busy, venue, timeslot) {
                conflicts.push(Conflict::new(
                    ConflictKind::VenueDoubleBooked,
                    a.course_id,
                    format!("venue {} is already occupied in timeslot {slot}", a.venue_id),
                ));
            }
            if !self.lecturer_available(lecturer, timeslot) {
                conflicts.push(Conflict::new(
                    ConflictKind::LecturerUnavailable,
                    a.course_id,
                    format!("lecturer {} is not available in timeslot {slot}", a.lecturer_id),
                ));
            }
            if !self.venue_suitable(&snapshot.courses()[course], &snapshot.venues()[venue]) {
                conflicts.push(Conflict::new(
                    ConflictKind::VenueUnsuitable,
                    a.course_id,
                    format!(
                        "venue {} does not meet the capacity or lab requirement",
                        a.venue_id
                    ),
                ));
            }

            if busy.lecturer_at(lecturer, timeslot).is_none()
                && busy.venue_at(venue, timeslot).is_none()
            {
                busy.occupy(course, c);
            }
        }

        for u in &timetable.unscheduled {
            if !seen.insert(u.course_id) {
                conflicts.push(Conflict::new(
                    ConflictKind::DuplicateCourse,
                    u.course_id,
                    format!(
                        "course {} is listed as both scheduled and unscheduled, or unscheduled twice",
                        u.course_id
                    ),
                ));
            }
        }

        for course in snapshot.courses() {
            if !seen.contains(&course.id) {
                conflicts.push(Conflict::new(
                    ConflictKind::MissingCourse,
                    course.id,
                    format!("course {} is neither scheduled nor unscheduled", course.id),
                ));
            }
        }

        conflicts
    }
}

/// Timeslot reference for conflict messages, e.g. `3 (Tuesday 08:00 - 10:00)`.
fn describe_slot(t: &Timeslot) -> String {
    format!("{} ({} {})", t.id, t.day_of_week, t.label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Assignment, Availability, DayOfWeek, Lecturer, Timeslot, UnscheduledReason,
    };

    fn snapshot() -> DomainSnapshot {
        DomainSnapshot::new(
            &[
                Course::new(1, "Algebra"),
                Course::new(2, "Circuits Lab").with_lab_required(true),
            ],
            &[Lecturer::new(1, "Dr. Adeyemi"), Lecturer::new(2, "Dr. Novak")],
            &[
                Venue::lecture_hall(1, 100).with_name("Hall"),
                Venue::lab(2, 40).with_name("Lab"),
                Venue::lab(3, 12).with_name("Small Lab"),
            ],
            &[
                Timeslot::new(1, DayOfWeek::Monday, "08:00", "10:00"),
                Timeslot::new(2, DayOfWeek::Monday, "10:00", "12:00"),
            ],
            &[Availability::new(2, 2)],
        )
        .unwrap()
    }

    #[test]
    fn test_venue_suitability() {
        let s = snapshot();
        let eval = ConstraintEvaluator::new(&s, 30);
        let algebra = s.course(1).unwrap();
        let lab_course = s.course(2).unwrap();

        assert!(eval.venue_suitable(algebra, s.venue(1).unwrap()));
        assert!(eval.venue_suitable(algebra, s.venue(2).unwrap()));
        assert!(!eval.venue_suitable(algebra, s.venue(3).unwrap())); // too small
        assert!(!eval.venue_suitable(lab_course, s.venue(1).unwrap())); // not a lab
        assert!(eval.venue_suitable(lab_course, s.venue(2).unwrap()));

        let lenient = ConstraintEvaluator::new(&s, 10);
        assert!(lenient.venue_suitable(lab_course, s.venue(3).unwrap()));
    }

    #[test]
    fn test_occupancy_predicates() {
        let s = snapshot();
        let eval = ConstraintEvaluator::new(&s, 30);
        let mut busy = BusyIndex::new(&s);
        let c = Candidate {
            lecturer: 0,
            venue: 0,
            timeslot: 0,
        };
        assert!(eval.is_legal(0, c, &busy));

        busy.occupy(0, c);
        assert!(!eval.lecturer_free(&busy, 0, 0));
        assert!(!eval.venue_free(&busy, 0, 0));
        assert!(eval.lecturer_free(&busy, 0, 1));
        assert!(eval.venue_free(&busy, 1, 0));
        assert!(!eval.is_legal(0, c, &busy));

        busy.vacate(c);
        assert!(eval.is_legal(0, c, &busy));
    }

    #[test]
    fn test_availability_predicate() {
        let s = snapshot();
        let eval = ConstraintEvaluator::new(&s, 30);
        // Lecturer 2 (position 1) is only available in timeslot 2 (position 1).
        assert!(!eval.lecturer_available(1, 0));
        assert!(eval.lecturer_available(1, 1));
        // Lecturer 1 has no records.
        assert!(eval.lecturer_available(0, 0));
    }

    #[test]
    fn test_audit_clean() {
        let s = snapshot();
        let eval = ConstraintEvaluator::new(&s, 30);
        let mut t = Timetable::new();
        t.add_assignment(Assignment::new(1, 1, 1, 1));
        t.add_assignment(Assignment::new(2, 2, 2, 2));
        assert!(eval.audit(&t).is_empty());
    }

    #[test]
    fn test_audit_reports_breaches() {
        let s = snapshot();
        let eval = ConstraintEvaluator::new(&s, 30);
        let mut t = Timetable::new();
        t.add_assignment(Assignment::new(1, 2, 1, 1)); // lecturer 2 unavailable at 1
        t.add_assignment(Assignment::new(2, 2, 1, 1)); // double booked + hall is not a lab
        let conflicts = eval.audit(&t);
        assert_eq!(
            conflicts[0].message,
            "lecturer 2 is not available in timeslot 1 (Monday 08:00 - 10:00)"
        );
        let kinds: Vec<_> = conflicts.into_iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ConflictKind::LecturerUnavailable,
                ConflictKind::LecturerDoubleBooked,
                ConflictKind::VenueDoubleBooked,
                ConflictKind::LecturerUnavailable,
                ConflictKind::VenueUnsuitable,
            ]
        );
    }

    #[test]
    fn test_audit_completeness() {
        let s = snapshot();
        let eval = ConstraintEvaluator::new(&s, 30);
        let mut t = Timetable::new();
        t.add_assignment(Assignment::new(1, 1, 1, 1));
        t.add_unscheduled(1, UnscheduledReason::NoFeasibleTimeslot);
        t.add_assignment(Assignment::new(9, 1, 1, 2));

        let conflicts = eval.audit(&t);
        let kinds: Vec<_> = conflicts.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ConflictKind::UnknownReference,
                ConflictKind::DuplicateCourse,
                ConflictKind::MissingCourse,
            ]
        );
        assert_eq!(conflicts[2].course_id, 2);
    }
}
