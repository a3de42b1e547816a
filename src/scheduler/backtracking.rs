//! Backtracking timetable search.
//!
//! # Algorithm
//!
//! 1. Pre-prune: courses with no static candidate (no lecturer at all, or
//!    no suitable venue) are reported immediately and never searched.
//! 2. Select the unassigned course with the fewest live candidates (MRV),
//!    ties by ascending course ID.
//! 3. Enumerate its legal candidates timeslot-major, then stably sort by
//!    (lecturer open slots, venue open slots) so scarce resources go first.
//! 4. Commit the first candidate and descend. A course with zero live
//!    candidates triggers a backtrack to the most recent commitment's next
//!    candidate.
//! 5. Stop on completion, exhaustion, or the node/time/cancellation budget.
//!
//! The search uses an explicit stack, so depth is bounded only by the
//! number of courses, not by the call stack.
//!
//! # Live counts
//! Legal candidates for a course at timeslot `t` are the free available
//! lecturers at `t` times the free eligible venues at `t`. Both factors are
//! kept as counters updated on commit/undo, and the venue factor depends
//! only on the course's venue profile, so one MRV pass costs
//! O(profiles × timeslots + courses).
//!
//! # Reference
//! Russell & Norvig (2021), "Artificial Intelligence: A Modern Approach",
//! Ch. 6: Constraint Satisfaction Problems

use tracing::{debug, info, trace, warn};

use crate::error::EngineError;
use crate::models::{Assignment, SearchStats, Timetable, TimetableStatus, UnscheduledReason};
use crate::snapshot::DomainSnapshot;

use super::budget::{CancellationToken, SearchBudget, StopReason};
use super::candidates::CandidateIndex;
use super::evaluator::{BusyIndex, Candidate, ConstraintEvaluator};
use super::request::{GenerateRequest, SearchConfig};

/// Deterministic backtracking scheduler.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Course, DayOfWeek, Lecturer, Timeslot, TimetableStatus, Venue};
/// use u_timetable::scheduler::{BacktrackingScheduler, GenerateRequest};
///
/// let request = GenerateRequest::new(
///     vec![Course::new(1, "Compilers")],
///     vec![Lecturer::new(1, "Dr. Okafor")],
///     vec![Venue::lecture_hall(1, 60).with_name("Hall A")],
///     vec![Timeslot::new(1, DayOfWeek::Monday, "08:00", "10:00")],
/// );
///
/// let timetable = BacktrackingScheduler::new().generate(&request).unwrap();
/// assert_eq!(timetable.status, TimetableStatus::Complete);
/// assert_eq!(timetable.scheduled_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BacktrackingScheduler {
    cancel: Option<CancellationToken>,
}

/// One committed decision on the explicit search stack.
#[derive(Debug)]
struct Frame {
    course: usize,
    candidates: Vec<Candidate>,
    /// Index of the next untried candidate.
    next: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Complete,
    Exhausted,
    Bounded(StopReason),
}

/// Mutable search state over snapshot positions.
struct SearchState<'a> {
    snapshot: &'a DomainSnapshot,
    evaluator: ConstraintEvaluator<'a>,
    index: &'a CandidateIndex,
    busy: BusyIndex,
    assigned: Vec<Option<Candidate>>,
    /// Courses the selector may still pick.
    open: Vec<bool>,
    depth: usize,
    /// Free available lecturers per timeslot.
    free_lecturers: Vec<u64>,
    /// Free eligible venues per (profile, timeslot).
    free_profile_venues: Vec<Vec<u64>>,
    /// Remaining free available timeslots per lecturer.
    lecturer_open: Vec<u64>,
    /// Remaining free timeslots per venue.
    venue_open: Vec<u64>,
}

impl<'a> SearchState<'a> {
    fn new(
        snapshot: &'a DomainSnapshot,
        evaluator: ConstraintEvaluator<'a>,
        index: &'a CandidateIndex,
        open: Vec<bool>,
    ) -> Self {
        let n_slots = snapshot.timeslots().len();
        let free_lecturers = (0..n_slots)
            .map(|t| index.lecturers_at(t).len() as u64)
            .collect();
        let free_profile_venues = (0..index.profile_count())
            .map(|p| vec![index.profile_venues(p).len() as u64; n_slots])
            .collect();
        let lecturer_open = (0..snapshot.lecturers().len())
            .map(|l| snapshot.available_slots(l).len() as u64)
            .collect();
        let venue_open = vec![n_slots as u64; snapshot.venues().len()];

        Self {
            snapshot,
            evaluator,
            index,
            busy: BusyIndex::new(snapshot),
            assigned: vec![None; snapshot.courses().len()],
            open,
            depth: 0,
            free_lecturers,
            free_profile_venues,
            lecturer_open,
            venue_open,
        }
    }

    fn commit(&mut self, course: usize, c: Candidate) {
        self.busy.occupy(course, c);
        self.free_lecturers[c.timeslot] -= 1;
        for &p in self.index.venue_profiles(c.venue) {
            self.free_profile_venues[p][c.timeslot] -= 1;
        }
        self.lecturer_open[c.lecturer] -= 1;
        self.venue_open[c.venue] -= 1;
        self.assigned[course] = Some(c);
        self.depth += 1;
    }

    fn undo(&mut self, course: usize) {
        let Some(c) = self.assigned[course].take() else {
            return;
        };
        self.busy.vacate(c);
        self.free_lecturers[c.timeslot] += 1;
        for &p in self.index.venue_profiles(c.venue) {
            self.free_profile_venues[p][c.timeslot] += 1;
        }
        self.lecturer_open[c.lecturer] += 1;
        self.venue_open[c.venue] += 1;
        self.depth -= 1;
    }

    /// Live candidate count for every venue profile.
    fn profile_counts(&self) -> Vec<u64> {
        self.free_profile_venues
            .iter()
            .map(|venues| {
                venues
                    .iter()
                    .zip(&self.free_lecturers)
                    .map(|(v, l)| v * l)
                    .sum()
            })
            .collect()
    }

    /// Most constrained open, unassigned course and its live count.
    fn select(&self) -> Option<(usize, u64)> {
        let counts = self.profile_counts();
        let mut best: Option<(usize, u64)> = None;
        for course in 0..self.assigned.len() {
            if !self.open[course] || self.assigned[course].is_some() {
                continue;
            }
            let count = counts[self.index.profile_of(course)];
            if best.map_or(true, |(_, b)| count < b) {
                best = Some((course, count));
            }
        }
        best
    }

    /// Legal candidates for a course in value order.
    fn candidates(&self, course: usize) -> Vec<Candidate> {
        let mut out = Vec::new();
        for timeslot in 0..self.snapshot.timeslots().len() {
            for &lecturer in self.index.lecturers_at(timeslot) {
                if !self.evaluator.lecturer_free(&self.busy, lecturer, timeslot) {
                    continue;
                }
                for &venue in self.index.venues_for(course) {
                    if self.evaluator.venue_free(&self.busy, venue, timeslot) {
                        out.push(Candidate {
                            lecturer,
                            venue,
                            timeslot,
                        });
                    }
                }
            }
        }
        debug_assert!(out
            .iter()
            .all(|&c| self.evaluator.is_legal(course, c, &self.busy)));
        out.sort_by_key(|c| (self.lecturer_open[c.lecturer], self.venue_open[c.venue]));
        out
    }
}

impl BacktrackingScheduler {
    /// Creates a scheduler with no cancellation token.
    pub fn new() -> Self {
        Self { cancel: None }
    }

    /// Attaches a cancellation token polled at every search node.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Builds a snapshot from the request and runs the search.
    ///
    /// # Errors
    /// Returns the snapshot's [`EngineError`] for empty or invalid input;
    /// no search work is done in that case.
    pub fn generate(&self, request: &GenerateRequest) -> Result<Timetable, EngineError> {
        let snapshot = DomainSnapshot::from_request(request)?;
        Ok(self.schedule(&snapshot, &request.config()))
    }

    /// Runs the search over an existing snapshot.
    pub fn schedule(&self, snapshot: &DomainSnapshot, config: &SearchConfig) -> Timetable {
        let mut budget = SearchBudget::new(config.node_bound, config.time_bound);
        if let Some(token) = &self.cancel {
            budget = budget.with_cancellation(token.clone());
        }
        let evaluator = ConstraintEvaluator::new(snapshot, config.min_venue_capacity);
        let index = CandidateIndex::new(snapshot, &evaluator);

        debug!(
            courses = snapshot.courses().len(),
            lecturers = snapshot.lecturers().len(),
            venues = snapshot.venues().len(),
            timeslots = snapshot.timeslots().len(),
            node_bound = config.node_bound,
            time_bound_ms = config.time_bound.as_millis() as u64,
            "starting timetable search"
        );

        let mut timetable = Timetable::new();
        let mut open = vec![true; snapshot.courses().len()];
        for (pos, course) in snapshot.courses().iter().enumerate() {
            if let Some(reason) = index.static_reason_at(pos) {
                debug!(course = course.id, ?reason, "course pre-pruned");
                timetable.add_unscheduled(course.id, reason);
                open[pos] = false;
            }
        }
        let pruned = !timetable.unscheduled.is_empty();

        let mut state = SearchState::new(snapshot, evaluator, &index, open);
        let mut stats = SearchStats::default();

        let outcome = if state.open.iter().any(|&o| o) {
            self.search(&mut state, &budget, &mut stats)
        } else {
            Outcome::Exhausted
        };

        match outcome {
            Outcome::Complete => {
                timetable.status = if pruned {
                    TimetableStatus::PartialExhausted
                } else {
                    TimetableStatus::Complete
                };
            }
            Outcome::Bounded(reason) => {
                warn!(
                    %reason,
                    nodes = stats.nodes_visited,
                    depth = stats.max_depth,
                    "timetable search stopped early"
                );
                for course in 0..state.assigned.len() {
                    if state.open[course] && state.assigned[course].is_none() {
                        timetable.add_unscheduled(
                            snapshot.courses()[course].id,
                            UnscheduledReason::SearchBoundExceeded,
                        );
                    }
                }
                timetable.status = TimetableStatus::PartialBounded;
            }
            Outcome::Exhausted => {
                for course in complete_greedily(&mut state) {
                    timetable.add_unscheduled(
                        snapshot.courses()[course].id,
                        UnscheduledReason::NoFeasibleTimeslot,
                    );
                }
                timetable.status = TimetableStatus::PartialExhausted;
            }
        }

        for (course, c) in state.assigned.iter().enumerate() {
            if let Some(c) = c {
                timetable.add_assignment(Assignment::new(
                    snapshot.courses()[course].id,
                    snapshot.lecturers()[c.lecturer].id,
                    snapshot.venues()[c.venue].id,
                    snapshot.timeslots()[c.timeslot].id,
                ));
            }
        }
        timetable.stats = stats;

        info!(
            status = ?timetable.status,
            scheduled = timetable.scheduled_count(),
            unscheduled = timetable.unscheduled_count(),
            nodes = stats.nodes_visited,
            backtracks = stats.backtracks,
            elapsed_ms = budget.elapsed().as_millis() as u64,
            "timetable search finished"
        );
        timetable
    }

    /// Depth-first search. On return, `state` holds the deepest partial
    /// reached (for bounded or exhausted runs) or the complete assignment.
    fn search(
        &self,
        state: &mut SearchState<'_>,
        budget: &SearchBudget,
        stats: &mut SearchStats,
    ) -> Outcome {
        let mut stack: Vec<Frame> = Vec::new();
        let mut best: Vec<Option<Candidate>> = state.assigned.clone();
        let mut best_depth = 0;

        let outcome = loop {
            // A full assignment is not a node, so no bound can pre-empt it.
            let Some((course, count)) = state.select() else {
                break Outcome::Complete;
            };
            if let Some(reason) = budget.check(stats.nodes_visited) {
                break Outcome::Bounded(reason);
            }
            stats.nodes_visited += 1;

            let candidates = if count == 0 {
                Vec::new()
            } else {
                state.candidates(course)
            };
            let Some(&first) = candidates.first() else {
                if !backtrack(state, &mut stack, stats) {
                    break Outcome::Exhausted;
                }
                continue;
            };

            state.commit(course, first);
            stack.push(Frame {
                course,
                candidates,
                next: 1,
            });
            if state.depth > best_depth {
                best_depth = state.depth;
                best.clone_from(&state.assigned);
                stats.max_depth = best_depth as u64;
            }
        };

        if outcome != Outcome::Complete {
            // Rebuild the counters from the deepest partial.
            while let Some(frame) = stack.pop() {
                state.undo(frame.course);
            }
            for (course, c) in best.into_iter().enumerate() {
                if let Some(c) = c {
                    state.commit(course, c);
                }
            }
        }
        outcome
    }
}

/// Undoes commitments until one has an untried candidate, then commits it.
///
/// Returns `false` when the stack empties: the space is exhausted.
fn backtrack(state: &mut SearchState<'_>, stack: &mut Vec<Frame>, stats: &mut SearchStats) -> bool {
    while let Some(frame) = stack.last_mut() {
        state.undo(frame.course);
        stats.backtracks += 1;
        if let Some(&c) = frame.candidates.get(frame.next) {
            frame.next += 1;
            trace!(
                course = frame.course,
                candidate = frame.next,
                of = frame.candidates.len(),
                "backtrack"
            );
            state.commit(frame.course, c);
            return true;
        }
        stack.pop();
    }
    false
}

/// Single greedy pass over the remaining courses, no backtracking.
///
/// Returns the positions of courses that still have no legal candidate.
fn complete_greedily(state: &mut SearchState<'_>) -> Vec<usize> {
    let mut stuck = Vec::new();
    while let Some((course, count)) = state.select() {
        let first = if count == 0 {
            None
        } else {
            state.candidates(course).first().copied()
        };
        match first {
            Some(c) => state.commit(course, c),
            None => {
                state.open[course] = false;
                stuck.push(course);
            }
        }
    }
    stuck
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Availability, Course, DayOfWeek, Lecturer, Timeslot, Venue};

    fn slots(n: u32) -> Vec<Timeslot> {
        (1..=n)
            .map(|i| {
                let start = format!("{:02}:00", 6 + 2 * i);
                let end = format!("{:02}:00", 8 + 2 * i);
                Timeslot::new(i, DayOfWeek::Monday, start, end)
            })
            .collect()
    }

    #[test]
    fn test_single_course_takes_earliest_slot() {
        let request = GenerateRequest::new(
            vec![Course::new(1, "Compilers")],
            vec![Lecturer::new(1, "Dr. Okafor")],
            vec![Venue::lecture_hall(1, 40).with_name("Hall A")],
            vec![
                Timeslot::new(1, DayOfWeek::Tuesday, "08:00", "10:00"),
                Timeslot::new(2, DayOfWeek::Monday, "10:00", "12:00"),
            ],
        );
        let t = BacktrackingScheduler::new().generate(&request).unwrap();

        assert_eq!(t.status, TimetableStatus::Complete);
        assert_eq!(t.assignments, vec![Assignment::new(1, 1, 1, 2)]);
        assert!(t.unscheduled.is_empty());
        assert_eq!(t.stats.nodes_visited, 1);
        assert_eq!(t.stats.max_depth, 1);
        assert_eq!(t.stats.backtracks, 0);
    }

    #[test]
    fn test_lab_course_without_lab() {
        let request = GenerateRequest::new(
            vec![Course::new(1, "Chemistry Lab").with_lab_required(true)],
            vec![Lecturer::new(1, "Dr. Ito")],
            vec![Venue::lecture_hall(1, 100).with_name("Hall")],
            slots(1),
        );
        let t = BacktrackingScheduler::new().generate(&request).unwrap();

        assert_eq!(t.status, TimetableStatus::PartialExhausted);
        assert!(t.assignments.is_empty());
        assert_eq!(t.unscheduled_reason(1), Some(UnscheduledReason::NoSuitableVenue));
        assert_eq!(t.stats.nodes_visited, 0);
    }

    #[test]
    fn test_single_available_slot_exhausts() {
        let request = GenerateRequest::new(
            vec![Course::new(1, "Networks"), Course::new(2, "Databases")],
            vec![Lecturer::new(1, "Dr. Haas")],
            vec![
                Venue::lecture_hall(1, 50).with_name("Hall A"),
                Venue::lecture_hall(2, 50).with_name("Hall B"),
            ],
            slots(2),
        )
        .with_availability(vec![Availability::new(1, 2)]);
        let t = BacktrackingScheduler::new().generate(&request).unwrap();

        assert_eq!(t.status, TimetableStatus::PartialExhausted);
        assert_eq!(t.assignments, vec![Assignment::new(1, 1, 1, 2)]);
        assert_eq!(
            t.unscheduled_reason(2),
            Some(UnscheduledReason::NoFeasibleTimeslot)
        );
        assert_eq!(t.stats.nodes_visited, 3);
        assert_eq!(t.stats.backtracks, 2);
    }

    #[test]
    fn test_zero_node_bound() {
        let request = GenerateRequest::new(
            vec![Course::new(1, "A"), Course::new(2, "B"), Course::new(3, "C")],
            vec![Lecturer::new(1, "L1"), Lecturer::new(2, "L2")],
            vec![Venue::lecture_hall(1, 50).with_name("Hall")],
            slots(3),
        )
        .with_node_bound(0);
        let t = BacktrackingScheduler::new().generate(&request).unwrap();

        assert_eq!(t.status, TimetableStatus::PartialBounded);
        assert!(t.assignments.is_empty());
        assert_eq!(t.unscheduled.len(), 3);
        assert!(t
            .unscheduled
            .iter()
            .all(|u| u.reason == UnscheduledReason::SearchBoundExceeded));
        assert_eq!(t.stats.nodes_visited, 0);
    }

    #[test]
    fn test_bounded_run_returns_deepest_partial() {
        let request = GenerateRequest::new(
            vec![Course::new(1, "A"), Course::new(2, "B")],
            vec![Lecturer::new(1, "L1")],
            vec![Venue::lecture_hall(1, 50).with_name("Hall")],
            slots(2),
        )
        .with_node_bound(1);
        let t = BacktrackingScheduler::new().generate(&request).unwrap();

        assert_eq!(t.status, TimetableStatus::PartialBounded);
        assert_eq!(t.assignments, vec![Assignment::new(1, 1, 1, 1)]);
        assert_eq!(
            t.unscheduled_reason(2),
            Some(UnscheduledReason::SearchBoundExceeded)
        );
    }

    #[test]
    fn test_bound_reached_with_last_course_placed() {
        let request = GenerateRequest::new(
            vec![Course::new(1, "A"), Course::new(2, "B")],
            vec![Lecturer::new(1, "L1")],
            vec![Venue::lecture_hall(1, 50).with_name("Hall")],
            slots(2),
        )
        .with_node_bound(2);
        let t = BacktrackingScheduler::new().generate(&request).unwrap();

        assert_eq!(t.status, TimetableStatus::Complete);
        assert_eq!(t.scheduled_count(), 2);
        assert!(t.unscheduled.is_empty());
        assert_eq!(t.stats.nodes_visited, 2);
    }

    #[test]
    fn test_bound_reached_with_pruned_courses() {
        let request = GenerateRequest::new(
            vec![
                Course::new(1, "Optics Lab").with_lab_required(true),
                Course::new(2, "Genetics Lab").with_lab_required(true),
                Course::new(3, "History"),
                Course::new(4, "Logic"),
            ],
            vec![Lecturer::new(1, "L1")],
            vec![Venue::lecture_hall(1, 50).with_name("Hall")],
            slots(2),
        )
        .with_node_bound(2);
        let t = BacktrackingScheduler::new().generate(&request).unwrap();

        assert_eq!(t.status, TimetableStatus::PartialExhausted);
        assert_eq!(t.scheduled_count(), 2);
        assert!(t
            .unscheduled
            .iter()
            .all(|u| u.reason == UnscheduledReason::NoSuitableVenue));
    }

    #[test]
    fn test_one_node_bound_places_one_course() {
        let request = GenerateRequest::new(
            vec![Course::new(1, "A")],
            vec![Lecturer::new(1, "L1")],
            vec![Venue::lecture_hall(1, 50).with_name("Hall")],
            slots(1),
        )
        .with_node_bound(1);
        let t = BacktrackingScheduler::new().generate(&request).unwrap();

        assert_eq!(t.status, TimetableStatus::Complete);
        assert_eq!(t.stats.nodes_visited, 1);
    }

    #[test]
    fn test_cancelled_before_start() {
        let token = CancellationToken::new();
        token.cancel();
        let request = GenerateRequest::new(
            vec![Course::new(1, "A")],
            vec![Lecturer::new(1, "L1")],
            vec![Venue::lecture_hall(1, 50).with_name("Hall")],
            slots(2),
        );
        let t = BacktrackingScheduler::new()
            .with_cancellation(token)
            .generate(&request)
            .unwrap();

        assert_eq!(t.status, TimetableStatus::PartialBounded);
        assert_eq!(
            t.unscheduled_reason(1),
            Some(UnscheduledReason::SearchBoundExceeded)
        );
    }

    #[test]
    fn test_most_constrained_course_first() {
        // The lab course has fewer candidates, so it is placed first and
        // gets the lower-ID lecturer.
        let request = GenerateRequest::new(
            vec![
                Course::new(1, "Algorithms"),
                Course::new(2, "Robotics Lab").with_lab_required(true),
            ],
            vec![Lecturer::new(1, "L1"), Lecturer::new(2, "L2")],
            vec![
                Venue::lecture_hall(1, 50).with_name("Hall"),
                Venue::lab(2, 40).with_name("Lab"),
            ],
            slots(1),
        );
        let t = BacktrackingScheduler::new().generate(&request).unwrap();

        assert_eq!(t.status, TimetableStatus::Complete);
        assert_eq!(t.assignment_for_course(2), Some(&Assignment::new(2, 1, 2, 1)));
        assert_eq!(t.assignment_for_course(1), Some(&Assignment::new(1, 2, 1, 1)));
    }

    #[test]
    fn test_scarce_lecturer_preferred() {
        let request = GenerateRequest::new(
            vec![Course::new(1, "Topology")],
            vec![Lecturer::new(1, "Flexible"), Lecturer::new(2, "Busy")],
            vec![Venue::lecture_hall(1, 50).with_name("Hall")],
            slots(3),
        )
        .with_availability(vec![Availability::new(2, 3)]);
        let t = BacktrackingScheduler::new().generate(&request).unwrap();

        assert_eq!(t.assignments, vec![Assignment::new(1, 2, 1, 3)]);
    }

    #[test]
    fn test_exhaustion_keeps_deepest_partial() {
        let request = GenerateRequest::new(
            vec![Course::new(1, "A"), Course::new(2, "B"), Course::new(3, "C")],
            vec![Lecturer::new(1, "L1")],
            vec![Venue::lecture_hall(1, 50).with_name("Hall")],
            slots(2),
        );
        let t = BacktrackingScheduler::new().generate(&request).unwrap();

        assert_eq!(t.status, TimetableStatus::PartialExhausted);
        assert_eq!(
            t.assignments,
            vec![Assignment::new(1, 1, 1, 1), Assignment::new(2, 1, 1, 2)]
        );
        assert_eq!(
            t.unscheduled_reason(3),
            Some(UnscheduledReason::NoFeasibleTimeslot)
        );
        assert_eq!(t.stats.max_depth, 2);
    }

    #[test]
    fn test_pruned_course_does_not_block_others() {
        let request = GenerateRequest::new(
            vec![
                Course::new(1, "Physics Lab").with_lab_required(true),
                Course::new(2, "Calculus"),
            ],
            vec![Lecturer::new(1, "L1")],
            vec![Venue::lecture_hall(1, 50).with_name("Hall")],
            slots(1),
        );
        let t = BacktrackingScheduler::new().generate(&request).unwrap();

        assert_eq!(t.status, TimetableStatus::PartialExhausted);
        assert_eq!(t.unscheduled_reason(1), Some(UnscheduledReason::NoSuitableVenue));
        assert_eq!(t.assignments, vec![Assignment::new(2, 1, 1, 1)]);
    }

    #[test]
    fn test_no_lecturers() {
        let request = GenerateRequest::new(
            vec![Course::new(1, "A"), Course::new(2, "B")],
            vec![],
            vec![Venue::lecture_hall(1, 50).with_name("Hall")],
            slots(2),
        );
        let t = BacktrackingScheduler::new().generate(&request).unwrap();

        assert_eq!(t.status, TimetableStatus::PartialExhausted);
        assert!(t
            .unscheduled
            .iter()
            .all(|u| u.reason == UnscheduledReason::NoAvailableLecturer));
        assert_eq!(t.unscheduled.len(), 2);
    }

    #[test]
    fn test_input_errors_propagate() {
        let request = GenerateRequest::new(vec![], vec![], vec![], slots(1));
        assert!(matches!(
            BacktrackingScheduler::new().generate(&request),
            Err(EngineError::EmptyDomain(_))
        ));
    }

    #[test]
    fn test_output_audits_clean() {
        let request = GenerateRequest::new(
            (1..=6).map(|i| Course::new(i, format!("Course {i}"))).collect(),
            vec![Lecturer::new(1, "L1"), Lecturer::new(2, "L2")],
            vec![
                Venue::lecture_hall(1, 50).with_name("Hall A"),
                Venue::lecture_hall(2, 50).with_name("Hall B"),
            ],
            slots(2),
        )
        .with_availability(vec![Availability::new(2, 1)]);
        let snapshot = DomainSnapshot::from_request(&request).unwrap();
        let t = BacktrackingScheduler::new().schedule(&snapshot, &request.config());

        let eval = ConstraintEvaluator::new(&snapshot, request.min_venue_capacity);
        assert!(eval.audit(&t).is_empty());
        // Three (lecturer, timeslot) pairs exist.
        assert_eq!(t.scheduled_count(), 3);
        assert_eq!(t.unscheduled_count(), 3);
    }
}
