//! Candidate index: static per-course and per-timeslot candidate sets.
//!
//! Built once per run and read-only afterwards. Holds the parts of
//! legality that never change during search (venue suitability and
//! lecturer availability), so search nodes only apply the occupancy
//! predicates.
//!
//! # Venue profiles
//! Courses with identical eligible-venue sets share a *profile*. With a
//! single capacity threshold and a lab flag there are at most two in
//! practice. The search keeps one free-venue counter per
//! (profile, timeslot) instead of one per (course, timeslot).

use std::collections::HashMap;

use crate::models::{CourseId, UnscheduledReason, VenueId};
use crate::snapshot::DomainSnapshot;

use super::evaluator::ConstraintEvaluator;

/// Static candidate sets for one run.
#[derive(Debug, Clone)]
pub struct CandidateIndex {
    /// Profile of each course position.
    profile_of: Vec<usize>,
    /// Eligible venue positions per profile, ascending venue ID.
    profiles: Vec<Vec<usize>>,
    /// Profiles each venue position belongs to.
    venue_profiles: Vec<Vec<usize>>,
    /// Available lecturer positions per timeslot position, ascending lecturer ID.
    lecturers_at: Vec<Vec<usize>>,
}

impl CandidateIndex {
    /// Builds the index for a snapshot under the evaluator's capacity threshold.
    pub fn new(snapshot: &DomainSnapshot, evaluator: &ConstraintEvaluator<'_>) -> Self {
        let mut profile_ids: HashMap<Vec<usize>, usize> = HashMap::new();
        let mut profiles: Vec<Vec<usize>> = Vec::new();
        let mut profile_of = Vec::with_capacity(snapshot.courses().len());

        for course in snapshot.courses() {
            let eligible: Vec<usize> = snapshot
                .venues()
                .iter()
                .enumerate()
                .filter(|(_, v)| evaluator.venue_suitable(course, v))
                .map(|(i, _)| i)
                .collect();
            let id = *profile_ids.entry(eligible.clone()).or_insert_with(|| {
                profiles.push(eligible);
                profiles.len() - 1
            });
            profile_of.push(id);
        }

        let mut venue_profiles = vec![Vec::new(); snapshot.venues().len()];
        for (p, venues) in profiles.iter().enumerate() {
            for &v in venues {
                venue_profiles[v].push(p);
            }
        }

        let mut lecturers_at = vec![Vec::new(); snapshot.timeslots().len()];
        for l in 0..snapshot.lecturers().len() {
            for &t in snapshot.available_slots(l) {
                lecturers_at[t].push(l);
            }
        }

        Self {
            profile_of,
            profiles,
            venue_profiles,
            lecturers_at,
        }
    }

    /// Eligible venue IDs for a course, ascending. Empty for an unknown course.
    pub fn eligible_venues(&self, snapshot: &DomainSnapshot, course_id: CourseId) -> Vec<VenueId> {
        snapshot
            .course_position(course_id)
            .map(|c| {
                self.venues_for(c)
                    .iter()
                    .map(|&v| snapshot.venues()[v].id)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of legal candidates for a course before anything is committed.
    pub fn static_candidate_count(&self, snapshot: &DomainSnapshot, course_id: CourseId) -> u64 {
        snapshot
            .course_position(course_id)
            .map(|c| self.initial_count(c))
            .unwrap_or(0)
    }

    /// Reason a course can never be placed, whatever else is committed.
    ///
    /// `None` when the course has at least one static candidate or is unknown.
    pub fn static_reason(
        &self,
        snapshot: &DomainSnapshot,
        course_id: CourseId,
    ) -> Option<UnscheduledReason> {
        snapshot
            .course_position(course_id)
            .and_then(|c| self.static_reason_at(c))
    }

    pub(crate) fn static_reason_at(&self, course: usize) -> Option<UnscheduledReason> {
        if self.lecturers_at.iter().all(Vec::is_empty) {
            Some(UnscheduledReason::NoAvailableLecturer)
        } else if self.venues_for(course).is_empty() {
            Some(UnscheduledReason::NoSuitableVenue)
        } else {
            None
        }
    }

    fn initial_count(&self, course: usize) -> u64 {
        let venues = self.venues_for(course).len() as u64;
        self.lecturers_at
            .iter()
            .map(|ls| ls.len() as u64 * venues)
            .sum()
    }

    #[inline]
    pub(crate) fn profile_of(&self, course: usize) -> usize {
        self.profile_of[course]
    }

    #[inline]
    pub(crate) fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    #[inline]
    pub(crate) fn profile_venues(&self, profile: usize) -> &[usize] {
        &self.profiles[profile]
    }

    #[inline]
    pub(crate) fn venues_for(&self, course: usize) -> &[usize] {
        &self.profiles[self.profile_of[course]]
    }

    #[inline]
    pub(crate) fn venue_profiles(&self, venue: usize) -> &[usize] {
        &self.venue_profiles[venue]
    }

    #[inline]
    pub(crate) fn lecturers_at(&self, timeslot: usize) -> &[usize] {
        &self.lecturers_at[timeslot]
    }
}
