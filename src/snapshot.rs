//! Domain snapshot: the immutable input view of one generation run.
//!
//! The snapshot owns sorted copies of the entity collections and a dense
//! lecturer × timeslot availability table. Entities are addressed
//! internally by their *position*:
//!
//! - courses, lecturers and venues are sorted by ascending ID;
//! - timeslots are sorted chronologically (day, start time, ID).
//!
//! Positions therefore carry the engine's deterministic ordering, and the
//! search works on positions rather than IDs.
//!
//! # Availability fallback
//! A lecturer with no availability records is treated as available in
//! every timeslot. A lecturer with at least one record is available only
//! in the recorded timeslots.

use std::collections::HashMap;

use crate::error::{EngineError, EntityKind};
use crate::models::{
    Availability, Course, CourseId, Lecturer, LecturerId, Timeslot, TimeslotId, Venue, VenueId,
};
use crate::scheduler::GenerateRequest;
use crate::validation::validate_input;

/// Immutable, validated view of the entities for one run.
#[derive(Debug, Clone)]
pub struct DomainSnapshot {
    courses: Vec<Course>,
    lecturers: Vec<Lecturer>,
    venues: Vec<Venue>,
    timeslots: Vec<Timeslot>,
    course_pos: HashMap<CourseId, usize>,
    lecturer_pos: HashMap<LecturerId, usize>,
    venue_pos: HashMap<VenueId, usize>,
    timeslot_pos: HashMap<TimeslotId, usize>,
    /// Row-major lecturer × timeslot table of effective availability.
    available: Vec<bool>,
    /// Effective timeslot positions per lecturer, chronological.
    available_slots: Vec<Vec<usize>>,
    /// Whether the lecturer has explicit availability records.
    explicit: Vec<bool>,
}

impl DomainSnapshot {
    /// Builds a snapshot from entity collections.
    ///
    /// # Errors
    /// - [`EngineError::EmptyDomain`] if courses, venues or timeslots is empty.
    /// - [`EngineError::InvalidReference`] for the first availability record
    ///   naming an unknown lecturer or timeslot.
    /// - [`EngineError::InvalidInput`] for any other validation problem.
    pub fn new(
        courses: &[Course],
        lecturers: &[Lecturer],
        venues: &[Venue],
        timeslots: &[Timeslot],
        availability: &[Availability],
    ) -> Result<Self, EngineError> {
        if courses.is_empty() {
            return Err(EngineError::EmptyDomain(EntityKind::Course));
        }
        if venues.is_empty() {
            return Err(EngineError::EmptyDomain(EntityKind::Venue));
        }
        if timeslots.is_empty() {
            return Err(EngineError::EmptyDomain(EntityKind::Timeslot));
        }

        for a in availability {
            if !lecturers.iter().any(|l| l.id == a.lecturer_id) {
                return Err(EngineError::InvalidReference {
                    kind: EntityKind::Lecturer,
                    id: a.lecturer_id,
                });
            }
            if !timeslots.iter().any(|t| t.id == a.timeslot_id) {
                return Err(EngineError::InvalidReference {
                    kind: EntityKind::Timeslot,
                    id: a.timeslot_id,
                });
            }
        }

        validate_input(courses, lecturers, venues, timeslots, availability)
            .map_err(EngineError::InvalidInput)?;

        let mut courses = courses.to_vec();
        courses.sort_by_key(|c| c.id);
        let mut lecturers = lecturers.to_vec();
        lecturers.sort_by_key(|l| l.id);
        let mut venues = venues.to_vec();
        venues.sort_by_key(|v| v.id);
        let mut timeslots = timeslots.to_vec();
        timeslots.sort_by(|a, b| a.chronological_cmp(b));

        let course_pos = positions(courses.iter().map(|c| c.id));
        let lecturer_pos = positions(lecturers.iter().map(|l| l.id));
        let venue_pos = positions(venues.iter().map(|v| v.id));
        let timeslot_pos = positions(timeslots.iter().map(|t| t.id));

        let n_slots = timeslots.len();
        let mut explicit = vec![false; lecturers.len()];
        let mut available = vec![false; lecturers.len() * n_slots];
        for a in availability {
            // References were checked above.
            let (Some(&l), Some(&t)) = (
                lecturer_pos.get(&a.lecturer_id),
                timeslot_pos.get(&a.timeslot_id),
            ) else {
                continue;
            };
            explicit[l] = true;
            available[l * n_slots + t] = true;
        }
        for (l, has_records) in explicit.iter().enumerate() {
            if !has_records {
                available[l * n_slots..(l + 1) * n_slots].fill(true);
            }
        }

        let available_slots = (0..lecturers.len())
            .map(|l| {
                (0..n_slots)
                    .filter(|&t| available[l * n_slots + t])
                    .collect()
            })
            .collect();

        Ok(Self {
            courses,
            lecturers,
            venues,
            timeslots,
            course_pos,
            lecturer_pos,
            venue_pos,
            timeslot_pos,
            available,
            available_slots,
            explicit,
        })
    }

    /// Builds a snapshot from a generation request.
    pub fn from_request(request: &GenerateRequest) -> Result<Self, EngineError> {
        Self::new(
            &request.courses,
            &request.lecturers,
            &request.venues,
            &request.timeslots,
            &request.availability,
        )
    }

    /// Courses, ascending by ID.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Lecturers, ascending by ID.
    pub fn lecturers(&self) -> &[Lecturer] {
        &self.lecturers
    }

    /// Venues, ascending by ID.
    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    /// Timeslots in chronological order.
    pub fn timeslots(&self) -> &[Timeslot] {
        &self.timeslots
    }

    /// Looks up a course by ID.
    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.course_pos.get(&id).map(|&i| &self.courses[i])
    }

    /// Looks up a lecturer by ID.
    pub fn lecturer(&self, id: LecturerId) -> Option<&Lecturer> {
        self.lecturer_pos.get(&id).map(|&i| &self.lecturers[i])
    }

    /// Looks up a venue by ID.
    pub fn venue(&self, id: VenueId) -> Option<&Venue> {
        self.venue_pos.get(&id).map(|&i| &self.venues[i])
    }

    /// Looks up a timeslot by ID.
    pub fn timeslot(&self, id: TimeslotId) -> Option<&Timeslot> {
        self.timeslot_pos.get(&id).map(|&i| &self.timeslots[i])
    }

    /// Whether a lecturer may teach in a timeslot (effective availability).
    ///
    /// Returns `false` for unknown IDs.
    pub fn is_available(&self, lecturer_id: LecturerId, timeslot_id: TimeslotId) -> bool {
        match (
            self.lecturer_pos.get(&lecturer_id),
            self.timeslot_pos.get(&timeslot_id),
        ) {
            (Some(&l), Some(&t)) => self.available_at(l, t),
            _ => false,
        }
    }

    /// Effective availability of a lecturer as timeslot IDs, chronological.
    ///
    /// Empty for an unknown lecturer.
    pub fn effective_availability(&self, lecturer_id: LecturerId) -> Vec<TimeslotId> {
        self.lecturer_pos
            .get(&lecturer_id)
            .map(|&l| {
                self.available_slots[l]
                    .iter()
                    .map(|&t| self.timeslots[t].id)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether the lecturer's availability comes from explicit records
    /// rather than the no-record fallback.
    pub fn has_explicit_availability(&self, lecturer_id: LecturerId) -> bool {
        self.lecturer_pos
            .get(&lecturer_id)
            .is_some_and(|&l| self.explicit[l])
    }

    pub(crate) fn course_position(&self, id: CourseId) -> Option<usize> {
        self.course_pos.get(&id).copied()
    }

    pub(crate) fn lecturer_position(&self, id: LecturerId) -> Option<usize> {
        self.lecturer_pos.get(&id).copied()
    }

    pub(crate) fn venue_position(&self, id: VenueId) -> Option<usize> {
        self.venue_pos.get(&id).copied()
    }

    pub(crate) fn timeslot_position(&self, id: TimeslotId) -> Option<usize> {
        self.timeslot_pos.get(&id).copied()
    }

    #[inline]
    pub(crate) fn available_at(&self, lecturer: usize, timeslot: usize) -> bool {
        self.available[lecturer * self.timeslots.len() + timeslot]
    }

    /// Effective timeslot positions of a lecturer, chronological.
    #[inline]
    pub(crate) fn available_slots(&self, lecturer: usize) -> &[usize] {
        &self.available_slots[lecturer]
    }
}

fn positions<K: std::hash::Hash + Eq>(ids: impl Iterator<Item = K>) -> HashMap<K, usize> {
    ids.enumerate().map(|(i, id)| (id, i)).collect()
}
