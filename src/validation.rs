//! Input validation for timetabling problems.
//!
//! Checks structural integrity of the entity collections before a
//! generation run. Detects:
//! - Duplicate IDs
//! - Availability records pointing at unknown lecturers or timeslots
//! - Duplicate availability records
//! - Malformed or reversed timeslot times
//! - Non-positive venue capacities
//! - Missing names and titles
//!
//! All problems are collected rather than stopping at the first one, so a
//! caller can show an administrator the full list in one pass.

use crate::models::{is_valid_time, Availability, Course, Lecturer, Timeslot, Venue};
use std::collections::HashSet;
use thiserror::Error;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities of the same kind share an ID.
    DuplicateId,
    /// An availability record references an unknown lecturer or timeslot.
    InvalidReference,
    /// The same (lecturer, timeslot) pair is recorded twice.
    DuplicateAvailability,
    /// A timeslot time is not `HH:MM`.
    InvalidTimeFormat,
    /// A timeslot does not end after it starts.
    InvalidTimeRange,
    /// A venue capacity is zero or negative.
    InvalidCapacity,
    /// A course title, lecturer name or venue name is blank.
    MissingName,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a timetabling problem.
///
/// Checks:
/// 1. No duplicate course, lecturer, venue or timeslot IDs
/// 2. Every availability record references an existing lecturer and timeslot
/// 3. No availability pair is recorded twice
/// 4. Timeslot times are `HH:MM` and the end is after the start
/// 5. Venue capacities are positive
/// 6. Titles and names are not blank
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    courses: &[Course],
    lecturers: &[Lecturer],
    venues: &[Venue],
    timeslots: &[Timeslot],
    availability: &[Availability],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut course_ids = HashSet::new();
    for c in courses {
        if !course_ids.insert(c.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", c.id),
            ));
        }
        if c.title.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingName,
                format!("Course {} has no title", c.id),
            ));
        }
    }

    let mut lecturer_ids = HashSet::new();
    for l in lecturers {
        if !lecturer_ids.insert(l.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate lecturer ID: {}", l.id),
            ));
        }
        if l.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingName,
                format!("Lecturer {} has no name", l.id),
            ));
        }
    }

    let mut venue_ids = HashSet::new();
    for v in venues {
        if !venue_ids.insert(v.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate venue ID: {}", v.id),
            ));
        }
        if v.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingName,
                format!("Venue {} has no name", v.id),
            ));
        }
        if v.capacity <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCapacity,
                format!("Venue {} has non-positive capacity {}", v.id, v.capacity),
            ));
        }
    }

    let mut timeslot_ids = HashSet::new();
    for t in timeslots {
        if !timeslot_ids.insert(t.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate timeslot ID: {}", t.id),
            ));
        }
        errors.extend(check_timeslot_times(t));
    }

    let mut seen_pairs = HashSet::new();
    for a in availability {
        if !lecturer_ids.contains(&a.lecturer_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidReference,
                format!(
                    "Availability references unknown lecturer {}",
                    a.lecturer_id
                ),
            ));
        }
        if !timeslot_ids.contains(&a.timeslot_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidReference,
                format!(
                    "Availability references unknown timeslot {}",
                    a.timeslot_id
                ),
            ));
        }
        if !seen_pairs.insert((a.lecturer_id, a.timeslot_id)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateAvailability,
                format!(
                    "Lecturer {} availability for timeslot {} is recorded twice",
                    a.lecturer_id, a.timeslot_id
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_timeslot_times(t: &Timeslot) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (label, value) in [("start", &t.start_time), ("end", &t.end_time)] {
        if !is_valid_time(value) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTimeFormat,
                format!(
                    "Timeslot {} has {label} time '{value}', expected HH:MM",
                    t.id
                ),
            ));
        }
    }
    if errors.is_empty() && t.duration_minutes().is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidTimeRange,
            format!(
                "Timeslot {} ends at {} which is not after its start {}",
                t.id, t.end_time, t.start_time
            ),
        ));
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayOfWeek;

    fn sample_courses() -> Vec<Course> {
        vec![
            Course::new(1, "Algorithms"),
            Course::new(2, "Chemistry Practical").with_lab_required(true),
        ]
    }

    fn sample_lecturers() -> Vec<Lecturer> {
        vec![Lecturer::new(1, "Dr. Okafor"), Lecturer::new(2, "Prof. Lindqvist")]
    }

    fn sample_venues() -> Vec<Venue> {
        vec![
            Venue::lecture_hall(1, 80).with_name("Hall A"),
            Venue::lab(2, 40).with_name("Lab 1"),
        ]
    }

    fn sample_timeslots() -> Vec<Timeslot> {
        vec![
            Timeslot::new(1, DayOfWeek::Monday, "08:00", "10:00"),
            Timeslot::new(2, DayOfWeek::Monday, "10:00", "12:00"),
        ]
    }

    fn kinds(errors: &[ValidationError]) -> Vec<ValidationErrorKind> {
        errors.iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_valid_input() {
        let availability = vec![Availability::new(1, 1), Availability::new(1, 2)];
        assert!(validate_input(
            &sample_courses(),
            &sample_lecturers(),
            &sample_venues(),
            &sample_timeslots(),
            &availability,
        )
        .is_ok());
    }

    #[test]
    fn test_duplicate_course_id() {
        let courses = vec![Course::new(1, "A"), Course::new(1, "B")];
        let errors = validate_input(
            &courses,
            &sample_lecturers(),
            &sample_venues(),
            &sample_timeslots(),
            &[],
        )
        .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("course")));
    }

    #[test]
    fn test_duplicate_venue_id() {
        let venues = vec![
            Venue::lab(5, 40).with_name("Lab"),
            Venue::lecture_hall(5, 90).with_name("Hall"),
        ];
        let errors = validate_input(
            &sample_courses(),
            &sample_lecturers(),
            &venues,
            &sample_timeslots(),
            &[],
        )
        .unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::DuplicateId]);
    }

    #[test]
    fn test_unknown_availability_references() {
        let availability = vec![Availability::new(99, 1), Availability::new(1, 42)];
        let errors = validate_input(
            &sample_courses(),
            &sample_lecturers(),
            &sample_venues(),
            &sample_timeslots(),
            &availability,
        )
        .unwrap_err();
        assert_eq!(
            kinds(&errors),
            vec![
                ValidationErrorKind::InvalidReference,
                ValidationErrorKind::InvalidReference
            ]
        );
        assert!(errors[0].message.contains("lecturer 99"));
        assert!(errors[1].message.contains("timeslot 42"));
    }

    #[test]
    fn test_duplicate_availability() {
        let availability = vec![Availability::new(1, 1), Availability::new(1, 1)];
        let errors = validate_input(
            &sample_courses(),
            &sample_lecturers(),
            &sample_venues(),
            &sample_timeslots(),
            &availability,
        )
        .unwrap_err();
        assert_eq!(kinds(&errors), vec![ValidationErrorKind::DuplicateAvailability]);
    }

    #[test]
    fn test_bad_timeslot_times() {
        let timeslots = vec![
            Timeslot::new(1, DayOfWeek::Tuesday, "8:00", "10:00"),
            Timeslot::new(2, DayOfWeek::Tuesday, "12:00", "11:00"),
            Timeslot::new(3, DayOfWeek::Tuesday, "13:00", "13:00"),
        ];
        let errors = validate_input(
            &sample_courses(),
            &sample_lecturers(),
            &sample_venues(),
            &timeslots,
            &[],
        )
        .unwrap_err();
        assert_eq!(
            kinds(&errors),
            vec![
                ValidationErrorKind::InvalidTimeFormat,
                ValidationErrorKind::InvalidTimeRange,
                ValidationErrorKind::InvalidTimeRange
            ]
        );
    }

    #[test]
    fn test_non_positive_capacity_and_blank_name() {
        let venues = vec![Venue::lecture_hall(1, 0).with_name("  ")];
        let errors = validate_input(
            &sample_courses(),
            &sample_lecturers(),
            &venues,
            &sample_timeslots(),
            &[],
        )
        .unwrap_err();
        let found = kinds(&errors);
        assert!(found.contains(&ValidationErrorKind::InvalidCapacity));
        assert!(found.contains(&ValidationErrorKind::MissingName));
    }

    #[test]
    fn test_multiple_errors() {
        let courses = vec![Course::new(1, ""), Course::new(1, "Dup")];
        let errors = validate_input(&courses, &[], &[], &[], &[Availability::new(1, 1)])
            .unwrap_err();
        assert!(errors.len() >= 4);
        assert!(errors.iter().all(|e| !e.to_string().is_empty()));
    }
}
