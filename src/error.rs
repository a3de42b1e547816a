//! Errors reported before a generation run starts.
//!
//! Only malformed input is an error. A course the engine cannot place is
//! reported inside the [`Timetable`](crate::models::Timetable), and so is
//! a search stopped by its bounds.

use std::fmt;
use thiserror::Error;

use crate::validation::ValidationError;

/// Input errors. When one is returned, no search work was done.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Courses, venues or timeslots is empty, so no schedule can exist.
    #[error("empty domain: no {0} supplied")]
    EmptyDomain(EntityKind),

    /// An availability record names a lecturer or timeslot that does not exist.
    #[error("availability record references unknown {kind} {id}")]
    InvalidReference { kind: EntityKind, id: u32 },

    /// Other structural problems found by input validation.
    #[error("invalid input: {} problem(s), first: {}", .0.len(), first_message(.0))]
    InvalidInput(Vec<ValidationError>),
}

/// Entity collections of a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Course,
    Lecturer,
    Venue,
    Timeslot,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Course => "course",
            EntityKind::Lecturer => "lecturer",
            EntityKind::Venue => "venue",
            EntityKind::Timeslot => "timeslot",
        })
    }
}

fn first_message(errors: &[ValidationError]) -> &str {
    errors.first().map(|e| e.message.as_str()).unwrap_or("")
}
