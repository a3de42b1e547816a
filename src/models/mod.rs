//! Timetabling domain models.
//!
//! Provides the input entities of a generation run and the timetable it
//! produces. Entities are plain values keyed by integer IDs; creating,
//! persisting and retiring those IDs belongs to the caller's record store.
//!
//! # Domain Mappings
//!
//! | u-timetable | University | Training Centre | Clinic |
//! |-------------|------------|-----------------|--------|
//! | Course | Course/Module | Workshop | Appointment type |
//! | Lecturer | Lecturer | Trainer | Practitioner |
//! | Venue | Lecture hall/Lab | Classroom | Consulting room |
//! | Timeslot | Teaching period | Session | Booking slot |
//! | Timetable | Semester timetable | Course calendar | Rota |

mod availability;
mod course;
mod lecturer;
mod timeslot;
mod timetable;
mod venue;

pub use availability::Availability;
pub use course::{Course, CourseId};
pub use lecturer::{Lecturer, LecturerId};
pub use timeslot::{is_valid_time, DayOfWeek, Timeslot, TimeslotId};
pub use timetable::{
    Assignment, Conflict, ConflictKind, SearchStats, Timetable, TimetableStatus, Unscheduled,
    UnscheduledReason,
};
pub use venue::{Venue, VenueId, VenueType};
