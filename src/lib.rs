//! Timetable assignment engine.
//!
//! Assigns courses to (lecturer, venue, timeslot) triples under hard
//! feasibility constraints and reports a reason for every course it
//! cannot place. The engine is a pure function of its input snapshot and
//! configuration: no I/O, no process-wide state.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Course`, `Lecturer`, `Venue`, `Timeslot`,
//!   `Availability`, `Timetable`, `Assignment`
//! - **`validation`**: Input integrity checks (duplicate IDs, references,
//!   time formats, capacities)
//! - **`snapshot`**: `DomainSnapshot`, the immutable validated view of one run
//! - **`scheduler`**: Backtracking search, constraint evaluation, bounding, KPIs
//! - **`error`**: `EngineError` for input problems reported before search
//!
//! # Example
//!
//! ```
//! use u_timetable::models::{Course, DayOfWeek, Lecturer, Timeslot, Venue};
//! use u_timetable::scheduler::{BacktrackingScheduler, GenerateRequest};
//!
//! let request = GenerateRequest::new(
//!     vec![Course::new(1, "Linear Algebra"), Course::new(2, "Genetics Lab").with_lab_required(true)],
//!     vec![Lecturer::new(1, "Dr. Bello")],
//!     vec![Venue::lecture_hall(1, 120).with_name("Main Hall")],
//!     vec![Timeslot::new(1, DayOfWeek::Monday, "08:00", "10:00")],
//! );
//!
//! let timetable = BacktrackingScheduler::new().generate(&request).unwrap();
//! assert_eq!(timetable.scheduled_count(), 1);
//! assert!(timetable.unscheduled_reason(2).is_some());
//! ```
//!
//! # References
//!
//! - Russell & Norvig (2021), "Artificial Intelligence: A Modern Approach", Ch. 6
//! - Schaerf (1999), "A Survey of Automated Timetabling"

pub mod error;
pub mod models;
pub mod scheduler;
pub mod snapshot;
pub mod validation;

pub use error::{EngineError, EntityKind};
pub use snapshot::DomainSnapshot;
