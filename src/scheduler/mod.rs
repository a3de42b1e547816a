//! Timetable search and KPI evaluation.
//!
//! Provides the backtracking scheduler, its constraint evaluator and
//! candidate index, run bounding, and timetable quality metrics.
//!
//! # Algorithm
//!
//! `BacktrackingScheduler` is a depth-first constraint-satisfaction search
//! with most-constrained-variable course selection and
//! most-constrained-resource value ordering. It is deterministic: identical
//! input and configuration give identical timetables.
//!
//! # Bounding
//!
//! A run stops at its node bound, its wall-clock bound, or when its
//! `CancellationToken` fires, and returns the deepest partial timetable
//! found with status `PartialBounded`.
//!
//! # KPI
//!
//! `TimetableKpi` computes completion rate, unscheduled reasons, venue
//! utilization and lecturer load.
//!
//! # References
//!
//! - Russell & Norvig (2021), "Artificial Intelligence: A Modern Approach", Ch. 6
//! - Schaerf (1999), "A Survey of Automated Timetabling"

mod backtracking;
mod budget;
mod candidates;
mod evaluator;
mod kpi;
mod request;

pub use backtracking::BacktrackingScheduler;
pub use budget::{CancellationToken, SearchBudget, StopReason};
pub use candidates::CandidateIndex;
pub use evaluator::ConstraintEvaluator;
pub use kpi::TimetableKpi;
pub use request::{
    GenerateRequest, SearchConfig, DEFAULT_MIN_VENUE_CAPACITY, DEFAULT_NODE_BOUND,
    DEFAULT_TIME_BOUND_MS,
};
