//! Timetable quality metrics (KPIs).
//!
//! Computes summary indicators from a generated timetable and the
//! snapshot it was generated from.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion Rate | Scheduled courses / all courses |
//! | Unscheduled by Reason | Count of unscheduled courses per reason |
//! | Venue Utilization | Occupied timeslots / total timeslots, per venue |
//! | Avg Utilization | Mean venue utilization |
//! | Lecturer Load | Courses taught, per lecturer |
//!
//! # Reference
//! Schaerf (1999), "A Survey of Automated Timetabling"

use std::collections::{BTreeMap, HashMap};

use crate::models::{LecturerId, Timetable, UnscheduledReason, VenueId};
use crate::snapshot::DomainSnapshot;

/// Timetable performance indicators.
#[derive(Debug, Clone)]
pub struct TimetableKpi {
    /// Courses with an assignment.
    pub scheduled: usize,
    /// Courses without an assignment.
    pub unscheduled: usize,
    /// Fraction of courses scheduled (0.0..1.0).
    pub completion_rate: f64,
    /// Unscheduled course count per reason.
    pub unscheduled_by_reason: BTreeMap<UnscheduledReason, usize>,
    /// Per-venue utilization (0.0..1.0).
    pub utilization_by_venue: HashMap<VenueId, f64>,
    /// Average venue utilization (0.0..1.0).
    pub avg_utilization: f64,
    /// Courses taught per lecturer, including lecturers with none.
    pub load_by_lecturer: HashMap<LecturerId, usize>,
}

impl TimetableKpi {
    /// Computes KPIs from a timetable and its snapshot.
    ///
    /// Assignments naming venues or lecturers outside the snapshot are
    /// ignored for utilization and load.
    pub fn calculate(timetable: &Timetable, snapshot: &DomainSnapshot) -> Self {
        let scheduled = timetable.scheduled_count();
        let unscheduled = timetable.unscheduled_count();
        let total = scheduled + unscheduled;
        let completion_rate = if total > 0 {
            scheduled as f64 / total as f64
        } else {
            1.0
        };

        let n_slots = snapshot.timeslots().len();
        let mut occupied: HashMap<VenueId, usize> =
            snapshot.venues().iter().map(|v| (v.id, 0)).collect();
        let mut load_by_lecturer: HashMap<LecturerId, usize> =
            snapshot.lecturers().iter().map(|l| (l.id, 0)).collect();
        for a in &timetable.assignments {
            if let Some(n) = occupied.get_mut(&a.venue_id) {
                *n += 1;
            }
            if let Some(n) = load_by_lecturer.get_mut(&a.lecturer_id) {
                *n += 1;
            }
        }

        let utilization_by_venue: HashMap<VenueId, f64> = occupied
            .into_iter()
            .map(|(id, n)| {
                let u = if n_slots > 0 {
                    n as f64 / n_slots as f64
                } else {
                    0.0
                };
                (id, u)
            })
            .collect();
        let avg_utilization = if utilization_by_venue.is_empty() {
            0.0
        } else {
            utilization_by_venue.values().sum::<f64>() / utilization_by_venue.len() as f64
        };

        Self {
            scheduled,
            unscheduled,
            completion_rate,
            unscheduled_by_reason: timetable.unscheduled_by_reason(),
            utilization_by_venue,
            avg_utilization,
            load_by_lecturer,
        }
    }

    /// Highest number of courses any single lecturer teaches.
    pub fn max_lecturer_load(&self) -> usize {
        self.load_by_lecturer.values().copied().max().unwrap_or(0)
    }
}
