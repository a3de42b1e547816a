//! Lecturer availability relation.
//!
//! A record `(lecturer, timeslot)` states the lecturer may teach in that
//! timeslot. A lecturer with no records at all is treated as available in
//! every timeslot.

use serde::{Deserialize, Serialize};

use super::{LecturerId, TimeslotId};

/// One availability record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    /// Lecturer the record belongs to.
    pub lecturer_id: LecturerId,
    /// Timeslot the lecturer may teach in.
    pub timeslot_id: TimeslotId,
}

impl Availability {
    /// Creates an availability record.
    pub fn new(lecturer_id: LecturerId, timeslot_id: TimeslotId) -> Self {
        Self {
            lecturer_id,
            timeslot_id,
        }
    }
}
