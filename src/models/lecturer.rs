//! Lecturer model.

use serde::{Deserialize, Serialize};

/// Lecturer identifier.
pub type LecturerId = u32;

/// A lecturer who can teach any number of courses, one per timeslot.
///
/// Which timeslots a lecturer may teach is not stored here; it comes from
/// the [`Availability`](super::Availability) relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lecturer {
    /// Unique lecturer identifier.
    pub id: LecturerId,
    /// Display name.
    pub name: String,
    /// Academic rank (e.g., "Senior Lecturer"). Carried, not scheduled on.
    #[serde(default)]
    pub rank: String,
}

impl Lecturer {
    /// Creates a lecturer with the given ID and name.
    pub fn new(id: LecturerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            rank: String::new(),
        }
    }

    /// Sets the academic rank.
    pub fn with_rank(mut self, rank: impl Into<String>) -> Self {
        self.rank = rank.into();
        self
    }
}
