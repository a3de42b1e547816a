//! Course model.
//!
//! A course is one schedulable unit: in a complete timetable it receives
//! exactly one (lecturer, venue, timeslot) assignment.

use serde::{Deserialize, Serialize};

/// Course identifier.
pub type CourseId = u32;

/// A course to be placed in the timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Unique course identifier.
    pub id: CourseId,
    /// Course title (e.g., "Data Structures").
    pub title: String,
    /// Academic level (e.g., "100", "Postgraduate"). Carried, not scheduled on.
    #[serde(default)]
    pub level: String,
    /// Whether the course must be held in a lab venue.
    #[serde(default)]
    pub lab_required: bool,
}

impl Course {
    /// Creates a course with the given ID and title.
    pub fn new(id: CourseId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            level: String::new(),
            lab_required: false,
        }
    }

    /// Sets the academic level.
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Marks the course as requiring a lab venue.
    pub fn with_lab_required(mut self, lab_required: bool) -> Self {
        self.lab_required = lab_required;
        self
    }
}
