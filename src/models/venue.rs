//! Venue model.
//!
//! Venues are the rooms courses are held in. At most one course occupies
//! a venue per timeslot; suitability for a course depends on capacity and
//! on whether the course needs a lab.

use serde::{Deserialize, Serialize};

/// Venue identifier.
pub type VenueId = u32;

/// A room that can host one course per timeslot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    /// Unique venue identifier.
    pub id: VenueId,
    /// Display name.
    pub name: String,
    /// Seating capacity.
    pub capacity: i32,
    /// Venue classification.
    #[serde(rename = "type")]
    pub venue_type: VenueType,
}

/// Venue classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VenueType {
    /// General teaching room.
    #[serde(alias = "Lecture Hall")]
    LectureHall,
    /// Laboratory; the only type that satisfies lab-required courses.
    Lab,
}

impl Venue {
    /// Creates a venue.
    pub fn new(id: VenueId, venue_type: VenueType, capacity: i32) -> Self {
        Self {
            id,
            name: String::new(),
            capacity,
            venue_type,
        }
    }

    /// Creates a lecture hall.
    pub fn lecture_hall(id: VenueId, capacity: i32) -> Self {
        Self::new(id, VenueType::LectureHall, capacity)
    }

    /// Creates a lab.
    pub fn lab(id: VenueId, capacity: i32) -> Self {
        Self::new(id, VenueType::Lab, capacity)
    }

    /// Sets the venue name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Whether this venue is a lab.
    #[inline]
    pub fn is_lab(&self) -> bool {
        self.venue_type == VenueType::Lab
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_constructors() {
        let hall = Venue::lecture_hall(1, 120).with_name("Main Hall");
        assert_eq!(hall.venue_type, VenueType::LectureHall);
        assert_eq!(hall.capacity, 120);
        assert_eq!(hall.name, "Main Hall");
        assert!(!hall.is_lab());

        let lab = Venue::lab(2, 35);
        assert!(lab.is_lab());
    }

    #[test]
    fn test_venue_type_accepts_display_label() {
        let v: Venue = serde_json::from_str(
            r#"{"id":3,"name":"Block B","capacity":60,"type":"Lecture Hall"}"#,
        )
        .unwrap();
        assert_eq!(v.venue_type, VenueType::LectureHall);

        let json = serde_json::to_string(&v).unwrap();
        assert!(json.contains(r#""type":"LectureHall""#));
    }
}
