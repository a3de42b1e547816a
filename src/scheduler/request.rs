//! Generation request: entity snapshots plus run configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::models::{Availability, Course, Lecturer, Timeslot, Venue};

/// Default minimum venue capacity a course may be placed in.
pub const DEFAULT_MIN_VENUE_CAPACITY: i32 = 30;
/// Default maximum number of search nodes per run.
pub const DEFAULT_NODE_BOUND: u64 = 100_000;
/// Default wall-clock budget per run (ms).
pub const DEFAULT_TIME_BOUND_MS: u64 = 5_000;

/// Input container for one generation run.
///
/// Deserializes from camelCase JSON; the three configuration fields fall
/// back to their defaults when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Courses to place.
    pub courses: Vec<Course>,
    /// Lecturers who may teach them.
    pub lecturers: Vec<Lecturer>,
    /// Venues courses may be held in.
    pub venues: Vec<Venue>,
    /// Teaching periods.
    pub timeslots: Vec<Timeslot>,
    /// Explicit lecturer availability records.
    #[serde(default)]
    pub availability: Vec<Availability>,
    /// Smallest venue capacity any course may use.
    #[serde(default = "default_min_venue_capacity")]
    pub min_venue_capacity: i32,
    /// Maximum search nodes before the run stops with a partial result.
    #[serde(default = "default_node_bound")]
    pub node_bound: u64,
    /// Wall-clock budget (ms) before the run stops with a partial result.
    #[serde(default = "default_time_bound_ms")]
    pub time_bound_millis: u64,
}

fn default_min_venue_capacity() -> i32 {
    DEFAULT_MIN_VENUE_CAPACITY
}

fn default_node_bound() -> u64 {
    DEFAULT_NODE_BOUND
}

fn default_time_bound_ms() -> u64 {
    DEFAULT_TIME_BOUND_MS
}

impl GenerateRequest {
    /// Creates a request with default configuration and no availability records.
    pub fn new(
        courses: Vec<Course>,
        lecturers: Vec<Lecturer>,
        venues: Vec<Venue>,
        timeslots: Vec<Timeslot>,
    ) -> Self {
        Self {
            courses,
            lecturers,
            venues,
            timeslots,
            availability: Vec::new(),
            min_venue_capacity: DEFAULT_MIN_VENUE_CAPACITY,
            node_bound: DEFAULT_NODE_BOUND,
            time_bound_millis: DEFAULT_TIME_BOUND_MS,
        }
    }

    /// Sets the availability records.
    pub fn with_availability(mut self, availability: Vec<Availability>) -> Self {
        self.availability = availability;
        self
    }

    /// Sets the minimum venue capacity.
    pub fn with_min_venue_capacity(mut self, capacity: i32) -> Self {
        self.min_venue_capacity = capacity;
        self
    }

    /// Sets the node bound.
    pub fn with_node_bound(mut self, nodes: u64) -> Self {
        self.node_bound = nodes;
        self
    }

    /// Sets the wall-clock bound in milliseconds.
    pub fn with_time_bound_millis(mut self, millis: u64) -> Self {
        self.time_bound_millis = millis;
        self
    }

    /// Wall-clock bound as a `Duration`.
    pub fn time_bound(&self) -> Duration {
        Duration::from_millis(self.time_bound_millis)
    }

    /// The run configuration carried by this request.
    pub fn config(&self) -> SearchConfig {
        SearchConfig {
            min_venue_capacity: self.min_venue_capacity,
            node_bound: self.node_bound,
            time_bound: self.time_bound(),
        }
    }
}

/// Thresholds and bounds for one run, detached from the entity data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Smallest venue capacity any course may use.
    pub min_venue_capacity: i32,
    /// Maximum search nodes.
    pub node_bound: u64,
    /// Wall-clock budget.
    pub time_bound: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_venue_capacity: DEFAULT_MIN_VENUE_CAPACITY,
            node_bound: DEFAULT_NODE_BOUND,
            time_bound: Duration::from_millis(DEFAULT_TIME_BOUND_MS),
        }
    }
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new(), Vec::new())
    }
}
