//! Search bounding: node limit, wall-clock limit and cancellation.
//!
//! The search polls [`SearchBudget::check`] on entry to every node. All
//! three bounds are treated alike: once one trips, the search stops and
//! returns its deepest partial assignment.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Shared cancellation flag for a generation run.
///
/// Clone it, hand one copy to the scheduler and keep the other; calling
/// [`cancel`](Self::cancel) from any thread stops the run at its next node.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Which bound stopped a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The node bound was reached.
    NodeLimit,
    /// The wall-clock bound elapsed.
    TimeLimit,
    /// The cancellation token was triggered.
    Cancelled,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StopReason::NodeLimit => "node limit reached",
            StopReason::TimeLimit => "time limit reached",
            StopReason::Cancelled => "cancellation requested",
        })
    }
}

/// Per-run search bounds. The clock starts when the budget is created.
#[derive(Debug, Clone)]
pub struct SearchBudget {
    node_limit: u64,
    time_limit: Duration,
    start_time: Instant,
    cancel: Option<CancellationToken>,
}

impl SearchBudget {
    /// Creates a budget with the given node and time limits.
    pub fn new(node_limit: u64, time_limit: Duration) -> Self {
        Self {
            node_limit,
            time_limit,
            start_time: Instant::now(),
            cancel: None,
        }
    }

    /// Attaches a cancellation token.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Checks whether another node may be entered after `nodes_visited` nodes.
    ///
    /// Cancellation is checked first, then the node limit, then the clock.
    pub fn check(&self, nodes_visited: u64) -> Option<StopReason> {
        if self.cancel.as_ref().is_some_and(CancellationToken::is_cancelled) {
            return Some(StopReason::Cancelled);
        }
        if nodes_visited >= self.node_limit {
            return Some(StopReason::NodeLimit);
        }
        if self.start_time.elapsed() >= self.time_limit {
            return Some(StopReason::TimeLimit);
        }
        None
    }

    /// Time since the budget was created.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}
