use super::Point;

/// Indicates how the trajectory driver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an RK4 trajectory integration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// How the driver terminated.
    pub status: Status,

    /// Points from each step (including the initial state).
    pub history: Vec<Point>,

    /// Number of integration steps completed.
    pub steps: usize,
}

impl Solution {
    /// Returns the last recorded point.
    ///
    /// The history always holds at least the initial point.
    #[must_use]
    pub fn last(&self) -> Option<&Point> {
        self.history.last()
    }
}
