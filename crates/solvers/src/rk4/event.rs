use super::Point;

/// Event emitted by the RK4 trajectory drivers for each recorded point.
///
/// Step 0 is the initial state before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// The step number (0 for initial, 1..N for integration steps).
    pub step: usize,

    /// The independent variable and state after this step.
    pub point: Point,
}
