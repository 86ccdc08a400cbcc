/// A solution point: the state `y` estimated at the independent variable `x`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The independent variable (usually time).
    pub x: f64,

    /// The dependent variables at `x`.
    pub y: Vec<f64>,
}

impl Point {
    /// Creates a point from an independent value and a state.
    pub fn new(x: f64, y: impl Into<Vec<f64>>) -> Self {
        Self { x, y: y.into() }
    }
}
