/// The four slope evaluations of a single RK4 step.
///
/// With `h` the step size and `f` the system:
///
/// ```text
/// k1 = f(x,         y)
/// k2 = f(x + h / 2, y + h / 2 * k1)
/// k3 = f(x + h / 2, y + h / 2 * k2)
/// k4 = f(x + h,     y + h * k3)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Stages {
    pub k1: Vec<f64>,
    pub k2: Vec<f64>,
    pub k3: Vec<f64>,
    pub k4: Vec<f64>,
}

impl Stages {
    /// Returns the RK4 increment `h / 6 * (k1 + 2 k2 + 2 k3 + k4)` for component `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds for the stage vectors.
    #[must_use]
    pub fn increment(&self, i: usize, h: f64) -> f64 {
        h / 6.0 * (self.k1[i] + 2.0 * self.k2[i] + 2.0 * self.k3[i] + self.k4[i])
    }
}
