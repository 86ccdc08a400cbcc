use kutta_core::OdeSystem;

use super::{Config, ConfigError, Error, Point, Stages};

/// A fixed-step RK4 integrator that carries its state between calls.
///
/// The integrator owns the current independent value `x`, the state `y`, and
/// the system that computes `dy/dx`. Every advancing call mutates that state
/// in place and returns a read-only view of the updated `y`. The view borrows
/// the integrator, so it cannot be held across the next advancing call; use
/// [`Integrator::point`] for an owned copy.
///
/// The dimension of `y` is fixed at construction. An empty initial state is
/// valid and yields an integrator that only advances `x`.
#[derive(Debug, Clone)]
pub struct Integrator<S> {
    system: S,
    x: f64,
    y: Vec<f64>,
    config: Config,
    stages: Option<Stages>,
    step_count: usize,
}

impl<S: OdeSystem> Integrator<S> {
    /// Creates an integrator at `(x, y)` using a validated config.
    pub fn new(system: S, x: f64, y: impl Into<Vec<f64>>, config: Config) -> Self {
        Self {
            system,
            x,
            y: y.into(),
            config,
            stages: None,
            step_count: 0,
        }
    }

    /// Creates an integrator at `(x, y)` with the given step size.
    ///
    /// # Errors
    ///
    /// Returns an error if the step size is zero or non-finite.
    pub fn with_step_size(
        system: S,
        x: f64,
        y: impl Into<Vec<f64>>,
        step_size: f64,
    ) -> Result<Self, ConfigError> {
        let config = Config::new(step_size)?;
        Ok(Self::new(system, x, y, config))
    }

    /// Advances the state by exactly one step.
    ///
    /// The state is committed only after all four stages succeed, so on error
    /// `x` and `y` are unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::System`] if the system fails to evaluate, or
    /// [`Error::Dimension`] if it returns a derivative of the wrong length.
    pub fn step(&mut self) -> Result<&[f64], Error> {
        let h = self.config.step_size();
        let half = 0.5 * h;
        let x = self.x;
        let y = self.y.as_slice();

        let k1 = self.evaluate(x, y)?;
        let k2 = self.evaluate(x + half, &offset(y, &k1, half))?;
        let k3 = self.evaluate(x + half, &offset(y, &k2, half))?;
        let k4 = self.evaluate(x + h, &offset(y, &k3, h))?;

        let stages = Stages { k1, k2, k3, k4 };
        for (i, yi) in self.y.iter_mut().enumerate() {
            *yi += stages.increment(i, h);
        }
        self.x += h;
        self.stages = Some(stages);
        self.step_count += 1;

        Ok(&self.y)
    }

    /// Advances the state by `n` steps.
    ///
    /// `n = 0` leaves the state unchanged. Stops at the first failing step;
    /// steps completed before it stay committed.
    ///
    /// # Errors
    ///
    /// Returns the error of the first step that fails.
    pub fn steps(&mut self, n: usize) -> Result<&[f64], Error> {
        for _ in 0..n {
            self.step()?;
        }
        Ok(&self.y)
    }

    /// Advances the state to approximately `target`.
    ///
    /// Takes [`Integrator::steps_to`] steps, so the final `x` lies within half
    /// a step of `target` rather than exactly on it.
    ///
    /// # Errors
    ///
    /// Returns an error if the target is invalid (see [`Integrator::steps_to`])
    /// or if a step fails.
    pub fn end(&mut self, target: f64) -> Result<&[f64], Error> {
        let n = self.steps_to(target)?;
        self.steps(n)
    }

    /// Returns the number of whole steps from the current `x` to `target`.
    ///
    /// The quotient `(target - x) / h` is rounded to the nearest integer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Target`] if `target` is not finite, or
    /// [`Error::Direction`] if reaching it would require stepping against the
    /// sign of the step size.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn steps_to(&self, target: f64) -> Result<usize, Error> {
        if !target.is_finite() {
            return Err(Error::Target(target));
        }

        let step_size = self.config.step_size();
        let count = ((target - self.x) / step_size).round();
        if count < 0.0 {
            return Err(Error::Direction {
                x: self.x,
                target,
                step_size,
            });
        }

        Ok(count as usize)
    }

    fn evaluate(&self, x: f64, y: &[f64]) -> Result<Vec<f64>, Error> {
        let dydx = self.system.derivative(x, y).map_err(Error::system)?;
        if dydx.len() != self.y.len() {
            return Err(Error::Dimension {
                expected: self.y.len(),
                found: dydx.len(),
            });
        }
        Ok(dydx)
    }
}

impl<S> Integrator<S> {
    /// Returns the current independent value.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the current state.
    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Returns an owned copy of the current `(x, y)` pair.
    #[must_use]
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y.clone())
    }

    /// Returns the number of state components.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.y.len()
    }

    /// Returns the fixed step size.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.config.step_size()
    }

    /// Returns the config the integrator was built with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the number of steps completed since construction.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Returns the stages of the most recent step, or `None` before the first.
    #[must_use]
    pub fn stages(&self) -> Option<&Stages> {
        self.stages.as_ref()
    }

    /// Returns the system being integrated.
    #[must_use]
    pub fn system(&self) -> &S {
        &self.system
    }
}

/// Returns `y + scale * k`, element-wise.
fn offset(y: &[f64], k: &[f64], scale: f64) -> Vec<f64> {
    y.iter().zip(k).map(|(yi, ki)| yi + scale * ki).collect()
}
