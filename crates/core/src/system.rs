use std::{convert::Infallible, error::Error as StdError, marker::PhantomData};

/// The right-hand side of a system of first-order ODEs, `dy/dx = f(x, y)`.
///
/// An integrator calls [`OdeSystem::derivative`] with the independent variable
/// `x` and the state `y` and expects a derivative of the same dimension back.
/// Implementations should be pure: the result may depend only on `x` and `y`,
/// otherwise the accuracy guarantees of the integrator no longer hold.
///
/// Any closure or function with the signature `Fn(f64, &[f64]) -> Vec<f64>`
/// is an infallible `OdeSystem`. Use [`fallible`] to adapt a closure that can
/// fail, or implement the trait directly on a type that carries parameters.
///
/// # Example
///
/// ```
/// use kutta_core::OdeSystem;
///
/// let decay = |_x: f64, y: &[f64]| vec![-0.5 * y[0]];
///
/// let dydx = decay.derivative(0.0, &[2.0]).unwrap();
/// assert_eq!(dydx, vec![-1.0]);
/// ```
pub trait OdeSystem {
    type Error: StdError + Send + Sync + 'static;

    /// Evaluates the derivative of `y` with respect to `x`.
    ///
    /// The returned vector must have the same length as `y`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be evaluated.
    fn derivative(&self, x: f64, y: &[f64]) -> Result<Vec<f64>, Self::Error>;
}

impl<F> OdeSystem for F
where
    F: Fn(f64, &[f64]) -> Vec<f64>,
{
    type Error = Infallible;

    fn derivative(&self, x: f64, y: &[f64]) -> Result<Vec<f64>, Self::Error> {
        Ok(self(x, y))
    }
}

/// An [`OdeSystem`] backed by a closure that returns `Result`.
///
/// Created by [`fallible`].
pub struct Fallible<F, E> {
    function: F,
    _marker: PhantomData<fn() -> E>,
}

/// Wraps a fallible closure so it can be used as an [`OdeSystem`].
///
/// # Example
///
/// ```
/// use kutta_core::{OdeSystem, fallible};
///
/// #[derive(Debug)]
/// struct Negative;
///
/// impl std::fmt::Display for Negative {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         f.write_str("state went negative")
///     }
/// }
///
/// impl std::error::Error for Negative {}
///
/// let sqrt_growth = fallible(|_x: f64, y: &[f64]| {
///     if y[0] < 0.0 {
///         Err(Negative)
///     } else {
///         Ok(vec![y[0].sqrt()])
///     }
/// });
///
/// assert_eq!(sqrt_growth.derivative(0.0, &[4.0]).unwrap(), vec![2.0]);
/// assert!(sqrt_growth.derivative(0.0, &[-1.0]).is_err());
/// ```
pub const fn fallible<F, E>(function: F) -> Fallible<F, E>
where
    F: Fn(f64, &[f64]) -> Result<Vec<f64>, E>,
{
    Fallible {
        function,
        _marker: PhantomData,
    }
}

impl<F, E> OdeSystem for Fallible<F, E>
where
    F: Fn(f64, &[f64]) -> Result<Vec<f64>, E>,
    E: StdError + Send + Sync + 'static,
{
    type Error = E;

    fn derivative(&self, x: f64, y: &[f64]) -> Result<Vec<f64>, Self::Error> {
        (self.function)(x, y)
    }
}
