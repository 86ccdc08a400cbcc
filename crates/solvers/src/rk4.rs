//! Classical fourth-order Runge-Kutta integration with a fixed step size.
//!
//! # Algorithm
//!
//! Each step advances `(x, y)` by the step size `h` using four slope
//! evaluations of the system `f`:
//!
//! ```text
//! k1 = f(x,         y)
//! k2 = f(x + h / 2, y + h / 2 * k1)
//! k3 = f(x + h / 2, y + h / 2 * k2)
//! k4 = f(x + h,     y + h * k3)
//!
//! y_{n+1} = y_n + h / 6 * (k1 + 2 k2 + 2 k3 + k4)
//! x_{n+1} = x_n + h
//! ```
//!
//! The local truncation error is O(h⁵) and the global error is O(h⁴).
//!
//! # When to Use
//!
//! - The system is non-stiff
//! - A fixed, caller-chosen step size is acceptable
//! - Four system evaluations per step are affordable
//!
//! There is no step-size control or error estimation: accuracy is set
//! entirely by the step size.
//!
//! # Usage
//!
//! [`Integrator`] carries `(x, y)` between calls and advances it with
//! [`Integrator::step`], [`Integrator::steps`], or [`Integrator::end`]:
//!
//! ```
//! use kutta_solvers::rk4::Integrator;
//!
//! let decay = |_x: f64, y: &[f64]| vec![1.0 - y[0]];
//! let mut rk4 = Integrator::with_step_size(decay, 0.0, [0.0], 0.01)?;
//!
//! let y = rk4.end(1.0)?;
//! assert!((y[0] - (1.0 - (-1.0_f64).exp())).abs() < 1e-8);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [`solve`] records a full trajectory and reports each step to an observer:
//!
//! ```
//! use kutta_solvers::rk4::{self, Action, Config, Event, Status};
//!
//! let growth = |_x: f64, y: &[f64]| vec![y[0]];
//! let config = Config::new(0.1)?;
//!
//! // Stop once the state doubles.
//! let observer = |event: &Event| (event.point.y[0] >= 2.0).then_some(Action::StopEarly);
//!
//! let solution = rk4::solve(growth, 0.0, [1.0], config, 100, observer)?;
//! assert_eq!(solution.status, Status::StoppedByObserver);
//! assert_eq!(solution.steps, 7);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Observer Events
//!
//! The trajectory drivers emit one [`Event`] for the initial point (step 0)
//! and one after each step. Observers can return [`Action::StopEarly`] to
//! halt and return the points recorded so far.

mod action;
mod config;
mod error;
mod event;
mod integrator;
mod point;
mod solution;
mod stages;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use integrator::Integrator;
pub use point::Point;
pub use solution::{Solution, Status};
pub use stages::Stages;

use kutta_core::{Observer, OdeSystem};

/// Integrates `steps` fixed steps from `(x, y)` and records the trajectory.
///
/// # Algorithm
///
/// 1. Record the initial point and emit it as step 0.
/// 2. For each step:
///    - Advance the integrator by one RK4 step.
///    - Record the new point.
///    - Emit an [`Event`] to the observer.
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return the solution with the full history.
///
/// # Errors
///
/// Returns an error if the system fails or returns a derivative of the wrong
/// dimension at any step.
pub fn solve<S, Obs>(
    system: S,
    x: f64,
    y: impl Into<Vec<f64>>,
    config: Config,
    steps: usize,
    observer: Obs,
) -> Result<Solution, Error>
where
    S: OdeSystem,
    Obs: Observer<Event, Action>,
{
    let integrator = Integrator::new(system, x, y, config);
    drive(integrator, steps, observer)
}

/// Integrates `steps` fixed steps without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the system fails or returns a derivative of the wrong
/// dimension at any step.
pub fn solve_unobserved<S: OdeSystem>(
    system: S,
    x: f64,
    y: impl Into<Vec<f64>>,
    config: Config,
    steps: usize,
) -> Result<Solution, Error> {
    solve(system, x, y, config, steps, ())
}

/// Integrates from `(x, y)` to approximately `target` and records the trajectory.
///
/// The number of steps is [`Integrator::steps_to`] of the target, so the last
/// point lies within half a step of `target`.
///
/// # Errors
///
/// Returns an error if the target is not finite, lies behind `x` relative to
/// the step direction, or if a step fails.
pub fn solve_to<S, Obs>(
    system: S,
    x: f64,
    y: impl Into<Vec<f64>>,
    config: Config,
    target: f64,
    observer: Obs,
) -> Result<Solution, Error>
where
    S: OdeSystem,
    Obs: Observer<Event, Action>,
{
    let integrator = Integrator::new(system, x, y, config);
    let steps = integrator.steps_to(target)?;
    drive(integrator, steps, observer)
}

fn drive<S, Obs>(
    mut integrator: Integrator<S>,
    steps: usize,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    S: OdeSystem,
    Obs: Observer<Event, Action>,
{
    let initial = integrator.point();
    let mut history = vec![initial.clone()];

    let event = Event {
        step: 0,
        point: initial,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            history,
            steps: 0,
        });
    }

    for step in 1..=steps {
        integrator.step()?;

        let point = integrator.point();
        history.push(point.clone());

        let event = Event { step, point };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                history,
                steps: step,
            });
        }
    }

    Ok(Solution {
        status: Status::Complete,
        history,
        steps,
    })
}
