//! Fixed-step numerical integrators for Kutta.
//!
//! # Solvers
//!
//! - [`rk4`] — the classical fourth-order Runge-Kutta method with a fixed,
//!   caller-chosen step size

pub mod rk4;
