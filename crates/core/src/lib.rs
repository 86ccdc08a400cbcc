//! Core traits and types for Kutta.
//!
//! This crate defines the shared abstractions that integrators and callers
//! build on:
//!
//! - [`OdeSystem`] — the right-hand side `dy/dx = f(x, y)` of a system of
//!   first-order ordinary differential equations
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`fallible`] — adapts a closure returning `Result` into an [`OdeSystem`]

mod observer;
mod system;

pub use observer::Observer;
pub use system::{Fallible, OdeSystem, fallible};
