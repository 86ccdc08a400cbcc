use std::error::Error as StdError;

/// Errors that can occur while advancing an RK4 integrator.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("system error: {0}")]
    System(#[source] Box<dyn StdError + Send + Sync>),

    #[error("derivative has dimension {found}, expected {expected}")]
    Dimension { expected: usize, found: usize },

    #[error("target must be finite, got {0}")]
    Target(f64),

    #[error("target {target} lies behind x = {x} for step size {step_size}")]
    Direction { x: f64, target: f64, step_size: f64 },
}

impl Error {
    pub(crate) fn system<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::System(Box::new(err))
    }
}
