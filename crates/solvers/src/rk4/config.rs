use thiserror::Error;

/// Configuration for the RK4 integrator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawConfig", into = "RawConfig")
)]
pub struct Config {
    step_size: f64,
}

/// Errors that can occur when validating an RK4 config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("step size must be finite and nonzero")]
    StepSize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step_size: Self::DEFAULT_STEP_SIZE,
        }
    }
}

impl Config {
    /// Step size used by [`Config::default`].
    pub const DEFAULT_STEP_SIZE: f64 = 0.01;

    /// Creates a new config with a validated step size.
    ///
    /// A negative step size integrates backward in the independent variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the step size is zero or non-finite.
    pub fn new(step_size: f64) -> Result<Self, ConfigError> {
        if !step_size.is_finite() || step_size == 0.0 {
            return Err(ConfigError::StepSize);
        }

        Ok(Self { step_size })
    }

    /// Returns the fixed step size.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }
}

impl TryFrom<f64> for Config {
    type Error = ConfigError;

    fn try_from(step_size: f64) -> Result<Self, Self::Error> {
        Self::new(step_size)
    }
}

/// Unvalidated wire form of [`Config`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawConfig {
    #[serde(default = "default_step_size")]
    step_size: f64,
}

#[cfg(feature = "serde")]
fn default_step_size() -> f64 {
    Config::DEFAULT_STEP_SIZE
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Self::new(raw.step_size)
    }
}

#[cfg(feature = "serde")]
impl From<Config> for RawConfig {
    fn from(config: Config) -> Self {
        Self {
            step_size: config.step_size,
        }
    }
}
