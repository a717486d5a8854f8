//! Error types for controller operations.
//!
//! Configuration problems and run-time control problems are kept in separate
//! enums so a validation result can never be mistaken for a sample rejection.

use crate::numeric::Real;
use thiserror::Error;

/// Result type for controller operations.
pub type ControlResult<T> = Result<T, ControlError>;

/// A quantity that must be finite was NaN or infinite.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("Non-finite numeric value for {what}: {value}")]
pub struct NonFiniteValue {
    pub what: &'static str,
    pub value: Real,
}

/// Reasons a configuration is rejected by [`validate`](crate::validate).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// A configuration field is NaN or infinite.
    #[error(transparent)]
    NonFinite(#[from] NonFiniteValue),

    /// The measurement band `[value_min, value_max]` is inverted.
    #[error("Measurement range inverted: value_min {value_min} > value_max {value_max}")]
    RangeInverted { value_min: Real, value_max: Real },

    /// The setpoint lies outside the measurement band.
    #[error("Setpoint {setpoint} outside measurement range [{value_min}, {value_max}]")]
    SetpointOutOfRange {
        setpoint: Real,
        value_min: Real,
        value_max: Real,
    },

    /// Proportional gain below the minimum of 0.01.
    #[error("Invalid proportional gain {gain}: must be at least 0.01")]
    InvalidGain { gain: Real },

    /// Output floor at or above the fixed output ceiling.
    #[error("Output floor {output_min} must be below the output ceiling {ceiling}")]
    OutputFloorTooHigh { output_min: i32, ceiling: i32 },
}

/// Errors returned by [`PhController`](crate::PhController) operations.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ControlError {
    /// Configuration rejected on create, reconfigure or start.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Reconfiguration attempted while the controller is running.
    #[error("Controller is running: stop it before changing the configuration")]
    ControllerIsRunning,

    /// Sample update attempted while the controller is stopped.
    #[error("Controller is stopped")]
    ControllerStopped,

    /// Sample below setpoint; only non-negative control error is actuated.
    #[error("Current value {value} is below setpoint {setpoint}")]
    CurrentValueTooLow { value: Real, setpoint: Real },

    /// Sample is NaN or infinite.
    #[error(transparent)]
    NonFinite(#[from] NonFiniteValue),

    /// Internal state that a correctly configured controller never reaches.
    #[error("Controller state error: {what}")]
    Generic { what: &'static str },
}
