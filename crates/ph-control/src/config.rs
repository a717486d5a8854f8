//! Control policy configuration and its validation.

use crate::error::ConfigError;
use crate::numeric::{Real, ensure_finite};
use crate::output::OUTPUT_CEILING;
use serde::{Deserialize, Serialize};

const DEFAULT_SETPOINT: Real = 6.4;
const DEFAULT_PROPORTIONAL_GAIN: Real = 1.0;
const DEFAULT_VALUE_MAX: Real = 7.5;
const DEFAULT_VALUE_MIN: Real = 6.0;
const DEFAULT_OUTPUT_MIN: i32 = 15;

/// Smallest accepted proportional gain (inclusive).
pub const MIN_PROPORTIONAL_GAIN: Real = 0.01;

/// One control policy: target, gain, admissible measurement band and output floor.
///
/// A `PhConfig` is a plain value. Constructing or deserializing one never
/// validates it; [`validate`] runs when the configuration is handed to a
/// controller and again every time the controller starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhConfig {
    /// Target pH.
    pub setpoint: Real,
    /// Multiplier applied to the control error. Must be at least 0.01.
    pub proportional_gain: Real,
    /// Highest admissible pH measurement.
    pub value_max: Real,
    /// Lowest admissible pH measurement.
    pub value_min: Real,
    /// Lowest command the actuator accepts. Must be below [`OUTPUT_CEILING`].
    pub output_min: i32,
}

impl Default for PhConfig {
    /// Factory policy: setpoint 6.4, gain 1.0, band [6.0, 7.5], output floor 15.
    fn default() -> Self {
        Self {
            setpoint: DEFAULT_SETPOINT,
            proportional_gain: DEFAULT_PROPORTIONAL_GAIN,
            value_max: DEFAULT_VALUE_MAX,
            value_min: DEFAULT_VALUE_MIN,
            output_min: DEFAULT_OUTPUT_MIN,
        }
    }
}

impl PhConfig {
    /// Create a configuration from explicit values.
    ///
    /// # Arguments
    ///
    /// * `setpoint` - Target pH
    /// * `proportional_gain` - Gain applied to the control error
    /// * `value_min` - Lowest admissible measurement
    /// * `value_max` - Highest admissible measurement
    /// * `output_min` - Output floor
    pub fn new(
        setpoint: Real,
        proportional_gain: Real,
        value_min: Real,
        value_max: Real,
        output_min: i32,
    ) -> Self {
        Self {
            setpoint,
            proportional_gain,
            value_max,
            value_min,
            output_min,
        }
    }

    /// Set the target pH.
    pub fn with_setpoint(mut self, setpoint: Real) -> Self {
        self.setpoint = setpoint;
        self
    }

    /// Set the proportional gain.
    pub fn with_gain(mut self, proportional_gain: Real) -> Self {
        self.proportional_gain = proportional_gain;
        self
    }

    /// Set the admissible measurement band.
    pub fn with_range(mut self, value_min: Real, value_max: Real) -> Self {
        self.value_min = value_min;
        self.value_max = value_max;
        self
    }

    /// Set the output floor.
    pub fn with_output_min(mut self, output_min: i32) -> Self {
        self.output_min = output_min;
        self
    }

    /// Shorthand for [`validate(self)`](validate).
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate(self)
    }
}

/// Check a configuration. The first failing check wins:
///
/// 1. every real-valued field is finite
/// 2. `value_min <= value_max`, else [`ConfigError::RangeInverted`]
/// 3. `value_min <= setpoint <= value_max`, else [`ConfigError::SetpointOutOfRange`]
/// 4. `proportional_gain >= 0.01`, else [`ConfigError::InvalidGain`]
/// 5. `output_min < OUTPUT_CEILING`, else [`ConfigError::OutputFloorTooHigh`]
pub fn validate(config: &PhConfig) -> Result<(), ConfigError> {
    // NaN slips through every comparison below.
    ensure_finite(config.setpoint, "setpoint")?;
    ensure_finite(config.proportional_gain, "proportional_gain")?;
    ensure_finite(config.value_min, "value_min")?;
    ensure_finite(config.value_max, "value_max")?;

    if config.value_max - config.value_min < 0.0 {
        return Err(ConfigError::RangeInverted {
            value_min: config.value_min,
            value_max: config.value_max,
        });
    }

    if config.value_max - config.setpoint < 0.0 || config.value_min - config.setpoint > 0.0 {
        return Err(ConfigError::SetpointOutOfRange {
            setpoint: config.setpoint,
            value_min: config.value_min,
            value_max: config.value_max,
        });
    }

    if config.proportional_gain - MIN_PROPORTIONAL_GAIN < 0.0 {
        return Err(ConfigError::InvalidGain {
            gain: config.proportional_gain,
        });
    }

    if config.output_min >= OUTPUT_CEILING {
        return Err(ConfigError::OutputFloorTooHigh {
            output_min: config.output_min,
            ceiling: OUTPUT_CEILING,
        });
    }

    Ok(())
}
