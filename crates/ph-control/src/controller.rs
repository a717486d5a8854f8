//! The proportional pH controller and its run/stop state machine.
//!
//! ```text
//!            start() ok
//!   Stopped ───────────▶ Running ─┐
//!      ▲                   │  ▲   │ start() ok / update()
//!      └──── stop() ───────┘  └───┘
//! ```
//!
//! - Configuration can only be replaced while stopped
//! - `start` re-validates the stored configuration every time
//! - `update` only actuates samples at or above the setpoint

use crate::config::{PhConfig, validate};
use crate::error::{ControlError, ControlResult, NonFiniteValue};
use crate::numeric::Real;
use crate::output::{OUTPUT_CEILING, clamp_output};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Run state of a [`PhController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ControllerState {
    Running,
    #[default]
    Stopped,
}

/// Single-loop proportional regulator driving a dosing pump.
///
/// The controller owns its configuration by value. It performs no I/O and no
/// allocation, and expects exclusive access: share it between tasks only
/// behind an external lock.
///
/// # Example
///
/// ```
/// use ph_control::{ControlError, PhConfig, PhController};
///
/// let config = PhConfig::default();
/// let mut controller = PhController::create(config).unwrap();
/// controller.start().unwrap();
///
/// // Below setpoint: nothing to dose.
/// assert!(matches!(
///     controller.update(config.setpoint - 1.0),
///     Err(ControlError::CurrentValueTooLow { .. })
/// ));
///
/// // Above setpoint: the floor applies to small errors.
/// assert_eq!(controller.update(config.setpoint + 1.0), Ok(15));
///
/// controller.stop();
/// assert_eq!(controller.update(7.0), Err(ControlError::ControllerStopped));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PhController {
    config: PhConfig,
    state: ControllerState,
    is_configured: bool,
    output_value: Option<i32>,
}

impl PhController {
    /// Create a stopped controller holding `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::Config`] if `config` fails validation.
    pub fn create(config: PhConfig) -> ControlResult<Self> {
        let mut controller = Self {
            config,
            state: ControllerState::Stopped,
            is_configured: false,
            output_value: None,
        };
        controller.set_configuration(config)?;
        Ok(controller)
    }

    /// Replace the stored configuration.
    ///
    /// The replacement is all-or-nothing: on any error the previous
    /// configuration stays in place.
    ///
    /// # Errors
    ///
    /// - [`ControlError::ControllerIsRunning`] if the controller is running
    /// - [`ControlError::Config`] if `config` fails validation
    pub fn set_configuration(&mut self, config: PhConfig) -> ControlResult<()> {
        if self.state == ControllerState::Running {
            return Err(ControlError::ControllerIsRunning);
        }

        validate(&config)?;

        self.config = config;
        self.is_configured = true;
        debug!(
            setpoint = config.setpoint,
            gain = config.proportional_gain,
            value_min = config.value_min,
            value_max = config.value_max,
            output_min = config.output_min,
            "ph controller configured"
        );
        Ok(())
    }

    /// Validate the stored configuration and enter [`ControllerState::Running`].
    ///
    /// Calling `start` on a running controller re-validates and keeps it running.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::Config`] if the stored configuration no longer
    /// validates (see [`config_mut`](Self::config_mut)). The state is left as
    /// it was.
    pub fn start(&mut self) -> ControlResult<()> {
        validate(&self.config)?;

        if self.state != ControllerState::Running {
            debug!(setpoint = self.config.setpoint, "ph controller started");
        }
        self.state = ControllerState::Running;
        Ok(())
    }

    /// Enter [`ControllerState::Stopped`]. Always succeeds.
    pub fn stop(&mut self) {
        if self.state != ControllerState::Stopped {
            debug!("ph controller stopped");
        }
        self.state = ControllerState::Stopped;
    }

    /// Compute the output command for one pH sample.
    ///
    /// `error = current_value - setpoint`, `raw = gain * error`, and the
    /// returned command is [`clamp_output`]`(raw, output_min)`. The command is
    /// also kept as [`output_value`](Self::output_value). Positive infinity
    /// saturates at [`OUTPUT_CEILING`].
    ///
    /// # Errors
    ///
    /// - [`ControlError::ControllerStopped`] if the controller is stopped
    /// - [`ControlError::NonFinite`] if `current_value` is NaN
    /// - [`ControlError::CurrentValueTooLow`] if `current_value < setpoint`,
    ///   including negative infinity
    /// - [`ControlError::Generic`] if the output floor was edited in place to
    ///   reach the ceiling after the last `start`
    ///
    /// On error the stored output is unchanged.
    pub fn update(&mut self, current_value: Real) -> ControlResult<i32> {
        if self.state == ControllerState::Stopped {
            return Err(ControlError::ControllerStopped);
        }

        if current_value.is_nan() {
            return Err(ControlError::NonFinite(NonFiniteValue {
                what: "current_value",
                value: current_value,
            }));
        }

        let setpoint = self.config.setpoint;

        if current_value - setpoint < 0.0 {
            return Err(ControlError::CurrentValueTooLow {
                value: current_value,
                setpoint,
            });
        }

        if self.config.output_min >= OUTPUT_CEILING {
            return Err(ControlError::Generic {
                what: "output floor is not below the output ceiling",
            });
        }

        let error = current_value - setpoint;
        let raw = self.config.proportional_gain * error;
        let output = clamp_output(raw, self.config.output_min);

        trace!(current_value, error, raw, output, "ph controller output");
        self.output_value = Some(output);
        Ok(output)
    }

    /// Stored configuration.
    pub fn config(&self) -> &PhConfig {
        &self.config
    }

    /// Mutable access to the stored configuration.
    ///
    /// Edits made here skip validation; they are checked on the next
    /// [`start`](Self::start). Prefer [`set_configuration`](Self::set_configuration).
    pub fn config_mut(&mut self) -> &mut PhConfig {
        &mut self.config
    }

    /// Current run state.
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Whether the controller is in [`ControllerState::Running`].
    pub fn is_running(&self) -> bool {
        self.state == ControllerState::Running
    }

    /// Whether a configuration has been accepted by this controller.
    pub fn is_configured(&self) -> bool {
        self.is_configured
    }

    /// Last computed output command, `None` before the first successful update.
    pub fn output_value(&self) -> Option<i32> {
        self.output_value
    }
}
