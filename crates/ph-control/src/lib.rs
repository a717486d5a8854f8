//! Proportional pH regulator for peristaltic dosing pumps.
//!
//! The controller turns a stream of pH samples into a bounded integer command
//! (e.g. PWM duty in `[output_min, 100]`) for an external actuator driver.
//!
//! # Architecture
//!
//! - [`PhConfig`] is a plain value describing one control policy
//! - [`validate`] checks a configuration without touching any controller
//! - [`PhController`] owns its configuration and cycles between
//!   [`ControllerState::Stopped`] and [`ControllerState::Running`]
//! - [`clamp_output`] maps the raw proportional term onto the actuator range
//!
//! Every operation is synchronous and O(1). Nothing allocates, nothing blocks,
//! and errors are returned to the caller rather than logged.
//!
//! # Example
//!
//! ```
//! use ph_control::{PhConfig, PhController};
//!
//! let mut controller = PhController::create(PhConfig::default().with_gain(20.0)).unwrap();
//! controller.start().unwrap();
//!
//! let duty = controller.update(7.4).unwrap();
//! assert!((15..=100).contains(&duty));
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod numeric;
pub mod output;

pub use config::{PhConfig, validate};
pub use controller::{ControllerState, PhController};
pub use error::{ConfigError, ControlError, ControlResult, NonFiniteValue};
pub use numeric::{Real, ensure_finite};
pub use output::{OUTPUT_CEILING, clamp_output};
