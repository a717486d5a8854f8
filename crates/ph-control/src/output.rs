//! Mapping of the raw proportional term onto the actuator command range.

use crate::numeric::Real;

/// Fixed upper bound of the output command (100 % duty).
pub const OUTPUT_CEILING: i32 = 100;

/// Clamp a raw controller output to `[output_min, OUTPUT_CEILING]`.
///
/// Values at or above the ceiling return the ceiling, values at or below the
/// floor return the floor, anything in between is truncated toward zero.
/// A NaN `raw` returns the floor.
///
/// `output_min` must be below [`OUTPUT_CEILING`]; configuration validation
/// guarantees this for every configuration a controller accepts. The
/// precondition is asserted in debug builds only.
///
/// # Example
///
/// ```
/// use ph_control::clamp_output;
///
/// assert_eq!(clamp_output(150.0, 15), 100);
/// assert_eq!(clamp_output(1.0, 15), 15);
/// assert_eq!(clamp_output(42.9, 15), 42);
/// ```
pub fn clamp_output(raw: Real, output_min: i32) -> i32 {
    debug_assert!(
        output_min < OUTPUT_CEILING,
        "output floor {output_min} must be below {OUTPUT_CEILING}"
    );

    if raw >= OUTPUT_CEILING as Real {
        return OUTPUT_CEILING;
    }

    if raw.is_nan() || raw <= output_min as Real {
        return output_min;
    }

    raw as i32
}
