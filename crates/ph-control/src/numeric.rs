use crate::error::NonFiniteValue;

/// Floating point type used for measurements, gains and setpoints.
///
/// Single precision keeps the controller cheap on targets with an `f32` FPU.
pub type Real = f32;

/// Return `v` unchanged, or an error naming `what` if it is NaN or infinite.
pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, NonFiniteValue> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(NonFiniteValue { what, value: v })
    }
}
