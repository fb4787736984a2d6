//! Threshold-gated direction stepping.
//!
//! A smoothed progress signal still wanders inside a small band as the
//! user holds the device roughly steady. Consumers that nudge a position
//! by fixed increments use [`direction_step`] to act only when the signal
//! escapes a hysteresis band around the last reported value.

/// Returns the signed step to apply for a progress change, if any.
///
/// * `Some(step_size)` when `current > previous + threshold`
/// * `Some(-step_size)` when `current < previous - threshold`
/// * `None` while `|current - previous| <= threshold`
///
/// The function is pure: the caller owns the `previous` baseline and must
/// advance it to `current` after each evaluation. Keeping the baseline
/// advance explicit avoids the drift that results from a baseline hidden
/// inside the detector.
///
/// # Example
///
/// ```
/// use tiltseek_signal::direction_step;
///
/// assert_eq!(direction_step(0.75, 0.5, 0.1, 0.25), Some(0.25));
/// assert_eq!(direction_step(0.25, 0.5, 0.1, 0.25), Some(-0.25));
/// assert_eq!(direction_step(0.55, 0.5, 0.1, 0.25), None);
/// ```
#[inline]
pub fn direction_step(current: f32, previous: f32, threshold: f32, step_size: f32) -> Option<f32> {
    if current > previous + threshold {
        Some(step_size)
    } else if current < previous - threshold {
        Some(-step_size)
    } else {
        None
    }
}
