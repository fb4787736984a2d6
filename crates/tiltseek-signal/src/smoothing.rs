//! Exponential smoothing (single-pole low-pass) filter.
//!
//! This module provides the recursive filter
//! `y[n] = alpha * x[n] + (1 - alpha) * y[n-1]` used to remove jerky
//! movements from the normalized tilt signal before it drives a seek
//! position.

/// State for the exponential smoothing filter.
///
/// Holds the smoothing coefficient and the single sample of filter memory.
/// With `alpha = 1.0` the filter is a passthrough; smaller values respond
/// more slowly and attenuate more noise. Under constant input the output
/// converges geometrically at rate `1 - alpha`.
#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct SmoothingState {
    /// Smoothing coefficient in `(0, 1]`.
    pub alpha: f32,
    /// Previous output value.
    pub prev_output: f32,
}

impl SmoothingState {
    /// Creates a smoothing state with the given coefficient.
    ///
    /// The coefficient is not validated here; fallible validation lives in
    /// the processor and configuration layers.
    ///
    /// # Example
    ///
    /// ```
    /// use tiltseek_signal::SmoothingState;
    ///
    /// let state = SmoothingState::new(0.1);
    /// assert!((state.prev_output).abs() < f32::EPSILON);
    /// ```
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha,
            prev_output: 0.0,
        }
    }

    /// Creates a passthrough filter (no smoothing).
    pub fn bypass() -> Self {
        Self::new(1.0)
    }

    /// Creates a light smoothing filter.
    pub fn light() -> Self {
        Self::new(0.3)
    }

    /// Creates the standard smoothing filter for handheld tilt input.
    pub fn standard() -> Self {
        Self::new(0.1)
    }

    /// Creates a heavy smoothing filter.
    pub fn heavy() -> Self {
        Self::new(0.03)
    }
}

impl Default for SmoothingState {
    fn default() -> Self {
        Self::standard()
    }
}

/// Exponential smoothing filter step.
///
/// Blends the new input with the previous output, stores the result as the
/// new filter memory, and returns it. For input and memory in `[0, 1]` and
/// `alpha` in `(0, 1]` the output stays in `[0, 1]`.
///
/// # Arguments
///
/// * `input` - The new sample
/// * `state` - The filter state (updated in place)
///
/// # Example
///
/// ```
/// use tiltseek_signal::{SmoothingState, smoothing_filter};
///
/// let mut state = SmoothingState::new(0.1);
/// let out = smoothing_filter(0.5, &mut state);
/// assert!((out - 0.05).abs() < 1e-6);
/// ```
#[inline]
pub fn smoothing_filter(input: f32, state: &mut SmoothingState) -> f32 {
    let filtered = state.alpha * input + (1.0 - state.alpha) * state.prev_output;
    state.prev_output = filtered;
    filtered
}
