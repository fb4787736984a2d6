//! Scrub control: progress deltas to bounded slider nudges.

use tiltseek_signal::{FilterState, SignalError, SignalResult, direction_step};

/// Initial slider position: the middle of the media.
pub const INITIAL_SLIDER: f32 = 0.5;

/// A slider nudge produced when the smoothed progress escapes the
/// hysteresis band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubEvent {
    /// The signed increment that was applied.
    pub step: f32,
    /// The slider position after applying the increment, in `[0, 1]`.
    pub slider: f32,
}

/// Turns smoothed progress values into discrete seek-slider movements.
///
/// The controller owns the slider position and the direction baseline: the
/// progress value at which it last reported movement. The baseline
/// re-anchors only when a step fires, so hand jitter inside the band moves
/// nothing while a slow sustained tilt accumulates and ratchets the
/// slider. (Advancing the baseline on every sample would swallow any
/// signal whose per-sample change stays below the threshold, which is
/// true of every smoothed signal.) The slider is clamped to `[0, 1]`; a
/// step that would overshoot parks it at the boundary.
///
/// # Examples
///
/// ```
/// use tiltseek_reader::ScrubController;
///
/// let mut scrub = ScrubController::default();
/// assert!((scrub.slider() - 0.5).abs() < f32::EPSILON);
///
/// // Progress jumps well past the threshold: one step to the right.
/// let event = scrub.apply(0.9).expect("outside the band");
/// assert!(event.step > 0.0);
/// assert!((event.slider - 0.6).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScrubController {
    threshold: f32,
    step_size: f32,
    slider: f32,
    last_progress: f32,
}

impl ScrubController {
    /// Creates a controller with the given hysteresis band and step size.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::InvalidConfiguration`] if `threshold` is
    /// negative or non-finite, or `step_size` is not strictly positive.
    pub fn new(threshold: f32, step_size: f32) -> SignalResult<Self> {
        if !(threshold >= 0.0 && threshold.is_finite()) {
            return Err(SignalError::invalid_configuration(format!(
                "direction threshold {threshold} must be finite and non-negative"
            )));
        }
        if !(step_size > 0.0 && step_size.is_finite()) {
            return Err(SignalError::invalid_configuration(format!(
                "step size {step_size} must be finite and positive"
            )));
        }
        Ok(Self {
            threshold,
            step_size,
            slider: INITIAL_SLIDER,
            last_progress: 0.0,
        })
    }

    /// Evaluates one smoothed progress value.
    ///
    /// Returns the applied nudge when the progress moved beyond the
    /// threshold away from the last reported value, re-anchoring the
    /// baseline there; values inside the band leave all state unchanged.
    pub fn apply(&mut self, progress: f32) -> Option<ScrubEvent> {
        direction_step(progress, self.last_progress, self.threshold, self.step_size).map(|step| {
            self.slider = (self.slider + step).clamp(0.0, 1.0);
            self.last_progress = progress;
            ScrubEvent {
                step,
                slider: self.slider,
            }
        })
    }

    /// Current slider position in `[0, 1]`.
    pub fn slider(&self) -> f32 {
        self.slider
    }

    /// Moves the slider directly (e.g. the user dragged it). Clamped.
    pub fn set_slider(&mut self, position: f32) {
        self.slider = position.clamp(0.0, 1.0);
    }

    /// The configured hysteresis band half-width.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// The configured per-event increment.
    pub fn step_size(&self) -> f32 {
        self.step_size
    }
}

impl Default for ScrubController {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            step_size: 0.1,
            slider: INITIAL_SLIDER,
            last_progress: 0.0,
        }
    }
}

impl FilterState for ScrubController {
    fn reset(&mut self) {
        self.slider = INITIAL_SLIDER;
        self.last_progress = 0.0;
    }
}
