//! The tilt processor: range mapping composed with smoothing.

use crate::error::{SignalError, SignalResult};
use crate::range::TiltRange;
use crate::smoothing::{SmoothingState, smoothing_filter};

/// Converts raw roll angles into smoothed progress in `[0, 1]`.
///
/// A processor owns a validated [`TiltRange`] and a [`SmoothingState`].
/// Each submitted sample is clamped into the range, normalized, and blended
/// with the filter memory. The processor performs no I/O, never allocates,
/// and is meant to be driven from a single thread; hosts that receive
/// sensor callbacks concurrently must serialize access.
///
/// Filter memory survives the host pausing and resuming sample delivery;
/// call [`reset`](Self::reset) to start from scratch.
///
/// # Examples
///
/// ```
/// use tiltseek_signal::{TiltProcessor, TiltRange};
///
/// let range = TiltRange::symmetric(std::f32::consts::PI / 5.0)?;
/// let mut processor = TiltProcessor::new(range, 0.1)?;
///
/// // Device held flat: halfway through the range, heavily smoothed.
/// let progress = processor.submit_sample(0.0)?;
/// assert!((progress - 0.05).abs() < 1e-6);
/// # Ok::<(), tiltseek_signal::SignalError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TiltProcessor {
    range: TiltRange,
    state: SmoothingState,
}

impl TiltProcessor {
    /// Creates a processor for the given range and smoothing factor.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::InvalidConfiguration`] if `smoothing_factor`
    /// is outside `(0, 1]` (NaN included).
    pub fn new(range: TiltRange, smoothing_factor: f32) -> SignalResult<Self> {
        if !(smoothing_factor > 0.0 && smoothing_factor <= 1.0) {
            return Err(SignalError::invalid_configuration(format!(
                "smoothing factor {smoothing_factor} is outside (0, 1]"
            )));
        }
        Ok(Self {
            range,
            state: SmoothingState::new(smoothing_factor),
        })
    }

    /// Submits one raw roll sample and returns the smoothed progress.
    ///
    /// The sample is clamped into the configured range, normalized to
    /// `[0, 1]`, and run through the smoothing filter. Out-of-range input
    /// behaves exactly like the nearest boundary.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::InvalidSample`] for NaN or infinite input;
    /// filter memory is left untouched on that path.
    pub fn submit_sample(&mut self, raw: f32) -> SignalResult<f32> {
        if !raw.is_finite() {
            return Err(SignalError::InvalidSample { value: raw });
        }
        let normalized = self.range.normalize(raw);
        Ok(smoothing_filter(normalized, &mut self.state))
    }

    /// The most recently produced progress value.
    pub fn progress(&self) -> f32 {
        self.state.prev_output
    }

    /// The configured input range.
    pub fn range(&self) -> TiltRange {
        self.range
    }

    /// The configured smoothing factor.
    pub fn smoothing_factor(&self) -> f32 {
        self.state.alpha
    }

    /// Clears the filter memory back to its initial value.
    pub fn reset(&mut self) {
        self.state.prev_output = 0.0;
    }
}
