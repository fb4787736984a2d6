//! Reader configuration.
//!
//! A flat, serializable description of the whole pipeline tuning. Serde
//! enforces nothing beyond shape, so [`ReaderConfig::build`] re-validates
//! every invariant before any runtime type is constructed.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tiltseek_signal::{SignalResult, TiltProcessor, TiltRange};

use crate::reader::RollReader;
use crate::scrub::ScrubController;
use crate::source::MotionSource;

/// Pipeline tuning parameters.
///
/// The defaults reproduce the handheld-scrubbing deployment: a ±π/5 roll
/// window, heavy smoothing, and a 10% hysteresis band driving 10% seek
/// steps at 100Hz.
///
/// # Examples
///
/// ```
/// use tiltseek_reader::ReaderConfig;
///
/// let config: ReaderConfig = serde_json::from_str(
///     r#"{ "smoothing_factor": 0.3, "step_size": 0.05 }"#,
/// )?;
/// assert!((config.smoothing_factor - 0.3).abs() < f32::EPSILON);
/// // Unspecified fields keep their defaults.
/// assert!((config.direction_threshold - 0.1).abs() < f32::EPSILON);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReaderConfig {
    /// Roll angle mapping to progress `0.0`, in radians.
    pub lower_radians: f32,
    /// Roll angle mapping to progress `1.0`, in radians.
    pub upper_radians: f32,
    /// Exponential smoothing coefficient in `(0, 1]`.
    pub smoothing_factor: f32,
    /// Hysteresis band half-width for direction detection.
    pub direction_threshold: f32,
    /// Slider increment per detected direction change.
    pub step_size: f32,
    /// Nominal interval between sensor samples, in milliseconds.
    pub sample_interval_ms: u64,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            lower_radians: -std::f32::consts::PI / 5.0,
            upper_radians: std::f32::consts::PI / 5.0,
            smoothing_factor: 0.1,
            direction_threshold: 0.1,
            step_size: 0.1,
            sample_interval_ms: 10,
        }
    }
}

impl ReaderConfig {
    /// The validated tilt range.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::InvalidConfiguration`](tiltseek_signal::SignalError::InvalidConfiguration)
    /// for non-finite, degenerate, or inverted bounds.
    pub fn range(&self) -> SignalResult<TiltRange> {
        TiltRange::new(self.lower_radians, self.upper_radians)
    }

    /// A processor built from the range and smoothing factor.
    ///
    /// # Errors
    ///
    /// Propagates the range and smoothing-factor validation failures.
    pub fn processor(&self) -> SignalResult<TiltProcessor> {
        TiltProcessor::new(self.range()?, self.smoothing_factor)
    }

    /// A scrub controller built from the threshold and step size.
    ///
    /// # Errors
    ///
    /// Propagates the threshold and step-size validation failures.
    pub fn scrub(&self) -> SignalResult<ScrubController> {
        ScrubController::new(self.direction_threshold, self.step_size)
    }

    /// The nominal sample interval.
    pub fn sample_interval(&self) -> Duration {
        Duration::from_millis(self.sample_interval_ms)
    }

    /// Builds the full reader over the given motion source, validating
    /// every parameter.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure among range, smoothing
    /// factor, threshold, and step size.
    pub fn build<S: MotionSource>(&self, source: S) -> SignalResult<RollReader<S>> {
        Ok(RollReader::new(source, self.processor()?, self.scrub()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ScriptedMotionSource;

    #[test]
    fn test_default_config_builds() {
        let config = ReaderConfig::default();
        assert!(config.build(ScriptedMotionSource::new(vec![])).is_ok());
    }

    #[test]
    fn test_default_range_is_symmetric() {
        let config = ReaderConfig::default();
        let range = config.range().expect("valid default range");
        assert!((range.lower() + range.upper()).abs() < 1e-6);
        assert!((range.upper() - std::f32::consts::PI / 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_json_round_trip() {
        let config = ReaderConfig {
            smoothing_factor: 0.25,
            ..ReaderConfig::default()
        };
        let json = serde_json::to_string(&config).expect("serializable");
        let back: ReaderConfig = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back, config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ReaderConfig =
            serde_json::from_str(r#"{ "step_size": 0.2 }"#).expect("deserializable");
        assert!((config.step_size - 0.2).abs() < f32::EPSILON);
        assert_eq!(config.sample_interval_ms, 10);
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result: Result<ReaderConfig, _> = serde_json::from_str(r#"{ "stepsize": 0.2 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialized_invalid_values_fail_on_build() {
        let inverted: ReaderConfig = serde_json::from_str(
            r#"{ "lower_radians": 1.0, "upper_radians": -1.0 }"#,
        )
        .expect("shape is valid");
        assert!(inverted.build(ScriptedMotionSource::new(vec![])).is_err());

        let bad_alpha: ReaderConfig =
            serde_json::from_str(r#"{ "smoothing_factor": 0.0 }"#).expect("shape is valid");
        assert!(bad_alpha.processor().is_err());

        let bad_step: ReaderConfig =
            serde_json::from_str(r#"{ "step_size": -0.5 }"#).expect("shape is valid");
        assert!(bad_step.scrub().is_err());
    }

    #[test]
    fn test_sample_interval() {
        let config = ReaderConfig {
            sample_interval_ms: 20,
            ..ReaderConfig::default()
        };
        assert_eq!(config.sample_interval(), Duration::from_millis(20));
    }
}
