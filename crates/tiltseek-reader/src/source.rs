//! Motion source abstraction.
//!
//! The platform sensor (Core Motion, Android SensorManager, a game
//! controller IMU) lives behind [`MotionSource`] so the pump and its tests
//! never touch a device framework. Delivery is pull-based: the host drives
//! [`RollReader::tick`](crate::RollReader::tick) at its own cadence and the
//! source hands over the latest roll reading.

use std::time::Duration;

/// Default interval between roll samples (the sensor rate the original
/// deployment requests: 100Hz).
pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_millis(10);

/// A supplier of device roll samples in radians.
pub trait MotionSource {
    /// Begin delivering samples. Idempotent.
    fn start(&mut self);

    /// Cease delivering samples. Idempotent.
    fn stop(&mut self);

    /// The next roll sample in radians, or `None` when no sample is
    /// available (source stopped, exhausted, or sensor not ready).
    fn sample(&mut self) -> Option<f32>;

    /// The interval at which the source produces samples.
    fn sample_interval(&self) -> Duration {
        DEFAULT_SAMPLE_INTERVAL
    }
}

/// A motion source that replays a precomputed roll trajectory.
///
/// Used by tests and the demo driver in place of a physical sensor.
///
/// # Examples
///
/// ```
/// use tiltseek_reader::{MotionSource, ScriptedMotionSource};
///
/// let mut source = ScriptedMotionSource::new(vec![0.0, 0.1, 0.2]);
/// assert_eq!(source.sample(), None); // not started yet
///
/// source.start();
/// assert_eq!(source.sample(), Some(0.0));
/// assert_eq!(source.remaining(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedMotionSource {
    samples: Vec<f32>,
    cursor: usize,
    started: bool,
    interval: Duration,
}

impl ScriptedMotionSource {
    /// Creates a source that replays `samples` in order, then runs dry.
    pub fn new(samples: Vec<f32>) -> Self {
        Self {
            samples,
            cursor: 0,
            started: false,
            interval: DEFAULT_SAMPLE_INTERVAL,
        }
    }

    /// Overrides the nominal sample interval.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// A linear roll sweep from `from` to `to` over `count` samples.
    pub fn sweep(from: f32, to: f32, count: usize) -> Self {
        let samples = (0..count)
            .map(|i| {
                let t = if count > 1 {
                    i as f32 / (count - 1) as f32
                } else {
                    0.0
                };
                from + (to - from) * t
            })
            .collect();
        Self::new(samples)
    }

    /// A sinusoidal rocking motion: `amplitude * sin(2π * i / period)`.
    pub fn sine(amplitude: f32, period: usize, count: usize) -> Self {
        let period = period.max(1) as f32;
        let samples = (0..count)
            .map(|i| amplitude * (std::f32::consts::TAU * i as f32 / period).sin())
            .collect();
        Self::new(samples)
    }

    /// Samples not yet delivered.
    pub fn remaining(&self) -> usize {
        self.samples.len().saturating_sub(self.cursor)
    }
}

impl MotionSource for ScriptedMotionSource {
    fn start(&mut self) {
        self.started = true;
    }

    fn stop(&mut self) {
        self.started = false;
    }

    fn sample(&mut self) -> Option<f32> {
        if !self.started {
            return None;
        }
        let sample = self.samples.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(sample)
    }

    fn sample_interval(&self) -> Duration {
        self.interval
    }
}
