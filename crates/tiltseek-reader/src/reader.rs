//! The roll reader: pumps motion samples through the processor.

use tiltseek_signal::{SignalResult, TiltProcessor};
use tracing::{debug, trace};

use crate::scrub::{ScrubController, ScrubEvent};
use crate::source::MotionSource;

/// The result of one pump cycle that consumed a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    /// Smoothed progress after this sample, in `[0, 1]`.
    pub progress: f32,
    /// The slider nudge, when the progress escaped the hysteresis band.
    pub event: Option<ScrubEvent>,
}

/// Reads roll samples from a [`MotionSource`] and turns them into slider
/// movements.
///
/// The reader owns the source, the [`TiltProcessor`], and the
/// [`ScrubController`], mirroring how a view model owns the sensor session
/// it subscribes to. The host drives [`tick`](Self::tick) at the source's
/// sample cadence; nothing runs in the background.
///
/// Stopping the reader pauses sample consumption but keeps the filter
/// memory, so scrubbing resumes where it left off; [`reset`](Self::reset)
/// discards all accumulated state.
///
/// # Examples
///
/// ```
/// use tiltseek_reader::{ReaderConfig, ScriptedMotionSource};
///
/// let source = ScriptedMotionSource::sweep(0.0, 0.6, 50);
/// let mut reader = ReaderConfig::default().build(source)?;
///
/// reader.start();
/// while let Some(outcome) = reader.tick()? {
///     assert!(outcome.progress >= 0.0 && outcome.progress <= 1.0);
/// }
/// # Ok::<(), tiltseek_signal::SignalError>(())
/// ```
#[derive(Debug)]
pub struct RollReader<S> {
    source: S,
    processor: TiltProcessor,
    scrub: ScrubController,
    started: bool,
}

impl<S: MotionSource> RollReader<S> {
    /// Creates a reader from its parts. See [`ReaderConfig`](crate::ReaderConfig)
    /// for the validated construction path.
    pub fn new(source: S, processor: TiltProcessor, scrub: ScrubController) -> Self {
        Self {
            source,
            processor,
            scrub,
            started: false,
        }
    }

    /// Begins consuming samples. Idempotent.
    pub fn start(&mut self) {
        if !self.started {
            debug!("roll reader started");
            self.source.start();
            self.started = true;
        }
    }

    /// Stops consuming samples. Filter and slider state are retained.
    pub fn stop(&mut self) {
        if self.started {
            debug!("roll reader stopped");
            self.source.stop();
            self.started = false;
        }
    }

    /// Whether the reader is currently consuming samples.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Runs one pump cycle.
    ///
    /// Pulls the next sample from the source, filters it, and evaluates
    /// the scrub step. Returns `Ok(None)` when the reader is stopped or
    /// the source has nothing to deliver.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::InvalidSample`](tiltseek_signal::SignalError::InvalidSample)
    /// when the source hands over a non-finite reading; no state changes
    /// on that path, and the next tick continues with the following
    /// sample.
    pub fn tick(&mut self) -> SignalResult<Option<TickOutcome>> {
        if !self.started {
            return Ok(None);
        }
        let Some(raw) = self.source.sample() else {
            return Ok(None);
        };

        let progress = self.processor.submit_sample(raw)?;
        trace!(raw, progress, "roll sample processed");

        let event = self.scrub.apply(progress);
        if let Some(event) = event {
            debug!(step = event.step, slider = event.slider, "scrub step");
        }

        Ok(Some(TickOutcome { progress, event }))
    }

    /// Smoothed progress after the most recent sample.
    pub fn progress(&self) -> f32 {
        self.processor.progress()
    }

    /// Current slider position in `[0, 1]`.
    pub fn slider(&self) -> f32 {
        self.scrub.slider()
    }

    /// Discards filter memory, the direction baseline, and the slider
    /// position. The started/stopped state is unchanged.
    pub fn reset(&mut self) {
        use tiltseek_signal::FilterState;
        self.processor.reset();
        self.scrub.reset();
    }

    /// The underlying motion source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The scrub controller, for direct slider adjustments.
    pub fn scrub_mut(&mut self) -> &mut ScrubController {
        &mut self.scrub
    }
}
