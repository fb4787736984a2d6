//! Tilt-to-Progress Signal Processing
//!
//! This crate converts an unbounded-range angular input (device roll, in
//! radians) into a bounded, smoothed progress signal in `[0, 1]` and
//! derives discrete step events for consumers that nudge a position by a
//! fixed increment when the tilt direction changes.
//!
//! # Overview
//!
//! The processing stages:
//! - **Range**: clamp a raw angle into a validated interval and normalize
//!   it to `[0, 1]`
//! - **Smoothing**: single-pole exponential filter that removes jerky
//!   movements from the normalized signal
//! - **Step**: threshold-gated direction detection that suppresses
//!   jitter-driven oscillation
//!
//! All operations are synchronous, allocation-free, and O(1); samples are
//! expected from one logical thread at a time. Clamping absorbs
//! out-of-range readings instead of erroring, since physical sensor noise
//! routinely exceeds nominal bounds; only non-finite samples and invalid
//! construction parameters are rejected.
//!
//! # Example
//!
//! ```
//! use tiltseek_signal::prelude::*;
//!
//! let range = TiltRange::symmetric(std::f32::consts::PI / 5.0)?;
//! let mut processor = TiltProcessor::new(range, 0.1)?;
//!
//! // Samples arrive from the motion sensor at a fixed interval.
//! let mut last_reported = 0.0_f32;
//! let mut nudges = 0;
//! for raw in [0.0, 0.1, 0.3, 0.5, 0.6] {
//!     let progress = processor.submit_sample(raw)?;
//!     if let Some(step) = direction_step(progress, last_reported, 0.05, 0.1) {
//!         // Nudge the seek position by `step`, then re-anchor.
//!         nudges += 1;
//!         last_reported = progress;
//!     }
//! }
//! assert!(nudges > 0);
//! # Ok::<(), tiltseek_signal::SignalError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod prelude;
pub mod processor;
pub mod range;
pub mod smoothing;
pub mod state;
pub mod step;

pub use error::{SignalError, SignalResult};
pub use processor::TiltProcessor;
pub use range::TiltRange;
pub use smoothing::{SmoothingState, smoothing_filter};
pub use state::FilterState;
pub use step::direction_step;
