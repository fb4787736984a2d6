//! Motion-Driven Scrub Pipeline
//!
//! This crate wires the tilt signal processing into a host application:
//! a [`MotionSource`] abstracts the platform sensor, a [`RollReader`]
//! pumps its samples through the smoothing processor, a
//! [`ScrubController`] converts progress changes into bounded slider
//! nudges, and a [`SeekTarget`] maps the slider onto a media timeline.
//!
//! Everything is synchronous and single-threaded: the host calls
//! [`RollReader::tick`] at the sensor cadence (a timer callback, a frame
//! loop) and forwards the resulting seek targets to its player. No
//! background work is spawned, so there is nothing to cancel; stopping
//! the reader simply pauses consumption while keeping the filter state.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use tiltseek_reader::prelude::*;
//!
//! // A scripted sensor standing in for the device IMU.
//! let source = ScriptedMotionSource::sweep(-0.6, 0.6, 120);
//! let mut reader = ReaderConfig::default().build(source)?;
//! let duration = Some(Duration::from_secs(90));
//!
//! reader.start();
//! while let Some(outcome) = reader.tick()? {
//!     if outcome.event.is_some() {
//!         let target = SeekTarget::from_progress(reader.slider(), duration)
//!             .expect("duration is known");
//!         assert!(target.offset() <= Duration::from_secs(90));
//!     }
//! }
//! # Ok::<(), tiltseek_signal::SignalError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod prelude;
pub mod reader;
pub mod scrub;
pub mod seek;
pub mod source;

pub use config::ReaderConfig;
pub use reader::{RollReader, TickOutcome};
pub use scrub::{ScrubController, ScrubEvent};
pub use seek::SeekTarget;
pub use source::{DEFAULT_SAMPLE_INTERVAL, MotionSource, ScriptedMotionSource};
