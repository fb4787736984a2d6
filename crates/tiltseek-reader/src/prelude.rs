//! Prelude for the reader crate.
//!
//! Re-exports the reader types together with the signal-crate types they
//! are built from.

pub use crate::config::ReaderConfig;
pub use crate::reader::{RollReader, TickOutcome};
pub use crate::scrub::{ScrubController, ScrubEvent};
pub use crate::seek::SeekTarget;
pub use crate::source::{DEFAULT_SAMPLE_INTERVAL, MotionSource, ScriptedMotionSource};
pub use tiltseek_signal::prelude::*;
