//! Prelude for the signal crate.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//!
//! ```
//! use tiltseek_signal::prelude::*;
//!
//! let range = TiltRange::symmetric(0.628)?;
//! let mut processor = TiltProcessor::new(range, 0.1)?;
//! let progress = processor.submit_sample(0.0)?;
//! assert!(progress >= 0.0 && progress <= 1.0);
//! # Ok::<(), tiltseek_signal::SignalError>(())
//! ```

pub use crate::error::{SignalError, SignalResult};
pub use crate::processor::TiltProcessor;
pub use crate::range::TiltRange;
pub use crate::smoothing::{SmoothingState, smoothing_filter};
pub use crate::state::FilterState;
pub use crate::step::direction_step;
