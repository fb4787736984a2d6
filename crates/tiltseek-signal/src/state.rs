//! Common state behavior for signal components.

use crate::smoothing::SmoothingState;

/// Trait for resettable filter state.
///
/// Components that keep per-stream memory implement this so a host can
/// return a whole pipeline to its initial state in one sweep.
pub trait FilterState: Copy + Clone + std::fmt::Debug {
    /// Reset the dynamic state to initial values; configuration is kept.
    fn reset(&mut self);
}

impl FilterState for SmoothingState {
    fn reset(&mut self) {
        self.prev_output = 0.0;
    }
}
