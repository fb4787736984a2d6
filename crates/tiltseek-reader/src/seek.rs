//! Mapping slider progress to a playback seek target.

use std::time::Duration;

/// An absolute position within a media item, expressed as an offset from
/// the start.
///
/// Produced from a progress fraction and the item's duration. Players
/// whose item duration is not yet known (still loading, or a live stream)
/// report no duration, and no target is produced for them.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tiltseek_reader::SeekTarget;
///
/// let duration = Some(Duration::from_secs(60));
/// let target = SeekTarget::from_progress(0.25, duration).expect("known duration");
/// assert_eq!(target.offset(), Duration::from_secs(15));
///
/// assert!(SeekTarget::from_progress(0.25, None).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SeekTarget {
    offset: Duration,
}

impl SeekTarget {
    /// Computes the target for a progress fraction of the given duration.
    ///
    /// The fraction is clamped to `[0, 1]`. Returns `None` when the
    /// duration is unknown or the fraction is not finite.
    pub fn from_progress(progress: f32, duration: Option<Duration>) -> Option<Self> {
        let duration = duration?;
        if !progress.is_finite() {
            return None;
        }
        let fraction = progress.clamp(0.0, 1.0);
        Some(Self {
            offset: duration.mul_f32(fraction),
        })
    }

    /// The target for the middle of the media, where playback begins when
    /// an item first becomes ready.
    pub fn midpoint(duration: Duration) -> Self {
        Self {
            offset: duration / 2,
        }
    }

    /// Offset from the start of the media.
    pub fn offset(&self) -> Duration {
        self.offset
    }

    /// Offset in seconds, for display.
    pub fn as_secs_f32(&self) -> f32 {
        self.offset.as_secs_f32()
    }
}
