//! Swipe progress and threshold tests.
//!
//! Progress is measured against a per-axis threshold distance
//! (`viewport dimension x threshold_fraction`) and is unbounded above 1.
//! These functions are recomputed from live state on demand, never cached.

use crate::geometry::{Offset, Size};

/// Progress of the current drag towards the swipe threshold (0.0 to 1.0+).
///
/// The dominant axis decides: progress is the max of the per-axis ratios.
/// A degenerate viewport or threshold yields 0.0 so callers never divide by
/// zero or propagate NaN.
pub fn swipe_progress(offset: Offset, viewport: Size, threshold_fraction: f32) -> f32 {
    if viewport.is_degenerate() || threshold_fraction <= 0.0 {
        return 0.0;
    }
    let threshold_x = viewport.width * threshold_fraction;
    let threshold_y = viewport.height * threshold_fraction;
    let progress_x = offset.x.abs() / threshold_x;
    let progress_y = offset.y.abs() / threshold_y;
    progress_x.max(progress_y)
}

/// Whether the drag offset has crossed the dismiss threshold.
pub fn has_exceeded_threshold(offset: Offset, viewport: Size, threshold_fraction: f32) -> bool {
    swipe_progress(offset, viewport, threshold_fraction) >= 1.0
}

/// Whether a release velocity qualifies as a fling.
#[inline]
pub fn is_fling(velocity_magnitude: f32, fling_threshold: f32) -> bool {
    velocity_magnitude > fling_threshold
}
