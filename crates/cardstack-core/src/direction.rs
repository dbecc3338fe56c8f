//! Swipe direction classification.
//!
//! Maps a 2D displacement to one of five direction values with a small
//! deadzone so pointer jitter never registers as a direction. The larger
//! magnitude axis wins; ties go to the horizontal axis.

use crate::geometry::Offset;

/// Dominant axis of a drag displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SwipeDirection {
    Up,
    Down,
    Left,
    Right,
    #[default]
    None,
}

impl SwipeDirection {
    /// Classifies a displacement into a direction.
    ///
    /// Returns [`SwipeDirection::None`] while the displacement stays inside
    /// the `min_threshold` deadzone (per-axis max magnitude).
    pub fn from_offset(offset: Offset, min_threshold: f32) -> Self {
        if offset.abs_max() < min_threshold {
            return SwipeDirection::None;
        }
        if offset.x.abs() >= offset.y.abs() {
            if offset.x > 0.0 {
                SwipeDirection::Right
            } else {
                SwipeDirection::Left
            }
        } else if offset.y > 0.0 {
            SwipeDirection::Down
        } else {
            SwipeDirection::Up
        }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, SwipeDirection::Left | SwipeDirection::Right)
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, SwipeDirection::Up | SwipeDirection::Down)
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self == SwipeDirection::None
    }
}
