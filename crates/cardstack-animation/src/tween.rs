//! Fixed-duration interpolation cursors.

use cardstack_core::Offset;

/// Linear interpolation between two values of the same type.
pub trait Lerp: Copy {
    fn lerp(from: Self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(from: Self, to: Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

impl Lerp for Offset {
    fn lerp(from: Self, to: Self, t: f32) -> Self {
        Offset::new(f32::lerp(from.x, to.x, t), f32::lerp(from.y, to.y, t))
    }
}

/// A time-based interpolation cursor.
///
/// Holds its start time; `sample(now_ms)` is pure with respect to the clock,
/// so several tweens started together stay in lockstep no matter how often
/// each is sampled.
#[derive(Debug, Clone, Copy)]
pub struct Tween<T: Lerp> {
    from: T,
    to: T,
    start_ms: i64,
    duration_ms: i64,
    easing: fn(f32) -> f32,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, start_ms: i64, duration_ms: i64, easing: fn(f32) -> f32) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
            easing,
        }
    }

    /// Value at `now_ms`, clamped to the endpoints. A non-positive duration
    /// snaps straight to the target.
    pub fn sample(&self, now_ms: i64) -> T {
        if self.duration_ms <= 0 || now_ms >= self.start_ms + self.duration_ms {
            return self.to;
        }
        if now_ms <= self.start_ms {
            return self.from;
        }
        let t = (now_ms - self.start_ms) as f32 / self.duration_ms as f32;
        T::lerp(self.from, self.to, (self.easing)(t))
    }

    pub fn is_finished(&self, now_ms: i64) -> bool {
        self.duration_ms <= 0 || now_ms >= self.start_ms + self.duration_ms
    }

    pub fn target(&self) -> T {
        self.to
    }
}
