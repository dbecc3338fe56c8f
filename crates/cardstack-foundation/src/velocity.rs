//! Pointer velocity tracking for fling detection.
//!
//! Estimator: a fixed 100 ms window of (timestamp, position) samples kept in
//! a deque. Velocity is the secant over that window (newest minus oldest
//! in-window position over elapsed time), which weights recent motion by
//! construction since older samples are trimmed away. The engine only needs
//! monotonic fling detection, not impulse-grade smoothing, so this simple
//! recency-weighted estimate is deliberate.

use std::collections::VecDeque;

use cardstack_core::Offset;
use log::trace;

/// Only samples within this window of the newest one contribute.
const HORIZON_MS: i64 = 100;

/// If the newest two samples are further apart than this, the pointer was
/// held still and the release velocity is zero.
const ASSUME_STOPPED_MS: i64 = 40;

/// Total in-window movement below this (px, dominant axis) counts as
/// stationary jitter.
const MIN_MOVEMENT_THRESHOLD: f32 = 2.0;

#[derive(Debug, Clone, Copy)]
struct Sample {
    time_ms: i64,
    position: Offset,
}

/// 2D pointer velocity tracker.
#[derive(Debug, Default)]
pub struct VelocityTracker {
    samples: VecDeque<Sample>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all history. Call at gesture start.
    pub fn reset(&mut self) {
        self.samples.clear();
    }

    /// Records a pointer position. Samples must arrive in order; an event
    /// with a timestamp earlier than the last one is dropped.
    pub fn add_position(&mut self, time_ms: i64, position: Offset) {
        if let Some(last) = self.samples.back() {
            if time_ms < last.time_ms {
                trace!(
                    "ignoring velocity sample at {time_ms}ms earlier than last {}ms",
                    last.time_ms
                );
                return;
            }
        }
        self.samples.push_back(Sample { time_ms, position });
        self.trim_history();
    }

    /// Current velocity estimate in px/s per axis.
    pub fn velocity(&self) -> Offset {
        let (Some(oldest), Some(newest)) = (self.samples.front(), self.samples.back()) else {
            return Offset::ZERO;
        };
        let elapsed_ms = newest.time_ms - oldest.time_ms;
        if elapsed_ms <= 0 {
            return Offset::ZERO;
        }
        if let Some(previous) = self.samples.iter().rev().nth(1) {
            if newest.time_ms - previous.time_ms > ASSUME_STOPPED_MS {
                return Offset::ZERO;
            }
        }
        let travel = newest.position - oldest.position;
        if travel.abs_max() < MIN_MOVEMENT_THRESHOLD {
            return Offset::ZERO;
        }
        travel * (1000.0 / elapsed_ms as f32)
    }

    /// Dominant-axis velocity magnitude in px/s, the value the fling test
    /// consumes.
    pub fn magnitude(&self) -> f32 {
        self.velocity().abs_max()
    }

    fn trim_history(&mut self) {
        let Some(&Sample { time_ms, .. }) = self.samples.back() else {
            return;
        };
        while let Some(first) = self.samples.front() {
            if time_ms <= first.time_ms + HORIZON_MS {
                break;
            }
            let _ = self.samples.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_velocity() {
        let mut tracker = VelocityTracker::new();
        // 100 px every 10 ms = 10000 px/s
        for step in 0..5 {
            tracker.add_position(step * 10, Offset::new(step as f32 * 100.0, 0.0));
        }
        let v = tracker.velocity();
        assert!((v.x - 10_000.0).abs() < 1.0, "got {}", v.x);
        assert_eq!(v.y, 0.0);
        assert!((tracker.magnitude() - 10_000.0).abs() < 1.0);
    }

    #[test]
    fn negative_velocity() {
        let mut tracker = VelocityTracker::new();
        tracker.add_position(0, Offset::new(300.0, 0.0));
        tracker.add_position(10, Offset::new(200.0, 0.0));
        tracker.add_position(20, Offset::new(100.0, 0.0));
        assert!(tracker.velocity().x < 0.0);
        assert!(tracker.magnitude() > 0.0);
    }

    #[test]
    fn reset_clears_history() {
        let mut tracker = VelocityTracker::new();
        tracker.add_position(0, Offset::ZERO);
        tracker.add_position(10, Offset::new(100.0, 0.0));
        tracker.reset();
        assert_eq!(tracker.velocity(), Offset::ZERO);
    }

    #[test]
    fn old_samples_trimmed() {
        let mut tracker = VelocityTracker::new();
        tracker.add_position(0, Offset::ZERO);
        // These land 150+ ms later, so the first sample leaves the window.
        tracker.add_position(150, Offset::new(100.0, 0.0));
        tracker.add_position(160, Offset::new(200.0, 0.0));
        tracker.add_position(170, Offset::new(300.0, 0.0));
        // Secant over the in-window 20 ms / 200 px, not the whole 170 ms.
        let v = tracker.velocity();
        assert!((v.x - 10_000.0).abs() < 1.0, "got {}", v.x);
    }

    #[test]
    fn stale_pointer_reads_as_stopped() {
        let mut tracker = VelocityTracker::new();
        tracker.add_position(0, Offset::ZERO);
        tracker.add_position(10, Offset::new(200.0, 0.0));
        // Held still, then a final sample with the same position much later.
        tracker.add_position(100, Offset::new(200.0, 0.0));
        assert_eq!(tracker.velocity(), Offset::ZERO);
    }

    #[test]
    fn jitter_reads_as_stationary() {
        let mut tracker = VelocityTracker::new();
        tracker.add_position(0, Offset::new(100.0, 100.0));
        tracker.add_position(10, Offset::new(100.5, 99.5));
        tracker.add_position(20, Offset::new(99.8, 100.2));
        assert_eq!(tracker.velocity(), Offset::ZERO);
    }

    #[test]
    fn out_of_order_sample_dropped() {
        let mut tracker = VelocityTracker::new();
        tracker.add_position(0, Offset::ZERO);
        tracker.add_position(20, Offset::new(100.0, 0.0));
        tracker.add_position(10, Offset::new(-500.0, 0.0));
        assert!(tracker.velocity().x > 0.0);
    }
}
