//! Swipe gesture detection.
//!
//! Turns the raw down/move/up pointer stream into state mutations and a
//! release decision. The detector follows the lifecycle-method pattern
//! (`on_down` / `on_move` / `on_up` / `on_cancel`); the owning stack feeds
//! it events in arrival order and wires the returned outcomes to callbacks
//! and animations.
//!
//! # Gesture flow
//! 1. **Down**: mark touching/dragging, reset velocity tracking, sample the
//!    first point.
//! 2. **Move**: sample velocity, accumulate the drag offset, re-evaluate
//!    the predictive commit every frame; report the commit edge at most
//!    once per gesture.
//! 3. **Up**: evaluate threshold-or-fling, gate on the permitted axes, and
//!    branch into dismiss, edge bounce, or snap back.
//!
//! Malformed sequences (a move or up without a down) are ignored. No new
//! gesture is accepted while an animation is in flight; the caller enforces
//! that by not feeding events, and the detector double-checks on down.

use cardstack_core::{progress, Offset, Size, StackConfig, SwipeDirection};
use cardstack_foundation::VelocityTracker;
use log::{debug, trace};

use crate::state::TransitionState;

/// What the gesture handler decided on release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ReleaseDecision {
    /// Accepted swipe: run the dismiss animation.
    Dismiss {
        direction: SwipeDirection,
        /// True when the commit edge never fired during the drag (pure
        /// fling) and the caller must emit the commit notification now.
        needs_commit_signal: bool,
    },
    /// Accepted swipe at the last item: notify and bounce back.
    EdgeBounce { direction: SwipeDirection },
    /// Rejected swipe: spring back to center.
    SnapBack { release_velocity: Offset },
}

/// Outcome of a single move event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum MoveOutcome {
    Ignored,
    Updated,
    /// The drag just crossed the commit threshold for the first time this
    /// gesture.
    JustCommitted { direction: SwipeDirection },
}

pub(crate) struct SwipeGestureDetector {
    tracker: VelocityTracker,
    last_position: Option<Offset>,
    pointer_down: bool,
    has_committed_this_gesture: bool,
}

impl SwipeGestureDetector {
    pub fn new() -> Self {
        Self {
            tracker: VelocityTracker::new(),
            last_position: None,
            pointer_down: false,
            has_committed_this_gesture: false,
        }
    }

    /// Live velocity estimate, consumed by the scroll hint publisher.
    pub fn velocity(&self) -> Offset {
        self.tracker.velocity()
    }

    pub fn on_down(&mut self, state: &mut TransitionState, position: Offset, time_ms: i64) {
        if state.is_animating() {
            // Single-flight: refused, not queued.
            trace!("pointer down ignored while animating");
            return;
        }
        self.pointer_down = true;
        self.has_committed_this_gesture = false;
        self.last_position = Some(position);
        self.tracker.reset();
        self.tracker.add_position(time_ms, position);
        state.set_touching(true);
        state.set_dragging(true);
    }

    pub fn on_move(
        &mut self,
        state: &mut TransitionState,
        config: &StackConfig,
        viewport: Size,
        position: Offset,
        time_ms: i64,
    ) -> MoveOutcome {
        if !self.pointer_down {
            // Move without a preceding down: defensively ignored.
            return MoveOutcome::Ignored;
        }
        self.tracker.add_position(time_ms, position);
        let last = self.last_position.replace(position).unwrap_or(position);
        let delta = position - last;
        if delta.is_zero() {
            return MoveOutcome::Updated;
        }
        state.update_drag_offset(delta, viewport, config);
        let just_committed = state.update_current_index_for_drag(viewport, config);
        if just_committed && !self.has_committed_this_gesture {
            self.has_committed_this_gesture = true;
            trace!("commit edge at offset ({:.0}, {:.0})", position.x, position.y);
            return MoveOutcome::JustCommitted {
                direction: state.direction(),
            };
        }
        MoveOutcome::Updated
    }

    pub fn on_up(
        &mut self,
        state: &mut TransitionState,
        config: &StackConfig,
        viewport: Size,
        position: Offset,
        time_ms: i64,
    ) -> Option<ReleaseDecision> {
        if !self.pointer_down {
            return None;
        }
        self.tracker.add_position(time_ms, position);
        self.pointer_down = false;
        state.set_touching(false);
        state.set_dragging(false);

        let direction = state.direction();
        let release_velocity = self.tracker.velocity();
        let velocity_magnitude = release_velocity.abs_max();
        let exceeded = state.has_exceeded_threshold(viewport, config);
        let fling = progress::is_fling(velocity_magnitude, config.fling_velocity_threshold);
        let allowed = direction.is_horizontal() || config.vertical_swipe_enabled;

        debug!(
            "release: direction {direction:?}, exceeded {exceeded}, \
             fling {fling} ({velocity_magnitude:.0} px/s), allowed {allowed}"
        );

        let decision = if (exceeded || fling)
            && !direction.is_none()
            && allowed
            && !viewport.is_degenerate()
        {
            if state.is_at_end() {
                ReleaseDecision::EdgeBounce { direction }
            } else {
                ReleaseDecision::Dismiss {
                    direction,
                    needs_commit_signal: !self.has_committed_this_gesture,
                }
            }
        } else {
            ReleaseDecision::SnapBack { release_velocity }
        };
        self.has_committed_this_gesture = false;
        Some(decision)
    }

    /// Platform pointer cancel: never dismisses, always springs back.
    pub fn on_cancel(&mut self, state: &mut TransitionState) -> Option<ReleaseDecision> {
        if !self.pointer_down {
            return None;
        }
        self.pointer_down = false;
        self.has_committed_this_gesture = false;
        state.set_touching(false);
        state.set_dragging(false);
        debug!("pointer cancel: snapping back");
        Some(ReleaseDecision::SnapBack {
            release_velocity: Offset::ZERO,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(1000.0, 2000.0);

    fn setup(item_count: usize) -> (SwipeGestureDetector, TransitionState, StackConfig) {
        (
            SwipeGestureDetector::new(),
            TransitionState::new(0, item_count),
            StackConfig::default(),
        )
    }

    /// Feeds a straight drag as evenly spaced move events, 16 ms apart.
    fn drag(
        detector: &mut SwipeGestureDetector,
        state: &mut TransitionState,
        config: &StackConfig,
        from: Offset,
        total: Offset,
        steps: usize,
    ) -> (Vec<MoveOutcome>, Offset, i64) {
        detector.on_down(state, from, 0);
        let mut outcomes = Vec::new();
        let mut time = 0;
        let mut position = from;
        for step in 1..=steps {
            time = step as i64 * 16;
            position = from + total * (step as f32 / steps as f32);
            outcomes.push(detector.on_move(state, config, VIEWPORT, position, time));
        }
        (outcomes, position, time)
    }

    #[test]
    fn slow_drag_past_threshold_dismisses() {
        let (mut detector, mut state, config) = setup(5);
        // 0.4 x width exceeds the 0.35 threshold; 25 px per 16 ms frame is
        // ~1500 px/s, below the fling threshold.
        let (outcomes, position, time) = drag(
            &mut detector,
            &mut state,
            &config,
            Offset::new(100.0, 400.0),
            Offset::new(400.0, 0.0),
            16,
        );
        let commits = outcomes
            .iter()
            .filter(|o| matches!(o, MoveOutcome::JustCommitted { .. }))
            .count();
        assert_eq!(commits, 1, "commit edge fires exactly once");
        let decision = detector.on_up(&mut state, &config, VIEWPORT, position, time + 16);
        assert_eq!(
            decision,
            Some(ReleaseDecision::Dismiss {
                direction: SwipeDirection::Right,
                needs_commit_signal: false,
            })
        );
        assert!(!state.is_touching());
        assert!(!state.is_dragging());
    }

    #[test]
    fn short_drag_snaps_back() {
        let (mut detector, mut state, config) = setup(5);
        let (_, position, time) = drag(
            &mut detector,
            &mut state,
            &config,
            Offset::new(100.0, 400.0),
            Offset::new(100.0, 0.0),
            20,
        );
        // 5 px per frame is a slow release.
        let decision = detector.on_up(&mut state, &config, VIEWPORT, position, time + 16);
        assert!(matches!(decision, Some(ReleaseDecision::SnapBack { .. })));
    }

    #[test]
    fn fast_flick_below_threshold_dismisses_with_commit_signal() {
        let (mut detector, mut state, config) = setup(5);
        // 150 px in 32 ms is ~4700 px/s, well above the fling threshold,
        // but far below the 350 px distance threshold and below the commit
        // progress, so the commit edge never fired during the drag.
        let (outcomes, position, time) = drag(
            &mut detector,
            &mut state,
            &config,
            Offset::new(100.0, 400.0),
            Offset::new(150.0, 0.0),
            2,
        );
        assert!(outcomes
            .iter()
            .all(|o| !matches!(o, MoveOutcome::JustCommitted { .. })));
        let decision = detector.on_up(&mut state, &config, VIEWPORT, position, time + 8);
        assert_eq!(
            decision,
            Some(ReleaseDecision::Dismiss {
                direction: SwipeDirection::Right,
                needs_commit_signal: true,
            })
        );
    }

    #[test]
    fn edge_swipe_bounces() {
        let (mut detector, mut state, config) = setup(1);
        let (_, position, time) = drag(
            &mut detector,
            &mut state,
            &config,
            Offset::new(100.0, 400.0),
            Offset::new(400.0, 0.0),
            16,
        );
        let decision = detector.on_up(&mut state, &config, VIEWPORT, position, time + 16);
        assert_eq!(
            decision,
            Some(ReleaseDecision::EdgeBounce {
                direction: SwipeDirection::Right
            })
        );
        assert_eq!(state.settled_index(), 0);
    }

    #[test]
    fn vertical_swipe_gated_by_config() {
        let (mut detector, mut state, mut config) = setup(5);
        config.vertical_swipe_enabled = false;
        let (_, position, time) = drag(
            &mut detector,
            &mut state,
            &config,
            Offset::new(500.0, 1000.0),
            Offset::new(0.0, -800.0),
            16,
        );
        let decision = detector.on_up(&mut state, &config, VIEWPORT, position, time + 16);
        assert!(matches!(decision, Some(ReleaseDecision::SnapBack { .. })));

        config.vertical_swipe_enabled = true;
        let mut detector = SwipeGestureDetector::new();
        let mut state = TransitionState::new(0, 5);
        let (_, position, time) = drag(
            &mut detector,
            &mut state,
            &config,
            Offset::new(500.0, 1000.0),
            Offset::new(0.0, -800.0),
            16,
        );
        let decision = detector.on_up(&mut state, &config, VIEWPORT, position, time + 16);
        assert_eq!(
            decision,
            Some(ReleaseDecision::Dismiss {
                direction: SwipeDirection::Up,
                needs_commit_signal: false,
            })
        );
    }

    #[test]
    fn move_without_down_ignored() {
        let (mut detector, mut state, config) = setup(5);
        let outcome = detector.on_move(&mut state, &config, VIEWPORT, Offset::new(300.0, 0.0), 16);
        assert_eq!(outcome, MoveOutcome::Ignored);
        assert_eq!(state.offset(), Offset::ZERO);
        assert!(detector.on_up(&mut state, &config, VIEWPORT, Offset::ZERO, 32).is_none());
        assert!(detector.on_cancel(&mut state).is_none());
    }

    #[test]
    fn down_refused_while_animating() {
        let (mut detector, mut state, _config) = setup(5);
        state.set_animating(true);
        detector.on_down(&mut state, Offset::new(100.0, 100.0), 0);
        assert!(!state.is_touching());
        assert!(!detector.pointer_down);
    }

    #[test]
    fn cancel_always_snaps_back() {
        let (mut detector, mut state, config) = setup(5);
        let (_, _, _) = drag(
            &mut detector,
            &mut state,
            &config,
            Offset::new(100.0, 400.0),
            Offset::new(400.0, 0.0),
            16,
        );
        let decision = detector.on_cancel(&mut state);
        assert_eq!(
            decision,
            Some(ReleaseDecision::SnapBack {
                release_velocity: Offset::ZERO
            })
        );
        assert!(!state.is_touching());
    }
}
