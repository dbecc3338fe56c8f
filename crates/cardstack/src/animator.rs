//! Dismiss and snap-back animation driving.
//!
//! The animator owns at most one in-flight animation and advances it from
//! the host's frame tick. A dismiss runs two sibling interpolation cursors
//! (offset and rotation) against the same clock and completes only when
//! both have finished, so a stall in either can never leave the state
//! half-updated. Snap-back is a single spring. New animations are refused
//! while one is in flight; teardown drops the animator without completing
//! anything.

use cardstack_animation::{easing, Spring, Tween};
use cardstack_core::{Offset, Size, StackConfig, SwipeDirection};
use log::debug;

use crate::state::TransitionState;

/// Emitted by [`TransitionAnimator::tick`] when an animation settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SettleEvent {
    /// Dismiss finished; the settled index has already advanced.
    DismissFinished { direction: SwipeDirection },
    SnapBackFinished,
}

struct DismissAnimation {
    offset: Tween<Offset>,
    rotation: Tween<f32>,
    offset_done: bool,
    rotation_done: bool,
    direction: SwipeDirection,
}

struct SnapBackAnimation {
    spring: Spring,
    viewport_width: f32,
    last_tick_ms: i64,
    deadline_ms: i64,
}

enum ActiveAnimation {
    Dismiss(DismissAnimation),
    SnapBack(SnapBackAnimation),
}

/// Single-flight owner of the in-flight transition animation.
#[derive(Default)]
pub(crate) struct TransitionAnimator {
    active: Option<ActiveAnimation>,
}

impl TransitionAnimator {
    pub fn is_idle(&self) -> bool {
        self.active.is_none()
    }

    /// Starts the direction-dependent exit animation. Commits the
    /// predictive index, then runs offset and rotation tweens concurrently.
    ///
    /// Returns `Some` immediately when the exit vector degenerates to zero
    /// (no direction), in which case no animation runs. Returns `None` when
    /// an animation was started or refused.
    #[must_use]
    pub fn start_dismiss(
        &mut self,
        state: &mut TransitionState,
        viewport: Size,
        config: &StackConfig,
        now_ms: i64,
    ) -> Option<SettleEvent> {
        if self.active.is_some() {
            debug!("dismiss refused: animation already in flight");
            return None;
        }
        state.set_animating(true);
        state.commit_to_next();
        let direction = state.direction();
        let Some(exit_offset) = exit_target(direction, state.offset(), viewport, config) else {
            // Degenerate exit vector: complete immediately.
            state.advance_to_next();
            state.set_animating(false);
            return Some(SettleEvent::DismissFinished { direction });
        };
        let rotation_target = match direction {
            SwipeDirection::Left => -config.rotation_multiplier,
            SwipeDirection::Right => config.rotation_multiplier,
            _ => 0.0,
        };
        debug!(
            "dismiss started: direction {direction:?}, exit ({:.0}, {:.0})",
            exit_offset.x, exit_offset.y
        );
        self.active = Some(ActiveAnimation::Dismiss(DismissAnimation {
            offset: Tween::new(
                state.offset(),
                exit_offset,
                now_ms,
                config.dismiss_duration_ms,
                easing::ease_in_out_cubic,
            ),
            rotation: Tween::new(
                state.rotation(),
                rotation_target,
                now_ms,
                config.dismiss_duration_ms,
                easing::ease_in_out_cubic,
            ),
            offset_done: false,
            rotation_done: false,
            direction,
        }));
        None
    }

    /// Starts the spring back to center. Refused while animating.
    pub fn start_snap_back(
        &mut self,
        state: &mut TransitionState,
        viewport: Size,
        config: &StackConfig,
        now_ms: i64,
        release_velocity: Offset,
    ) {
        if self.active.is_some() {
            debug!("snap-back refused: animation already in flight");
            return;
        }
        state.set_animating(true);
        state.set_touching(false);
        state.set_dragging(false);
        self.active = Some(ActiveAnimation::SnapBack(SnapBackAnimation {
            spring: Spring::new(
                state.offset(),
                Offset::ZERO,
                config.snap_back_stiffness,
                config.snap_back_damping_ratio,
            )
            .with_velocity(release_velocity),
            viewport_width: viewport.width,
            last_tick_ms: now_ms,
            deadline_ms: now_ms + config.snap_back_max_duration_ms,
        }));
    }

    /// Advances the in-flight animation to `now_ms`, writing the sampled
    /// offset/rotation back into the state each tick.
    pub fn tick(
        &mut self,
        state: &mut TransitionState,
        config: &StackConfig,
        now_ms: i64,
    ) -> Option<SettleEvent> {
        let event = match self.active.as_mut()? {
            ActiveAnimation::Dismiss(dismiss) => {
                state.set_offset(dismiss.offset.sample(now_ms));
                state.set_rotation(dismiss.rotation.sample(now_ms));
                dismiss.offset_done = dismiss.offset.is_finished(now_ms);
                dismiss.rotation_done = dismiss.rotation.is_finished(now_ms);
                // Both sibling cursors must finish before completion fires.
                if !(dismiss.offset_done && dismiss.rotation_done) {
                    return None;
                }
                let direction = dismiss.direction;
                state.advance_to_next();
                state.set_animating(false);
                debug!(
                    "dismiss settled: direction {direction:?}, settled index {}",
                    state.settled_index()
                );
                SettleEvent::DismissFinished { direction }
            }
            ActiveAnimation::SnapBack(snap) => {
                let dt = (now_ms - snap.last_tick_ms).max(0) as f32 / 1000.0;
                snap.last_tick_ms = now_ms;
                if now_ms >= snap.deadline_ms {
                    snap.spring.finish();
                }
                let position = snap.spring.step(dt);
                state.set_offset(position);
                // Rotation follows the live offset on the way back.
                let rotation = if snap.viewport_width > 0.0 {
                    (position.x / snap.viewport_width) * config.rotation_multiplier
                } else {
                    0.0
                };
                state.set_rotation(rotation);
                if !snap.spring.is_settled() {
                    return None;
                }
                state.reset_transients();
                state.set_animating(false);
                debug!("snap-back settled at index {}", state.settled_index());
                SettleEvent::SnapBackFinished
            }
        };
        self.active = None;
        Some(event)
    }

    /// Drops any in-flight animation without running completion. Used on
    /// stack teardown.
    pub fn discard(&mut self, state: &mut TransitionState) {
        if self.active.take().is_some() {
            state.set_animating(false);
        }
    }
}

/// Off-screen exit target for a committed swipe: the dominant axis exits by
/// `viewport x exit_multiplier`, the cross axis holds its current offset.
fn exit_target(
    direction: SwipeDirection,
    offset: Offset,
    viewport: Size,
    config: &StackConfig,
) -> Option<Offset> {
    let target = match direction {
        SwipeDirection::Left => Offset::new(-viewport.width * config.exit_multiplier, offset.y),
        SwipeDirection::Right => Offset::new(viewport.width * config.exit_multiplier, offset.y),
        SwipeDirection::Up => Offset::new(offset.x, -viewport.height * config.exit_multiplier),
        SwipeDirection::Down => Offset::new(offset.x, viewport.height * config.exit_multiplier),
        SwipeDirection::None => Offset::ZERO,
    };
    if target.is_zero() {
        None
    } else {
        Some(target)
    }
}
