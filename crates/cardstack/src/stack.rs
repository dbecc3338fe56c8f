//! The card stack facade.
//!
//! Owns the transition state, the gesture detector, and the animator, and
//! is the single place observers are notified: commit edges, swipe
//! completion, edge bounces, and the playback host's active-index and
//! scroll-hint signals. Everything runs on the caller's thread; the host
//! feeds pointer events as they arrive and calls [`CardStack::frame`] once
//! per render frame.

use cardstack_core::{Offset, Size, StackConfig, SwipeDirection};
use cardstack_foundation::{PointerEvent, PointerEventKind};
use log::{debug, trace};
use smallvec::SmallVec;

use crate::animator::{SettleEvent, TransitionAnimator};
use crate::gesture::{MoveOutcome, ReleaseDecision, SwipeGestureDetector};
use crate::state::TransitionState;
use crate::transform::{self, CardTransform};

/// External playback collaborator.
///
/// Receives the authoritative active index on settle and predictive scroll
/// hints during drags so it can warm up media before the commit. The stack
/// never blocks on this collaborator, and the collaborator must treat the
/// signals as read-only.
pub trait PlaybackHost {
    fn set_active_index(&mut self, index: usize);
    fn set_scroll_hint(&mut self, predicted_index: usize, velocity: Option<f32>);
}

/// One-shot and per-gesture notifications supplied at construction.
#[derive(Default)]
pub struct StackCallbacks {
    on_swipe_committed: Option<Box<dyn FnMut(SwipeDirection)>>,
    on_swipe_complete: Option<Box<dyn FnMut(SwipeDirection)>>,
    on_edge_reached: Option<Box<dyn FnMut(SwipeDirection)>>,
}

impl StackCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fires when a drag first crosses the commit threshold; at most once
    /// per gesture.
    pub fn on_swipe_committed(mut self, f: impl FnMut(SwipeDirection) + 'static) -> Self {
        self.on_swipe_committed = Some(Box::new(f));
        self
    }

    /// Fires once the dismiss animation fully settles.
    pub fn on_swipe_complete(mut self, f: impl FnMut(SwipeDirection) + 'static) -> Self {
        self.on_swipe_complete = Some(Box::new(f));
        self
    }

    /// Fires when a threshold/fling swipe is attempted at the last item.
    pub fn on_edge_reached(mut self, f: impl FnMut(SwipeDirection) + 'static) -> Self {
        self.on_edge_reached = Some(Box::new(f));
        self
    }

    fn emit_committed(&mut self, direction: SwipeDirection) {
        if let Some(f) = self.on_swipe_committed.as_mut() {
            f(direction);
        }
    }

    fn emit_complete(&mut self, direction: SwipeDirection) {
        if let Some(f) = self.on_swipe_complete.as_mut() {
            f(direction);
        }
    }

    fn emit_edge(&mut self, direction: SwipeDirection) {
        if let Some(f) = self.on_edge_reached.as_mut() {
            f(direction);
        }
    }
}

/// A gesture-driven swipeable card stack over an ordered list of items.
pub struct CardStack {
    state: TransitionState,
    detector: SwipeGestureDetector,
    animator: TransitionAnimator,
    config: StackConfig,
    callbacks: StackCallbacks,
    playback: Option<Box<dyn PlaybackHost>>,
    viewport: Size,
    last_published_active: Option<usize>,
    hint_active: bool,
}

impl CardStack {
    pub fn new(initial_index: usize, item_count: usize, config: StackConfig) -> Self {
        Self {
            state: TransitionState::new(initial_index, item_count),
            detector: SwipeGestureDetector::new(),
            animator: TransitionAnimator::default(),
            config,
            callbacks: StackCallbacks::default(),
            playback: None,
            viewport: Size::default(),
            last_published_active: None,
            hint_active: false,
        }
    }

    pub fn with_callbacks(mut self, callbacks: StackCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Attaches the playback collaborator and immediately reports the
    /// current active index to it.
    pub fn with_playback_host(mut self, host: impl PlaybackHost + 'static) -> Self {
        let mut host = Box::new(host);
        let settled = self.state.settled_index();
        host.set_active_index(settled);
        self.last_published_active = Some(settled);
        self.playback = Some(host);
        self
    }

    // ------------------------------------------------------------------
    // Host plumbing
    // ------------------------------------------------------------------

    /// Viewport dimensions, known at gesture start. A degenerate viewport
    /// degrades all threshold math to a no-op.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Re-clamps indices when the backing list changes size.
    pub fn update_item_count(&mut self, item_count: usize) {
        self.state.update_item_count(item_count);
    }

    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    /// True when no gesture is live and no animation is in flight.
    pub fn is_idle(&self) -> bool {
        !self.state.is_touching() && !self.state.is_animating() && self.animator.is_idle()
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Feeds one pointer event. Events are processed strictly in arrival
    /// order; the whole stream is ignored while an animation is in flight
    /// (single-flight: gestures are refused, never queued).
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        if self.state.is_animating() {
            trace!("pointer event ignored while animating");
            return;
        }
        match event.kind {
            PointerEventKind::Down => {
                self.detector.on_down(&mut self.state, event.position, event.time_ms);
            }
            PointerEventKind::Move => {
                let outcome = self.detector.on_move(
                    &mut self.state,
                    &self.config,
                    self.viewport,
                    event.position,
                    event.time_ms,
                );
                if let MoveOutcome::JustCommitted { direction } = outcome {
                    self.callbacks.emit_committed(direction);
                }
            }
            PointerEventKind::Up => {
                let decision = self.detector.on_up(
                    &mut self.state,
                    &self.config,
                    self.viewport,
                    event.position,
                    event.time_ms,
                );
                if let Some(decision) = decision {
                    self.apply_release_decision(decision, event.time_ms);
                }
            }
            PointerEventKind::Cancel => {
                if let Some(decision) = self.detector.on_cancel(&mut self.state) {
                    self.apply_release_decision(decision, event.time_ms);
                }
            }
        }
    }

    fn apply_release_decision(&mut self, decision: ReleaseDecision, now_ms: i64) {
        match decision {
            ReleaseDecision::Dismiss {
                direction,
                needs_commit_signal,
            } => {
                if needs_commit_signal {
                    // Fling release without a drag-time commit: fire the
                    // commit notification now, before the animation.
                    self.state.commit_to_next();
                    self.callbacks.emit_committed(direction);
                }
                self.start_dismiss(now_ms);
            }
            ReleaseDecision::EdgeBounce { direction } => {
                debug!("edge reached while swiping {direction:?}");
                self.callbacks.emit_edge(direction);
                self.animator.start_snap_back(
                    &mut self.state,
                    self.viewport,
                    &self.config,
                    now_ms,
                    Offset::ZERO,
                );
            }
            ReleaseDecision::SnapBack { release_velocity } => {
                self.animator.start_snap_back(
                    &mut self.state,
                    self.viewport,
                    &self.config,
                    now_ms,
                    release_velocity,
                );
            }
        }
    }

    fn start_dismiss(&mut self, now_ms: i64) {
        if let Some(settle) =
            self.animator
                .start_dismiss(&mut self.state, self.viewport, &self.config, now_ms)
        {
            // Degenerate exit vector completed without animating.
            self.handle_settle(settle);
        }
    }

    // ------------------------------------------------------------------
    // Frame tick
    // ------------------------------------------------------------------

    /// Advances any in-flight animation and publishes playback signals.
    /// Call once per render frame with the same clock used for pointer
    /// event timestamps.
    pub fn frame(&mut self, now_ms: i64) {
        if let Some(settle) = self.animator.tick(&mut self.state, &self.config, now_ms) {
            self.handle_settle(settle);
        }
        self.publish_playback_signals();
    }

    fn handle_settle(&mut self, settle: SettleEvent) {
        match settle {
            SettleEvent::DismissFinished { direction } => {
                self.callbacks.emit_complete(direction);
            }
            SettleEvent::SnapBackFinished => {}
        }
        self.publish_playback_signals();
    }

    /// Publishes the active index on settle change and the predictive
    /// scroll hint on its rising edge. Both are push-only; the stack never
    /// waits on the host.
    fn publish_playback_signals(&mut self) {
        let Some(host) = self.playback.as_mut() else {
            return;
        };
        let settled = self.state.settled_index();
        if self.last_published_active != Some(settled) {
            self.last_published_active = Some(settled);
            host.set_active_index(settled);
        }
        let progress = self.state.swipe_progress(self.viewport, &self.config);
        let hinting = !self.state.direction().is_none()
            && progress >= self.config.scroll_hint_threshold
            && !self.state.is_at_end();
        if hinting && !self.hint_active {
            self.hint_active = true;
            let velocity = self.detector.velocity().abs_max();
            let velocity = (velocity > 0.0).then_some(velocity);
            host.set_scroll_hint(settled + 1, velocity);
        } else if !hinting {
            self.hint_active = false;
        }
    }

    // ------------------------------------------------------------------
    // Programmatic triggers
    // ------------------------------------------------------------------

    /// Synthesizes a completed swipe in `direction` without pointer input.
    /// No-op (returning `false`) while animating, at the end of the list,
    /// or with no direction.
    pub fn swipe_in_direction(&mut self, direction: SwipeDirection, now_ms: i64) -> bool {
        if self.state.is_animating() || self.state.is_at_end() || direction.is_none() {
            debug!("programmatic swipe {direction:?} refused");
            return false;
        }
        self.state.set_direction(direction);
        self.state.commit_to_next();
        self.start_dismiss(now_ms);
        true
    }

    /// Skips straight to the next item with no animation (overlay "next"
    /// button). Refused while animating or at the end of the list.
    pub fn advance_to_next(&mut self) -> bool {
        if self.state.is_animating() || self.state.is_at_end() {
            return false;
        }
        let advanced = self.state.advance_to_next();
        self.publish_playback_signals();
        advanced
    }

    // ------------------------------------------------------------------
    // Render queries
    // ------------------------------------------------------------------

    pub fn card_transform(&self, stack_position: usize) -> CardTransform {
        transform::card_transform(stack_position, &self.state, self.viewport, &self.config)
    }

    pub fn stack_transforms(&self) -> SmallVec<[CardTransform; 4]> {
        transform::stack_transforms(&self.state, self.viewport, &self.config)
    }

    pub fn visible_card_count(&self) -> usize {
        transform::visible_card_count(&self.state, &self.config)
    }
}

impl Drop for CardStack {
    fn drop(&mut self) {
        // Teardown stops any in-flight animation without invoking its
        // completion callback.
        self.animator.discard(&mut self.state);
    }
}
