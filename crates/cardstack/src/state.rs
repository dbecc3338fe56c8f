//! Transition state for one card stack instance.
//!
//! Holds the authoritative settled index, the predictive current index, the
//! live drag transform, and the gesture/animation flags. All mutation goes
//! through the operations below; the renderer and the playback host only
//! read. Observers are notified by the owning [`crate::CardStack`] at
//! defined transition points (commit edge, settle, frame), never on raw
//! field writes.

use cardstack_core::{progress, Offset, Size, StackConfig, SwipeDirection};

/// Mutable state of the swipeable stack.
///
/// # Index invariants
/// - `settled_index <= current_index <= max(item_count - 1, 0)` always.
/// - `current_index == settled_index` unless a swipe is committed, in which
///   case `current_index == settled_index + 1`.
#[derive(Debug, Clone)]
pub struct TransitionState {
    item_count: usize,
    settled_index: usize,
    current_index: usize,
    offset: Offset,
    rotation: f32,
    direction: SwipeDirection,
    is_touching: bool,
    is_dragging: bool,
    is_animating: bool,
    is_swipe_committed: bool,
}

impl TransitionState {
    pub fn new(initial_index: usize, item_count: usize) -> Self {
        let clamped = initial_index.min(item_count.saturating_sub(1));
        Self {
            item_count,
            settled_index: clamped,
            current_index: clamped,
            offset: Offset::ZERO,
            rotation: 0.0,
            direction: SwipeDirection::None,
            is_touching: false,
            is_dragging: false,
            is_animating: false,
            is_swipe_committed: false,
        }
    }

    // ------------------------------------------------------------------
    // Read-only view
    // ------------------------------------------------------------------

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// The last fully-committed, non-animating active index. Authoritative
    /// for "what is actually showing".
    pub fn settled_index(&self) -> usize {
        self.settled_index
    }

    /// Predictive index: equals [`Self::settled_index`] normally, advances
    /// by one while a drag has crossed the commit threshold.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Live drag translation of the front card in pixels.
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Front card rotation in degrees, derived from the horizontal offset.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn direction(&self) -> SwipeDirection {
        self.direction
    }

    pub fn is_touching(&self) -> bool {
        self.is_touching
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    pub fn is_swipe_committed(&self) -> bool {
        self.is_swipe_committed
    }

    pub fn is_at_end(&self) -> bool {
        self.settled_index + 1 >= self.item_count
    }

    /// Progress towards the swipe threshold (0.0 to 1.0+), recomputed from
    /// the live offset.
    pub fn swipe_progress(&self, viewport: Size, config: &StackConfig) -> f32 {
        progress::swipe_progress(self.offset, viewport, config.swipe_threshold_fraction)
    }

    pub fn has_exceeded_threshold(&self, viewport: Size, config: &StackConfig) -> bool {
        progress::has_exceeded_threshold(self.offset, viewport, config.swipe_threshold_fraction)
    }

    // ------------------------------------------------------------------
    // Mutation operations
    // ------------------------------------------------------------------

    /// Re-clamps both indices when the backing list changes size. Shrinking
    /// past the current position is tolerated; a count of zero pins both
    /// indices at zero.
    pub fn update_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        let max_index = item_count.saturating_sub(1);
        self.settled_index = self.settled_index.min(max_index);
        self.current_index = self.current_index.min(max_index);
        if self.current_index == self.settled_index {
            self.is_swipe_committed = false;
        }
    }

    /// Accumulates a drag delta and recomputes rotation and direction.
    pub fn update_drag_offset(&mut self, delta: Offset, viewport: Size, config: &StackConfig) {
        self.offset += delta;
        self.rotation = if viewport.width > 0.0 {
            (self.offset.x / viewport.width) * config.rotation_multiplier
        } else {
            0.0
        };
        self.direction = SwipeDirection::from_offset(self.offset, config.min_direction_threshold);
    }

    /// Re-evaluates the predictive index from the live drag progress.
    ///
    /// Recomputed every frame from scratch: the commit predicate may flip
    /// back and forth across frames and downstream preload signaling relies
    /// on seeing the current verdict each time. Returns `true` only on the
    /// not-committed to committed transition so callers can fire a one-time
    /// notification.
    pub fn update_current_index_for_drag(&mut self, viewport: Size, config: &StackConfig) -> bool {
        let was_committed = self.is_swipe_committed;
        let progress = self.swipe_progress(viewport, config);
        let commit = !self.direction.is_none()
            && !self.is_at_end()
            && progress >= config.commit_threshold;
        if commit {
            self.current_index = self.settled_index + 1;
            self.is_swipe_committed = true;
        } else {
            self.current_index = self.settled_index;
            self.is_swipe_committed = false;
        }
        self.is_swipe_committed && !was_committed
    }

    /// Forces the predictive advance outside a live drag (fling release,
    /// programmatic trigger). No-op at the last item.
    pub fn commit_to_next(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.current_index = self.settled_index + 1;
        self.is_swipe_committed = true;
        true
    }

    /// Commits the settled index to the next item and clears all transient
    /// fields. Returns `false` (still clearing transients) at the end of
    /// the list.
    pub fn advance_to_next(&mut self) -> bool {
        let advanced = if self.is_at_end() {
            false
        } else {
            self.settled_index += 1;
            true
        };
        self.reset_transients();
        advanced
    }

    /// Zeroes offset/rotation, clears direction, commit, and gesture flags,
    /// and re-aligns the predictive index with the settled one.
    pub fn reset_transients(&mut self) {
        self.offset = Offset::ZERO;
        self.rotation = 0.0;
        self.direction = SwipeDirection::None;
        self.is_touching = false;
        self.is_dragging = false;
        self.is_swipe_committed = false;
        self.current_index = self.settled_index;
    }

    pub(crate) fn set_touching(&mut self, touching: bool) {
        self.is_touching = touching;
    }

    pub(crate) fn set_dragging(&mut self, dragging: bool) {
        self.is_dragging = dragging;
    }

    pub(crate) fn set_animating(&mut self, animating: bool) {
        self.is_animating = animating;
    }

    pub(crate) fn set_direction(&mut self, direction: SwipeDirection) {
        self.direction = direction;
    }

    pub(crate) fn set_offset(&mut self, offset: Offset) {
        self.offset = offset;
    }

    pub(crate) fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(1000.0, 2000.0);

    fn config() -> StackConfig {
        StackConfig::default()
    }

    fn assert_index_invariant(state: &TransitionState) {
        let max_index = state.item_count().saturating_sub(1);
        assert!(state.settled_index() <= state.current_index());
        assert!(state.current_index() <= max_index);
        if state.is_swipe_committed() {
            assert_eq!(state.current_index(), state.settled_index() + 1);
        } else {
            assert_eq!(state.current_index(), state.settled_index());
        }
    }

    /// Sets the drag offset so that swipe progress equals `progress`.
    fn drag_to_progress(state: &mut TransitionState, progress: f32, config: &StackConfig) {
        let target_x = VIEWPORT.width * config.swipe_threshold_fraction * progress;
        let delta = Offset::new(target_x - state.offset().x, 0.0);
        state.update_drag_offset(delta, VIEWPORT, config);
    }

    #[test]
    fn initial_index_clamped() {
        let state = TransitionState::new(10, 3);
        assert_eq!(state.settled_index(), 2);
        assert_eq!(state.current_index(), 2);
        let empty = TransitionState::new(5, 0);
        assert_eq!(empty.settled_index(), 0);
        assert!(empty.is_at_end());
    }

    #[test]
    fn drag_offset_accumulates_and_derives() {
        let config = config();
        let mut state = TransitionState::new(0, 5);
        state.update_drag_offset(Offset::new(100.0, 20.0), VIEWPORT, &config);
        state.update_drag_offset(Offset::new(150.0, -5.0), VIEWPORT, &config);
        assert_eq!(state.offset(), Offset::new(250.0, 15.0));
        let expected_rotation = 250.0 / VIEWPORT.width * config.rotation_multiplier;
        assert!((state.rotation() - expected_rotation).abs() < 1e-5);
        assert_eq!(state.direction(), SwipeDirection::Right);
    }

    #[test]
    fn degenerate_viewport_never_rotates() {
        let config = config();
        let mut state = TransitionState::new(0, 5);
        state.update_drag_offset(Offset::new(100.0, 0.0), Size::new(0.0, 0.0), &config);
        assert_eq!(state.rotation(), 0.0);
        assert_eq!(state.swipe_progress(Size::new(0.0, 0.0), &config), 0.0);
    }

    #[test]
    fn commit_is_edge_triggered_across_recrossings() {
        let config = config();
        let mut state = TransitionState::new(0, 5);
        let mut commits = 0;
        // Progress path 0.3 -> 0.6 -> 0.4 -> 0.7 crosses the 0.5 commit
        // threshold upward exactly twice.
        for progress in [0.3, 0.6, 0.4, 0.7] {
            drag_to_progress(&mut state, progress, &config);
            if state.update_current_index_for_drag(VIEWPORT, &config) {
                commits += 1;
            }
            assert_index_invariant(&state);
        }
        assert_eq!(commits, 2);
        assert!(state.is_swipe_committed());
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn commit_reverts_below_threshold() {
        let config = config();
        let mut state = TransitionState::new(0, 5);
        drag_to_progress(&mut state, 0.8, &config);
        assert!(state.update_current_index_for_drag(VIEWPORT, &config));
        drag_to_progress(&mut state, 0.2, &config);
        assert!(!state.update_current_index_for_drag(VIEWPORT, &config));
        assert!(!state.is_swipe_committed());
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn no_commit_at_last_item() {
        let config = config();
        let mut state = TransitionState::new(2, 3);
        drag_to_progress(&mut state, 2.0, &config);
        assert!(!state.update_current_index_for_drag(VIEWPORT, &config));
        assert!(!state.is_swipe_committed());
        assert!(!state.commit_to_next());
        assert_eq!(state.settled_index(), 2);
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn advance_to_next_walks_the_list() {
        let mut state = TransitionState::new(0, 3);
        assert!(state.advance_to_next());
        assert_eq!(state.settled_index(), 1);
        assert!(state.advance_to_next());
        assert_eq!(state.settled_index(), 2);
        // End of list: transients still cleared, index unchanged.
        assert!(!state.advance_to_next());
        assert_eq!(state.settled_index(), 2);
        assert_eq!(state.offset(), Offset::ZERO);
        assert_eq!(state.direction(), SwipeDirection::None);
    }

    #[test]
    fn index_invariant_under_op_sequences() {
        let config = config();
        let mut state = TransitionState::new(0, 5);
        assert_index_invariant(&state);

        state.commit_to_next();
        assert_index_invariant(&state);

        state.update_item_count(2);
        assert_index_invariant(&state);

        state.advance_to_next();
        assert_index_invariant(&state);

        state.commit_to_next();
        assert_index_invariant(&state);

        // Shrink past the current index.
        state.update_item_count(1);
        assert_index_invariant(&state);
        assert_eq!(state.settled_index(), 0);

        state.update_item_count(0);
        assert_index_invariant(&state);
        assert!(state.is_at_end());

        state.update_item_count(4);
        drag_to_progress(&mut state, 0.9, &config);
        state.update_current_index_for_drag(VIEWPORT, &config);
        assert_index_invariant(&state);
    }

    #[test]
    fn shrinking_below_committed_index_clears_commit() {
        let mut state = TransitionState::new(0, 5);
        state.commit_to_next();
        assert!(state.is_swipe_committed());
        state.update_item_count(1);
        assert!(!state.is_swipe_committed());
        assert_eq!(state.current_index(), 0);
    }
}
