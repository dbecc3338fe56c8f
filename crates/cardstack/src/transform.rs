//! Per-card render transforms.
//!
//! Pure functions from (stack position, transition state, viewport) to the
//! transform the renderer applies each frame. Position 0 is the front card
//! and mirrors the live drag; position 1 stays full-bleed so it can become
//! the front card with no visible adjustment; deeper cards interpolate
//! towards a "peeking" stacked look as the visual progress grows.

use cardstack_core::{Size, StackConfig};
use smallvec::SmallVec;

use crate::state::TransitionState;

/// Render transform for one card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    /// Degrees around the card center.
    pub rotation: f32,
    pub corner_radius: f32,
    /// Symmetric left/right inset in pixels.
    pub horizontal_inset: f32,
    pub shadow_elevation: f32,
}

impl CardTransform {
    /// Full-bleed identity transform.
    pub const IDENTITY: CardTransform = CardTransform {
        scale: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
        rotation: 0.0,
        corner_radius: 0.0,
        horizontal_inset: 0.0,
        shadow_elevation: 0.0,
    };
}

/// Visual reveal progress for the stack: touching alone grants a base
/// progress so the stack pops open on press, dragging can only raise it,
/// and the combined value is clamped to 0..=1.
pub fn visual_progress(state: &TransitionState, viewport: Size, config: &StackConfig) -> f32 {
    let touch_base = if state.is_touching() {
        config.touch_base_progress
    } else {
        0.0
    };
    let drag = state.swipe_progress(viewport, config).clamp(0.0, 1.0);
    touch_base.max(drag).clamp(0.0, 1.0)
}

/// Transform for the card at `stack_position` (0 = front).
pub fn card_transform(
    stack_position: usize,
    state: &TransitionState,
    viewport: Size,
    config: &StackConfig,
) -> CardTransform {
    let progress = visual_progress(state, viewport, config);
    match stack_position {
        0 => CardTransform {
            scale: 1.0,
            offset_x: state.offset().x,
            offset_y: state.offset().y,
            rotation: state.rotation(),
            // Card styling eases in on touch: full-bleed at rest, rounded
            // and inset as the gesture progresses.
            corner_radius: config.card_corner_radius * progress,
            horizontal_inset: config.card_horizontal_inset * progress,
            shadow_elevation: config.card_shadow_elevation,
        },
        // Next-up card must be instantaneously ready to become the front
        // card, so it never transforms at all.
        1 => CardTransform::IDENTITY,
        depth => {
            let depth_f = depth as f32;
            let revealed_scale = 1.0 - depth_f * config.card_scale_step;
            let revealed_offset_y = -(depth_f * config.card_offset_step);
            CardTransform {
                scale: 1.0 - (1.0 - revealed_scale) * progress,
                offset_x: 0.0,
                offset_y: revealed_offset_y * progress,
                rotation: 0.0,
                corner_radius: config.card_corner_radius,
                horizontal_inset: config.card_horizontal_inset,
                shadow_elevation: (config.card_shadow_elevation
                    * (1.0 - depth_f * config.shadow_elevation_decay))
                    .max(0.0),
            }
        }
    }
}

/// Draw order weight: higher draws on top, front card highest.
pub fn z_index(stack_position: usize, config: &StackConfig) -> f32 {
    (config.visible_cards + 1).saturating_sub(stack_position) as f32
}

/// Number of stack positions the renderer should draw right now.
pub fn visible_card_count(state: &TransitionState, config: &StackConfig) -> usize {
    config
        .visible_cards
        .min(state.item_count().saturating_sub(state.current_index()))
}

/// Transforms for every currently visible stack position, front first.
pub fn stack_transforms(
    state: &TransitionState,
    viewport: Size,
    config: &StackConfig,
) -> SmallVec<[CardTransform; 4]> {
    (0..visible_card_count(state, config))
        .map(|position| card_transform(position, state, viewport, config))
        .collect()
}
