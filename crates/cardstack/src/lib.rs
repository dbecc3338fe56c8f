//! Gesture-driven swipeable card stack transition engine.
//!
//! Turns a raw pointer-event stream into committed navigation decisions
//! over an ordered list of media items: a partially-reversible drag maps to
//! a discrete advance-to-next decision, a single-flight animation
//! discipline keeps overlapping gestures from corrupting state, and a
//! predictive "likely next" index lets an external playback collaborator
//! warm up media before the gesture is committed.
//!
//! # Architecture
//! - [`TransitionState`] holds the settled/predictive indices, the live
//!   drag transform, and the gesture/animation flags.
//! - The gesture detector (internal) consumes down/move/up/cancel events,
//!   tracks velocity, and decides between dismiss, snap-back, and edge
//!   bounce on release.
//! - The animator (internal) runs the dismiss (two sibling tweens joined on
//!   completion) and the snap-back spring, advanced from the host's frame
//!   tick.
//! - [`CardStack`] wires it all together and publishes
//!   [`StackCallbacks`] notifications plus [`PlaybackHost`] signals.
//! - [`transform`] maps stack positions to render transforms each frame.
//!
//! The engine is single-threaded and frame-driven: the host feeds
//! [`cardstack_foundation::PointerEvent`]s as they arrive and calls
//! [`CardStack::frame`] once per render frame.

mod animator;
mod gesture;
pub mod state;
mod stack;
pub mod transform;

pub use stack::{CardStack, PlaybackHost, StackCallbacks};
pub use state::TransitionState;
pub use transform::{card_transform, stack_transforms, visible_card_count, CardTransform};

pub use cardstack_core::{Offset, Size, StackConfig, SwipeDirection};
pub use cardstack_foundation::{PointerEvent, PointerEventKind};
