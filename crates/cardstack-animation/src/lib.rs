//! Frame-driven interpolation primitives.
//!
//! Animations here are passive cursors: an external clock (the host's frame
//! loop) advances them by calling `sample`/`step` with the current time, and
//! the caller writes the sampled values wherever they belong. Nothing in
//! this crate spawns tasks or owns a clock.

pub mod easing;
pub mod spring;
pub mod tween;

pub use spring::Spring;
pub use tween::{Lerp, Tween};
