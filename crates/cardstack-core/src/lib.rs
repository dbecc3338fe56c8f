//! Pure math for the card stack transition engine: pixel-space geometry,
//! swipe direction classification, threshold/progress calculation, and the
//! stack configuration surface.
//!
//! Everything in this crate is side-effect free and viewport-agnostic; the
//! stateful engine lives in the `cardstack` crate.

pub mod config;
pub mod direction;
pub mod geometry;
pub mod progress;

pub use config::StackConfig;
pub use direction::SwipeDirection;
pub use geometry::{Offset, Size};
pub use progress::{has_exceeded_threshold, is_fling, swipe_progress};
