//! Foundation elements for the card stack engine: pointer input types,
//! velocity tracking, and a monotonic clock.

pub mod input;
pub mod time;
pub mod velocity;

pub use input::{PointerEvent, PointerEventKind};
pub use time::now_ms;
pub use velocity::VelocityTracker;
