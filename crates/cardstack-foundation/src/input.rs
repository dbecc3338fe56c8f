//! Raw pointer input boundary.
//!
//! The platform layer translates its native events into this stream; the
//! engine consumes it without knowing about windowing or touch plumbing.

use cardstack_core::Offset;

/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    /// The platform took the pointer away (e.g. palm rejection, system
    /// gesture). Treated like an Up that can never dismiss.
    Cancel,
}

/// One pointer event with its absolute position and timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    /// Absolute position in viewport pixels.
    pub position: Offset,
    /// Monotonic timestamp in milliseconds (see [`crate::time::now_ms`]).
    pub time_ms: i64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Offset, time_ms: i64) -> Self {
        Self {
            kind,
            position,
            time_ms,
        }
    }

    pub fn down(position: Offset, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Down, position, time_ms)
    }

    pub fn moved(position: Offset, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Move, position, time_ms)
    }

    pub fn up(position: Offset, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Up, position, time_ms)
    }

    pub fn cancel(position: Offset, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Cancel, position, time_ms)
    }
}
