//! Scripted-gesture test harness for the card stack engine.
//!
//! [`StackRobot`] drives a [`CardStack`] the way a platform host would:
//! synthetic pointer scripts stamped on a deterministic clock, a frame tick
//! after every event, and recorders capturing all callback and playback
//! host traffic so tests can assert on the full observable behavior.

use std::cell::RefCell;
use std::rc::Rc;

use cardstack::{CardStack, PlaybackHost, StackCallbacks, SwipeDirection};
use cardstack_core::{Offset, Size, StackConfig};
use cardstack_foundation::PointerEvent;

/// Milliseconds per synthetic frame (~60 fps).
pub const FRAME_MS: i64 = 16;

/// Everything the stack reported through its callbacks, in order.
#[derive(Debug, Default)]
pub struct EventLog {
    pub committed: Vec<SwipeDirection>,
    pub completed: Vec<SwipeDirection>,
    pub edges: Vec<SwipeDirection>,
}

/// Everything the stack pushed to its playback host, in order.
#[derive(Debug, Default)]
pub struct HostLog {
    pub active_indices: Vec<usize>,
    pub scroll_hints: Vec<(usize, Option<f32>)>,
}

/// Shared handle implementing [`PlaybackHost`] over a [`HostLog`].
#[derive(Clone, Default)]
struct RecordingHost {
    log: Rc<RefCell<HostLog>>,
}

impl PlaybackHost for RecordingHost {
    fn set_active_index(&mut self, index: usize) {
        self.log.borrow_mut().active_indices.push(index);
    }

    fn set_scroll_hint(&mut self, predicted_index: usize, velocity: Option<f32>) {
        self.log
            .borrow_mut()
            .scroll_hints
            .push((predicted_index, velocity));
    }
}

/// Drives a card stack with synthetic gestures on a deterministic clock.
pub struct StackRobot {
    stack: CardStack,
    now_ms: i64,
    cursor: Offset,
    events: Rc<RefCell<EventLog>>,
    host: Rc<RefCell<HostLog>>,
}

impl StackRobot {
    pub fn new(initial_index: usize, item_count: usize, config: StackConfig, viewport: Size) -> Self {
        let events = Rc::new(RefCell::new(EventLog::default()));
        let host = Rc::new(RefCell::new(HostLog::default()));

        let committed = events.clone();
        let completed = events.clone();
        let edges = events.clone();
        let callbacks = StackCallbacks::new()
            .on_swipe_committed(move |d| committed.borrow_mut().committed.push(d))
            .on_swipe_complete(move |d| completed.borrow_mut().completed.push(d))
            .on_edge_reached(move |d| edges.borrow_mut().edges.push(d));

        let mut stack = CardStack::new(initial_index, item_count, config)
            .with_callbacks(callbacks)
            .with_playback_host(RecordingHost { log: host.clone() });
        stack.set_viewport(viewport);

        Self {
            stack,
            now_ms: 0,
            cursor: Offset::ZERO,
            events,
            host,
        }
    }

    // ------------------------------------------------------------------
    // Pointer scripting
    // ------------------------------------------------------------------

    pub fn press(&mut self, at: Offset) {
        self.cursor = at;
        self.stack
            .handle_pointer_event(PointerEvent::down(at, self.now_ms));
        self.stack.frame(self.now_ms);
    }

    /// Drags by `total` in `steps` evenly spaced move events, one frame
    /// apart.
    pub fn drag_by(&mut self, total: Offset, steps: usize) {
        let start = self.cursor;
        for step in 1..=steps.max(1) {
            self.now_ms += FRAME_MS;
            self.cursor = start + total * (step as f32 / steps.max(1) as f32);
            self.stack
                .handle_pointer_event(PointerEvent::moved(self.cursor, self.now_ms));
            self.stack.frame(self.now_ms);
        }
    }

    pub fn release(&mut self) {
        self.now_ms += FRAME_MS;
        self.stack
            .handle_pointer_event(PointerEvent::up(self.cursor, self.now_ms));
        self.stack.frame(self.now_ms);
    }

    pub fn cancel(&mut self) {
        self.now_ms += FRAME_MS;
        self.stack
            .handle_pointer_event(PointerEvent::cancel(self.cursor, self.now_ms));
        self.stack.frame(self.now_ms);
    }

    /// Full gesture: press, drag in steps, release.
    pub fn swipe(&mut self, from: Offset, total: Offset, steps: usize) {
        self.press(from);
        self.drag_by(total, steps);
        self.release();
    }

    // ------------------------------------------------------------------
    // Clock
    // ------------------------------------------------------------------

    /// Advances one frame.
    pub fn frame(&mut self) {
        self.now_ms += FRAME_MS;
        self.stack.frame(self.now_ms);
    }

    /// Ticks frames until the stack is idle. Panics if `max_ms` of
    /// synthetic time passes first, so a stuck animation fails the test
    /// instead of hanging it.
    pub fn run_until_idle(&mut self, max_ms: i64) {
        let deadline = self.now_ms + max_ms;
        while !self.stack.is_idle() {
            assert!(
                self.now_ms < deadline,
                "stack not idle after {max_ms}ms of synthetic time"
            );
            self.frame();
        }
    }

    // ------------------------------------------------------------------
    // Observation
    // ------------------------------------------------------------------

    pub fn stack(&self) -> &CardStack {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut CardStack {
        &mut self.stack
    }

    pub fn now_ms(&self) -> i64 {
        self.now_ms
    }

    pub fn events(&self) -> std::cell::Ref<'_, EventLog> {
        self.events.borrow()
    }

    pub fn host(&self) -> std::cell::Ref<'_, HostLog> {
        self.host.borrow()
    }
}
