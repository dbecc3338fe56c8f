//! Monotonic millisecond clock.
//!
//! `web-time` resolves to `std::time` on native targets and to
//! `performance.now()` on WASM, so hosts on every platform can stamp
//! pointer events and frame ticks with the same clock.

use std::sync::OnceLock;
use web_time::Instant;

fn epoch() -> Instant {
    static EPOCH: OnceLock<Instant> = OnceLock::new();
    *EPOCH.get_or_init(Instant::now)
}

/// Milliseconds since the first call in this process. Monotonic.
pub fn now_ms() -> i64 {
    epoch().elapsed().as_millis() as i64
}
