//! Monotonic millisecond clock for stamping touch events.

use web_time::Instant;

/// Millisecond timestamps measured from the clock's creation.
///
/// `web_time::Instant` stays usable on wasm targets where the std
/// equivalent is unavailable. A zero timestamp never occurs for a real
/// event, which lets consumers use 0 as a "never" sentinel.
#[derive(Clone, Copy, Debug)]
pub struct TouchClock {
    origin: Instant,
}

impl TouchClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        // +1 keeps the sentinel value 0 unreachable
        self.origin.elapsed().as_millis() as u64 + 1
    }
}

impl Default for TouchClock {
    fn default() -> Self {
        Self::new()
    }
}
