//! Touch event model.
//!
//! Mirrors the platform touch contract: every event carries the contacts
//! still down after the event (`touches`) plus the contacts that began,
//! moved, or ended in it (`changed`), each with an identifier that stays
//! stable from start to release. Timestamps are milliseconds on the
//! source's monotonic clock so consumers can compute durations without
//! scheduling timers.

use std::cell::Cell;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::geometry::Point;

pub type TouchId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// One contact point as reported by the platform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub id: TouchId,
    pub position: Point,
}

impl TouchPoint {
    pub const fn new(id: TouchId, position: Point) -> Self {
        Self { id, position }
    }
}

/// Contact list that stays inline for the one and two finger cases.
pub type TouchList = SmallVec<[TouchPoint; 2]>;

/// A single touch event.
///
/// The default-suppression flag is shared across clones (like consumption
/// tracking on pointer events) so a platform adapter can observe
/// `prevent_default` calls made by listeners after dispatch and skip the
/// native gesture behavior.
#[derive(Clone, Debug)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    /// Milliseconds on the source's monotonic clock.
    pub uptime_ms: u64,
    /// Contacts still down after this event.
    pub touches: TouchList,
    /// Contacts that began, moved, or ended in this event.
    pub changed: TouchList,
    default_prevented: Rc<Cell<bool>>,
}

impl TouchEvent {
    pub fn new(phase: TouchPhase, uptime_ms: u64, touches: TouchList, changed: TouchList) -> Self {
        Self {
            phase,
            uptime_ms,
            touches,
            changed,
            default_prevented: Rc::new(Cell::new(false)),
        }
    }

    /// Ask the platform to skip its default gesture behavior for this
    /// event (double-tap zoom, pinch zoom, scroll).
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }

    pub(crate) fn clear_default_prevented(&self) {
        self.default_prevented.set(false);
    }

    /// Number of contacts still down.
    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }
}
