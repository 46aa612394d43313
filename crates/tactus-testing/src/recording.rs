//! Recording handler set for gesture assertions.

use std::cell::RefCell;
use std::rc::Rc;

use tactus_gestures::{Gesture, GestureHandlers, GestureKind};

/// Captures every classified gesture in emission order.
#[derive(Clone, Default)]
pub struct GestureLog {
    events: Rc<RefCell<Vec<Gesture>>>,
}

impl GestureLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handlers that record into this log via the catch-all slot. Callers
    /// can chain further per-kind handlers onto the returned builder.
    pub fn handlers(&self) -> GestureHandlers {
        let events = self.events.clone();
        GestureHandlers::new().on_gesture(move |_, gesture| {
            events.borrow_mut().push(*gesture);
        })
    }

    pub fn events(&self) -> Vec<Gesture> {
        self.events.borrow().clone()
    }

    /// Drains the log, returning what was recorded so far.
    pub fn take(&self) -> Vec<Gesture> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn count_of(&self, kind: GestureKind) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|g| g.kind() == kind)
            .count()
    }

    pub fn last(&self) -> Option<Gesture> {
        self.events.borrow().last().copied()
    }

    pub fn last_of(&self, kind: GestureKind) -> Option<Gesture> {
        self.events
            .borrow()
            .iter()
            .rev()
            .find(|g| g.kind() == kind)
            .copied()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }
}
