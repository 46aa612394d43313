//! Listener registration for touch event producers.
//!
//! `TouchSource` is the seam between platform adapters and gesture
//! consumers: adapters own the raw event feed, consumers register
//! listeners and get a removal handle back. `TouchEventBus` is the
//! reference in-process implementation used by tests, demos, and any host
//! that translates its own input events by hand.

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;

use crate::event::{TouchEvent, TouchPhase};

pub type ListenerId = u64;

/// Registration options for a listener.
///
/// Passive listeners promise not to suppress default behavior; a
/// `prevent_default` call made from one is ignored and logged, matching
/// the platform contract. Gesture recognizers register non-passive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerOptions {
    pub passive: bool,
}

impl ListenerOptions {
    pub const NON_PASSIVE: Self = Self { passive: false };
}

impl Default for ListenerOptions {
    fn default() -> Self {
        Self { passive: true }
    }
}

pub trait TouchSource {
    fn add_listener(
        &self,
        options: ListenerOptions,
        listener: Rc<dyn Fn(&TouchEvent)>,
    ) -> ListenerId;

    /// Removes a previously registered listener. Unknown ids are a no-op,
    /// so removal is idempotent.
    fn remove_listener(&self, id: ListenerId);
}

struct BusListener {
    id: ListenerId,
    options: ListenerOptions,
    callback: Rc<dyn Fn(&TouchEvent)>,
}

#[derive(Default)]
struct BusInner {
    next_id: ListenerId,
    listeners: Vec<BusListener>,
}

/// Reference in-process event source.
///
/// Dispatch walks a snapshot of the listener list and re-checks membership
/// before each call, so listeners may remove themselves (or each other)
/// mid-dispatch without skipping or double-delivering.
#[derive(Default)]
pub struct TouchEventBus {
    inner: RefCell<BusInner>,
}

impl TouchEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Delivers one event to every registered listener in registration
    /// order. Returns whether any non-passive listener suppressed the
    /// default behavior.
    pub fn dispatch(&self, event: &TouchEvent) -> bool {
        let snapshot: Vec<(ListenerId, ListenerOptions, Rc<dyn Fn(&TouchEvent)>)> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|l| (l.id, l.options, l.callback.clone()))
            .collect();

        for (id, options, callback) in snapshot {
            if !self.has_listener(id) {
                continue;
            }
            let prevented_before = event.default_prevented();
            callback(event);
            if options.passive && !prevented_before && event.default_prevented() {
                warn!(
                    "passive listener {id} requested default suppression on {:?}; ignored",
                    event.phase
                );
                event.clear_default_prevented();
            }
        }

        event.default_prevented()
    }

    /// Cancel helper for platform interruptions: delivers a cancel event
    /// carrying the provided contacts as `changed` and no live touches.
    pub fn dispatch_cancel(&self, uptime_ms: u64, cancelled: crate::event::TouchList) -> bool {
        let event = TouchEvent::new(
            TouchPhase::Cancel,
            uptime_ms,
            crate::event::TouchList::new(),
            cancelled,
        );
        self.dispatch(&event)
    }

    fn has_listener(&self, id: ListenerId) -> bool {
        self.inner.borrow().listeners.iter().any(|l| l.id == id)
    }
}

impl TouchSource for TouchEventBus {
    fn add_listener(
        &self,
        options: ListenerOptions,
        listener: Rc<dyn Fn(&TouchEvent)>,
    ) -> ListenerId {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.listeners.push(BusListener {
            id,
            options,
            callback: listener,
        });
        id
    }

    fn remove_listener(&self, id: ListenerId) {
        self.inner.borrow_mut().listeners.retain(|l| l.id != id);
    }
}
