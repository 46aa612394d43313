//! Attachment lifecycle: wiring a recognizer to a [`TouchSource`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::debug;

use tactus_core::{ListenerId, ListenerOptions, TouchSource};

use crate::config::GestureConfig;
use crate::handlers::GestureHandlers;
use crate::recognizer::Recognizer;

struct AttachState {
    detached: Cell<bool>,
    recognizer: RefCell<Recognizer>,
}

/// Handle returned by [`attach`]. Dropping it detaches.
pub struct AttachedGestures {
    source: Rc<dyn TouchSource>,
    listener: ListenerId,
    state: Rc<AttachState>,
}

/// Begins recognizing gestures on `source`.
///
/// Registers a single non-passive listener; the recognizer suppresses the
/// platform's default gesture behavior on every start and move event it
/// observes. All recognizer state is owned by the returned handle, so
/// attachments never share tap timers or candidate sets.
pub fn attach<S>(source: &Rc<S>, config: GestureConfig, handlers: GestureHandlers) -> AttachedGestures
where
    S: TouchSource + 'static,
{
    let state = Rc::new(AttachState {
        detached: Cell::new(false),
        recognizer: RefCell::new(Recognizer::new(config, handlers)),
    });

    let listener_state = state.clone();
    let listener = source.add_listener(
        ListenerOptions::NON_PASSIVE,
        Rc::new(move |event| {
            if listener_state.detached.get() {
                return;
            }
            // Re-entrancy not supported: a handler that synchronously
            // feeds events back into the same source is skipped.
            if let Ok(mut recognizer) = listener_state.recognizer.try_borrow_mut() {
                recognizer.handle(event);
            }
            // A handler may have detached mid-dispatch; finish the
            // cleanup it could not do while the recognizer was borrowed.
            if listener_state.detached.get() {
                if let Ok(mut recognizer) = listener_state.recognizer.try_borrow_mut() {
                    recognizer.reset();
                }
            }
        }),
    );

    debug!("gesture recognizer attached (listener {listener})");
    AttachedGestures {
        source: source.clone() as Rc<dyn TouchSource>,
        listener,
        state,
    }
}

impl AttachedGestures {
    /// Stops recognition and removes the listener. Idempotent, and safe to
    /// call from within a gesture handler: no handler runs after this
    /// returns, even for contacts that started before it.
    pub fn detach(&self) {
        if self.state.detached.replace(true) {
            return;
        }
        self.source.remove_listener(self.listener);
        // Mid-dispatch the recognizer is already borrowed; the listener
        // closure resets it right after the current event.
        if let Ok(mut recognizer) = self.state.recognizer.try_borrow_mut() {
            recognizer.reset();
        }
        debug!("gesture recognizer detached (listener {})", self.listener);
    }

    pub fn is_detached(&self) -> bool {
        self.state.detached.get()
    }
}

impl Drop for AttachedGestures {
    fn drop(&mut self) {
        self.detach();
    }
}
