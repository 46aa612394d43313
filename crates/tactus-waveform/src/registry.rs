//! Keeps attachment handles alive and detaches them together.

use log::debug;

use tactus_gestures::AttachedGestures;

/// Owns a collection of gesture attachments so a host can tear down all
/// of its touch handling in one call (e.g. when the looper view unmounts).
#[derive(Default)]
pub struct BindingSet {
    bindings: Vec<AttachedGestures>,
}

impl BindingSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, binding: AttachedGestures) {
        self.bindings.push(binding);
    }

    /// Detaches and drops every held binding. Idempotent.
    pub fn detach_all(&mut self) {
        if !self.bindings.is_empty() {
            debug!("detaching {} gesture binding(s)", self.bindings.len());
        }
        for binding in self.bindings.drain(..) {
            binding.detach();
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
