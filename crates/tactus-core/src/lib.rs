//! Shared building blocks for the tactus gesture toolkit: geometric
//! primitives, the touch event model, listener registration, and a
//! wasm-safe monotonic clock.

pub mod clock;
pub mod event;
pub mod geometry;
pub mod source;

pub use clock::TouchClock;
pub use event::{TouchEvent, TouchId, TouchList, TouchPhase, TouchPoint};
pub use geometry::{Point, Rect, Size};
pub use source::{ListenerId, ListenerOptions, TouchEventBus, TouchSource};

pub mod prelude {
    pub use crate::event::{TouchEvent, TouchId, TouchList, TouchPhase, TouchPoint};
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::source::{ListenerId, ListenerOptions, TouchSource};
}
