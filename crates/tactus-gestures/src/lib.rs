//! Multi-touch gesture classification.
//!
//! Consumes a raw stream of contact events (start/move/end/cancel, each
//! carrying the contacts currently down plus the contacts that changed)
//! and delivers classified gestures to registered handlers: one-shot
//! gestures (tap, double-tap, long-press, two-finger-tap) fire once at
//! release, continuous gestures (drag, pinch-zoom, two-finger-drag) stream
//! once per move event while their contacts stay down.
//!
//! All state is owned by the handle returned from [`attach`], so multiple
//! attachments, to the same or different sources, are fully independent.

pub mod attach;
pub mod config;
pub mod device;
pub mod gesture;
pub mod handlers;
mod recognizer;

pub use attach::{attach, AttachedGestures};
pub use config::GestureConfig;
pub use device::{DeviceCapabilities, DeviceClass, Orientation, StaticCapabilities};
pub use gesture::{
    ContinuousGesture, DiscreteGesture, DragMotion, Gesture, GestureKind, PinchPayload,
    PositionPayload, PressPayload,
};
pub use handlers::{GestureHandlers, RawTouchInfo};

pub mod prelude {
    pub use crate::attach::{attach, AttachedGestures};
    pub use crate::config::GestureConfig;
    pub use crate::gesture::{ContinuousGesture, DiscreteGesture, Gesture, GestureKind};
    pub use crate::handlers::GestureHandlers;
}
