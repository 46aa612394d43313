//! Handler registration for classified gestures and raw pass-throughs.
//!
//! Every slot is optional; unset handlers are simply not invoked. Each
//! callback receives the raw event that triggered it alongside the typed
//! payload, so hosts can still reach platform details (timestamps, live
//! contact lists) when they need them.

use std::rc::Rc;

use smallvec::SmallVec;

use tactus_core::{Point, TouchEvent, TouchPhase};

use crate::gesture::{
    ContinuousGesture, DiscreteGesture, DragMotion, Gesture, PinchPayload, PositionPayload,
    PressPayload,
};

/// Contact summary delivered to the raw pass-through handlers.
#[derive(Clone, Debug, PartialEq)]
pub struct RawTouchInfo {
    /// Contacts still down after the event.
    pub touch_count: usize,
    /// Live positions for start/move; release positions for end.
    pub positions: SmallVec<[Point; 2]>,
}

impl RawTouchInfo {
    pub(crate) fn for_event(event: &TouchEvent) -> Self {
        let list = match event.phase {
            TouchPhase::End | TouchPhase::Cancel => &event.changed,
            _ => &event.touches,
        };
        Self {
            touch_count: event.touch_count(),
            positions: list.iter().map(|t| t.position).collect(),
        }
    }
}

type RawHandler = Rc<dyn Fn(&TouchEvent, &RawTouchInfo)>;
type PositionHandler = Rc<dyn Fn(&TouchEvent, &PositionPayload)>;
type PressHandler = Rc<dyn Fn(&TouchEvent, &PressPayload)>;
type MotionHandler = Rc<dyn Fn(&TouchEvent, &DragMotion)>;
type PinchHandler = Rc<dyn Fn(&TouchEvent, &PinchPayload)>;
type GestureHandler = Rc<dyn Fn(&TouchEvent, &Gesture)>;

#[derive(Clone, Default)]
pub struct GestureHandlers {
    touch_start: Option<RawHandler>,
    touch_move: Option<RawHandler>,
    touch_end: Option<RawHandler>,
    tap: Option<PositionHandler>,
    double_tap: Option<PositionHandler>,
    long_press: Option<PressHandler>,
    drag: Option<MotionHandler>,
    pinch_zoom: Option<PinchHandler>,
    two_finger_drag: Option<MotionHandler>,
    two_finger_tap: Option<PositionHandler>,
    /// Catch-all invoked for every classified gesture, before the per-kind
    /// handler.
    gesture: Option<GestureHandler>,
}

impl GestureHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_touch_start(mut self, f: impl Fn(&TouchEvent, &RawTouchInfo) + 'static) -> Self {
        self.touch_start = Some(Rc::new(f));
        self
    }

    pub fn on_touch_move(mut self, f: impl Fn(&TouchEvent, &RawTouchInfo) + 'static) -> Self {
        self.touch_move = Some(Rc::new(f));
        self
    }

    pub fn on_touch_end(mut self, f: impl Fn(&TouchEvent, &RawTouchInfo) + 'static) -> Self {
        self.touch_end = Some(Rc::new(f));
        self
    }

    pub fn on_tap(mut self, f: impl Fn(&TouchEvent, &PositionPayload) + 'static) -> Self {
        self.tap = Some(Rc::new(f));
        self
    }

    pub fn on_double_tap(mut self, f: impl Fn(&TouchEvent, &PositionPayload) + 'static) -> Self {
        self.double_tap = Some(Rc::new(f));
        self
    }

    pub fn on_long_press(mut self, f: impl Fn(&TouchEvent, &PressPayload) + 'static) -> Self {
        self.long_press = Some(Rc::new(f));
        self
    }

    pub fn on_drag(mut self, f: impl Fn(&TouchEvent, &DragMotion) + 'static) -> Self {
        self.drag = Some(Rc::new(f));
        self
    }

    pub fn on_pinch_zoom(mut self, f: impl Fn(&TouchEvent, &PinchPayload) + 'static) -> Self {
        self.pinch_zoom = Some(Rc::new(f));
        self
    }

    pub fn on_two_finger_drag(mut self, f: impl Fn(&TouchEvent, &DragMotion) + 'static) -> Self {
        self.two_finger_drag = Some(Rc::new(f));
        self
    }

    pub fn on_two_finger_tap(
        mut self,
        f: impl Fn(&TouchEvent, &PositionPayload) + 'static,
    ) -> Self {
        self.two_finger_tap = Some(Rc::new(f));
        self
    }

    pub fn on_gesture(mut self, f: impl Fn(&TouchEvent, &Gesture) + 'static) -> Self {
        self.gesture = Some(Rc::new(f));
        self
    }

    pub(crate) fn dispatch_raw(&self, event: &TouchEvent) {
        let slot = match event.phase {
            TouchPhase::Start => self.touch_start.as_ref(),
            TouchPhase::Move => self.touch_move.as_ref(),
            TouchPhase::End => self.touch_end.as_ref(),
            TouchPhase::Cancel => None,
        };
        if let Some(handler) = slot {
            handler(event, &RawTouchInfo::for_event(event));
        }
    }

    pub(crate) fn dispatch(&self, event: &TouchEvent, gesture: &Gesture) {
        if let Some(handler) = &self.gesture {
            handler(event, gesture);
        }
        match gesture {
            Gesture::Discrete(DiscreteGesture::Tap(payload)) => {
                if let Some(handler) = &self.tap {
                    handler(event, payload);
                }
            }
            Gesture::Discrete(DiscreteGesture::DoubleTap(payload)) => {
                if let Some(handler) = &self.double_tap {
                    handler(event, payload);
                }
            }
            Gesture::Discrete(DiscreteGesture::LongPress(payload)) => {
                if let Some(handler) = &self.long_press {
                    handler(event, payload);
                }
            }
            Gesture::Discrete(DiscreteGesture::TwoFingerTap(payload)) => {
                if let Some(handler) = &self.two_finger_tap {
                    handler(event, payload);
                }
            }
            Gesture::Continuous(ContinuousGesture::Drag(motion)) => {
                if let Some(handler) = &self.drag {
                    handler(event, motion);
                }
            }
            Gesture::Continuous(ContinuousGesture::TwoFingerDrag(motion)) => {
                if let Some(handler) = &self.two_finger_drag {
                    handler(event, motion);
                }
            }
            Gesture::Continuous(ContinuousGesture::PinchZoom(payload)) => {
                if let Some(handler) = &self.pinch_zoom {
                    handler(event, payload);
                }
            }
        }
    }
}

impl std::fmt::Debug for GestureHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GestureHandlers")
            .field("touch_start", &self.touch_start.is_some())
            .field("touch_move", &self.touch_move.is_some())
            .field("touch_end", &self.touch_end.is_some())
            .field("tap", &self.tap.is_some())
            .field("double_tap", &self.double_tap.is_some())
            .field("long_press", &self.long_press.is_some())
            .field("drag", &self.drag.is_some())
            .field("pinch_zoom", &self.pinch_zoom.is_some())
            .field("two_finger_drag", &self.two_finger_drag.is_some())
            .field("two_finger_tap", &self.two_finger_tap.is_some())
            .field("gesture", &self.gesture.is_some())
            .finish()
    }
}
