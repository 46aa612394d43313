//! Tap and long-press bindings for momentary controls (record button,
//! transport buttons).

use std::rc::Rc;

use log::debug;

use tactus_core::TouchSource;
use tactus_gestures::{attach, AttachedGestures, GestureConfig, GestureHandlers};

/// Host actions for a button surface.
#[derive(Clone, Default)]
pub struct ButtonActions {
    press: Option<Rc<dyn Fn()>>,
    long_press: Option<Rc<dyn Fn(u64)>>,
}

impl ButtonActions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tap anywhere on the button surface.
    pub fn on_press(mut self, f: impl Fn() + 'static) -> Self {
        self.press = Some(Rc::new(f));
        self
    }

    /// Long-press; receives the hold duration for hold-to-arm style
    /// controls.
    pub fn on_long_press(mut self, f: impl Fn(u64) + 'static) -> Self {
        self.long_press = Some(Rc::new(f));
        self
    }
}

/// Attaches a recognizer to a button's touch surface.
pub fn bind_button_gestures<S>(
    source: &Rc<S>,
    actions: ButtonActions,
    config: GestureConfig,
) -> AttachedGestures
where
    S: TouchSource + 'static,
{
    debug!("binding button gestures");

    let mut handlers = GestureHandlers::new();
    if let Some(press) = actions.press {
        handlers = handlers.on_tap(move |_, _| press());
    }
    if let Some(long_press) = actions.long_press {
        handlers = handlers.on_long_press(move |_, payload| long_press(payload.duration_ms));
    }

    attach(source, config, handlers)
}
