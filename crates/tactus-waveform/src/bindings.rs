//! Maps classified gestures onto waveform viewport commands.

use std::rc::Rc;

use log::debug;

use tactus_core::{Point, Rect, TouchSource};
use tactus_gestures::{attach, AttachedGestures, GestureConfig, GestureHandlers};

/// The waveform's on-screen footprint, used to normalize gesture
/// coordinates into playback positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveformRegion {
    rect: Rect,
}

impl WaveformRegion {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Normalized `[0, 1]` position of a viewport x inside the waveform.
    /// Degenerate regions map everything to 0.
    pub fn normalized_x(&self, x: f32) -> f32 {
        if self.rect.width <= 0.0 {
            return 0.0;
        }
        ((x - self.rect.x) / self.rect.width).clamp(0.0, 1.0)
    }

    fn position(&self, point: Point) -> WaveformPosition {
        WaveformPosition {
            x: point.x,
            y: point.y,
            normalized: self.normalized_x(point.x),
        }
    }
}

/// A gesture coordinate with its normalized playback position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveformPosition {
    pub x: f32,
    pub y: f32,
    /// `[0, 1]` along the waveform's width.
    pub normalized: f32,
}

/// Scroll command from a one-finger drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveformScroll {
    pub start: WaveformPosition,
    pub current: WaveformPosition,
    pub delta: Point,
}

/// Zoom command from a pinch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveformZoom {
    pub scale: f32,
    pub center: WaveformPosition,
}

/// Host actions for waveform gestures. All optional; unset actions mean
/// the gesture is recognized but ignored.
#[derive(Clone, Default)]
pub struct WaveformActions {
    seek: Option<Rc<dyn Fn(WaveformPosition)>>,
    begin_loop: Option<Rc<dyn Fn(WaveformPosition)>>,
    context_menu: Option<Rc<dyn Fn(WaveformPosition, u64)>>,
    scroll: Option<Rc<dyn Fn(WaveformScroll)>>,
    zoom: Option<Rc<dyn Fn(WaveformZoom)>>,
    toggle_playback: Option<Rc<dyn Fn(WaveformPosition)>>,
}

impl WaveformActions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tap: position the playhead.
    pub fn on_seek(mut self, f: impl Fn(WaveformPosition) + 'static) -> Self {
        self.seek = Some(Rc::new(f));
        self
    }

    /// Double-tap: start a loop region at the position.
    pub fn on_begin_loop(mut self, f: impl Fn(WaveformPosition) + 'static) -> Self {
        self.begin_loop = Some(Rc::new(f));
        self
    }

    /// Long-press: open a context menu; receives the hold duration.
    pub fn on_context_menu(mut self, f: impl Fn(WaveformPosition, u64) + 'static) -> Self {
        self.context_menu = Some(Rc::new(f));
        self
    }

    /// Drag: scroll the visible window.
    pub fn on_scroll(mut self, f: impl Fn(WaveformScroll) + 'static) -> Self {
        self.scroll = Some(Rc::new(f));
        self
    }

    /// Pinch: zoom about the gesture center.
    pub fn on_zoom(mut self, f: impl Fn(WaveformZoom) + 'static) -> Self {
        self.zoom = Some(Rc::new(f));
        self
    }

    /// Two-finger tap: toggle playback.
    pub fn on_toggle_playback(mut self, f: impl Fn(WaveformPosition) + 'static) -> Self {
        self.toggle_playback = Some(Rc::new(f));
        self
    }
}

/// Attaches a recognizer to `source` and routes its gestures into
/// waveform commands normalized against `region`.
pub fn bind_waveform_gestures<S>(
    source: &Rc<S>,
    region: WaveformRegion,
    actions: WaveformActions,
    config: GestureConfig,
) -> AttachedGestures
where
    S: TouchSource + 'static,
{
    debug!("binding waveform gestures over {:?}", region.rect());

    let mut handlers = GestureHandlers::new();

    if let Some(seek) = actions.seek {
        handlers = handlers.on_tap(move |_, payload| seek(region.position(payload.position)));
    }
    if let Some(begin_loop) = actions.begin_loop {
        handlers = handlers
            .on_double_tap(move |_, payload| begin_loop(region.position(payload.position)));
    }
    if let Some(context_menu) = actions.context_menu {
        handlers = handlers.on_long_press(move |_, payload| {
            context_menu(region.position(payload.position), payload.duration_ms)
        });
    }
    if let Some(scroll) = actions.scroll {
        handlers = handlers.on_drag(move |_, motion| {
            scroll(WaveformScroll {
                start: region.position(motion.start),
                current: region.position(motion.current),
                delta: motion.delta,
            })
        });
    }
    if let Some(zoom) = actions.zoom {
        handlers = handlers.on_pinch_zoom(move |_, payload| {
            zoom(WaveformZoom {
                scale: payload.scale,
                center: region.position(payload.center),
            })
        });
    }
    if let Some(toggle_playback) = actions.toggle_playback {
        handlers = handlers
            .on_two_finger_tap(move |_, payload| toggle_playback(region.position(payload.position)));
    }

    attach(source, config, handlers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_clamps_to_unit_range() {
        let region = WaveformRegion::new(Rect::new(100.0, 0.0, 800.0, 200.0));
        assert_eq!(region.normalized_x(100.0), 0.0);
        assert_eq!(region.normalized_x(500.0), 0.5);
        assert_eq!(region.normalized_x(900.0), 1.0);
        assert_eq!(region.normalized_x(50.0), 0.0);
        assert_eq!(region.normalized_x(1200.0), 1.0);
    }

    #[test]
    fn degenerate_region_maps_to_zero() {
        let region = WaveformRegion::new(Rect::new(0.0, 0.0, 0.0, 200.0));
        assert_eq!(region.normalized_x(42.0), 0.0);
    }
}
