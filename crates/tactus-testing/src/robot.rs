//! Robot-style touch input simulation.
//!
//! `TouchRobot` owns a [`TouchEventBus`] and a manually advanced clock, so
//! tests control exactly when contacts land, move, and lift and how much
//! time passes in between. Events are shaped like the platform's: every
//! dispatch carries the contacts still down plus the contacts that changed.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use smallvec::smallvec;

use tactus_core::{Point, TouchEvent, TouchEventBus, TouchId, TouchList, TouchPhase, TouchPoint};

pub struct TouchRobot {
    bus: Rc<TouchEventBus>,
    now_ms: Cell<u64>,
    down: RefCell<Vec<TouchPoint>>,
}

impl TouchRobot {
    pub fn new() -> Self {
        Self {
            bus: Rc::new(TouchEventBus::new()),
            // Start past zero so "never" sentinels stay distinguishable.
            now_ms: Cell::new(1_000),
            down: RefCell::new(Vec::new()),
        }
    }

    /// The event source to attach recognizers to.
    pub fn source(&self) -> Rc<TouchEventBus> {
        self.bus.clone()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }

    /// Advances the scripted clock without dispatching anything.
    pub fn advance(&self, ms: u64) {
        self.now_ms.set(self.now_ms.get() + ms);
    }

    /// Lands a new contact. Panics if the id is already down (a test bug).
    pub fn touch_down(&self, id: TouchId, x: f32, y: f32) {
        let point = TouchPoint::new(id, Point::new(x, y));
        {
            let mut down = self.down.borrow_mut();
            assert!(
                down.iter().all(|t| t.id != id),
                "contact {id} is already down"
            );
            down.push(point);
        }
        self.dispatch(TouchPhase::Start, smallvec![point]);
    }

    /// Moves a contact that is currently down.
    pub fn touch_move(&self, id: TouchId, x: f32, y: f32) {
        let point = TouchPoint::new(id, Point::new(x, y));
        {
            let mut down = self.down.borrow_mut();
            let slot = down
                .iter_mut()
                .find(|t| t.id == id)
                .unwrap_or_else(|| panic!("contact {id} is not down"));
            *slot = point;
        }
        self.dispatch(TouchPhase::Move, smallvec![point]);
    }

    /// Lifts a contact at its last known position.
    pub fn touch_up(&self, id: TouchId) {
        let point = self.remove_down(id);
        self.dispatch(TouchPhase::End, smallvec![point]);
    }

    /// Lifts two contacts in a single end event, the shape a simultaneous
    /// two-finger release arrives in.
    pub fn touch_up_together(&self, first: TouchId, second: TouchId) {
        let a = self.remove_down(first);
        let b = self.remove_down(second);
        self.dispatch(TouchPhase::End, smallvec![a, b]);
    }

    /// Platform interruption: cancels every contact currently down.
    pub fn cancel_all(&self) {
        let cancelled: TouchList = self.down.borrow_mut().drain(..).collect();
        self.dispatch(TouchPhase::Cancel, cancelled);
    }

    /// Composite press-hold-release with no movement.
    pub fn tap(&self, id: TouchId, x: f32, y: f32, hold_ms: u64) {
        self.touch_down(id, x, y);
        self.advance(hold_ms);
        self.touch_up(id);
    }

    /// Composite two-finger press-hold-simultaneous-release.
    pub fn two_finger_tap(&self, a: TouchId, b: TouchId, pos_a: (f32, f32), pos_b: (f32, f32), hold_ms: u64) {
        self.touch_down(a, pos_a.0, pos_a.1);
        self.touch_down(b, pos_b.0, pos_b.1);
        self.advance(hold_ms);
        self.touch_up_together(a, b);
    }

    fn remove_down(&self, id: TouchId) -> TouchPoint {
        let mut down = self.down.borrow_mut();
        let index = down
            .iter()
            .position(|t| t.id == id)
            .unwrap_or_else(|| panic!("contact {id} is not down"));
        down.remove(index)
    }

    fn dispatch(&self, phase: TouchPhase, changed: TouchList) {
        let touches: TouchList = self.down.borrow().iter().copied().collect();
        let event = TouchEvent::new(phase, self.now_ms.get(), touches, changed);
        self.bus.dispatch(&event);
    }
}

impl Default for TouchRobot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactus_core::{ListenerOptions, TouchSource};

    #[test]
    fn end_events_exclude_released_contacts_from_touches() {
        let robot = TouchRobot::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        robot.source().add_listener(
            ListenerOptions::default(),
            Rc::new(move |event: &TouchEvent| {
                sink.borrow_mut()
                    .push((event.phase, event.touches.len(), event.changed.len()));
            }),
        );

        robot.touch_down(1, 10.0, 10.0);
        robot.touch_down(2, 50.0, 10.0);
        robot.touch_up(1);
        robot.touch_up(2);

        assert_eq!(
            *seen.borrow(),
            vec![
                (TouchPhase::Start, 1, 1),
                (TouchPhase::Start, 2, 1),
                (TouchPhase::End, 1, 1),
                (TouchPhase::End, 0, 1),
            ]
        );
    }

    #[test]
    fn together_release_is_one_event() {
        let robot = TouchRobot::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        robot.source().add_listener(
            ListenerOptions::default(),
            Rc::new(move |event: &TouchEvent| {
                sink.borrow_mut()
                    .push((event.phase, event.touches.len(), event.changed.len()));
            }),
        );

        robot.two_finger_tap(1, 2, (10.0, 10.0), (60.0, 10.0), 40);
        assert_eq!(seen.borrow().last(), Some(&(TouchPhase::End, 0, 2)));
    }

    #[test]
    fn clock_only_moves_when_advanced() {
        let robot = TouchRobot::new();
        let start = robot.now_ms();
        robot.touch_down(1, 0.0, 0.0);
        assert_eq!(robot.now_ms(), start);
        robot.advance(250);
        assert_eq!(robot.now_ms(), start + 250);
        robot.touch_up(1);
    }
}
