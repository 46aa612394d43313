//! Contact tracking and gesture classification.
//!
//! One `Recognizer` instance per attachment; it never outlives its handle
//! and shares nothing with other attachments. Processing is synchronous
//! inside the source callback and holds no timers: every duration is a
//! difference between event timestamps.

use log::{debug, trace};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use tactus_core::{Point, TouchEvent, TouchId, TouchPhase};

use crate::config::{GestureConfig, TWO_FINGER_RELEASE_SKEW_MS};
use crate::gesture::{
    CandidateSet, ContinuousGesture, DiscreteGesture, DragMotion, Gesture, GestureKind,
    PinchPayload, PositionPayload, PressPayload,
};
use crate::handlers::GestureHandlers;

/// One active contact, owned exclusively by the recognizer's table.
struct Contact {
    start_position: Point,
    current_position: Point,
    start_time_ms: u64,
}

/// A contact that lifted in the current end event, captured before the
/// table entry is dropped so multi-finger resolution can still see it.
struct EndedContact {
    duration_ms: u64,
    position: Point,
}

pub(crate) struct Recognizer {
    config: GestureConfig,
    handlers: GestureHandlers,
    contacts: FxHashMap<TouchId, Contact>,
    candidates: CandidateSet,
    /// Timestamp of the last completed single tap; 0 means none. Reset to
    /// 0 when a double-tap fires so a third tap starts a fresh sequence.
    last_tap_ms: u64,
    /// Latches once finger separation has changed enough to count as a
    /// pinch; cleared when the session ends.
    pinch_engaged: bool,
}

impl Recognizer {
    pub(crate) fn new(config: GestureConfig, handlers: GestureHandlers) -> Self {
        Self {
            config,
            handlers,
            contacts: FxHashMap::default(),
            candidates: CandidateSet::new(),
            last_tap_ms: 0,
            pinch_engaged: false,
        }
    }

    pub(crate) fn handle(&mut self, event: &TouchEvent) {
        match event.phase {
            TouchPhase::Start => self.on_start(event),
            TouchPhase::Move => self.on_move(event),
            TouchPhase::End => self.on_end(event),
            TouchPhase::Cancel => self.on_cancel(event),
        }
    }

    /// Drops all session state. Called on detach; the last-tap record goes
    /// too, since the attachment is over.
    pub(crate) fn reset(&mut self) {
        self.contacts.clear();
        self.candidates.clear();
        self.last_tap_ms = 0;
        self.pinch_engaged = false;
    }

    fn on_start(&mut self, event: &TouchEvent) {
        event.prevent_default();
        let now = event.uptime_ms;

        for touch in &event.changed {
            self.contacts.entry(touch.id).or_insert(Contact {
                start_position: touch.position,
                current_position: touch.position,
                start_time_ms: now,
            });
        }

        // The candidate set is declared per contact count: a second finger
        // landing replaces the single-finger candidacies, so a quick
        // two-finger release cannot double-classify as tap plus
        // two-finger-tap. Beyond two contacts nothing is declared.
        match self.contacts.len() {
            1 => {
                self.candidates.clear();
                self.candidates.insert(GestureKind::Tap);
                self.candidates.insert(GestureKind::LongPress);
                self.candidates.insert(GestureKind::Drag);
            }
            2 => {
                self.candidates.clear();
                self.candidates.insert(GestureKind::TwoFingerTap);
                self.candidates.insert(GestureKind::PinchZoom);
                self.candidates.insert(GestureKind::TwoFingerDrag);
                self.pinch_engaged = false;
            }
            _ => {}
        }

        trace!(
            "touch start: {} contact(s), candidates {:?}",
            self.contacts.len(),
            self.candidates
        );
        self.handlers.dispatch_raw(event);
    }

    fn on_move(&mut self, event: &TouchEvent) {
        event.prevent_default();

        for touch in &event.touches {
            // Contacts we never saw start are ignored, not rejected.
            let Some(contact) = self.contacts.get_mut(&touch.id) else {
                continue;
            };
            contact.current_position = touch.position;
            if contact.start_position.distance_to(touch.position) > self.config.tap_move_threshold_px
            {
                self.candidates.remove(GestureKind::Tap);
                self.candidates.remove(GestureKind::LongPress);
                self.candidates.remove(GestureKind::TwoFingerTap);
            }
        }

        match event.touches.len() {
            1 if self.candidates.contains(GestureKind::Drag) => {
                if let Some(contact) = self.contacts.get(&event.touches[0].id) {
                    let motion =
                        DragMotion::new(contact.start_position, contact.current_position);
                    self.emit(event, Gesture::Continuous(ContinuousGesture::Drag(motion)));
                }
            }
            2 => self.on_two_finger_move(event),
            _ => {}
        }

        self.handlers.dispatch_raw(event);
    }

    fn on_two_finger_move(&mut self, event: &TouchEvent) {
        let (a, b) = (&event.touches[0], &event.touches[1]);
        let (Some(ca), Some(cb)) = (self.contacts.get(&a.id), self.contacts.get(&b.id)) else {
            return;
        };
        let start_a = ca.start_position;
        let start_b = cb.start_position;

        if self.candidates.contains(GestureKind::PinchZoom) {
            let initial = start_a.distance_to(start_b);
            let current = a.position.distance_to(b.position);
            // A zero base means the contacts started at the same point;
            // the ratio is undefined, so nothing is emitted.
            if initial > 0.0 {
                if !self.pinch_engaged
                    && (current - initial).abs() >= self.config.pinch_spread_threshold_px
                {
                    self.pinch_engaged = true;
                    trace!("pinch engaged: spread changed {:.1}px", current - initial);
                }
                if self.pinch_engaged {
                    let payload = PinchPayload {
                        scale: current / initial,
                        center: a.position.midpoint(b.position),
                    };
                    self.emit(
                        event,
                        Gesture::Continuous(ContinuousGesture::PinchZoom(payload)),
                    );
                }
            }
        }

        if self.candidates.contains(GestureKind::TwoFingerDrag) {
            let start_center = start_a.midpoint(start_b);
            let current_center = a.position.midpoint(b.position);
            let motion = DragMotion::new(start_center, current_center);
            self.emit(
                event,
                Gesture::Continuous(ContinuousGesture::TwoFingerDrag(motion)),
            );
        }
    }

    fn on_end(&mut self, event: &TouchEvent) {
        let now = event.uptime_ms;
        let mut ended: SmallVec<[EndedContact; 2]> = SmallVec::new();

        for touch in &event.changed {
            let Some(contact) = self.contacts.remove(&touch.id) else {
                continue;
            };
            let duration_ms = now.saturating_sub(contact.start_time_ms);
            let distance = contact.start_position.distance_to(touch.position);
            ended.push(EndedContact {
                duration_ms,
                position: touch.position,
            });

            self.resolve_tap(event, now, duration_ms, distance, touch.position);
            self.resolve_long_press(event, duration_ms, distance, touch.position);
        }

        self.resolve_two_finger_tap(event, &ended);

        if self.contacts.is_empty() {
            self.candidates.clear();
            self.pinch_engaged = false;
        }

        self.handlers.dispatch_raw(event);
    }

    fn resolve_tap(
        &mut self,
        event: &TouchEvent,
        now: u64,
        duration_ms: u64,
        distance: f32,
        position: Point,
    ) {
        if !self.candidates.contains(GestureKind::Tap)
            || distance >= self.config.tap_move_threshold_px
            || duration_ms >= self.config.double_tap_threshold_ms
        {
            return;
        }

        let gap = now.saturating_sub(self.last_tap_ms);
        if self.last_tap_ms != 0 && gap <= self.config.double_tap_threshold_ms {
            self.last_tap_ms = 0;
            self.emit(
                event,
                Gesture::Discrete(DiscreteGesture::DoubleTap(PositionPayload { position })),
            );
        } else {
            self.last_tap_ms = now;
            self.emit(
                event,
                Gesture::Discrete(DiscreteGesture::Tap(PositionPayload { position })),
            );
        }
    }

    fn resolve_long_press(
        &mut self,
        event: &TouchEvent,
        duration_ms: u64,
        distance: f32,
        position: Point,
    ) {
        if self.candidates.contains(GestureKind::LongPress)
            && distance < self.config.tap_move_threshold_px
            && duration_ms >= self.config.long_press_threshold_ms
        {
            self.emit(
                event,
                Gesture::Discrete(DiscreteGesture::LongPress(PressPayload {
                    position,
                    duration_ms,
                })),
            );
        }
    }

    fn resolve_two_finger_tap(&mut self, event: &TouchEvent, ended: &[EndedContact]) {
        if !event.touches.is_empty()
            || ended.len() != 2
            || !self.candidates.contains(GestureKind::TwoFingerTap)
        {
            return;
        }
        let (a, b) = (&ended[0], &ended[1]);
        let within_threshold = a.duration_ms < self.config.two_finger_tap_threshold_ms
            && b.duration_ms < self.config.two_finger_tap_threshold_ms;
        let simultaneous = a.duration_ms.abs_diff(b.duration_ms) < TWO_FINGER_RELEASE_SKEW_MS;
        if within_threshold && simultaneous {
            self.emit(
                event,
                Gesture::Discrete(DiscreteGesture::TwoFingerTap(PositionPayload {
                    position: a.position.midpoint(b.position),
                })),
            );
        }
    }

    /// Platform interruption: nothing that was in flight can classify.
    fn on_cancel(&mut self, _event: &TouchEvent) {
        debug!(
            "touch cancel: dropping {} contact(s) unclassified",
            self.contacts.len()
        );
        self.contacts.clear();
        self.candidates.clear();
        self.pinch_engaged = false;
    }

    fn emit(&self, event: &TouchEvent, gesture: Gesture) {
        trace!("emit {:?}", gesture.kind());
        self.handlers.dispatch(event, &gesture);
    }
}
