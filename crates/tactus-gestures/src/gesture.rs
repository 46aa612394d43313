//! Gesture taxonomy and candidate-set tracking.
//!
//! The one-shot / continuous split is structural: [`Gesture`] is a tagged
//! union so call sites can tell a streamed drag frame from a classified
//! tap without inspecting emission frequency.

use tactus_core::Point;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    Tap = 0,
    DoubleTap = 1,
    LongPress = 2,
    Drag = 3,
    PinchZoom = 4,
    TwoFingerDrag = 5,
    TwoFingerTap = 6,
}

impl GestureKind {
    const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// Streamed once per move event, as opposed to classified once at
    /// release.
    pub const fn is_continuous(self) -> bool {
        matches!(
            self,
            GestureKind::Drag | GestureKind::PinchZoom | GestureKind::TwoFingerDrag
        )
    }
}

/// Gesture kinds still possible for the current contact session.
///
/// Monotonically shrinking while contacts stay down: movement beyond the
/// tap threshold revokes the stationary kinds and nothing re-adds them
/// until the session ends. Cleared when the last contact lifts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CandidateSet(u8);

impl CandidateSet {
    pub const EMPTY: Self = Self(0);

    pub fn new() -> Self {
        Self::EMPTY
    }

    pub fn insert(&mut self, kind: GestureKind) {
        self.0 |= kind.bit();
    }

    pub fn remove(&mut self, kind: GestureKind) {
        self.0 &= !kind.bit();
    }

    pub fn contains(&self, kind: GestureKind) -> bool {
        (self.0 & kind.bit()) != 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// Payload for tap, double-tap, and two-finger-tap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionPayload {
    pub position: Point,
}

/// Payload for long-press: where it released and how long it was held.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PressPayload {
    pub position: Point,
    pub duration_ms: u64,
}

/// Payload for drag and two-finger-drag frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragMotion {
    pub start: Point,
    pub current: Point,
    /// `current - start`.
    pub delta: Point,
}

impl DragMotion {
    pub fn new(start: Point, current: Point) -> Self {
        Self {
            start,
            current,
            delta: current - start,
        }
    }
}

/// Payload for pinch-zoom frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchPayload {
    /// Current finger separation over initial separation.
    pub scale: f32,
    /// Midpoint of the two live contact positions.
    pub center: Point,
}

/// One-shot gestures, classified at contact release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DiscreteGesture {
    Tap(PositionPayload),
    DoubleTap(PositionPayload),
    LongPress(PressPayload),
    TwoFingerTap(PositionPayload),
}

/// Continuous gestures, streamed once per move event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ContinuousGesture {
    Drag(DragMotion),
    TwoFingerDrag(DragMotion),
    PinchZoom(PinchPayload),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    Discrete(DiscreteGesture),
    Continuous(ContinuousGesture),
}

impl Gesture {
    pub fn kind(&self) -> GestureKind {
        match self {
            Gesture::Discrete(DiscreteGesture::Tap(_)) => GestureKind::Tap,
            Gesture::Discrete(DiscreteGesture::DoubleTap(_)) => GestureKind::DoubleTap,
            Gesture::Discrete(DiscreteGesture::LongPress(_)) => GestureKind::LongPress,
            Gesture::Discrete(DiscreteGesture::TwoFingerTap(_)) => GestureKind::TwoFingerTap,
            Gesture::Continuous(ContinuousGesture::Drag(_)) => GestureKind::Drag,
            Gesture::Continuous(ContinuousGesture::TwoFingerDrag(_)) => GestureKind::TwoFingerDrag,
            Gesture::Continuous(ContinuousGesture::PinchZoom(_)) => GestureKind::PinchZoom,
        }
    }

    pub fn is_continuous(&self) -> bool {
        matches!(self, Gesture::Continuous(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_set_inserts_and_revokes() {
        let mut set = CandidateSet::new();
        set.insert(GestureKind::Tap);
        set.insert(GestureKind::LongPress);
        set.insert(GestureKind::Drag);
        assert!(set.contains(GestureKind::Tap));

        set.remove(GestureKind::Tap);
        set.remove(GestureKind::LongPress);
        assert!(!set.contains(GestureKind::Tap));
        assert!(!set.contains(GestureKind::LongPress));
        assert!(set.contains(GestureKind::Drag));

        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn kind_matches_continuity_axis() {
        let drag = Gesture::Continuous(ContinuousGesture::Drag(DragMotion::new(
            Point::ZERO,
            Point::new(10.0, 0.0),
        )));
        assert!(drag.is_continuous());
        assert!(drag.kind().is_continuous());

        let tap = Gesture::Discrete(DiscreteGesture::Tap(PositionPayload {
            position: Point::ZERO,
        }));
        assert!(!tap.is_continuous());
        assert!(!tap.kind().is_continuous());
    }
}
