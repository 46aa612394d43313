//! End-to-end classification behavior, driven through a scripted touch
//! source.

use tactus_core::Point;
use tactus_gestures::{
    attach, ContinuousGesture, DiscreteGesture, Gesture, GestureConfig, GestureKind,
};
use tactus_testing::{GestureLog, TouchRobot};

fn recognizer(robot: &TouchRobot) -> (GestureLog, tactus_gestures::AttachedGestures) {
    let log = GestureLog::new();
    let binding = attach(&robot.source(), GestureConfig::default(), log.handlers());
    (log, binding)
}

#[test]
fn short_stationary_release_is_a_single_tap() {
    let robot = TouchRobot::new();
    let (log, _binding) = recognizer(&robot);

    robot.tap(1, 120.0, 80.0, 50);

    let events = log.events();
    assert_eq!(events.len(), 1);
    match events[0] {
        Gesture::Discrete(DiscreteGesture::Tap(payload)) => {
            assert_eq!(payload.position, Point::new(120.0, 80.0));
        }
        other => panic!("expected tap, got {other:?}"),
    }
}

#[test]
fn second_tap_within_threshold_is_a_double_tap() {
    let robot = TouchRobot::new();
    let (log, _binding) = recognizer(&robot);

    robot.tap(1, 100.0, 100.0, 50);
    robot.advance(100);
    robot.tap(2, 100.0, 100.0, 50);

    assert_eq!(log.count_of(GestureKind::Tap), 1);
    assert_eq!(log.count_of(GestureKind::DoubleTap), 1);
}

#[test]
fn third_tap_after_double_tap_starts_fresh() {
    let robot = TouchRobot::new();
    let (log, _binding) = recognizer(&robot);

    robot.tap(1, 100.0, 100.0, 50);
    robot.advance(100);
    robot.tap(2, 100.0, 100.0, 50);
    robot.advance(100);
    // Within threshold of the double-tap, but the tap record was reset.
    robot.tap(3, 100.0, 100.0, 50);

    assert_eq!(log.count_of(GestureKind::DoubleTap), 1);
    assert_eq!(log.count_of(GestureKind::Tap), 2);
}

#[test]
fn slow_second_tap_is_another_single_tap() {
    let robot = TouchRobot::new();
    let (log, _binding) = recognizer(&robot);

    robot.tap(1, 100.0, 100.0, 50);
    robot.advance(400);
    robot.tap(2, 100.0, 100.0, 50);

    assert_eq!(log.count_of(GestureKind::Tap), 2);
    assert_eq!(log.count_of(GestureKind::DoubleTap), 0);
}

#[test]
fn very_first_tap_never_reads_as_double_tap() {
    // A fresh attachment has no previous tap; even immediately after the
    // clock origin the first release must classify as a single tap.
    let robot = TouchRobot::new();
    let (log, _binding) = recognizer(&robot);

    robot.tap(1, 10.0, 10.0, 10);
    assert_eq!(log.count_of(GestureKind::Tap), 1);
    assert_eq!(log.count_of(GestureKind::DoubleTap), 0);
}

#[test]
fn stationary_hold_is_a_long_press_with_duration() {
    let robot = TouchRobot::new();
    let (log, _binding) = recognizer(&robot);

    robot.touch_down(1, 200.0, 50.0);
    robot.advance(750);
    robot.touch_up(1);

    assert_eq!(log.count_of(GestureKind::Tap), 0);
    let events = log.events();
    assert_eq!(events.len(), 1);
    match events[0] {
        Gesture::Discrete(DiscreteGesture::LongPress(payload)) => {
            assert_eq!(payload.duration_ms, 750);
            assert_eq!(payload.position, Point::new(200.0, 50.0));
        }
        other => panic!("expected long press, got {other:?}"),
    }
}

#[test]
fn movement_revokes_stationary_gestures_regardless_of_duration() {
    let robot = TouchRobot::new();
    let (log, _binding) = recognizer(&robot);

    robot.touch_down(1, 100.0, 100.0);
    robot.advance(700);
    robot.touch_move(1, 160.0, 100.0); // 60px, well past the 20px slop
    robot.touch_up(1);

    assert_eq!(log.count_of(GestureKind::Tap), 0);
    assert_eq!(log.count_of(GestureKind::DoubleTap), 0);
    assert_eq!(log.count_of(GestureKind::LongPress), 0);
    // The movement itself streams as drag frames.
    assert!(log.count_of(GestureKind::Drag) > 0);
}

#[test]
fn single_finger_motion_streams_drag_frames() {
    let robot = TouchRobot::new();
    let (log, _binding) = recognizer(&robot);

    robot.touch_down(1, 100.0, 100.0);
    robot.touch_move(1, 130.0, 100.0);
    robot.touch_move(1, 170.0, 110.0);
    robot.touch_up(1);

    let drags: Vec<_> = log
        .events()
        .into_iter()
        .filter_map(|g| match g {
            Gesture::Continuous(ContinuousGesture::Drag(motion)) => Some(motion),
            _ => None,
        })
        .collect();
    assert_eq!(drags.len(), 2);
    assert_eq!(drags[0].start, Point::new(100.0, 100.0));
    assert_eq!(drags[0].delta, Point::new(30.0, 0.0));
    assert_eq!(drags[1].current, Point::new(170.0, 110.0));
    assert_eq!(drags[1].delta, Point::new(70.0, 10.0));
}

#[test]
fn spreading_fingers_stream_pinch_frames_toward_final_scale() {
    let robot = TouchRobot::new();
    let (log, _binding) = recognizer(&robot);

    // Fingers start 100px apart and separate to 200px.
    robot.touch_down(1, 100.0, 100.0);
    robot.touch_down(2, 200.0, 100.0);
    robot.touch_move(1, 80.0, 100.0);
    robot.touch_move(2, 220.0, 100.0);
    robot.touch_move(1, 50.0, 100.0);
    robot.touch_move(2, 250.0, 100.0);
    robot.touch_up_together(1, 2);

    let last = log.last_of(GestureKind::PinchZoom);
    match last {
        Some(Gesture::Continuous(ContinuousGesture::PinchZoom(payload))) => {
            assert!((payload.scale - 2.0).abs() < 1e-4);
            assert_eq!(payload.center, Point::new(150.0, 100.0));
        }
        other => panic!("expected pinch frames, got {other:?}"),
    }
}

#[test]
fn pinch_waits_for_spread_threshold_then_latches() {
    let robot = TouchRobot::new();
    let (log, _binding) = recognizer(&robot);

    robot.touch_down(1, 100.0, 100.0);
    robot.touch_down(2, 200.0, 100.0);
    // 4px spread change: below the 10px gate, no pinch yet.
    robot.touch_move(2, 204.0, 100.0);
    assert_eq!(log.count_of(GestureKind::PinchZoom), 0);
    // 30px spread change opens the gate.
    robot.touch_move(2, 230.0, 100.0);
    assert_eq!(log.count_of(GestureKind::PinchZoom), 1);
    // Latched: even a near-neutral spread keeps streaming.
    robot.touch_move(2, 202.0, 100.0);
    assert_eq!(log.count_of(GestureKind::PinchZoom), 2);
    robot.touch_up_together(1, 2);
}

#[test]
fn coincident_start_points_never_emit_pinch() {
    let robot = TouchRobot::new();
    let (log, _binding) = recognizer(&robot);

    robot.touch_down(1, 100.0, 100.0);
    robot.touch_down(2, 100.0, 100.0); // zero initial separation
    robot.touch_move(2, 300.0, 100.0);
    robot.touch_up_together(1, 2);

    assert_eq!(log.count_of(GestureKind::PinchZoom), 0);
    // The midpoint still moved, so two-finger drag is unaffected.
    assert!(log.count_of(GestureKind::TwoFingerDrag) > 0);
}

#[test]
fn parallel_fingers_stream_two_finger_drag_of_the_midpoint() {
    let robot = TouchRobot::new();
    let (log, _binding) = recognizer(&robot);

    robot.touch_down(1, 100.0, 100.0);
    robot.touch_down(2, 200.0, 100.0);
    robot.touch_move(1, 140.0, 100.0);
    robot.touch_move(2, 240.0, 100.0);
    robot.touch_up_together(1, 2);

    let last = log.last_of(GestureKind::TwoFingerDrag);
    match last {
        Some(Gesture::Continuous(ContinuousGesture::TwoFingerDrag(motion))) => {
            assert_eq!(motion.start, Point::new(150.0, 100.0));
            assert_eq!(motion.current, Point::new(190.0, 100.0));
            assert_eq!(motion.delta, Point::new(40.0, 0.0));
        }
        other => panic!("expected two-finger drag, got {other:?}"),
    }
}

#[test]
fn simultaneous_short_releases_are_a_two_finger_tap() {
    let robot = TouchRobot::new();
    let (log, _binding) = recognizer(&robot);

    robot.two_finger_tap(1, 2, (100.0, 100.0), (200.0, 100.0), 80);

    let events = log.events();
    assert_eq!(events.len(), 1);
    match events[0] {
        Gesture::Discrete(DiscreteGesture::TwoFingerTap(payload)) => {
            assert_eq!(payload.position, Point::new(150.0, 100.0));
        }
        other => panic!("expected two-finger tap, got {other:?}"),
    }
}

#[test]
fn staggered_releases_are_not_a_two_finger_tap() {
    let robot = TouchRobot::new();
    let (log, _binding) = recognizer(&robot);

    robot.touch_down(1, 100.0, 100.0);
    robot.touch_down(2, 200.0, 100.0);
    robot.advance(80);
    robot.touch_up(1);
    robot.advance(50);
    robot.touch_up(2);

    assert_eq!(log.count_of(GestureKind::TwoFingerTap), 0);
}

#[test]
fn slow_two_finger_hold_is_not_a_two_finger_tap() {
    let robot = TouchRobot::new();
    let (log, _binding) = recognizer(&robot);

    robot.two_finger_tap(1, 2, (100.0, 100.0), (200.0, 100.0), 450);
    assert_eq!(log.count_of(GestureKind::TwoFingerTap), 0);
}

#[test]
fn moved_fingers_cannot_two_finger_tap() {
    let robot = TouchRobot::new();
    let (log, _binding) = recognizer(&robot);

    robot.touch_down(1, 100.0, 100.0);
    robot.touch_down(2, 200.0, 100.0);
    robot.touch_move(2, 260.0, 100.0);
    robot.advance(50);
    robot.touch_up_together(1, 2);

    assert_eq!(log.count_of(GestureKind::TwoFingerTap), 0);
}

#[test]
fn cancel_discards_everything_in_flight() {
    let robot = TouchRobot::new();
    let (log, _binding) = recognizer(&robot);

    robot.touch_down(1, 100.0, 100.0);
    robot.advance(50);
    robot.cancel_all();

    assert!(log.is_empty());

    // The recognizer keeps working after the interruption.
    robot.tap(1, 100.0, 100.0, 50);
    assert_eq!(log.count_of(GestureKind::Tap), 1);
}

#[test]
fn three_finger_sessions_are_not_classified() {
    let robot = TouchRobot::new();
    let (log, _binding) = recognizer(&robot);

    robot.touch_down(1, 100.0, 100.0);
    robot.touch_down(2, 200.0, 100.0);
    robot.touch_down(3, 300.0, 100.0);
    robot.touch_move(1, 150.0, 100.0);
    robot.touch_up(3);
    robot.touch_up(2);
    robot.touch_up(1);

    assert_eq!(log.count_of(GestureKind::Drag), 0);
    assert_eq!(log.count_of(GestureKind::PinchZoom), 0);
    assert_eq!(log.count_of(GestureKind::TwoFingerDrag), 0);
}

#[test]
fn second_finger_revokes_single_finger_candidacy() {
    // Once a second finger lands the session is a two-finger session;
    // the survivor holding on alone afterwards classifies as nothing.
    let robot = TouchRobot::new();
    let (log, _binding) = recognizer(&robot);

    robot.touch_down(1, 100.0, 100.0);
    robot.touch_down(2, 200.0, 100.0);
    robot.advance(50);
    robot.touch_up(2);
    robot.advance(650);
    robot.touch_up(1);

    assert_eq!(log.count_of(GestureKind::Tap), 0);
    assert_eq!(log.count_of(GestureKind::LongPress), 0);
}

#[test]
fn custom_thresholds_shift_classification() {
    let robot = TouchRobot::new();
    let log = GestureLog::new();
    let config = GestureConfig::default()
        .with_long_press_threshold_ms(200)
        .with_double_tap_threshold_ms(100);
    let _binding = attach(&robot.source(), config, log.handlers());

    // 250ms hold: too slow for a tap under the tightened double-tap
    // threshold, long enough for the loosened long-press.
    robot.touch_down(1, 50.0, 50.0);
    robot.advance(250);
    robot.touch_up(1);

    assert_eq!(log.count_of(GestureKind::Tap), 0);
    assert_eq!(log.count_of(GestureKind::LongPress), 1);
}

#[test]
fn raw_passthroughs_report_contact_counts() {
    use std::cell::RefCell;
    use std::rc::Rc;
    use tactus_gestures::GestureHandlers;

    let robot = TouchRobot::new();
    let raw = Rc::new(RefCell::new(Vec::new()));
    let (starts, moves, ends) = (raw.clone(), raw.clone(), raw.clone());
    let handlers = GestureHandlers::new()
        .on_touch_start(move |_, info| starts.borrow_mut().push(("start", info.touch_count)))
        .on_touch_move(move |_, info| moves.borrow_mut().push(("move", info.touch_count)))
        .on_touch_end(move |_, info| ends.borrow_mut().push(("end", info.touch_count)));
    let _binding = attach(&robot.source(), GestureConfig::default(), handlers);

    robot.touch_down(1, 10.0, 10.0);
    robot.touch_move(1, 20.0, 10.0);
    robot.touch_up(1);

    assert_eq!(
        *raw.borrow(),
        vec![("start", 1), ("move", 1), ("end", 0)]
    );
}

#[test]
fn recognizer_suppresses_default_on_start_and_move() {
    use tactus_core::{TouchEvent, TouchList, TouchPhase, TouchPoint};

    let robot = TouchRobot::new();
    let (_log, _binding) = recognizer(&robot);

    let start = TouchEvent::new(
        TouchPhase::Start,
        robot.now_ms(),
        TouchList::from_slice(&[TouchPoint::new(9, Point::new(1.0, 1.0))]),
        TouchList::from_slice(&[TouchPoint::new(9, Point::new(1.0, 1.0))]),
    );
    assert!(robot.source().dispatch(&start));

    let end = TouchEvent::new(
        TouchPhase::End,
        robot.now_ms(),
        TouchList::new(),
        TouchList::from_slice(&[TouchPoint::new(9, Point::new(1.0, 1.0))]),
    );
    assert!(!robot.source().dispatch(&end));
}
