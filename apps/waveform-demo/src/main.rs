//! Scripted tour of the gesture pipeline: drives a touch session through
//! the recognizer and prints the waveform commands that come out the
//! other side.

use tactus_core::{Rect, Size};
use tactus_gestures::{DeviceClass, GestureConfig, Orientation, StaticCapabilities};
use tactus_testing::TouchRobot;
use tactus_waveform::{bind_waveform_gestures, WaveformActions, WaveformRegion};

fn main() {
    let caps = StaticCapabilities {
        touch: true,
        max_contacts: 10,
        viewport: Size::new(1180.0, 820.0),
    };
    println!(
        "device: {:?}, {:?}",
        DeviceClass::of(&caps),
        Orientation::of(&caps)
    );

    let robot = TouchRobot::new();
    let region = WaveformRegion::new(Rect::new(0.0, 0.0, 800.0, 200.0));
    let actions = WaveformActions::new()
        .on_seek(|p| println!("seek       -> {:.3}", p.normalized))
        .on_begin_loop(|p| println!("loop start -> {:.3}", p.normalized))
        .on_context_menu(|p, ms| println!("menu       -> {:.3} after {ms}ms", p.normalized))
        .on_scroll(|s| println!("scroll     -> {:+.1}px", s.delta.x))
        .on_zoom(|z| println!("zoom       -> x{:.2} about {:.3}", z.scale, z.center.normalized))
        .on_toggle_playback(|_| println!("playback   -> toggled"));
    let _binding = bind_waveform_gestures(&robot.source(), region, actions, GestureConfig::default());

    // Position the playhead.
    robot.tap(1, 200.0, 100.0, 60);
    robot.advance(500);

    // Start a loop region with a double tap.
    robot.tap(1, 400.0, 100.0, 60);
    robot.advance(120);
    robot.tap(2, 400.0, 100.0, 60);
    robot.advance(500);

    // Scroll the window.
    robot.touch_down(1, 500.0, 100.0);
    for step in 1..=4 {
        robot.advance(16);
        robot.touch_move(1, 500.0 - 40.0 * step as f32, 100.0);
    }
    robot.touch_up(1);
    robot.advance(500);

    // Zoom in on the loop.
    robot.touch_down(1, 350.0, 100.0);
    robot.touch_down(2, 450.0, 100.0);
    for step in 1..=4 {
        robot.advance(16);
        robot.touch_move(1, 350.0 - 25.0 * step as f32, 100.0);
        robot.touch_move(2, 450.0 + 25.0 * step as f32, 100.0);
    }
    robot.touch_up_together(1, 2);
    robot.advance(500);

    // Hold for the context menu.
    robot.touch_down(1, 600.0, 100.0);
    robot.advance(800);
    robot.touch_up(1);
    robot.advance(500);

    // Toggle playback.
    robot.two_finger_tap(1, 2, (300.0, 100.0), (500.0, 100.0), 80);
}
