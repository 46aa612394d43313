//! Test support for driving gesture recognition with scripted touch
//! sequences.
//!
//! # Example
//!
//! ```
//! use tactus_gestures::{attach, GestureConfig, GestureKind};
//! use tactus_testing::{GestureLog, TouchRobot};
//!
//! let robot = TouchRobot::new();
//! let log = GestureLog::new();
//! let _binding = attach(&robot.source(), GestureConfig::default(), log.handlers());
//!
//! robot.tap(1, 100.0, 100.0, 50);
//! assert_eq!(log.count_of(GestureKind::Tap), 1);
//! ```

pub mod recording;
pub mod robot;

pub use recording::GestureLog;
pub use robot::TouchRobot;
