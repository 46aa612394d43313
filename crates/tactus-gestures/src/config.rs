//! Threshold configuration for gesture classification.
//!
//! Distances are in logical pixels, intervals in milliseconds. Values are
//! merged over the defaults below, so callers override only what they
//! need.
//!
//! The classifier does not enforce an ordering between thresholds. Taps
//! are resolved before long-presses, so a configuration where
//! `long_press_threshold_ms` is below `double_tap_threshold_ms` can
//! classify one release twice; keeping the long-press threshold above the
//! double-tap threshold is the caller's responsibility.

/// Maximum interval between two releases for the second to count as a
/// double-tap, and the maximum hold duration for a release to count as a
/// tap at all.
pub const DEFAULT_DOUBLE_TAP_THRESHOLD_MS: u64 = 300;

/// How far a contact may wander from its start before tap, long-press,
/// and two-finger-tap candidacy is revoked for the session.
///
/// 20 logical pixels is deliberately generous: the source device class is
/// tablets, where finger jitter during a deliberate tap is larger than the
/// ~8px slop desktop toolkits use.
pub const DEFAULT_TAP_MOVE_THRESHOLD_PX: f32 = 20.0;

/// Minimum hold duration for a stationary release to classify as a
/// long-press.
pub const DEFAULT_LONG_PRESS_THRESHOLD_MS: u64 = 600;

/// Maximum per-finger hold duration for a two-finger-tap.
pub const DEFAULT_TWO_FINGER_TAP_THRESHOLD_MS: u64 = 300;

/// Minimum change in finger separation before pinch-zoom emission starts.
///
/// Below this the two contacts are treated as moving together, which keeps
/// two-finger drags from being peppered with scale≈1.0 pinch events. Once
/// exceeded the gate latches open for the rest of the session.
pub const DEFAULT_PINCH_SPREAD_THRESHOLD_PX: f32 = 10.0;

/// Two-finger-tap releases must land within this many milliseconds of each
/// other to count as simultaneous.
pub const TWO_FINGER_RELEASE_SKEW_MS: u64 = 100;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    pub double_tap_threshold_ms: u64,
    pub tap_move_threshold_px: f32,
    pub long_press_threshold_ms: u64,
    pub two_finger_tap_threshold_ms: u64,
    pub pinch_spread_threshold_px: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            double_tap_threshold_ms: DEFAULT_DOUBLE_TAP_THRESHOLD_MS,
            tap_move_threshold_px: DEFAULT_TAP_MOVE_THRESHOLD_PX,
            long_press_threshold_ms: DEFAULT_LONG_PRESS_THRESHOLD_MS,
            two_finger_tap_threshold_ms: DEFAULT_TWO_FINGER_TAP_THRESHOLD_MS,
            pinch_spread_threshold_px: DEFAULT_PINCH_SPREAD_THRESHOLD_PX,
        }
    }
}

impl GestureConfig {
    pub fn with_double_tap_threshold_ms(mut self, ms: u64) -> Self {
        self.double_tap_threshold_ms = ms;
        self
    }

    pub fn with_tap_move_threshold_px(mut self, px: f32) -> Self {
        self.tap_move_threshold_px = px;
        self
    }

    pub fn with_long_press_threshold_ms(mut self, ms: u64) -> Self {
        self.long_press_threshold_ms = ms;
        self
    }

    pub fn with_two_finger_tap_threshold_ms(mut self, ms: u64) -> Self {
        self.two_finger_tap_threshold_ms = ms;
        self
    }

    pub fn with_pinch_spread_threshold_px(mut self, px: f32) -> Self {
        self.pinch_spread_threshold_px = px;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_merge_over_defaults() {
        let config = GestureConfig::default()
            .with_long_press_threshold_ms(900)
            .with_tap_move_threshold_px(8.0);
        assert_eq!(config.long_press_threshold_ms, 900);
        assert_eq!(config.tap_move_threshold_px, 8.0);
        assert_eq!(
            config.double_tap_threshold_ms,
            DEFAULT_DOUBLE_TAP_THRESHOLD_MS
        );
        assert_eq!(
            config.pinch_spread_threshold_px,
            DEFAULT_PINCH_SPREAD_THRESHOLD_PX
        );
    }
}
