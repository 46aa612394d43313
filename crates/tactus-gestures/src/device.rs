//! Capability-based device classification.
//!
//! Hosts report what the hardware can do and classification derives from
//! that; there is deliberately no platform identification string matching
//! here. Brittle user-agent heuristics stay in platform adapters if a host
//! insists on them.

use tactus_core::Size;

/// Shorter viewport side at or above which a touch device is treated as a
/// tablet rather than a phone. Matches the common 600dp convention.
const TABLET_MIN_SHORTER_SIDE_PX: f32 = 600.0;

pub trait DeviceCapabilities {
    /// Whether the device reports any touch contact support.
    fn has_touch(&self) -> bool;

    /// Maximum number of simultaneous contacts the hardware tracks.
    fn max_simultaneous_contacts(&self) -> u8;

    /// Current viewport size in logical pixels.
    fn viewport(&self) -> Size;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Phone,
    Tablet,
    Desktop,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl DeviceClass {
    pub fn of(caps: &dyn DeviceCapabilities) -> Self {
        if !caps.has_touch() || caps.max_simultaneous_contacts() == 0 {
            return DeviceClass::Desktop;
        }
        let viewport = caps.viewport();
        let shorter = viewport.width.min(viewport.height);
        if shorter >= TABLET_MIN_SHORTER_SIDE_PX {
            DeviceClass::Tablet
        } else {
            DeviceClass::Phone
        }
    }
}

impl Orientation {
    pub fn of(caps: &dyn DeviceCapabilities) -> Self {
        let viewport = caps.viewport();
        if viewport.width > viewport.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// Whether gesture recognition is worth attaching at all.
pub fn is_touch_device(caps: &dyn DeviceCapabilities) -> bool {
    caps.has_touch() && caps.max_simultaneous_contacts() > 0
}

/// Fixed capability report, for tests and hosts whose hardware facts are
/// known up front.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticCapabilities {
    pub touch: bool,
    pub max_contacts: u8,
    pub viewport: Size,
}

impl DeviceCapabilities for StaticCapabilities {
    fn has_touch(&self) -> bool {
        self.touch
    }

    fn max_simultaneous_contacts(&self) -> u8 {
        self.max_contacts
    }

    fn viewport(&self) -> Size {
        self.viewport
    }
}
