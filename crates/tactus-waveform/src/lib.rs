//! Waveform-side consumers of classified gestures.
//!
//! Translates recognizer output into the commands an audio looper acts on:
//! taps seek, double-taps start loop regions, long-presses open a context
//! menu, drags scroll, pinches zoom, two-finger taps toggle playback.
//! Nothing here renders or touches audio; the host supplies the actions.

pub mod bindings;
pub mod controls;
pub mod registry;

pub use bindings::{
    bind_waveform_gestures, WaveformActions, WaveformPosition, WaveformRegion, WaveformScroll,
    WaveformZoom,
};
pub use controls::{bind_button_gestures, ButtonActions};
pub use registry::BindingSet;
