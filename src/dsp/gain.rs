//! Gain laws shared by the mixer modules.

/// Control voltage that maps to unity gain.
pub const CV_FULL_SCALE: f32 = 10.0;

/// Audio taper: squares a linear fader position.
///
/// Gives a perceptually smoother fade than a linear law while keeping the
/// end points (0 → silence, 1 → unity).
#[inline]
pub fn audio_taper(level: f32) -> f32 {
    level * level
}

/// Gain derived from a level CV: `clamp(voltage / 10, 0, 1)`.
#[inline]
pub fn cv_gain(voltage: f32) -> f32 {
    (voltage / CV_FULL_SCALE).clamp(0.0, 1.0)
}

/// CV gain for an optional jack. An unpatched jack leaves the signal at unity.
#[inline]
pub fn cv_gain_if_connected(connected: bool, voltage: f32) -> f32 {
    if connected { cv_gain(voltage) } else { 1.0 }
}
