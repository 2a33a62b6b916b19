//! Chain bus — the shared contract between daisy-chained modules.
//!
//! Each channel strip adds its signal to the bus scaled down by
//! [`CHAIN_DIVISOR`], so a full chain of unity-gain channels stays within
//! the voltage range of a single channel. Anything reading the bus must
//! scale it back up by the same constant.

/// Maximum number of channels the chain bus is designed to carry without
/// clipping when every channel sits at unity gain.
pub const CHAIN_DIVISOR: f32 = 16.0;

/// Scale a channel signal down to bus level.
#[inline]
pub fn encode(signal: f32) -> f32 {
    signal / CHAIN_DIVISOR
}

/// Add a channel signal onto an incoming bus voltage.
#[inline]
pub fn accumulate(chain_in: f32, signal: f32) -> f32 {
    chain_in + encode(signal)
}

/// Recover the summed signal from a bus voltage.
#[inline]
pub fn decode(bus: f32) -> f32 {
    bus * CHAIN_DIVISOR
}
