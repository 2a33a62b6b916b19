//! Mixer modules — the processing units a host instantiates.
//!
//! - [`channel_strip`]: per-channel level, mute and chain-bus summing
//! - [`master_mixer`]: two-channel stereo/mono master with CV attenuation
//!
//! Modules never reference each other. They are composed only by the host
//! patching one module's outputs into another's inputs.

pub mod channel_strip;
pub mod master_mixer;

pub use channel_strip::{ChannelStrip, ChannelStripData};
pub use master_mixer::{MasterMixer, MixMode};
