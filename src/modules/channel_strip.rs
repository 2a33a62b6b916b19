//! Channel strip — one daisy-chainable mixer channel.
//!
//! Scales its input by an audio-tapered level (optionally modulated by CV),
//! can be muted from a momentary button, and adds its signal onto the chain
//! bus passing through it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dsp::{SchmittTrigger, chain, gain};
use crate::rack::{Input, Light, Module, Output, Param, ParamConfig, ProcessArgs};

/// Channel level fader.
pub const LEVEL_PARAM: ParamConfig = ParamConfig::new(0.0, 1.0, 1.0);
/// Momentary mute button.
pub const MUTE_PARAM: ParamConfig = ParamConfig::new(0.0, 1.0, 0.0);

const MUTED_KEY: &str = "muted";

/// Data persisted with the patch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelStripData {
    pub muted: bool,
}

#[derive(Debug, Clone)]
pub struct ChannelStrip {
    pub level: Param,
    pub mute_button: Param,

    pub input: Input,
    pub level_cv: Input,
    pub chain_in: Input,

    pub output: Output,
    pub chain_out: Output,

    pub mute_light: Light,

    muted: bool,
    mute_trigger: SchmittTrigger,
}

impl ChannelStrip {
    pub fn new() -> Self {
        ChannelStrip {
            level: Param::new(LEVEL_PARAM),
            mute_button: Param::new(MUTE_PARAM),
            input: Input::default(),
            level_cv: Input::default(),
            chain_in: Input::default(),
            output: Output::default(),
            chain_out: Output::default(),
            mute_light: Light::default(),
            muted: false,
            mute_trigger: SchmittTrigger::new(),
        }
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Signal after mute, taper and CV, before it is split to the outputs.
    #[inline]
    fn channel_signal(&self) -> f32 {
        if self.muted {
            return 0.0;
        }

        let mut ch = self.input.voltage() * gain::audio_taper(self.level.value());
        if self.level_cv.is_connected() {
            ch *= gain::cv_gain(self.level_cv.voltage());
        }
        ch
    }
}

impl Default for ChannelStrip {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for ChannelStrip {
    fn process(&mut self, _args: &ProcessArgs) {
        if self.mute_trigger.process(self.mute_button.value()) {
            self.muted = !self.muted;
        }

        let ch = self.channel_signal();
        self.output.set_voltage(ch);
        self.chain_out
            .set_voltage(chain::accumulate(self.chain_in.voltage(), ch));
        self.mute_light.set_on(self.muted);
    }

    fn data_to_json(&self) -> Option<Value> {
        let data = ChannelStripData { muted: self.muted };
        match serde_json::to_value(data) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("failed to serialize channel strip state: {e}");
                None
            }
        }
    }

    fn data_from_json(&mut self, data: &Value) {
        if let Ok(restored) = ChannelStripData::deserialize(data) {
            log::debug!("restoring channel strip muted={}", restored.muted);
            self.muted = restored.muted;
            return;
        }

        if let Some(other) = data.get(MUTED_KEY) {
            log::warn!("ignoring non-boolean \"{MUTED_KEY}\" in channel strip state: {other}");
        }
    }

    fn reset(&mut self) {
        log::trace!("resetting channel strip params");
        self.level.reset();
        self.mute_button.reset();
    }
}
