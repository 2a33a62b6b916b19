//! Master mixer — two channels into a stereo or mono-duplicated master.
//!
//! With both channel inputs patched and the mono switch off, each channel
//! goes hard to its own side of the master. In every other case the two
//! channels are summed and the sum is sent to both master outputs.

use crate::dsp::gain;
use crate::rack::{Input, Module, Output, Param, ParamConfig, ProcessArgs};

/// Number of channel slots.
pub const NUM_CHANNELS: usize = 2;

/// Master mix level. Allows up to +6 dB of make-up gain.
pub const MIX_LEVEL_PARAM: ParamConfig = ParamConfig::new(0.0, 2.0, 1.0);
/// Mono/stereo switch. Any value above zero selects mono.
pub const MONO_PARAM: ParamConfig = ParamConfig::new(0.0, 1.0, 1.0);
/// Per-channel level fader.
pub const CHANNEL_LEVEL_PARAM: ParamConfig = ParamConfig::new(0.0, 1.0, 1.0);

/// How the master outputs are driven for the current patch and switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixMode {
    /// Channel 1 → left, channel 2 → right.
    Stereo,
    /// Summed mix on both outputs.
    Mono,
}

#[derive(Debug, Clone)]
pub struct MasterMixer {
    pub mix_level: Param,
    pub mono: Param,
    pub channel_levels: [Param; NUM_CHANNELS],

    pub mix_cv: Input,
    pub channel_inputs: [Input; NUM_CHANNELS],

    pub channel_outputs: [Output; NUM_CHANNELS],
    pub master_left: Output,
    pub master_right: Output,
}

impl MasterMixer {
    pub fn new() -> Self {
        MasterMixer {
            mix_level: Param::new(MIX_LEVEL_PARAM),
            mono: Param::new(MONO_PARAM),
            channel_levels: std::array::from_fn(|_| Param::new(CHANNEL_LEVEL_PARAM)),
            mix_cv: Input::default(),
            channel_inputs: std::array::from_fn(|_| Input::default()),
            channel_outputs: std::array::from_fn(|_| Output::default()),
            master_left: Output::default(),
            master_right: Output::default(),
        }
    }

    pub fn is_mono(&self) -> bool {
        self.mono.value() > 0.0
    }

    /// Stereo routing needs both channels patched and the mono switch off.
    /// An unpatched second channel falls back to the summed mix exactly as
    /// mono mode does.
    pub fn is_stereo_eligible(&self) -> bool {
        !self.is_mono() && self.channel_inputs.iter().all(Input::is_connected)
    }

    pub fn mode(&self) -> MixMode {
        if self.is_stereo_eligible() {
            MixMode::Stereo
        } else {
            MixMode::Mono
        }
    }
}

impl Default for MasterMixer {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for MasterMixer {
    fn process(&mut self, _args: &ProcessArgs) {
        let mut ch_out = [0.0_f32; NUM_CHANNELS];
        for i in 0..NUM_CHANNELS {
            ch_out[i] = self.channel_inputs[i].voltage()
                * gain::audio_taper(self.channel_levels[i].value());
            self.channel_outputs[i].set_voltage(ch_out[i]);
        }

        let mix_level = self.mix_level.value();
        let mix = ch_out.iter().sum::<f32>() * mix_level;
        let cv = gain::cv_gain_if_connected(self.mix_cv.is_connected(), self.mix_cv.voltage());

        if self.is_stereo_eligible() {
            let attenuate = mix_level * cv;
            self.master_left.set_voltage(ch_out[0] * attenuate);
            self.master_right.set_voltage(ch_out[1] * attenuate);
        } else {
            let mix = mix * cv;
            self.master_left.set_voltage(mix);
            self.master_right.set_voltage(mix);
        }
    }

    fn reset(&mut self) {
        log::trace!("resetting master mixer params");
        self.mix_level.reset();
        self.mono.reset();
        for level in &mut self.channel_levels {
            level.reset();
        }
    }
}
