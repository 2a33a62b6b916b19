pub mod dsp;
pub mod error;
pub mod modules;
pub mod rack;

use crate::modules::{ChannelStrip, ChannelStripData, MasterMixer};
use crate::rack::{Module, ProcessArgs};
use wasm_bindgen::prelude::*;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the quantal-mixer version string.
#[wasm_bindgen]
pub fn core_version() -> String {
    VERSION.to_string()
}

/// WASM-exposed channel strip. The JS host sets controls and inputs, calls
/// `process` once per frame, then reads the outputs.
#[wasm_bindgen]
pub struct WasmChannelStrip {
    inner: ChannelStrip,
}

#[wasm_bindgen]
impl WasmChannelStrip {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmChannelStrip {
        WasmChannelStrip {
            inner: ChannelStrip::new(),
        }
    }

    pub fn set_level(&mut self, value: f32) {
        self.inner.level.set(value);
    }

    pub fn set_mute_button(&mut self, value: f32) {
        self.inner.mute_button.set(value);
    }

    /// Pass `None` to unpatch the jack.
    pub fn set_input(&mut self, voltage: Option<f32>) {
        set_jack(&mut self.inner.input, voltage);
    }

    pub fn set_level_cv(&mut self, voltage: Option<f32>) {
        set_jack(&mut self.inner.level_cv, voltage);
    }

    pub fn set_chain_in(&mut self, voltage: Option<f32>) {
        set_jack(&mut self.inner.chain_in, voltage);
    }

    pub fn process(&mut self, sample_rate: f32) {
        self.inner.process(&ProcessArgs::new(sample_rate));
    }

    pub fn output(&self) -> f32 {
        self.inner.output.voltage()
    }

    pub fn chain_out(&self) -> f32 {
        self.inner.chain_out.voltage()
    }

    pub fn mute_light(&self) -> f32 {
        self.inner.mute_light.brightness()
    }

    pub fn muted(&self) -> bool {
        self.inner.muted()
    }

    /// Persisted data as a JSON string.
    pub fn save_state(&self) -> Option<String> {
        rack::save_state(&self.inner)
    }

    /// Persisted data as a JS object.
    pub fn state_value(&self) -> Result<JsValue, JsValue> {
        let data = ChannelStripData {
            muted: self.inner.muted(),
        };
        serde_wasm_bindgen::to_value(&data).map_err(|e| JsValue::from_str(&format!("{e}")))
    }

    pub fn load_state(&mut self, text: &str) -> Result<(), JsValue> {
        rack::load_state(&mut self.inner, text).map_err(|e| JsValue::from_str(&format!("{e}")))
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }
}

impl Default for WasmChannelStrip {
    fn default() -> Self {
        Self::new()
    }
}

/// WASM-exposed master mixer.
#[wasm_bindgen]
pub struct WasmMasterMixer {
    inner: MasterMixer,
}

#[wasm_bindgen]
impl WasmMasterMixer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmMasterMixer {
        WasmMasterMixer {
            inner: MasterMixer::new(),
        }
    }

    pub fn set_mix_level(&mut self, value: f32) {
        self.inner.mix_level.set(value);
    }

    pub fn set_mono(&mut self, value: f32) {
        self.inner.mono.set(value);
    }

    /// `channel` is 0 or 1; other indices are ignored.
    pub fn set_channel_level(&mut self, channel: usize, value: f32) {
        if let Some(level) = self.inner.channel_levels.get_mut(channel) {
            level.set(value);
        }
    }

    pub fn set_channel_input(&mut self, channel: usize, voltage: Option<f32>) {
        if let Some(input) = self.inner.channel_inputs.get_mut(channel) {
            set_jack(input, voltage);
        }
    }

    pub fn set_mix_cv(&mut self, voltage: Option<f32>) {
        set_jack(&mut self.inner.mix_cv, voltage);
    }

    pub fn process(&mut self, sample_rate: f32) {
        self.inner.process(&ProcessArgs::new(sample_rate));
    }

    pub fn channel_output(&self, channel: usize) -> f32 {
        self.inner
            .channel_outputs
            .get(channel)
            .map_or(0.0, |o| o.voltage())
    }

    pub fn master_left(&self) -> f32 {
        self.inner.master_left.voltage()
    }

    pub fn master_right(&self) -> f32 {
        self.inner.master_right.voltage()
    }

    pub fn is_stereo(&self) -> bool {
        self.inner.mode() == modules::MixMode::Stereo
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }
}

impl Default for WasmMasterMixer {
    fn default() -> Self {
        Self::new()
    }
}

fn set_jack(jack: &mut rack::Input, voltage: Option<f32>) {
    match voltage {
        Some(v) => jack.connect(v),
        None => jack.disconnect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_matches_manifest() {
        assert_eq!(core_version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn channel_strip_adapter() {
        let mut strip = WasmChannelStrip::new();
        strip.set_input(Some(8.0));
        strip.set_chain_in(Some(1.0));
        strip.process(48000.0);
        assert!((strip.output() - 8.0).abs() < 1e-6);
        assert!((strip.chain_out() - 1.5).abs() < 1e-6);

        strip.set_mute_button(1.0);
        strip.process(48000.0);
        assert!(strip.muted());
        assert_eq!(strip.mute_light(), 1.0);
        assert_eq!(strip.output(), 0.0);

        let text = strip.save_state().expect("strip has state");
        let mut other = WasmChannelStrip::new();
        assert!(other.load_state(&text).is_ok());
        assert!(other.muted());
    }

    #[test]
    fn master_mixer_adapter() {
        let mut m = WasmMasterMixer::new();
        m.set_mono(0.0);
        m.set_channel_input(0, Some(3.0));
        m.set_channel_input(1, Some(4.0));
        m.set_channel_input(2, Some(9.0));
        m.process(48000.0);
        assert!(m.is_stereo());
        assert!((m.master_left() - 3.0).abs() < 1e-6);
        assert!((m.master_right() - 4.0).abs() < 1e-6);
        assert_eq!(m.channel_output(2), 0.0);

        m.set_channel_input(1, None);
        m.process(48000.0);
        assert!(!m.is_stereo());
        assert!((m.master_right() - 3.0).abs() < 1e-6);
    }
}
