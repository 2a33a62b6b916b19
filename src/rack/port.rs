//! Ports, lights and parameters — the values a host exchanges with a module
//! once per frame.

/// Range and default of a module parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamConfig {
    pub min: f32,
    pub max: f32,
    pub default: f32,
}

impl ParamConfig {
    pub const fn new(min: f32, max: f32, default: f32) -> Self {
        ParamConfig { min, max, default }
    }
}

/// A knob, slider, button or switch.
///
/// The value is always kept inside the configured range; the host clamps
/// before the module ever sees it.
#[derive(Debug, Clone)]
pub struct Param {
    config: ParamConfig,
    value: f32,
}

impl Param {
    pub fn new(config: ParamConfig) -> Self {
        Param {
            config,
            value: config.default,
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set the value, clamped into range. NaN falls back to the default.
    pub fn set(&mut self, value: f32) {
        self.value = if value.is_nan() {
            self.config.default
        } else {
            value.clamp(self.config.min, self.config.max)
        };
    }

    pub fn reset(&mut self) {
        self.value = self.config.default;
    }

    pub fn config(&self) -> ParamConfig {
        self.config
    }
}

/// An input jack. An unpatched jack reads 0 V.
#[derive(Debug, Clone, Default)]
pub struct Input {
    voltage: f32,
    connected: bool,
}

impl Input {
    #[inline]
    pub fn voltage(&self) -> f32 {
        self.voltage
    }

    #[inline]
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Patch a cable carrying `voltage` into this jack.
    pub fn connect(&mut self, voltage: f32) {
        self.connected = true;
        self.voltage = voltage;
    }

    /// Update the voltage on an already patched cable. Ignored while unpatched.
    pub fn set_voltage(&mut self, voltage: f32) {
        if self.connected {
            self.voltage = voltage;
        }
    }

    pub fn disconnect(&mut self) {
        self.connected = false;
        self.voltage = 0.0;
    }
}

/// An output jack.
#[derive(Debug, Clone, Default)]
pub struct Output {
    voltage: f32,
}

impl Output {
    #[inline]
    pub fn voltage(&self) -> f32 {
        self.voltage
    }

    #[inline]
    pub fn set_voltage(&mut self, voltage: f32) {
        self.voltage = voltage;
    }
}

/// A panel indicator. Brightness is in [0, 1].
#[derive(Debug, Clone, Default)]
pub struct Light {
    brightness: f32,
}

impl Light {
    #[inline]
    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    #[inline]
    pub fn set_on(&mut self, on: bool) {
        self.brightness = if on { 1.0 } else { 0.0 };
    }

    pub fn is_on(&self) -> bool {
        self.brightness > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVEL: ParamConfig = ParamConfig::new(0.0, 2.0, 1.0);

    #[test]
    fn param_starts_at_default() {
        let p = Param::new(LEVEL);
        assert_eq!(p.value(), 1.0);
        assert_eq!(p.config().max, 2.0);
    }

    #[test]
    fn param_clamps() {
        let mut p = Param::new(LEVEL);
        p.set(3.0);
        assert_eq!(p.value(), 2.0);
        p.set(-1.0);
        assert_eq!(p.value(), 0.0);
        p.set(f32::NAN);
        assert_eq!(p.value(), 1.0);
    }

    #[test]
    fn param_reset() {
        let mut p = Param::new(LEVEL);
        p.set(0.3);
        p.reset();
        assert_eq!(p.value(), 1.0);
    }

    #[test]
    fn unpatched_input_reads_zero() {
        let mut i = Input::default();
        assert!(!i.is_connected());
        assert_eq!(i.voltage(), 0.0);

        i.connect(4.0);
        assert!(i.is_connected());
        assert_eq!(i.voltage(), 4.0);

        i.disconnect();
        assert!(!i.is_connected());
        assert_eq!(i.voltage(), 0.0);
    }

    #[test]
    fn unpatched_input_ignores_voltage_writes() {
        let mut i = Input::default();
        i.set_voltage(5.0);
        assert_eq!(i.voltage(), 0.0);

        i.connect(1.0);
        i.set_voltage(5.0);
        assert_eq!(i.voltage(), 5.0);
    }

    #[test]
    fn light_on_off() {
        let mut l = Light::default();
        assert!(!l.is_on());
        l.set_on(true);
        assert_eq!(l.brightness(), 1.0);
        l.set_on(false);
        assert!(!l.is_on());
    }
}
