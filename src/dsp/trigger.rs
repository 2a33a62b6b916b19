//! Schmitt trigger — rising-edge detector with hysteresis.

/// Default level at or below which the trigger re-arms.
pub const DEFAULT_LOW_THRESHOLD: f32 = 0.0;
/// Default level at or above which an armed trigger fires.
pub const DEFAULT_HIGH_THRESHOLD: f32 = 1.0;

/// Detector stages.
#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    /// Waiting for the signal to cross the high threshold.
    Armed,
    /// Fired; waiting for the signal to fall back below the low threshold.
    High,
}

/// Two-threshold edge detector.
///
/// Reports `true` exactly once per rising edge: the signal must reach
/// `high` to fire, and must then fall to `low` before it can fire again.
/// Values between the thresholds never change the state, so a noisy
/// control hovering around a single level cannot chatter.
///
/// A new trigger starts latched high, so a signal that is already high on
/// the first sample is not an edge.
#[derive(Debug, Clone)]
pub struct SchmittTrigger {
    pub low: f32,
    pub high: f32,
    state: State,
}

impl SchmittTrigger {
    pub fn new() -> Self {
        Self::with_thresholds(DEFAULT_LOW_THRESHOLD, DEFAULT_HIGH_THRESHOLD)
    }

    /// Create a trigger with explicit thresholds. `low` must not exceed `high`.
    pub fn with_thresholds(low: f32, high: f32) -> Self {
        SchmittTrigger {
            low: low.min(high),
            high: high.max(low),
            state: State::High,
        }
    }

    /// Feed one sample; returns `true` on a rising edge.
    #[inline]
    pub fn process(&mut self, input: f32) -> bool {
        match self.state {
            State::Armed => {
                if input >= self.high {
                    self.state = State::High;
                    return true;
                }
            }
            State::High => {
                if input <= self.low {
                    self.state = State::Armed;
                }
            }
        }
        false
    }

    /// Is the detector currently latched high?
    pub fn is_high(&self) -> bool {
        self.state == State::High
    }

    /// Latch high. The next edge needs a fall to `low` first.
    pub fn reset(&mut self) {
        self.state = State::High;
    }
}

impl Default for SchmittTrigger {
    fn default() -> Self {
        Self::new()
    }
}
