//! DSP building blocks — per-sample primitives used by the modules.
//!
//! Nothing here allocates, locks, or logs, so everything is safe to call
//! from the host's real-time callback.

pub mod chain;
pub mod gain;
pub mod trigger;

pub use trigger::SchmittTrigger;
