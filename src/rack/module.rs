//! The host-facing module contract.
//!
//! A host owns each module instance, calls [`Module::process`] once per
//! audio frame on its real-time thread, and asks for the module's private
//! data when a patch is saved or loaded.

use serde_json::Value;

use crate::error::StateError;

/// Timing information passed to every `process` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessArgs {
    pub sample_rate: f32,
    pub sample_time: f32,
}

impl ProcessArgs {
    pub fn new(sample_rate: f32) -> Self {
        ProcessArgs {
            sample_rate,
            sample_time: 1.0 / sample_rate,
        }
    }
}

impl Default for ProcessArgs {
    fn default() -> Self {
        Self::new(44100.0)
    }
}

/// A processing unit the host can run, save and restore.
pub trait Module {
    /// Advance one frame: read inputs and params, write outputs and lights.
    ///
    /// Must not block, allocate, or log.
    fn process(&mut self, args: &ProcessArgs);

    /// Module data to persist alongside the patch, if any.
    fn data_to_json(&self) -> Option<Value> {
        None
    }

    /// Restore module data. Missing or malformed fields are ignored.
    fn data_from_json(&mut self, _data: &Value) {}

    /// Return every parameter to its default.
    fn reset(&mut self);
}

/// Serialize a module's persisted data to text.
pub fn save_state(module: &dyn Module) -> Option<String> {
    let data = module.data_to_json()?;
    log::debug!("saving module state: {data}");
    Some(data.to_string())
}

/// Parse persisted text and hand the document to the module.
///
/// Fails only when the text is not a JSON object; the module keeps its
/// current state in that case.
pub fn load_state(module: &mut dyn Module, text: &str) -> Result<(), StateError> {
    let data: Value = serde_json::from_str(text)?;
    if !data.is_object() {
        return Err(StateError::NotAnObject {
            found: json_kind(&data),
        });
    }
    log::debug!("loading module state: {data}");
    module.data_from_json(&data);
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts frames and persists the count.
    struct Counter {
        frames: u64,
    }

    impl Module for Counter {
        fn process(&mut self, _args: &ProcessArgs) {
            self.frames += 1;
        }

        fn data_to_json(&self) -> Option<Value> {
            Some(serde_json::json!({ "frames": self.frames }))
        }

        fn data_from_json(&mut self, data: &Value) {
            if let Some(frames) = data.get("frames").and_then(Value::as_u64) {
                self.frames = frames;
            }
        }

        fn reset(&mut self) {}
    }

    struct Stateless;

    impl Module for Stateless {
        fn process(&mut self, _args: &ProcessArgs) {}
        fn reset(&mut self) {}
    }

    #[test]
    fn process_args_sample_time() {
        let args = ProcessArgs::new(48000.0);
        assert!((args.sample_time - 1.0 / 48000.0).abs() < 1e-12);
        assert_eq!(ProcessArgs::default().sample_rate, 44100.0);
    }

    #[test]
    fn save_and_load_text() {
        let mut a = Counter { frames: 0 };
        let args = ProcessArgs::default();
        for _ in 0..3 {
            a.process(&args);
        }
        let text = save_state(&a).expect("counter has state");

        let mut b = Counter { frames: 0 };
        load_state(&mut b, &text).expect("load failed");
        assert_eq!(b.frames, 3);
    }

    #[test]
    fn stateless_module_saves_nothing() {
        assert!(save_state(&Stateless).is_none());
        // Loading into a module without data is harmless
        load_state(&mut Stateless, "{}").expect("load failed");
    }

    #[test]
    fn invalid_json_is_an_error() {
        let mut c = Counter { frames: 7 };
        let err = load_state(&mut c, "{frames: ").unwrap_err();
        assert!(matches!(err, StateError::Json(_)));
        assert_eq!(c.frames, 7);
    }

    #[test]
    fn non_object_document_is_an_error() {
        let mut c = Counter { frames: 7 };
        let err = load_state(&mut c, "[1, 2]").unwrap_err();
        assert!(matches!(err, StateError::NotAnObject { found: "an array" }));
        assert_eq!(
            err.to_string(),
            "Module state must be a JSON object, found an array"
        );
        assert_eq!(c.frames, 7);
    }
}
