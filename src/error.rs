use std::fmt;

/// Errors raised while turning persisted module text back into state.
///
/// Only the text layer can fail. Once a document has been parsed, unknown
/// or malformed fields are ignored by the module itself.
#[derive(Debug)]
pub enum StateError {
    Json(serde_json::Error),
    NotAnObject { found: &'static str },
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::Json(e) => write!(f, "Invalid module state JSON: {e}"),
            StateError::NotAnObject { found } => {
                write!(f, "Module state must be a JSON object, found {found}")
            }
        }
    }
}

impl std::error::Error for StateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StateError::Json(e) => Some(e),
            StateError::NotAnObject { .. } => None,
        }
    }
}

impl From<serde_json::Error> for StateError {
    fn from(e: serde_json::Error) -> Self {
        StateError::Json(e)
    }
}
