use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One dropdown entry: a display label plus an optional opaque payload.
///
/// Payloads come from object-shaped remote results and travel with their
/// label, so the pairing can never drift apart across rebuilds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    label: String,
    payload: Option<Value>,
}

impl Suggestion {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            payload: None,
        }
    }

    pub fn with_payload(label: impl Into<String>, payload: Value) -> Self {
        Self {
            label: label.into(),
            payload: Some(payload),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub const fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }
}
