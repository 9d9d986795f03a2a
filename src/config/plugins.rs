//! Opaque plugin descriptors.
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A build-time extension registered with the external tool.
///
/// Either a bare module name or an arbitrary descriptor table. The contents
/// are never interpreted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Plugin {
    /// Module name, e.g. `"@tailwindcss/forms"`.
    Name(String),
    /// Structured descriptor, conventionally `{ name, options }`.
    Descriptor(Value),
}

impl Plugin {
    /// Module name of the plugin, when one can be determined.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Descriptor(value) => value.get("name").and_then(Value::as_str),
        }
    }
}
