//! Theme customisation: additive `extend` tokens and replacing overrides.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Design-token customisation merged into the external tool's base theme.
///
/// Keys under `extend` are merged into the defaults. Any other key directly
/// under `theme` replaces the default token group of the same name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Additive token overrides, keyed by token group (e.g. `colors`).
    #[serde(default)]
    pub extend: BTreeMap<String, Value>,
    /// Token groups that replace the defaults wholesale.
    #[serde(flatten)]
    pub overrides: BTreeMap<String, Value>,
}

impl Theme {
    /// Return the extension for a token group, if any.
    #[must_use]
    pub fn extension(&self, group: &str) -> Option<&Value> {
        self.extend.get(group)
    }

    /// Token groups present both as an override and as an extension.
    pub fn shadowed_groups(&self) -> impl Iterator<Item = &str> {
        self.extend
            .keys()
            .filter(|key| self.overrides.contains_key(*key))
            .map(String::as_str)
    }
}
