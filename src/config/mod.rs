//! The settings object and its component types.
pub mod content;
pub mod dark_mode;
pub mod loader;
pub mod plugins;
pub mod source;
pub mod theme;
pub mod validation;
pub mod variants;

use serde::{Deserialize, Serialize};

pub use content::Content;
pub use dark_mode::DarkMode;
pub use loader::Format;
pub use plugins::Plugin;
pub use source::{FileSource, SettingsSource, StaticSource};
pub use theme::Theme;
pub use variants::Variants;

/// Build settings for a utility-class CSS step.
///
/// Constructed once, then only shared by reference. Every key is optional on
/// input; absent keys take the values of [`Config::default`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Files scanned for used class names. Also read from the legacy
    /// `purge` key.
    #[serde(default, alias = "purge")]
    pub content: Content,
    /// Dark-mode generation strategy.
    #[serde(default)]
    pub dark_mode: DarkMode,
    /// Design-token customisation.
    #[serde(default)]
    pub theme: Theme,
    /// Variant enablement per utility category.
    #[serde(default)]
    pub variants: Variants,
    /// Build-time extension modules, in registration order.
    #[serde(default)]
    pub plugins: Vec<Plugin>,
}

impl Config {
    /// The settings shipped with the project: scan `./html/**/*.html`,
    /// no dark mode, no theme extension, `group-hover` for `animation`,
    /// and no plugins.
    #[must_use]
    pub fn default_settings() -> Self {
        Self {
            content: Content::new(["./html/**/*.html"]),
            dark_mode: DarkMode::Disabled,
            theme: Theme::default(),
            variants: Variants::extended([("animation", vec!["group-hover"])]),
            plugins: Vec::new(),
        }
    }
}
