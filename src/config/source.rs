//! Providers of the current settings.
use std::path::{Path, PathBuf};

use super::{Config, loader};
use crate::error::ConfigError;

/// Produces the current settings.
///
/// This is the only operation the settings object exposes: consumers read a
/// fully built [`Config`] and never write back.
pub trait SettingsSource {
    /// Produce the current settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be obtained.
    fn settings(&self) -> Result<Config, ConfigError>;

    /// Short human-readable description of where settings come from.
    fn describe(&self) -> String;
}

/// Settings read from a TOML or JSON file on each call.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Read settings from `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Locate the settings file in `dir` (see [`loader::discover`]).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if `dir` holds no settings file.
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        loader::discover(dir).map(Self::new)
    }

    /// Path of the settings file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsSource for FileSource {
    fn settings(&self) -> Result<Config, ConfigError> {
        loader::load(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Settings held in memory.
#[derive(Debug, Clone)]
pub struct StaticSource {
    config: Config,
}

impl StaticSource {
    /// Serve a copy of `config` on every call.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }
}

impl Default for StaticSource {
    fn default() -> Self {
        Self::new(Config::default_settings())
    }
}

impl SettingsSource for StaticSource {
    fn settings(&self) -> Result<Config, ConfigError> {
        Ok(self.config.clone())
    }

    fn describe(&self) -> String {
        "built-in defaults".to_string()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::config::DarkMode;

    #[test]
    fn file_source_reads_on_each_call() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tailwind.config.json");
        std::fs::write(&path, r#"{"darkMode": "media"}"#).unwrap();
        let source = FileSource::new(&path);

        assert_eq!(source.settings().unwrap().dark_mode, DarkMode::Media);
        std::fs::write(&path, r#"{"darkMode": "class"}"#).unwrap();
        assert_eq!(source.settings().unwrap().dark_mode, DarkMode::Class);
    }

    #[test]
    fn file_source_discover() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("tailwind.config.toml"), "").unwrap();
        let source = FileSource::discover(dir.path()).unwrap();
        assert!(source.path().ends_with("tailwind.config.toml"));
        assert!(source.describe().ends_with("tailwind.config.toml"));
    }

    #[test]
    fn static_source_defaults_to_project_settings() {
        let source = StaticSource::default();
        assert_eq!(source.settings().unwrap(), Config::default_settings());
        assert_eq!(source.describe(), "built-in defaults");
    }

    #[test]
    fn sources_are_object_safe() {
        let sources: Vec<Box<dyn SettingsSource>> = vec![
            Box::new(StaticSource::default()),
            Box::new(StaticSource::new(Config::default())),
        ];
        let loaded: Vec<Config> = sources.iter().map(|s| s.settings().unwrap()).collect();
        assert_ne!(loaded[0], loaded[1]);
    }
}
