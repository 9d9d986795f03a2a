// Shared helpers for integration tests.
//
// Provides a temporary directory holding a settings file and a fluent builder
// so each integration test can set up an isolated project without repeating
// filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tailwind_config::config::{Config, FileSource, SettingsSource};

/// The settings file shipped with the project, in TOML form.
pub const PROJECT_TOML: &str = include_str!("../fixtures/project.toml");

/// The settings file shipped with the project, in JSON form.
pub const PROJECT_JSON: &str = include_str!("../fixtures/project.json");

/// An isolated project directory backed by a [`tempfile::TempDir`].
///
/// The directory is automatically deleted when dropped.
pub struct IntegrationTestContext {
    /// Temporary project directory.
    pub root: tempfile::TempDir,
    /// Path of the settings file inside `root`.
    pub settings_path: PathBuf,
}

impl IntegrationTestContext {
    /// Create a context holding the project's TOML settings file.
    pub fn new() -> Self {
        TestContextBuilder::new().build()
    }

    /// Path to the project directory.
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Source reading the context's settings file.
    pub fn source(&self) -> FileSource {
        FileSource::new(&self.settings_path)
    }

    /// Load the settings file.
    pub fn load(&self) -> Config {
        self.source().settings().expect("load settings")
    }
}

/// Fluent builder for [`IntegrationTestContext`].
pub struct TestContextBuilder {
    file_name: String,
    content: String,
}

impl TestContextBuilder {
    /// Begin building a context that holds the project's TOML settings.
    pub fn new() -> Self {
        Self {
            file_name: "tailwind.config.toml".to_string(),
            content: PROJECT_TOML.to_string(),
        }
    }

    /// Write `content` to `file_name` instead of the project settings.
    pub fn with_settings(mut self, file_name: &str, content: &str) -> Self {
        self.file_name = file_name.to_string();
        self.content = content.to_string();
        self
    }

    /// Finish building and return the configured context.
    pub fn build(self) -> IntegrationTestContext {
        let root = tempfile::tempdir().expect("create temp dir");
        let settings_path = root.path().join(&self.file_name);
        std::fs::write(&settings_path, &self.content).expect("write settings file");
        IntegrationTestContext {
            root,
            settings_path,
        }
    }
}
