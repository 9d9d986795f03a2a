//! Top-level subcommand orchestration.
pub mod check;
pub mod defaults;
pub mod show;

use anyhow::{Context as _, Result};

use crate::cli::GlobalOpts;
use crate::config::{Config, FileSource, SettingsSource};
use crate::logging::Logger;

/// Shared state produced by the common command setup sequence.
///
/// Encapsulates settings-file resolution and loading so that each command
/// does not have to repeat the boilerplate.
#[derive(Debug)]
pub struct CommandSetup {
    /// Where the settings were read from.
    pub source: FileSource,
    /// The loaded settings.
    pub config: Config,
}

impl CommandSetup {
    /// Resolve the settings file and load it.
    ///
    /// # Errors
    ///
    /// Returns an error if no settings file can be found or it fails to load.
    pub fn init(global: &GlobalOpts, log: &Logger) -> Result<Self> {
        let source = resolve_source(global)?;

        log.stage("Loading settings");
        log.info(&format!("file: {}", source.describe()));
        let config = source
            .settings()
            .with_context(|| format!("loading {}", source.describe()))?;

        log.debug(&format!("{} content pattern(s)", config.content.len()));
        log.debug(&format!("dark mode: {}", config.dark_mode));
        log.debug(&format!(
            "{} theme extension(s), {} theme override(s)",
            config.theme.extend.len(),
            config.theme.overrides.len()
        ));
        log.debug(&format!(
            "{} variant extension(s), {} variant override(s)",
            config.variants.extend.len(),
            config.variants.overrides.len()
        ));
        log.debug(&format!("{} plugin(s)", config.plugins.len()));

        Ok(Self { source, config })
    }
}

/// Pick the settings file: the `--config` override, or discovery in the
/// current directory.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined or holds
/// no settings file.
pub fn resolve_source(global: &GlobalOpts) -> Result<FileSource> {
    if let Some(path) = &global.config {
        return Ok(FileSource::new(path));
    }
    let cwd = std::env::current_dir().context("determining current directory")?;
    Ok(FileSource::discover(&cwd)?)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::DarkMode;

    #[test]
    fn explicit_config_is_used_verbatim() {
        let global = GlobalOpts {
            config: Some("does/not/exist.toml".into()),
        };
        let source = resolve_source(&global).unwrap();
        assert_eq!(source.path(), std::path::Path::new("does/not/exist.toml"));
    }

    #[test]
    fn init_loads_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tailwind.config.toml");
        std::fs::write(&path, "darkMode = \"class\"\n").unwrap();
        let global = GlobalOpts { config: Some(path) };

        let setup = CommandSetup::init(&global, &Logger::new()).unwrap();
        assert_eq!(setup.config.dark_mode, DarkMode::Class);
    }

    #[test]
    fn init_reports_file_in_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tailwind.config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let global = GlobalOpts {
            config: Some(path.clone()),
        };

        let err = CommandSetup::init(&global, &Logger::new()).unwrap_err();
        assert!(format!("{err:#}").contains(&path.display().to_string()));
    }
}
