//! `check`: report likely mistakes in the settings.
use anyhow::Result;

use crate::cli::{CheckOpts, GlobalOpts};
use crate::config::{SettingsSource, validation};
use crate::logging::Logger;

/// Run the check command: load the settings and report validation warnings.
///
/// # Errors
///
/// Returns an error if the settings cannot be loaded, or if any warning was
/// reported and `--allow-warnings` is not set.
pub fn run(global: &GlobalOpts, opts: &CheckOpts, log: &Logger) -> Result<()> {
    let setup = super::CommandSetup::init(global, log)?;

    log.stage("Checking settings");
    for warning in validation::validate_all(&setup.config) {
        log.warn(&warning.to_string());
    }

    let count = log.warning_count();
    if count == 0 {
        log.info(&format!("{} looks good", setup.source.describe()));
        return Ok(());
    }

    log.info(&format!("found {count} warning(s)"));
    if opts.allow_warnings {
        return Ok(());
    }
    anyhow::bail!("{count} settings warning(s)");
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_settings(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tailwind.config.toml");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn clean_settings_pass() {
        let (_dir, path) = write_settings(
            "purge = [\"./html/**/*.html\"]\n[variants.extend]\nanimation = [\"group-hover\"]\n",
        );
        let global = GlobalOpts { config: Some(path) };
        let log = Logger::new();
        run(&global, &CheckOpts { allow_warnings: false }, &log).unwrap();
        assert_eq!(log.warning_count(), 0);
    }

    #[test]
    fn warnings_fail_the_check() {
        let (_dir, path) = write_settings(
            "content = [\"./html/**/*.html\"]\n[variants.extend]\nanimation = [\"group-hovr\"]\n",
        );
        let global = GlobalOpts { config: Some(path) };
        let log = Logger::new();
        let err = run(&global, &CheckOpts { allow_warnings: false }, &log).unwrap_err();
        assert_eq!(err.to_string(), "1 settings warning(s)");
        assert_eq!(log.warning_count(), 1);
    }

    #[test]
    fn warnings_are_logged_in_display_form() {
        let (_dir, path) = write_settings(
            "content = [\"./html/**/*.html\"]\n[variants.extend]\nanimation = [\"nope\"]\n",
        );
        let global = GlobalOpts { config: Some(path) };
        let log = Logger::new();
        let events = crate::logging::capture_events(|| {
            let _ = run(&global, &CheckOpts { allow_warnings: true }, &log);
        });
        let warnings: Vec<&str> = events
            .iter()
            .filter(|(level, _, _)| *level == tracing::Level::WARN)
            .map(|(_, _, msg)| msg.as_str())
            .collect();
        assert_eq!(warnings, vec!["variants: animation.nope: unknown variant 'nope'"]);
    }

    #[test]
    fn allow_warnings_passes() {
        let (_dir, path) = write_settings("content = []\n");
        let global = GlobalOpts { config: Some(path) };
        let log = Logger::new();
        run(&global, &CheckOpts { allow_warnings: true }, &log).unwrap();
        assert_eq!(log.warning_count(), 1);
    }

    #[test]
    fn load_failure_is_an_error() {
        let (_dir, path) = write_settings("darkMode = true\n");
        let global = GlobalOpts { config: Some(path) };
        assert!(run(&global, &CheckOpts { allow_warnings: true }, &Logger::new()).is_err());
    }
}
