//! Settings file reading, format detection, and rendering.
use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use super::Config;
use crate::error::ConfigError;

/// File names probed by [`discover`], in order of preference.
pub const CANDIDATE_FILES: &[&str] = &["tailwind.config.toml", "tailwind.config.json"];

/// Origin reported in errors for documents parsed from memory.
const MEMORY_ORIGIN: &str = "<memory>";

/// Serialization format of a settings document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// JSON document.
    #[default]
    Json,
    /// TOML document.
    Toml,
}

impl Format {
    /// Determine the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedFormat`] for any extension other than
    /// `toml` or `json` (case-insensitive), or when there is no extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(ext)),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("JSON"),
            Self::Toml => f.write_str("TOML"),
        }
    }
}

fn parse_document<T: DeserializeOwned>(
    content: &str,
    format: Format,
    origin: &str,
) -> Result<T, ConfigError> {
    let parsed = match format {
        Format::Toml => toml::from_str(content).map_err(|e| e.message().to_string()),
        Format::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
    };
    parsed.map_err(|message| ConfigError::Parse {
        path: origin.to_string(),
        format,
        message,
    })
}

/// Parse settings from an in-memory document.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the document is malformed, contains an
/// unknown top-level key, or a field holds an unaccepted value.
pub fn from_str(content: &str, format: Format) -> Result<Config, ConfigError> {
    parse_document(content, format, MEMORY_ORIGIN)
}

/// Read and parse the settings file at `path`, choosing the format from its
/// extension.
///
/// # Errors
///
/// Returns an error if the extension is unsupported, the file cannot be
/// read, or its contents cannot be parsed.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let format = Format::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!(path = %path.display(), %format, "parsing settings file");
    parse_document(&content, format, &path.display().to_string())
}

/// Render settings in the given format.
///
/// # Errors
///
/// Returns [`ConfigError::Serialize`] if a value cannot be represented in
/// the target format (e.g. a JSON `null` inside a theme extension rendered
/// as TOML).
pub fn to_string(config: &Config, format: Format) -> Result<String, ConfigError> {
    let rendered = match format {
        Format::Toml => toml::to_string_pretty(config).map_err(|e| e.to_string()),
        Format::Json => serde_json::to_string_pretty(config).map_err(|e| e.to_string()),
    };
    rendered.map_err(|message| ConfigError::Serialize { format, message })
}

/// Find the settings file in `dir`.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] if none of [`CANDIDATE_FILES`] exists.
pub fn discover(dir: &Path) -> Result<PathBuf, ConfigError> {
    CANDIDATE_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
        .ok_or_else(|| ConfigError::NotFound(dir.display().to_string()))
}
