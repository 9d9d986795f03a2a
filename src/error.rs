//! Error types for settings loading and rendering.
//!
//! Library code returns [`ConfigError`]; the CLI converts it to
//! [`anyhow::Error`] at the command boundary via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! ConfigError
//! ├── Io                — settings file could not be read
//! ├── Parse             — malformed document or field value
//! ├── Serialize         — settings could not be rendered
//! ├── UnsupportedFormat — unknown file extension
//! └── NotFound          — no settings file in the searched directory
//! ```

use thiserror::Error;

use crate::config::loader::Format;

/// Errors that arise while loading, parsing, or rendering settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An I/O error occurred while reading a settings file.
    #[error("IO error reading settings file {path}: {source}")]
    Io {
        /// Path to the file that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The document is not valid for its format, or a field has an
    /// unaccepted value.
    #[error("Invalid {format} in {path}: {message}")]
    Parse {
        /// Origin of the document (a path, or `<memory>`).
        path: String,
        /// Format the document was parsed as.
        format: Format,
        /// Parser message.
        message: String,
    },

    /// The settings could not be rendered in the requested format.
    #[error("Cannot render settings as {format}: {message}")]
    Serialize {
        /// Target format.
        format: Format,
        /// Serializer message.
        message: String,
    },

    /// The file extension does not name a supported format.
    #[error("Unsupported settings format '{0}': expected .toml or .json")]
    UnsupportedFormat(String),

    /// No settings file was found.
    #[error("No settings file found in {0}")]
    NotFound(String),
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_display() {
        let e = ConfigError::Io {
            path: "/site/tailwind.config.toml".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(e.to_string().contains("/site/tailwind.config.toml"));
        assert!(e.to_string().contains("IO error reading settings file"));
    }

    #[test]
    fn io_has_source() {
        use std::error::Error as StdError;
        let e = ConfigError::Io {
            path: "tailwind.config.json".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert!(e.source().is_some());
    }

    #[test]
    fn parse_display() {
        let e = ConfigError::Parse {
            path: "tailwind.config.toml".to_string(),
            format: Format::Toml,
            message: "expected `=`".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Invalid TOML in tailwind.config.toml: expected `=`"
        );
    }

    #[test]
    fn serialize_display() {
        let e = ConfigError::Serialize {
            format: Format::Toml,
            message: "unsupported None value".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Cannot render settings as TOML: unsupported None value"
        );
    }

    #[test]
    fn unsupported_format_display() {
        let e = ConfigError::UnsupportedFormat("js".to_string());
        assert_eq!(
            e.to_string(),
            "Unsupported settings format 'js': expected .toml or .json"
        );
    }

    #[test]
    fn not_found_display() {
        let e = ConfigError::NotFound("/site".to_string());
        assert_eq!(e.to_string(), "No settings file found in /site");
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn error_type_is_send_sync() {
        assert_send_sync::<ConfigError>();
    }

    #[test]
    fn converts_to_anyhow() {
        let e = ConfigError::NotFound(".".to_string());
        let _anyhow_err: anyhow::Error = e.into();
    }
}
