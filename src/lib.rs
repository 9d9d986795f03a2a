//! Typed settings for a utility-class CSS build step.
//!
//! The settings object names the files scanned for used classes, the
//! dark-mode strategy, theme and variant extensions, and the plugin list.
//! It is loaded once from a TOML or JSON file and handed by reference to
//! the consuming build tool, which owns every rule beyond the types here.
//!
//! - **[`config`]**: the settings object, its loader, and advisory validation
//! - **[`commands`]**: the `show`, `check`, and `defaults` subcommands
//! - **[`logging`]**: console logging on top of [`tracing`]
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use config::{Config, DarkMode, SettingsSource};
pub use error::ConfigError;
