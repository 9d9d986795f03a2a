//! `defaults`: print the built-in settings.
use std::io::Write;

use anyhow::{Context as _, Result};

use crate::cli::RenderOpts;
use crate::config::{SettingsSource, StaticSource, loader};

/// Run the defaults command: write the built-in settings to `out`.
///
/// # Errors
///
/// Returns an error if the settings cannot be rendered or written.
pub fn run(opts: &RenderOpts, out: &mut impl Write) -> Result<()> {
    let config = StaticSource::default().settings()?;
    let rendered = loader::to_string(&config, opts.format)?;
    writeln!(out, "{}", rendered.trim_end()).context("writing settings")?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::{Config, Format};

    #[test]
    fn defaults_round_trip_in_both_formats() {
        for format in [Format::Json, Format::Toml] {
            let mut out = Vec::new();
            run(&RenderOpts { format }, &mut out).unwrap();
            let text = String::from_utf8(out).unwrap();
            assert_eq!(
                loader::from_str(&text, format).unwrap(),
                Config::default_settings(),
                "{format} output did not reload"
            );
        }
    }
}
