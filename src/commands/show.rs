//! `show`: print the loaded settings.
use std::io::Write;

use anyhow::{Context as _, Result};

use crate::cli::{GlobalOpts, RenderOpts};
use crate::config::loader;
use crate::logging::Logger;

/// Run the show command: load the settings and write them, normalised, to
/// `out`.
///
/// # Errors
///
/// Returns an error if the settings cannot be loaded, rendered, or written.
pub fn run(
    global: &GlobalOpts,
    opts: &RenderOpts,
    log: &Logger,
    out: &mut impl Write,
) -> Result<()> {
    let setup = super::CommandSetup::init(global, log)?;
    let rendered = loader::to_string(&setup.config, opts.format)?;
    writeln!(out, "{}", rendered.trim_end()).context("writing settings")?;
    Ok(())
}
