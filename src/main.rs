//! `twcfg`: inspect and check utility-CSS build settings.
use anyhow::Result;
use clap::Parser;

use tailwind_config::{cli, commands, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    logging::init_subscriber(args.verbose);
    let log = logging::Logger::new();
    let mut stdout = std::io::stdout().lock();

    match args.command {
        cli::Command::Show(opts) => commands::show::run(&args.global, &opts, &log, &mut stdout),
        cli::Command::Check(opts) => commands::check::run(&args.global, &opts, &log),
        cli::Command::Defaults(opts) => commands::defaults::run(&opts, &mut stdout),
        cli::Command::Version => {
            let version = option_env!("TWCFG_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
            println!("twcfg {version}");
            Ok(())
        }
    }
}
