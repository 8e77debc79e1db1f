mod cli;
mod commands;
mod domain;
mod services;

use clap::Parser;
use cli::{Cli, USAGE};
use services::config::{load_config, resolve_settings};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Missing positionals are not an error: print usage and exit 0.
    let Some((image, message)) = cli.target() else {
        println!("{USAGE}");
        return Ok(());
    };

    let config = load_config(cli.config.as_deref())?;
    let settings = resolve_settings(&cli, config)?;
    tracing::debug!(?settings, "resolved settings");

    commands::handle_sweep(&cli, &settings, image, message)
}
