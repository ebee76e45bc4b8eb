//! doccheck: find conflicting statements across policy documents.

use anyhow::{Context, Result};
use clap::Parser;
use doccheck_cli::{commands, logging, Cli, Commands};
use doccheck_core::constants;
use doccheck_core::DocCheckConfig;
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_json);

    debug!("doccheck v{} starting", constants::VERSION);

    let overrides = cli.overrides();
    let config = DocCheckConfig::load(&cli.root, overrides.as_ref())
        .context("failed to load configuration")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Commands::Analyze(args) => {
            commands::analyze(args, &config, &mut out)?;
        }
        Commands::Config => commands::show_config(&config, &mut out)?,
    }
    Ok(())
}
