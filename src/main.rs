//! autovpn - command-line front end for vendor VPN clients.

mod cli;
mod constants;
mod core;
mod error;
mod logging;
mod state;
mod theme;
mod ui;
mod utils;
mod vpn;

use std::path::Path;
use std::time::Duration;

use clap::{CommandFactory, Parser};
use indicatif::ProgressBar;

use crate::cli::args::{Args, Commands};
use crate::cli::commands::{self, Workspace};
use crate::cli::prompt::StdioPrompter;
use crate::core::invoker::SystemRunner;
use crate::error::{Error, Result};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    logging::init_logging(args.verbose);

    let Some(command) = args.command else {
        ui::banner();
        Args::command().print_help()?;
        return Ok(());
    };

    match run(args.config_dir.as_deref(), command, args.verbose) {
        Ok(()) => Ok(()),
        Err(Error::Cancelled) => {
            println!();
            ui::warning(constants::MSG_CANCELLED);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn run(config_dir: Option<&Path>, command: Commands, verbose: u8) -> Result<()> {
    let config_dir = utils::resolve_config_dir(config_dir)?;
    let mut workspace = Workspace::open(&config_dir)?;
    let runner = SystemRunner;

    match command {
        Commands::Connect(args) => {
            // Log lines and a redrawing bar do not mix.
            let progress = if verbose > 0 {
                ProgressBar::hidden()
            } else {
                let bar = ProgressBar::new(0);
                bar.enable_steady_tick(Duration::from_millis(120));
                bar
            };
            commands::connect(&workspace, &args, &runner, &progress)?;
        }
        Commands::Disconnect { vpn_type } => {
            commands::disconnect(&workspace, vpn_type, &runner)?;
        }
        Commands::Status { vpn_type } => {
            commands::status(&workspace, vpn_type, &runner)?;
        }
        Commands::Create(args) => {
            let mut prompter = StdioPrompter::stdio();
            commands::create(&workspace, args, &mut prompter)?;
        }
        Commands::SetClient {
            vpn_type,
            path,
            force,
        } => {
            commands::set_client(&mut workspace, vpn_type, &path, force)?;
        }
        Commands::List { vpn_type } => {
            commands::list(&workspace, vpn_type)?;
        }
        Commands::Delete { name } => commands::delete(&workspace, &name)?,
        Commands::SetDefault { name } => {
            commands::set_default(&workspace, &name)?;
        }
        Commands::Supported => {
            commands::supported(&workspace);
        }
    }
    Ok(())
}
