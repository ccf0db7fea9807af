mod cli;
mod commands;
mod config;
mod error;
mod interface;
mod inventory;
mod kinds;
mod naming;
mod outcome;
mod reconcile;
mod record;
mod ui;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use cli::{Cli, Command};
use config::Config;
use std::io;

/// Global context for the application
pub struct Context {
    pub verbose: u8,
    pub quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(if cli.quiet {
            log::LevelFilter::Error
        } else {
            log_level
        })
        .format_timestamp(None)
        .init();

    let ctx = Context {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    if let Command::Completions { shell } = &cli.command {
        let mut cmd = Cli::command();
        generate(*shell, &mut cmd, "zbxprov", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Hosts(args) => commands::apply::hosts(
            &ctx,
            &config,
            &args.apply.file,
            args.naming.into(),
            args.apply.dry_run,
        ),
        Command::SnmpHosts(args) => {
            commands::apply::snmp_hosts(&ctx, &config, &args.file, args.dry_run)
        }
        Command::HostGroups(args) => {
            commands::apply::host_groups(&ctx, &config, &args.file, args.dry_run)
        }
        Command::UserGroups(args) => {
            commands::apply::user_groups(&ctx, &config, &args.file, args.dry_run)
        }
        Command::Templates => commands::templates::run(&ctx, &config),
        Command::Completions { .. } => unreachable!("handled above"),
    }
}
