use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::naming::HostNaming;

#[derive(Parser)]
#[command(name = "zbxprov")]
#[command(version)]
#[command(about = "Provision Zabbix inventory from declarative list files", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/zbxprov/config.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create agent hosts from a 10-column CSV list
    Hosts(HostsArgs),

    /// Create SNMPv3-monitored hosts from a 10-column CSV list
    SnmpHosts(ApplyArgs),

    /// Create host groups from a name-per-line list
    HostGroups(ApplyArgs),

    /// Create user groups from a name-per-line list
    UserGroups(ApplyArgs),

    /// Check that the configured templates exist on the server
    Templates,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
pub struct ApplyArgs {
    /// Desired-state list file
    pub file: PathBuf,

    /// Report what would be created without creating anything
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct HostsArgs {
    #[command(flatten)]
    pub apply: ApplyArgs,

    /// How host names are derived from the row
    #[arg(long, value_enum, default_value_t = NamingArg::Composed)]
    pub naming: NamingArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum NamingArg {
    /// Build the host name from the specific-id column
    Composed,
    /// Use the host-name column verbatim
    Direct,
}

impl From<NamingArg> for HostNaming {
    fn from(arg: NamingArg) -> Self {
        match arg {
            NamingArg::Composed => Self::Composed,
            NamingArg::Direct => Self::Direct,
        }
    }
}
