// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};
use waitdisc_udisks::{DEFAULT_POLL_SECONDS, WaitConfig, parse_poll_interval};

#[derive(Debug, Parser)]
#[command(name = "waitdisc", version)]
#[command(about = "Block until a disc is inserted in an optical drive")]
pub struct Args {
    /// Close the drive tray before waiting
    #[arg(long)]
    pub close: bool,

    /// Seconds between media checks
    #[arg(
        long,
        value_name = "SECONDS",
        default_value = DEFAULT_POLL_SECONDS,
        value_parser = parse_poll_interval
    )]
    pub poll: Duration,

    /// Do not print progress messages
    #[arg(long)]
    pub quiet: bool,

    /// List optical drives and exit
    #[arg(long, conflicts_with_all = ["close", "devicename"])]
    pub list: bool,

    /// More logging on stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Device node of the drive, e.g. /dev/sr0 or /dev/cdrom
    pub devicename: Option<PathBuf>,
}

impl From<Args> for WaitConfig {
    fn from(args: Args) -> Self {
        Self {
            device: args.devicename,
            poll_interval: args.poll,
            quiet: args.quiet,
            close_tray: args.close,
            list: args.list,
        }
    }
}
