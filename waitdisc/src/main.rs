// SPDX-License-Identifier: GPL-3.0-only

//! waitdisc - block until a disc is inserted in an optical drive.
//!
//! Finds optical drives through UDisks2 on the system bus, optionally closes the
//! tray, then polls the drive's `MediaAvailable` property until it is set.

use anyhow::Result;
use clap::Parser;
use waitdisc_udisks::{UDisksClient, WaitConfig};

mod cli;
mod logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(args.verbose);

    let config = WaitConfig::from(args);
    tracing::debug!(?config, "starting waitdisc v{}", env!("CARGO_PKG_VERSION"));

    let client = UDisksClient::system().await?;
    waitdisc_udisks::run(
        &client,
        &config,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )
    .await
}
