// SPDX-License-Identifier: GPL-3.0-only

//! Discovery -> selection -> optional tray close -> poll.

use std::io::Write;

use anyhow::Result;

use crate::backend::UDisksBackend;
use crate::config::WaitConfig;
use crate::drive::{discovery, select};
use crate::{poll, tray};

/// Run the whole tool against `backend`.
///
/// `stdout` only receives the `--list` output; every message meant for the user
/// while waiting goes to `stderr`.
pub async fn run<B, O, E>(
    backend: &B,
    config: &WaitConfig,
    stdout: &mut O,
    stderr: &mut E,
) -> Result<()>
where
    B: UDisksBackend + ?Sized,
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    let drives = discovery::optical_drives(backend).await?;
    tracing::info!("{} optical drive(s) found", drives.len());

    if config.list {
        for drive in &drives {
            writeln!(
                stdout,
                "{}\t{}",
                drive.device.display(),
                drive.object_path.as_str()
            )?;
        }
        return Ok(());
    }

    let drive = select::select_drive(drives, config.device.as_deref())?;
    if config.device.is_none() && !config.quiet {
        writeln!(stderr, "using optical drive {}", drive.device.display())?;
    }

    if config.close_tray {
        tray::close_tray(&drive.device)?;
    }

    let reads = poll::wait_for_media(
        backend,
        &drive,
        config.poll_interval,
        config.quiet,
        stderr,
    )
    .await?;
    tracing::info!(
        "media present in {} after {reads} read(s)",
        drive.device.display()
    );

    Ok(())
}
