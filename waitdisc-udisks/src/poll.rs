// SPDX-License-Identifier: GPL-3.0-only

use std::io::Write;
use std::time::Duration;

use anyhow::Result;

use crate::backend::UDisksBackend;
use crate::drive::OpticalDrive;

/// Poll `MediaAvailable` on `drive` every `interval` until it turns true.
///
/// Unless `quiet`, writes `waiting for disc on <device>... ` to `out` before the
/// first read and `got it.` once media shows up. Returns the number of reads.
/// There is no timeout.
pub async fn wait_for_media<B, W>(
    backend: &B,
    drive: &OpticalDrive,
    interval: Duration,
    quiet: bool,
    out: &mut W,
) -> Result<u64>
where
    B: UDisksBackend + ?Sized,
    W: Write + ?Sized,
{
    if !quiet {
        write!(out, "waiting for disc on {}... ", drive.device.display())?;
        out.flush()?;
    }

    let mut reads: u64 = 0;
    loop {
        reads += 1;
        let available = backend
            .drive_media_available(drive.object_path.clone())
            .await?;
        tracing::trace!("{} MediaAvailable={available} (read {reads})", drive.object_path.as_str());
        if available {
            break;
        }
        tokio::time::sleep(interval).await;
    }

    if !quiet {
        writeln!(out, "got it.")?;
    }

    Ok(reads)
}
