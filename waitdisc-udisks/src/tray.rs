// SPDX-License-Identifier: GPL-3.0-only

//! Tray control through the kernel. UDisks2 can eject but cannot load a tray.

use std::fs::OpenOptions;
use std::io;
use std::os::fd::AsRawFd;
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

use crate::error::WaitDiscError;

// linux/cdrom.h: CDROMCLOSETRAY = 0x5319
const CDROMCLOSETRAY: libc::c_ulong = 0x5319;

/// Close the tray of the drive at `device`.
///
/// The node is opened with `O_NONBLOCK` so the open succeeds while the kernel
/// has no medium registered yet.
pub fn close_tray(device: &Path) -> Result<(), WaitDiscError> {
    let tray_error = |source| WaitDiscError::TrayControl {
        device: device.to_path_buf(),
        source,
    };

    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .custom_flags(libc::O_NONBLOCK)
        .open(device)
        .map_err(tray_error)?;

    tracing::debug!("closing tray of {}", device.display());
    let ret = unsafe { libc::ioctl(file.as_raw_fd(), CDROMCLOSETRAY) };
    if ret < 0 {
        return Err(tray_error(io::Error::last_os_error()));
    }

    Ok(())
}
