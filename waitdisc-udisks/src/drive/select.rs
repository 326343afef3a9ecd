// SPDX-License-Identifier: GPL-3.0-only

use std::path::Path;

use super::{OpticalDrive, canonicalize_best_effort};
use crate::error::WaitDiscError;

/// Pick the drive to wait on.
///
/// Without `requested` there must be exactly one candidate. With it, the path is
/// resolved through symlinks (`/dev/cdrom` -> `/dev/sr0`) and matched against the
/// already-canonical device nodes from discovery.
pub fn select_drive(
    mut drives: Vec<OpticalDrive>,
    requested: Option<&Path>,
) -> Result<OpticalDrive, WaitDiscError> {
    let Some(requested) = requested else {
        return match drives.len() {
            0 => Err(WaitDiscError::NoDrives),
            1 => Ok(drives.remove(0)),
            _ => Err(WaitDiscError::AmbiguousDrives(
                drives
                    .iter()
                    .map(|d| d.device.display().to_string())
                    .collect(),
            )),
        };
    };

    let canonical = canonicalize_best_effort(requested);
    tracing::debug!(
        "looking for {} (resolved to {})",
        requested.display(),
        canonical.display()
    );

    drives
        .into_iter()
        .find(|d| d.device == canonical)
        .ok_or_else(|| WaitDiscError::NotOptical(requested.to_path_buf()))
}
