// SPDX-License-Identifier: GPL-3.0-only

//! Optical drive discovery: joins UDisks2 block devices to the drives they
//! belong to and keeps the drives that can take optical media.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use anyhow::Result;
use zbus::zvariant::OwnedObjectPath;

use super::{OpticalDrive, canonicalize_best_effort};
use crate::backend::{BlockInfo, UDisksBackend};
use crate::dbus::bytestring as bs;

const OPTICAL_MEDIA_PREFIX: &str = "optical";

/// True when any `MediaCompatibility` tag names an optical format
/// (`optical_cd`, `optical_dvd_plus_r`, `optical_bd`, ...).
pub fn is_optical(media_compatibility: &[String]) -> bool {
    media_compatibility
        .iter()
        .any(|tag| tag.starts_with(OPTICAL_MEDIA_PREFIX))
}

fn block_device_path(info: &BlockInfo) -> String {
    let preferred = bs::decode_c_string_bytes(&info.preferred_device);
    if !preferred.is_empty() {
        return preferred;
    }

    bs::decode_c_string_bytes(&info.device)
}

/// Map of drive object path to the device node of its whole-disk block device.
async fn device_paths_by_drive<B: UDisksBackend + ?Sized>(
    backend: &B,
) -> Result<HashMap<OwnedObjectPath, PathBuf>> {
    let mut by_drive: HashMap<OwnedObjectPath, PathBuf> = HashMap::new();

    for block in backend.block_devices().await? {
        let info = backend.block_info(block.clone()).await?;
        let drive = info.drive.clone();
        if drive.as_str() == "/" {
            continue;
        }

        let device = block_device_path(&info);
        if device.is_empty() {
            tracing::debug!("{} has no device node, skipping", block.as_str());
            continue;
        }

        let device = canonicalize_best_effort(Path::new(&device));
        match by_drive.get(&drive) {
            Some(existing) => tracing::debug!(
                "{} already maps to {}, ignoring {}",
                drive.as_str(),
                existing.display(),
                device.display()
            ),
            None => {
                by_drive.insert(drive, device);
            }
        }
    }

    Ok(by_drive)
}

/// Every drive UDisks2 reports as optical, paired with its device node.
///
/// Order follows the daemon's object listing. Any daemon error is returned as is.
pub async fn optical_drives<B: UDisksBackend + ?Sized>(backend: &B) -> Result<Vec<OpticalDrive>> {
    let mut by_drive = device_paths_by_drive(backend).await?;
    let mut seen = HashSet::new();
    let mut drives = Vec::new();

    for drive in backend.drives().await? {
        if !seen.insert(drive.clone()) {
            continue;
        }

        let compatibility = backend.drive_media_compatibility(drive.clone()).await?;
        if !is_optical(&compatibility) {
            tracing::trace!("{} is not optical: {:?}", drive.as_str(), compatibility);
            continue;
        }

        let Some(device) = by_drive.remove(&drive) else {
            tracing::warn!("optical drive {} has no block device", drive.as_str());
            continue;
        };

        tracing::debug!("found optical drive {} at {}", drive.as_str(), device.display());
        drives.push(OpticalDrive {
            object_path: drive,
            device,
        });
    }

    Ok(drives)
}
