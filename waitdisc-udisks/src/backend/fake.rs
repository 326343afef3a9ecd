// SPDX-License-Identifier: GPL-3.0-only

//! In-memory daemon for tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use futures::future::BoxFuture;
use zbus::zvariant::OwnedObjectPath;

use super::{BLOCK_DEVICES_ROOT, BlockInfo, DRIVES_ROOT, UDisksBackend};

pub(crate) fn block_path(name: &str) -> OwnedObjectPath {
    OwnedObjectPath::try_from(format!("{BLOCK_DEVICES_ROOT}/{name}")).unwrap()
}

pub(crate) fn drive_path(name: &str) -> OwnedObjectPath {
    OwnedObjectPath::try_from(format!("{DRIVES_ROOT}/{name}")).unwrap()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    BlockDevices,
    Drives,
    BlockInfo(OwnedObjectPath),
    MediaCompatibility(OwnedObjectPath),
    MediaAvailable(OwnedObjectPath),
}

#[derive(Debug, Clone)]
struct FakeBlock {
    path: OwnedObjectPath,
    drive: OwnedObjectPath,
    preferred_device: Vec<u8>,
    device: Vec<u8>,
}

#[derive(Debug, Clone)]
struct FakeDrive {
    path: OwnedObjectPath,
    media_compatibility: Vec<String>,
    /// Number of `MediaAvailable` reads answering `false` before media shows up.
    /// `None` keeps the tray empty forever.
    media_after: Option<usize>,
}

#[derive(Clone, Default)]
pub(crate) struct FakeBackend {
    blocks: Vec<FakeBlock>,
    drives: Vec<FakeDrive>,
    unreachable: bool,
    calls: Arc<Mutex<Vec<Call>>>,
    media_reads: Arc<Mutex<HashMap<OwnedObjectPath, usize>>>,
}

impl FakeBackend {
    /// A block device whose `PreferredDevice` and `Device` are both `device`.
    pub(crate) fn with_block(self, name: &str, drive: &str, device: &str) -> Self {
        let mut bytes = device.as_bytes().to_vec();
        bytes.push(0);
        self.with_raw_block(name, drive, bytes.clone(), bytes)
    }

    pub(crate) fn with_raw_block(
        mut self,
        name: &str,
        drive: &str,
        preferred_device: Vec<u8>,
        device: Vec<u8>,
    ) -> Self {
        let drive = if drive == "/" {
            OwnedObjectPath::try_from("/").unwrap()
        } else {
            drive_path(drive)
        };
        self.blocks.push(FakeBlock {
            path: block_path(name),
            drive,
            preferred_device,
            device,
        });
        self
    }

    pub(crate) fn with_drive(
        mut self,
        name: &str,
        media_compatibility: &[&str],
        media_after: Option<usize>,
    ) -> Self {
        self.drives.push(FakeDrive {
            path: drive_path(name),
            media_compatibility: media_compatibility.iter().map(|s| s.to_string()).collect(),
            media_after,
        });
        self
    }

    /// Every call fails as if udisksd were not on the bus.
    pub(crate) fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    pub(crate) fn take_calls(&self) -> Vec<Call> {
        std::mem::take(&mut *self.calls.lock().unwrap())
    }

    pub(crate) fn media_reads(&self, drive: &str) -> usize {
        self.media_reads
            .lock()
            .unwrap()
            .get(&drive_path(drive))
            .copied()
            .unwrap_or(0)
    }

    fn record(&self, call: Call) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.unreachable {
            anyhow::bail!("The name org.freedesktop.UDisks2 was not provided by any .service files");
        }
        Ok(())
    }

    fn block(&self, path: &OwnedObjectPath) -> Result<&FakeBlock> {
        self.blocks
            .iter()
            .find(|b| &b.path == path)
            .ok_or_else(|| anyhow::anyhow!("No such object path '{}'", path.as_str()))
    }

    fn drive(&self, path: &OwnedObjectPath) -> Result<&FakeDrive> {
        self.drives
            .iter()
            .find(|d| &d.path == path)
            .ok_or_else(|| anyhow::anyhow!("No such object path '{}'", path.as_str()))
    }
}

impl UDisksBackend for FakeBackend {
    fn block_devices(&self) -> BoxFuture<'_, Result<Vec<OwnedObjectPath>>> {
        let res = self
            .record(Call::BlockDevices)
            .map(|()| self.blocks.iter().map(|b| b.path.clone()).collect());
        Box::pin(async move { res })
    }

    fn drives(&self) -> BoxFuture<'_, Result<Vec<OwnedObjectPath>>> {
        let res = self
            .record(Call::Drives)
            .map(|()| self.drives.iter().map(|d| d.path.clone()).collect());
        Box::pin(async move { res })
    }

    fn block_info(&self, block: OwnedObjectPath) -> BoxFuture<'_, Result<BlockInfo>> {
        let res = self.record(Call::BlockInfo(block.clone())).and_then(|()| {
            self.block(&block).map(|b| BlockInfo {
                drive: b.drive.clone(),
                preferred_device: b.preferred_device.clone(),
                device: b.device.clone(),
            })
        });
        Box::pin(async move { res })
    }

    fn drive_media_compatibility(
        &self,
        drive: OwnedObjectPath,
    ) -> BoxFuture<'_, Result<Vec<String>>> {
        let res = self
            .record(Call::MediaCompatibility(drive.clone()))
            .and_then(|()| self.drive(&drive).map(|d| d.media_compatibility.clone()));
        Box::pin(async move { res })
    }

    fn drive_media_available(&self, drive: OwnedObjectPath) -> BoxFuture<'_, Result<bool>> {
        let res = self
            .record(Call::MediaAvailable(drive.clone()))
            .and_then(|()| self.drive(&drive).map(|d| d.media_after))
            .map(|media_after| {
                let mut reads = self.media_reads.lock().unwrap();
                let seen = reads.entry(drive.clone()).or_insert(0);
                let available = media_after.is_some_and(|after| *seen >= after);
                *seen += 1;
                available
            });
        Box::pin(async move { res })
    }
}
