// SPDX-License-Identifier: GPL-3.0-only

//! The slice of the UDisks2 object model this crate consumes.
//!
//! Discovery and polling only ever talk to the daemon through [`UDisksBackend`],
//! so they can be exercised against an in-memory daemon in tests.

use anyhow::Result;
use futures::future::BoxFuture;
use zbus::zvariant::OwnedObjectPath;

mod udisks;

#[cfg(test)]
pub(crate) mod fake;

pub use udisks::{UDisks2ObjectManagerProxy, UDisksClient};

pub const UDISKS2_SERVICE: &str = "org.freedesktop.UDisks2";
pub const BLOCK_DEVICES_ROOT: &str = "/org/freedesktop/UDisks2/block_devices";
pub const DRIVES_ROOT: &str = "/org/freedesktop/UDisks2/drives";

pub const BLOCK_IFACE: &str = "org.freedesktop.UDisks2.Block";
pub const PARTITION_IFACE: &str = "org.freedesktop.UDisks2.Partition";
pub const DRIVE_IFACE: &str = "org.freedesktop.UDisks2.Drive";

/// The `org.freedesktop.UDisks2.Block` properties discovery needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockInfo {
    /// `Drive`; `/` when the block has no drive.
    pub drive: OwnedObjectPath,
    /// `PreferredDevice`, raw and NUL-terminated.
    pub preferred_device: Vec<u8>,
    /// `Device`, raw and NUL-terminated.
    pub device: Vec<u8>,
}

pub trait UDisksBackend: Send + Sync {
    /// Whole-disk block device objects (partitions are left out).
    fn block_devices(&self) -> BoxFuture<'_, Result<Vec<OwnedObjectPath>>>;

    /// Drive objects.
    fn drives(&self) -> BoxFuture<'_, Result<Vec<OwnedObjectPath>>>;

    fn block_info(&self, block: OwnedObjectPath) -> BoxFuture<'_, Result<BlockInfo>>;

    fn drive_media_compatibility(
        &self,
        drive: OwnedObjectPath,
    ) -> BoxFuture<'_, Result<Vec<String>>>;

    fn drive_media_available(&self, drive: OwnedObjectPath) -> BoxFuture<'_, Result<bool>>;
}
