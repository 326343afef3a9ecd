// SPDX-License-Identifier: GPL-3.0-only

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use futures::future::BoxFuture;
use udisks2::{block::BlockProxy, drive::DriveProxy};
use zbus::Connection;
use zbus::proxy::CacheProperties;
use zbus::zvariant::{self, OwnedObjectPath};
use tokio::sync::OnceCell;
use zbus_macros::proxy;

use super::{
    BLOCK_DEVICES_ROOT, BLOCK_IFACE, BlockInfo, DRIVE_IFACE, DRIVES_ROOT, PARTITION_IFACE,
    UDISKS2_SERVICE, UDisksBackend,
};

pub type InterfaceProperties = HashMap<String, HashMap<String, zvariant::OwnedValue>>;
pub type ManagedObjects = HashMap<OwnedObjectPath, InterfaceProperties>;

#[proxy(
    default_service = "org.freedesktop.UDisks2",
    default_path = "/org/freedesktop/UDisks2",
    interface = "org.freedesktop.DBus.ObjectManager"
)]
pub trait UDisks2ObjectManager {
    fn get_managed_objects(&self) -> zbus::Result<ManagedObjects>;
}

/// [`UDisksBackend`] over a live system bus connection.
///
/// The object listing is fetched once per client and shared by
/// [`block_devices`](UDisksBackend::block_devices) and
/// [`drives`](UDisksBackend::drives); `MediaAvailable` is always read live.
#[derive(Clone)]
pub struct UDisksClient {
    connection: Connection,
    objects: Arc<OnceCell<ManagedObjects>>,
}

impl UDisksClient {
    pub async fn system() -> Result<Self> {
        let connection = Connection::system()
            .await
            .context("cannot connect to the system bus")?;
        Ok(Self::new(connection))
    }

    pub fn new(connection: Connection) -> Self {
        Self {
            connection,
            objects: Arc::new(OnceCell::new()),
        }
    }

    async fn managed_objects(&self) -> Result<&ManagedObjects> {
        self.objects
            .get_or_try_init(|| async {
                let manager = UDisks2ObjectManagerProxy::new(&self.connection).await?;
                manager.get_managed_objects().await.with_context(|| {
                    format!("cannot list objects of {UDISKS2_SERVICE}; is udisksd running?")
                })
            })
            .await
    }
}

impl UDisksBackend for UDisksClient {
    fn block_devices(&self) -> BoxFuture<'_, Result<Vec<OwnedObjectPath>>> {
        Box::pin(async move {
            let objects = self.managed_objects().await?;
            Ok(children_with_interface(
                objects,
                BLOCK_DEVICES_ROOT,
                BLOCK_IFACE,
                &[PARTITION_IFACE],
            ))
        })
    }

    fn drives(&self) -> BoxFuture<'_, Result<Vec<OwnedObjectPath>>> {
        Box::pin(async move {
            let objects = self.managed_objects().await?;
            Ok(children_with_interface(objects, DRIVES_ROOT, DRIVE_IFACE, &[]))
        })
    }

    fn block_info(&self, block: OwnedObjectPath) -> BoxFuture<'_, Result<BlockInfo>> {
        Box::pin(async move {
            // One GetAll fills the proxy cache for all three reads.
            let proxy = BlockProxy::builder(&self.connection)
                .path(&block)?
                .build()
                .await?;
            let context = || format!("cannot read block properties of {}", block.as_str());

            Ok(BlockInfo {
                drive: proxy.drive().await.with_context(context)?,
                preferred_device: proxy.preferred_device().await.with_context(context)?,
                device: proxy.device().await.with_context(context)?,
            })
        })
    }

    fn drive_media_compatibility(
        &self,
        drive: OwnedObjectPath,
    ) -> BoxFuture<'_, Result<Vec<String>>> {
        Box::pin(async move {
            let proxy = DriveProxy::builder(&self.connection)
                .path(&drive)?
                .build()
                .await?;

            proxy
                .media_compatibility()
                .await
                .with_context(|| format!("cannot read MediaCompatibility of {}", drive.as_str()))
        })
    }

    fn drive_media_available(&self, drive: OwnedObjectPath) -> BoxFuture<'_, Result<bool>> {
        Box::pin(async move {
            // Uncached: each poll must be a fresh round-trip to udisksd.
            let proxy = DriveProxy::builder(&self.connection)
                .path(&drive)?
                .cache_properties(CacheProperties::No)
                .build()
                .await?;

            proxy
                .media_available()
                .await
                .with_context(|| format!("cannot read MediaAvailable of {}", drive.as_str()))
        })
    }
}

fn is_direct_child(path: &str, root: &str) -> bool {
    path.strip_prefix(root)
        .and_then(|rest| rest.strip_prefix('/'))
        .is_some_and(|name| !name.is_empty() && !name.contains('/'))
}

/// Objects directly below `root` that implement `interface` and none of `excluded`.
pub(crate) fn children_with_interface(
    objects: &ManagedObjects,
    root: &str,
    interface: &str,
    excluded: &[&str],
) -> Vec<OwnedObjectPath> {
    let mut children: Vec<OwnedObjectPath> = objects
        .iter()
        .filter(|(path, _)| is_direct_child(path.as_str(), root))
        .filter(|(_, interfaces)| interfaces.contains_key(interface))
        .filter(|(_, interfaces)| !excluded.iter().any(|ex| interfaces.contains_key(*ex)))
        .map(|(path, _)| path.clone())
        .collect();

    children.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    children
}
