// SPDX-License-Identifier: GPL-3.0-only

pub mod discovery;
pub mod select;

use std::path::{Path, PathBuf};

use zbus::zvariant::OwnedObjectPath;

/// One optical drive known to UDisks2.
///
/// Properties are read through a [`UDisksBackend`](crate::backend::UDisksBackend)
/// at `object_path`; `device` is the canonical device node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpticalDrive {
    pub object_path: OwnedObjectPath,
    pub device: PathBuf,
}

impl OpticalDrive {
    pub fn device(&self) -> &Path {
        &self.device
    }
}

pub(crate) fn canonicalize_best_effort(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
