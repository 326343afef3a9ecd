// SPDX-License-Identifier: GPL-3.0-only

//! Error types for drive selection and tray control

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WaitDiscError {
    #[error("cannot find any optical writer drives")]
    NoDrives,

    #[error(
        "found more than one optical writer drive ({}); name the one to wait on",
        .0.join(", ")
    )]
    AmbiguousDrives(Vec<String>),

    #[error("{} is not an optical writer", .0.display())]
    NotOptical(PathBuf),

    #[error("cannot close tray of {}: {source}", device.display())]
    TrayControl {
        device: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
