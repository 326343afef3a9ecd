// SPDX-License-Identifier: GPL-3.0-only

//! Wait for optical media to show up in a drive, using UDisks2 to find the
//! drive and to watch its `MediaAvailable` property.

mod dbus;

pub mod backend;
pub mod config;
pub mod drive;
pub mod error;
pub mod poll;
pub mod run;
pub mod tray;

pub use backend::{UDisksBackend, UDisksClient};
pub use config::{DEFAULT_POLL_INTERVAL, DEFAULT_POLL_SECONDS, WaitConfig, parse_poll_interval};
pub use dbus::bytestring::decode_c_string_bytes;
pub use drive::OpticalDrive;
pub use drive::discovery::{is_optical, optical_drives};
pub use drive::select::select_drive;
pub use error::WaitDiscError;
pub use poll::wait_for_media;
pub use run::run;
pub use tray::close_tray;
