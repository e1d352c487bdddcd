//! CLI command implementations

mod mount;

pub use mount::{MOUNT_LONG_ABOUT, MountArgs, cmd_mount};
