//! ctrmount-core - Core library for ctrmount
//!
//! This library provides target selection, the batch mount reporter, the
//! `MountService` engine seam with its Docker implementation, and
//! configuration handling shared by the CLI.

pub mod config;
pub mod docker;
pub mod mount;
pub mod version;

// Re-export version functions for Rust consumers
pub use version::get_version;

// Re-export config types for convenience
pub use config::{Config, load_config};

// Re-export the mount pipeline
pub use mount::{
    MountError, MountOutcome, MountRequest, MountService, OutputFormat, ReportMode, Selection,
    TargetFailure, display_id, report, run_mount,
};
