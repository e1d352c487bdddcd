//! Docker operations module
//!
//! This module provides the Docker side of the mount pipeline:
//! - Docker client wrapper with connection handling
//! - Docker-specific error types
//! - `DockerMountService`, resolving containers to their mounted root filesystems

mod client;
mod engine;
mod error;

pub use client::DockerClient;
pub use engine::DockerMountService;
pub use error::DockerError;
