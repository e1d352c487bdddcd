//! Docker-specific error types
//!
//! This module defines errors that can occur while talking to the Docker
//! daemon, providing clear, actionable messages for common issues.

use thiserror::Error;

/// Errors that can occur during Docker operations
#[derive(Error, Debug)]
pub enum DockerError {
    /// Failed to connect to the Docker daemon
    #[error("Docker connection failed: {0}")]
    Connection(String),

    /// Docker daemon is not running
    #[error("Docker daemon not running. Start Docker Desktop or the Docker service.")]
    NotRunning,

    /// Permission denied accessing Docker socket
    #[error(
        "Permission denied accessing Docker socket. You may need to add your user to the 'docker' group."
    )]
    PermissionDenied,

    /// Container query failed
    #[error("Container operation failed: {0}")]
    Container(String),

    /// `--latest` was requested but the engine knows no containers
    #[error("No containers found to mount")]
    NoContainers,

    /// Operation timed out
    #[error("Docker operation timed out")]
    Timeout,
}

impl From<bollard::errors::Error> for DockerError {
    fn from(err: bollard::errors::Error) -> Self {
        if matches!(err, bollard::errors::Error::RequestTimeoutError) {
            return DockerError::Timeout;
        }

        let msg = err.to_string();

        // Detect common error patterns and provide better messages
        if msg.contains("Cannot connect to the Docker daemon")
            || msg.contains("connection refused")
            || msg.contains("No such file or directory")
        {
            DockerError::NotRunning
        } else if msg.contains("permission denied") || msg.contains("Permission denied") {
            DockerError::PermissionDenied
        } else {
            DockerError::Connection(msg)
        }
    }
}
