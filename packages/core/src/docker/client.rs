//! Connection to the local Docker daemon
//!
//! A [`DockerClient`] is only handed out after the daemon answered a ping, so
//! the mount engine never starts a batch against an unreachable socket.

use std::time::Duration;

use bollard::Docker;
use tracing::debug;

use super::error::DockerError;

/// Connected Bollard client
pub struct DockerClient {
    inner: Docker,
}

impl DockerClient {
    /// Connect to the local daemon and check that it responds
    ///
    /// Honors `DOCKER_HOST`, otherwise uses the platform socket. Every request
    /// made through the client, including the ping, is bounded by
    /// `timeout_secs`.
    pub async fn connect(timeout_secs: u64) -> Result<Self, DockerError> {
        let inner = Docker::connect_with_local_defaults()
            .map_err(|e| DockerError::Connection(e.to_string()))?
            .with_timeout(Duration::from_secs(timeout_secs));

        inner.ping().await.map_err(DockerError::from)?;
        debug!("Docker daemon answered ping (timeout {}s)", timeout_secs);

        Ok(Self { inner })
    }

    /// Daemon version line for debug logs
    pub async fn version(&self) -> Result<String, DockerError> {
        let version = self.inner.version().await.map_err(DockerError::from)?;

        Ok(format!(
            "Docker {} (API {})",
            version.version.as_deref().unwrap_or("unknown"),
            version.api_version.as_deref().unwrap_or("unknown")
        ))
    }

    pub(crate) fn inner(&self) -> &Docker {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connect_without_daemon_returns_error_not_panic() {
        // No daemon is guaranteed here; either outcome is fine as long as
        // failures come back as DockerError values
        match DockerClient::connect(1).await {
            Ok(client) => drop(client),
            Err(err) => assert!(!err.to_string().is_empty()),
        }
    }
}
