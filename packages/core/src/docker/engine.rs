//! Docker-backed mount engine
//!
//! Docker keeps a running container's root filesystem mounted at the overlay
//! `MergedDir`, so resolving a container to its mountpoint is an inspect call.
//! Stopped containers and storage drivers without a merged directory cannot
//! be mounted from outside the daemon and are reported per target.

use bollard::container::ListContainersOptions;
use bollard::models::ContainerInspectResponse;
use futures_util::future::join_all;
use tracing::{debug, warn};

use super::{DockerClient, DockerError};
use crate::mount::{MountError, MountOutcome, MountService, Selection, TargetFailure};

/// Graph driver data key holding the mounted root filesystem
const MERGED_DIR_KEY: &str = "MergedDir";

/// [`MountService`] backed by a Docker daemon
pub struct DockerMountService {
    client: DockerClient,
}

impl DockerMountService {
    pub fn new(client: DockerClient) -> Self {
        Self { client }
    }

    /// List container IDs, most recently created first
    async fn list_ids(&self, all: bool, limit: Option<isize>) -> Result<Vec<String>, DockerError> {
        let options = ListContainersOptions::<String> {
            all,
            limit,
            ..Default::default()
        };

        let containers = self
            .client
            .inner()
            .list_containers(Some(options))
            .await
            .map_err(|e| DockerError::Container(format!("Failed to list containers: {e}")))?;

        Ok(containers.into_iter().filter_map(|c| c.id).collect())
    }

    async fn resolve(&self, target: &str) -> MountOutcome {
        debug!("Inspecting container: {}", target);

        match self.client.inner().inspect_container(target, None).await {
            Ok(info) => outcome_from_inspect(target, info),
            Err(bollard::errors::Error::DockerResponseServerError {
                status_code: 404, ..
            }) => MountOutcome::failed(
                target,
                target,
                TargetFailure::new(target, "no such container"),
            ),
            Err(e) => MountOutcome::failed(
                target,
                target,
                TargetFailure::new(target, format!("failed to inspect container: {e}")),
            ),
        }
    }
}

impl MountService for DockerMountService {
    async fn mount(&self, selection: &Selection) -> Result<Vec<MountOutcome>, MountError> {
        let targets = match selection {
            Selection::Named(targets) => targets.clone(),
            Selection::Latest => {
                let ids = self.list_ids(true, Some(1)).await?;
                if ids.is_empty() {
                    return Err(DockerError::NoContainers.into());
                }
                ids
            }
            Selection::All => self.list_ids(true, None).await?,
            Selection::Mounted => self.list_ids(false, None).await?,
        };
        debug!("Resolving {} container(s) for {:?}", targets.len(), selection);

        // join_all yields results in input order
        let outcomes = join_all(targets.iter().map(|target| self.resolve(target))).await;

        if !matches!(selection, Selection::Mounted) {
            return Ok(outcomes);
        }

        let (mounted, skipped) = split_mounted(outcomes);
        for failure in &skipped {
            debug!("Skipping unmounted container {}", failure);
        }
        if !skipped.is_empty() && mounted.is_empty() {
            warn!("None of {} running container(s) exposed a mountpoint", skipped.len());
        }
        Ok(mounted)
    }
}

/// Turn an inspect response into an outcome for `target`
fn outcome_from_inspect(target: &str, info: ContainerInspectResponse) -> MountOutcome {
    let id = info.id.unwrap_or_else(|| target.to_string());
    let name = info
        .name
        .as_deref()
        .map(|n| n.trim_start_matches('/').to_string())
        .unwrap_or_else(|| target.to_string());

    let running = info.state.as_ref().and_then(|s| s.running).unwrap_or(false);
    if !running {
        return MountOutcome::failed(
            id,
            name,
            TargetFailure::new(target, "container is not running, root filesystem is not mounted"),
        );
    }

    let Some(driver) = info.graph_driver else {
        return MountOutcome::failed(
            id,
            name,
            TargetFailure::new(target, "engine did not report a storage driver"),
        );
    };

    match driver.data.get(MERGED_DIR_KEY) {
        Some(dir) if !dir.is_empty() => MountOutcome::mounted(id, name, dir.clone()),
        _ => MountOutcome::failed(
            id,
            name,
            TargetFailure::new(
                target,
                format!("storage driver {} does not expose a mountpoint", driver.name),
            ),
        ),
    }
}

/// Separate mounted containers from the ones listing mode leaves out
fn split_mounted(outcomes: Vec<MountOutcome>) -> (Vec<MountOutcome>, Vec<TargetFailure>) {
    let mut mounted = Vec::with_capacity(outcomes.len());
    let mut skipped = Vec::new();
    for outcome in outcomes {
        match outcome.result {
            Ok(_) => mounted.push(outcome),
            Err(failure) => skipped.push(failure),
        }
    }
    (mounted, skipped)
}
