//! Mount command implementation
//!
//! Mounts the selected containers and prints their mountpoints, or lists the
//! containers that are already mounted when nothing is selected.

use anyhow::Result;
use clap::Args;
use ctrmount_core::docker::{DockerClient, DockerMountService};
use ctrmount_core::{Config, MountRequest, OutputFormat, run_mount};

pub const MOUNT_LONG_ABOUT: &str = "\
Mount a container's root filesystem

  ctrmount mount
    Lists all mounted containers mount points if no container is specified

  ctrmount mount CONTAINER-NAME-OR-ID
    Mounts the specified container and outputs the mountpoint";

/// Arguments for the mount command
#[derive(Args)]
pub struct MountArgs {
    /// Containers to mount, by name or ID
    #[arg(value_name = "CONTAINER")]
    pub containers: Vec<String>,

    /// Mount all containers
    #[arg(short, long)]
    pub all: bool,

    /// Print the mounted containers in specified format (json)
    #[arg(long, default_value = "")]
    pub format: String,

    /// Do not truncate output
    #[arg(long = "notruncate")]
    pub no_truncate: bool,

    /// Act on the latest container created
    #[arg(short, long)]
    pub latest: bool,
}

impl MountArgs {
    /// Build the immutable request for this invocation
    fn to_request(&self, config: &Config) -> Result<MountRequest> {
        let request = MountRequest::new(
            self.containers.clone(),
            self.latest,
            self.all,
            OutputFormat::parse(&self.format),
            self.no_truncate || config.no_truncate,
        )?;
        Ok(request)
    }
}

/// Mount containers or list current mounts
///
/// Selection and format are validated before Docker is contacted.
pub async fn cmd_mount(args: &MountArgs, config: &Config) -> Result<()> {
    let request = args.to_request(config)?;
    request.check_format()?;

    let client = DockerClient::connect(config.engine_timeout_secs).await?;
    if let Ok(version) = client.version().await {
        tracing::debug!("Connected to {}", version);
    }

    let service = DockerMountService::new(client);
    let mut stdout = std::io::stdout().lock();
    run_mount(&service, &request, &mut stdout).await?;

    Ok(())
}
