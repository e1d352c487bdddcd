//! Error presentation for CLI commands
//!
//! Per-target mount failures print one `Error:` line each. Docker
//! connection problems get actionable tips.

use console::style;
use ctrmount_core::MountError;
use ctrmount_core::docker::DockerError;

/// Format Docker errors with actionable guidance
pub fn format_docker_error(e: &DockerError) -> String {
    match e {
        DockerError::NotRunning => {
            format!(
                "{}\n\n  {}\n  {}",
                style("Docker is not running").red().bold(),
                "Start Docker Desktop or the Docker daemon:",
                style("  sudo systemctl start docker").cyan()
            )
        }
        DockerError::PermissionDenied => {
            format!(
                "{}\n\n  {}\n  {}\n  {}",
                style("Permission denied accessing Docker").red().bold(),
                "Add your user to the docker group:",
                style("  sudo usermod -aG docker $USER").cyan(),
                "Then log out and back in."
            )
        }
        _ => format!("{} {}", style("Error:").red().bold(), e),
    }
}

/// Lines written to stderr for a failed command
pub fn format_error(err: &anyhow::Error) -> Vec<String> {
    let error_label = style("Error:").red().bold();

    if let Some(mount_err) = err.downcast_ref::<MountError>() {
        return match mount_err {
            MountError::TargetFailures(failures) => failures
                .iter()
                .map(|failure| format!("{error_label} {failure}"))
                .collect(),
            MountError::Engine(_) => match mount_err.engine_source::<DockerError>() {
                Some(docker_err) => vec![format_docker_error(docker_err)],
                None => vec![format!("{error_label} {mount_err}")],
            },
            other => vec![format!("{error_label} {other}")],
        };
    }

    if let Some(docker_err) = err.downcast_ref::<DockerError>() {
        return vec![format_docker_error(docker_err)];
    }

    vec![format!("{error_label} {err:#}")]
}

/// Print a failed command's error to stderr
pub fn show_error(err: &anyhow::Error) {
    for line in format_error(err) {
        eprintln!("{line}");
    }
}
