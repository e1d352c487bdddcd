//! Errors raised while selecting, mounting, and reporting containers

use std::error::Error as StdError;

use thiserror::Error;

use super::outcome::TargetFailure;
use crate::docker::DockerError;

/// Error type any `MountService` implementation can report
pub type EngineError = Box<dyn StdError + Send + Sync + 'static>;

/// Errors that can occur during a mount invocation
///
/// `ConflictingSelection` and `UnknownFormat` are raised before any engine
/// call or output. `TargetFailures` is only returned after every successful
/// mountpoint has been written.
#[derive(Error, Debug)]
pub enum MountError {
    /// Positional containers and `--latest` were both given
    #[error("--latest and containers cannot be used together")]
    ConflictingSelection,

    /// The `--format` value is not understood in listing mode
    #[error("unknown --format argument: {0:?}")]
    UnknownFormat(String),

    /// The batch request to the container engine failed as a whole
    #[error("{0}")]
    Engine(EngineError),

    /// One or more targets could not be mounted
    #[error("{}", format_failures(.0))]
    TargetFailures(Vec<TargetFailure>),

    /// Writing the report failed
    #[error("Failed to write mount report: {0}")]
    Output(#[from] std::io::Error),

    /// Serializing the JSON report failed
    #[error("Failed to encode mount report as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl MountError {
    /// Wrap an engine-specific error
    pub fn engine(err: impl StdError + Send + Sync + 'static) -> Self {
        Self::Engine(Box::new(err))
    }

    /// The engine error, if it came from `E`
    pub fn engine_source<E: StdError + 'static>(&self) -> Option<&E> {
        match self {
            Self::Engine(err) => err.downcast_ref::<E>(),
            _ => None,
        }
    }
}

impl From<DockerError> for MountError {
    fn from(err: DockerError) -> Self {
        Self::engine(err)
    }
}

fn format_failures(failures: &[TargetFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
