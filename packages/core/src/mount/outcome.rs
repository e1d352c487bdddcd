//! Per-target mount results

use thiserror::Error;

/// Number of characters shown for a truncated container ID
pub const SHORT_ID_LEN: usize = 12;

/// A single target that could not be mounted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{target}: {reason}")]
pub struct TargetFailure {
    /// The name or ID the caller asked for
    pub target: String,
    pub reason: String,
}

impl TargetFailure {
    pub fn new(target: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            reason: reason.into(),
        }
    }
}

/// Result of resolving one target
///
/// Carries either a mountpoint or a failure, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountOutcome {
    /// Full-length container ID
    pub id: String,
    pub name: String,
    pub result: Result<String, TargetFailure>,
}

impl MountOutcome {
    /// A target whose root filesystem is mounted at `path`
    pub fn mounted(id: impl Into<String>, name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            result: Ok(path.into()),
        }
    }

    /// A target that could not be mounted
    pub fn failed(id: impl Into<String>, name: impl Into<String>, failure: TargetFailure) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            result: Err(failure),
        }
    }

    /// Mountpoint, if the mount succeeded
    pub fn path(&self) -> Option<&str> {
        self.result.as_deref().ok()
    }

    pub fn failure(&self) -> Option<&TargetFailure> {
        self.result.as_ref().err()
    }
}

/// ID as shown in the listing table
///
/// Returns the first [`SHORT_ID_LEN`] characters unless `no_truncate` is set.
pub fn display_id(outcome: &MountOutcome, no_truncate: bool) -> &str {
    let id = outcome.id.as_str();
    if no_truncate {
        return id;
    }
    match id.char_indices().nth(SHORT_ID_LEN) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_ID: &str = "3f4e8b2a9c1d7e6f5a4b3c2d1e0f9a8b7c6d5e4f3a2b1c0d9e8f7a6b5c4d3e2f";

    #[test]
    fn mounted_outcome_has_path_only() {
        let outcome = MountOutcome::mounted(FULL_ID, "web", "/var/lib/docker/overlay2/abc/merged");
        assert_eq!(outcome.path(), Some("/var/lib/docker/overlay2/abc/merged"));
        assert!(outcome.failure().is_none());
    }

    #[test]
    fn failed_outcome_has_failure_only() {
        let outcome = MountOutcome::failed("web", "web", TargetFailure::new("web", "no such container"));
        assert!(outcome.path().is_none());
        assert_eq!(outcome.failure().unwrap().to_string(), "web: no such container");
    }

    #[test]
    fn display_id_truncates_to_twelve() {
        let outcome = MountOutcome::mounted(FULL_ID, "web", "/mnt");
        assert_eq!(display_id(&outcome, false), "3f4e8b2a9c1d");
        assert_eq!(display_id(&outcome, false).len(), SHORT_ID_LEN);
    }

    #[test]
    fn display_id_no_truncate_keeps_full() {
        let outcome = MountOutcome::mounted(FULL_ID, "web", "/mnt");
        assert_eq!(display_id(&outcome, true), FULL_ID);
    }

    #[test]
    fn display_id_short_ids_are_unchanged() {
        let outcome = MountOutcome::mounted("abc123", "web", "/mnt");
        assert_eq!(display_id(&outcome, false), "abc123");

        let outcome = MountOutcome::mounted("0123456789ab", "web", "/mnt");
        assert_eq!(display_id(&outcome, false), "0123456789ab");
    }

    #[test]
    fn display_id_counts_characters_not_bytes() {
        let outcome = MountOutcome::mounted("ééééééééééééé", "web", "/mnt");
        assert_eq!(display_id(&outcome, false), "éééééééééééé");
    }
}
