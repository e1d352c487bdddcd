//! Target selection and request validation
//!
//! A [`MountRequest`] is built once per invocation from parsed arguments and
//! never changes afterwards. Building it is the only place selection inputs
//! are validated; everything downstream reads the derived [`ReportMode`] and
//! [`Selection`].

use super::error::MountError;

/// Requested output shape for listing mode
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Tab-aligned `<ID> <PATH>` rows
    #[default]
    Default,
    /// Pretty-printed JSON array
    Json,
    /// Any other format string, kept verbatim
    Template(String),
}

impl OutputFormat {
    /// Parse a `--format` value
    ///
    /// Accepts `json` and the template spelling `{{json .}}`, both with
    /// surrounding whitespace. Empty input selects the default table.
    pub fn parse(format: &str) -> Self {
        let trimmed = format.trim();
        if trimmed.is_empty() {
            return Self::Default;
        }
        if trimmed == "json" || is_json_template(trimmed) {
            return Self::Json;
        }
        Self::Template(format.to_string())
    }
}

fn is_json_template(format: &str) -> bool {
    let Some(inner) = format
        .strip_prefix("{{")
        .and_then(|rest| rest.strip_suffix("}}"))
    else {
        return false;
    };
    let words: Vec<&str> = inner.split_whitespace().collect();
    words == ["json", "."]
}

/// How outcomes are reported, derived from the selection inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// Mounts were requested: print one mountpoint per line
    Interactive,
    /// Nothing was selected: report containers that are already mounted
    Listing,
}

/// What the engine is asked to resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Explicit container names or IDs, in the order given
    Named(Vec<String>),
    /// The most recently created container
    Latest,
    /// Every container known to the engine
    All,
    /// Containers whose root filesystem is currently mounted
    Mounted,
}

/// A validated, immutable mount invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountRequest {
    targets: Vec<String>,
    latest: bool,
    all: bool,
    format: OutputFormat,
    no_truncate: bool,
}

impl MountRequest {
    /// Validate selection inputs and build the request
    ///
    /// Fails with [`MountError::ConflictingSelection`] when explicit targets
    /// and `latest` are both given. Every other combination is accepted.
    pub fn new(
        targets: Vec<String>,
        latest: bool,
        all: bool,
        format: OutputFormat,
        no_truncate: bool,
    ) -> Result<Self, MountError> {
        if !targets.is_empty() && latest {
            return Err(MountError::ConflictingSelection);
        }

        Ok(Self {
            targets,
            latest,
            all,
            format,
            no_truncate,
        })
    }

    pub fn format(&self) -> &OutputFormat {
        &self.format
    }

    pub fn no_truncate(&self) -> bool {
        self.no_truncate
    }

    /// Reject a listing format the reporter cannot render
    ///
    /// Runs before the engine is contacted. Interactive mode ignores the
    /// format, so any value passes there.
    pub fn check_format(&self) -> Result<(), MountError> {
        match (&self.format, self.report_mode()) {
            (OutputFormat::Template(format), ReportMode::Listing) => {
                Err(MountError::UnknownFormat(format.clone()))
            }
            _ => Ok(()),
        }
    }

    /// Interactive when anything was selected, listing otherwise
    pub fn report_mode(&self) -> ReportMode {
        if !self.targets.is_empty() || self.latest || self.all {
            ReportMode::Interactive
        } else {
            ReportMode::Listing
        }
    }

    /// The engine-facing view of this request
    ///
    /// `all` takes precedence over explicit targets.
    pub fn selection(&self) -> Selection {
        if self.all {
            Selection::All
        } else if self.latest {
            Selection::Latest
        } else if !self.targets.is_empty() {
            Selection::Named(self.targets.clone())
        } else {
            Selection::Mounted
        }
    }
}
