//! Container mount selection and reporting
//!
//! This module provides the mount pipeline shared by every engine:
//! - Request construction and selection validation
//! - Per-target outcomes and ID display rules
//! - The `MountService` engine seam
//! - Batch reporting as plain paths, a table, or JSON

mod error;
mod outcome;
mod report;
mod request;
mod service;

pub use error::{EngineError, MountError};
pub use outcome::{MountOutcome, SHORT_ID_LEN, TargetFailure, display_id};
pub use report::report;
pub use request::{MountRequest, OutputFormat, ReportMode, Selection};
pub use service::{MountService, run_mount};
