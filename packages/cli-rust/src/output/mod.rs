//! Output utilities for CLI commands
//!
//! Centralized error formatting so every command reports failures the
//! same way on stderr.

pub mod errors;

pub use errors::{format_docker_error, format_error, show_error};
