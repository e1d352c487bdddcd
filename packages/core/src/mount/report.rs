//! Batch result reporting
//!
//! Interactive mode prints one mountpoint per line for scripting and defers
//! per-target failures until every path has been written. Listing mode renders
//! already-mounted containers as a borderless table or as JSON.

use std::io::Write;

use comfy_table::{Cell, Table, presets::NOTHING};
use serde::Serialize;

use super::error::MountError;
use super::outcome::{MountOutcome, display_id};
use super::request::{MountRequest, OutputFormat, ReportMode};

/// Minimum width of a listing table column, padding included
const MIN_COLUMN_WIDTH: u16 = 8;

/// Spaces between listing table columns
const COLUMN_PADDING: u16 = 2;

/// JSON shape of one listed mount
#[derive(Serialize)]
struct JsonMount<'a> {
    id: &'a str,
    /// Always a single name for now
    names: [&'a str; 1],
    mountpoint: &'a str,
}

/// Render `outcomes` for `request` into `out`
///
/// Consumes the outcomes. In interactive mode a
/// [`MountError::TargetFailures`] is returned only after all successful
/// paths were written.
pub fn report<W: Write>(
    request: &MountRequest,
    outcomes: Vec<MountOutcome>,
    out: &mut W,
) -> Result<(), MountError> {
    match request.report_mode() {
        ReportMode::Interactive => report_mounted_paths(outcomes, out),
        ReportMode::Listing => report_listing(request, &outcomes, out),
    }
}

fn report_mounted_paths<W: Write>(
    outcomes: Vec<MountOutcome>,
    out: &mut W,
) -> Result<(), MountError> {
    let mut failures = Vec::new();
    for outcome in outcomes {
        match outcome.result {
            Ok(path) => writeln!(out, "{path}")?,
            Err(failure) => failures.push(failure),
        }
    }
    out.flush()?;

    if failures.is_empty() {
        Ok(())
    } else {
        tracing::debug!("{} target(s) failed to mount", failures.len());
        Err(MountError::TargetFailures(failures))
    }
}

fn report_listing<W: Write>(
    request: &MountRequest,
    outcomes: &[MountOutcome],
    out: &mut W,
) -> Result<(), MountError> {
    let rendered = match request.format() {
        OutputFormat::Json => render_json(outcomes)?,
        OutputFormat::Default => render_table(outcomes, request.no_truncate()),
        OutputFormat::Template(format) => return Err(MountError::UnknownFormat(format.clone())),
    };

    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn render_json(outcomes: &[MountOutcome]) -> Result<String, MountError> {
    let mounts: Vec<JsonMount<'_>> = outcomes
        .iter()
        .map(|outcome| JsonMount {
            id: &outcome.id,
            names: [outcome.name.as_str()],
            mountpoint: outcome.path().unwrap_or_default(),
        })
        .collect();

    let mut json = serde_json::to_string_pretty(&mounts)?;
    json.push('\n');
    Ok(json)
}

fn render_table(outcomes: &[MountOutcome], no_truncate: bool) -> String {
    if outcomes.is_empty() {
        return String::new();
    }

    // Only the ID column goes through the table; the path is the last
    // column and is appended as written, so it is never padded or trimmed.
    let mut table = Table::new();
    table.load_preset(NOTHING);
    // Short cells are widened so the column never drops below MIN_COLUMN_WIDTH
    let min_cell_width = usize::from(MIN_COLUMN_WIDTH - COLUMN_PADDING);
    for outcome in outcomes {
        table.add_row(vec![Cell::new(format!(
            "{:<min_cell_width$}",
            display_id(outcome, no_truncate)
        ))]);
    }
    for column in table.column_iter_mut() {
        column.set_padding((0, COLUMN_PADDING));
    }

    // Borderless preset: exactly one line per row
    let mut rendered = String::new();
    for (id_cell, outcome) in table.lines().zip(outcomes) {
        rendered.push_str(&id_cell);
        rendered.push_str(outcome.path().unwrap_or_default());
        rendered.push('\n');
    }
    rendered
}
