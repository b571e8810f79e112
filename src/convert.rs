use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, error, info, warn};

use crate::{export, parser};

/// Outcome of one conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub entries: usize,
    pub written: bool,
}

/// Convert the export at `input` into CSV at `output`.
///
/// When no entry survives parsing the output path is left untouched and the
/// run still succeeds. Errors are logged here before being handed back.
pub fn run(input: &Path, output: &Path) -> Result<Summary> {
    convert(input, output).inspect_err(|e| error!(error = ?e, "Error processing file"))
}

fn convert(input: &Path, output: &Path) -> Result<Summary> {
    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read export file {}", input.display()))?;

    let parser::ParsedExport { blocks, records } = parser::parse_export(&content);
    debug!(blocks, kept = records.len(), dropped = blocks - records.len(), "Parsed export");

    if records.is_empty() {
        warn!(input = %input.display(), "No password entries found in the file");
        return Ok(Summary {
            entries: 0,
            written: false,
        });
    }

    info!(entries = records.len(), "Found password entries");
    export::write_csv(&records, output)?;
    info!(output = %output.display(), entries = records.len(), "Converted to CSV");

    Ok(Summary {
        entries: records.len(),
        written: true,
    })
}

// ── Tests ──
