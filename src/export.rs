use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use crate::record::{Record, HEADER};

/// Write `records` as CSV to `path`, replacing any existing file.
pub fn write_csv(records: &[Record], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    write_records(records, file)
        .with_context(|| format!("Failed to write CSV to {}", path.display()))
}

/// Header row, then one row per record. Quoting only where a field needs it.
pub fn write_records<W: io::Write>(records: &[Record], writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    wtr.write_record(HEADER)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

// ── Tests ──
