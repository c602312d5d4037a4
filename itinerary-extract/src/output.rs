//! Rendering of extracted records.

use std::io::{self, Write};

use crate::domain::DatedRecord;
use crate::markup::TokenSource;
use crate::scan::{DocumentScanner, ScanError, ScanSummary};

/// Line format for printed records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Errors while printing records.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("write error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Write one record as a single line.
pub fn write_record<W: Write>(
    out: &mut W,
    record: &DatedRecord,
    format: OutputFormat,
) -> Result<(), OutputError> {
    match format {
        OutputFormat::Text => writeln!(out, "{record}")?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, record)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Print every record the scanner yields, in document order.
///
/// Lines already written stay written if the scan later fails.
pub fn write_records<S, W>(
    scanner: &mut DocumentScanner<S>,
    format: OutputFormat,
    out: &mut W,
) -> Result<ScanSummary, OutputError>
where
    S: TokenSource,
    W: Write,
{
    let result = drain(scanner, format, out);
    out.flush()?;
    result?;
    Ok(scanner.summary())
}

fn drain<S: TokenSource, W: Write>(
    scanner: &mut DocumentScanner<S>,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), OutputError> {
    while let Some(record) = scanner.next_entry()? {
        write_record(out, &record, format)?;
    }
    Ok(())
}
