use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::report::row::{FaceRecord, HEADER};

/// Write the header and one line per record to `path`
///
/// A run that produced no records still writes the header so downstream
/// tooling sees the expected columns.
pub fn write_report(path: &Path, records: &[FaceRecord]) -> Result<()> {
    if records.is_empty() {
        warn!("No results to write, report will only contain a header");
    }

    let file = File::create(path)
        .with_context(|| format!("Can't create report file {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", HEADER.join(","))?;
    for record in records {
        writeln!(writer, "{}", record.to_csv_line())?;
    }
    writer.flush()?;

    info!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}
