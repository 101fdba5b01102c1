use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::pipeline::error::PipelineError;

/// Sibling `.CSV` path next to a capture file, keeping the capture's stem.
/// The uppercase extension matches what the acquisition tooling has always
/// written, so downstream scripts keep finding the files.
pub fn csv_sibling_path(input: &Path) -> PathBuf {
    input.with_extension("CSV")
}

/// Write a decoded sample sequence as CSV: one integer per line, no header.
pub fn write_csv(samples: &[u64], path: &Path) -> Result<(), PipelineError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for value in samples {
        writeln!(writer, "{value}")?;
    }
    writer.flush()?;
    info!("wrote {} samples to {}", samples.len(), path.display());
    Ok(())
}
