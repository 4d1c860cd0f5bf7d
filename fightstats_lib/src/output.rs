//! Batch serialization of the final roster.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use fightstats_extract::types::FighterRecord;

use crate::error::CrawlError;

/// Writes the aggregated records to `path` as a pretty-printed JSON array.
pub fn write_json(path: &Path, fighters: &[FighterRecord]) -> Result<(), CrawlError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, fighters)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
