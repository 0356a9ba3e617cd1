use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context, Result};
use csv::Writer;
use tracing::info;

use crate::record::JobRecord;

/// Write the batch to CSV, header first. The header comes from the fixed
/// schema, which every record shares by construction. An empty batch is a
/// fatal "no data to export" condition, never a silent skip.
pub fn write_csv(records: &[JobRecord], path: &Path) -> Result<()> {
    if records.is_empty() {
        bail!("no data to export: zero postings were collected");
    }

    let file = File::create(path).with_context(|| format!("Failed to create {:?}", path))?;
    let mut writer = Writer::from_writer(file);

    writer.write_record(JobRecord::columns())?;
    for record in records {
        writer.write_record(record.values())?;
    }
    writer.flush()?;

    info!("Exported {} records to {:?}", records.len(), path);
    Ok(())
}

// ── Tests ──
