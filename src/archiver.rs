use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tracing::info;

use crate::error::WriteError;
use crate::models::JobRecord;

/// Lets spreadsheet apps detect the file as UTF-8.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub fn default_output_path(dir: &Path, at: &NaiveDateTime) -> PathBuf {
    dir.join(format!("job_listings_{}.csv", at.format("%Y%m%d_%H%M%S")))
}

/// Writes `records` as CSV and returns where they went. An empty slice is a
/// no-op: nothing is created and `Ok(None)` comes back.
pub fn save_to_csv(
    records: &[JobRecord],
    filename: Option<&Path>,
    dir: &Path,
) -> Result<Option<PathBuf>, WriteError> {
    if records.is_empty() {
        info!("No data to save");
        return Ok(None);
    }

    fs::create_dir_all(dir)?;
    let path = match filename {
        Some(p) => p.to_path_buf(),
        None => default_output_path(dir, &Local::now().naive_local()),
    };

    let mut file = File::create(&path)?;
    file.write_all(UTF8_BOM)?;
    let mut writer = csv::Writer::from_writer(file);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    info!("Data successfully saved to: {}", path.display());
    Ok(Some(path))
}
