//! CSV workbook writer
//!
//! Writes each sheet as `<Sheet name>.csv` inside an output directory.

use std::path::{Path, PathBuf};

use crate::error::{FintrackError, FintrackResult};

use super::workbook::Sheet;

/// Write every sheet as a CSV file under `out_dir`, returning file paths
pub fn write_csv_workbook(sheets: &[Sheet], out_dir: &Path) -> FintrackResult<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .map_err(|e| FintrackError::Export(format!("Failed to create output directory: {}", e)))?;

    let mut written = Vec::with_capacity(sheets.len());
    for sheet in sheets {
        let path = out_dir.join(format!("{}.csv", sheet.name));
        let mut writer = csv::Writer::from_path(&path)
            .map_err(|e| FintrackError::Export(format!("Failed to open {}: {}", path.display(), e)))?;

        writer
            .write_record(&sheet.header)
            .map_err(|e| FintrackError::Export(e.to_string()))?;
        for row in &sheet.rows {
            writer
                .write_record(row)
                .map_err(|e| FintrackError::Export(e.to_string()))?;
        }
        writer
            .flush()
            .map_err(|e| FintrackError::Export(e.to_string()))?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::workbook::build_workbook;
    use crate::storage::memory::seed_demo_data;
    use crate::storage::Storage;
    use tempfile::TempDir;

    #[test]
    fn test_writes_one_file_per_sheet() {
        let storage = Storage::in_memory();
        seed_demo_data(&storage).unwrap();
        let sheets = build_workbook(&storage).unwrap();

        let dir = TempDir::new().unwrap();
        let files = write_csv_workbook(&sheets, dir.path()).unwrap();

        assert_eq!(files.len(), sheets.len());
        assert!(dir.path().join("Summary.csv").exists());
    }

    #[test]
    fn test_csv_content_round_trips() {
        let storage = Storage::in_memory();
        seed_demo_data(&storage).unwrap();
        let sheets = build_workbook(&storage).unwrap();

        let dir = TempDir::new().unwrap();
        write_csv_workbook(&sheets, dir.path()).unwrap();

        let mut reader = csv::Reader::from_path(dir.path().join("Income.csv")).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(&headers[0], "Month");
        let rows: Vec<_> = reader.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows.len(), 2);
    }
}
