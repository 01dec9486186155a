// ==========================================
// Inventory Console - CSV file reader
// ==========================================
// Stage 0 of the import pipeline: file -> header labels + row maps.
// Blank rows are skipped. Header normalization happens later; this
// stage returns the labels exactly as they appear in the file.
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// Raw parse result: original header labels plus one map per data row,
/// keyed by the original label.
#[derive(Debug)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

/// One data row with its 1-based position in the source file (header
/// excluded). Numbered before blank rows are skipped, so reported row
/// numbers always match the file the operator is looking at.
#[derive(Debug)]
pub struct RawRow {
    pub row_number: usize,
    pub values: HashMap<String, String>,
}

pub struct CsvReader;

impl CsvReader {
    pub fn read(&self, file_path: &Path) -> ImportResult<RawTable> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(
                file_path.display().to_string(),
            ));
        }

        let ext = file_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // tolerate ragged rows
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result?;
            let mut values = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    values.insert(header.clone(), value.trim().to_string());
                }
            }

            // skip fully blank rows; they keep their slot in the numbering
            if values.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(RawRow {
                row_number: idx + 1,
                values,
            });
        }

        Ok(RawTable { headers, rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_basic() {
        let file = write_csv("id,name,price,stock\nB101,Pen,10,100\nB102,Notebook,50,40\n");

        let table = CsvReader.read(file.path()).unwrap();

        assert_eq!(table.headers, vec!["id", "name", "price", "stock"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].row_number, 1);
        assert_eq!(table.rows[0].values.get("id"), Some(&"B101".to_string()));
        assert_eq!(table.rows[1].row_number, 2);
        assert_eq!(
            table.rows[1].values.get("name"),
            Some(&"Notebook".to_string())
        );
    }

    #[test]
    fn test_read_skips_blank_rows_without_renumbering() {
        let file = write_csv("id,name\nB101,Pen\n,\nB102,Notebook\n");

        let table = CsvReader.read(file.path()).unwrap();
        assert_eq!(table.rows.len(), 2);
        // the blank row keeps its slot: Notebook is still row 3
        assert_eq!(table.rows[0].row_number, 1);
        assert_eq!(table.rows[1].row_number, 3);
    }

    #[test]
    fn test_read_file_not_found() {
        let result = CsvReader.read(Path::new("does_not_exist.csv"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_read_rejects_non_csv_extension() {
        let mut file = Builder::new().suffix(".xlsx").tempfile().unwrap();
        write!(file, "not a csv").unwrap();

        let result = CsvReader.read(file.path());
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }
}
