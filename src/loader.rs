use crate::error::{LoadError, RecordError};
use crate::types::RawRow;
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;
use std::path::Path;

/// Columns the pipeline reads. Anything else in the file is ignored.
pub const REQUIRED_COLUMNS: [&str; 11] = [
    "Rank",
    "Name",
    "Platform",
    "Year",
    "Genre",
    "Publisher",
    "NA_Sales",
    "EU_Sales",
    "JP_Sales",
    "Other_Sales",
    "Global_Sales",
];

#[derive(Debug, Clone)]
pub struct RawRecord {
    /// 1-based line in the source file.
    pub line: u64,
    pub row: RawRow,
}

#[derive(Debug, Default)]
pub struct RawDataset {
    pub rows: Vec<RawRecord>,
    pub rejected: Vec<RecordError>,
}

impl RawDataset {
    pub fn total_rows(&self) -> usize {
        self.rows.len() + self.rejected.len()
    }
}

pub fn load_raw(path: impl AsRef<Path>) -> Result<RawDataset, LoadError> {
    let path = path.as_ref();
    let rdr = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    read_rows(rdr, path)
}

/// Same as [`load_raw`] over an in-memory source; `origin` names it in errors.
pub fn load_raw_from_reader<R: Read>(reader: R, origin: &str) -> Result<RawDataset, LoadError> {
    let rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    read_rows(rdr, Path::new(origin))
}

fn read_rows<R: Read>(mut rdr: csv::Reader<R>, path: &Path) -> Result<RawDataset, LoadError> {
    let headers = rdr
        .headers()
        .map_err(|source| LoadError::Header {
            path: path.to_path_buf(),
            source,
        })?
        .clone();
    check_schema(&headers, path)?;

    let mut dataset = RawDataset::default();
    let mut record = StringRecord::new();
    loop {
        match rdr.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {
                let line = record.position().map(|p| p.line()).unwrap_or(0);
                match record.deserialize::<RawRow>(Some(&headers)) {
                    Ok(row) => dataset.rows.push(RawRecord { line, row }),
                    Err(e) => dataset.rejected.push(RecordError::Malformed {
                        line,
                        message: e.to_string(),
                    }),
                }
            }
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or(0);
                // Invalid UTF-8 and similar are per-row; I/O failures are not.
                let is_io = matches!(e.kind(), csv::ErrorKind::Io(_));
                if is_io {
                    return Err(LoadError::Open {
                        path: path.to_path_buf(),
                        source: e,
                    });
                }
                dataset.rejected.push(RecordError::Malformed {
                    line,
                    message: e.to_string(),
                });
            }
        }
    }
    Ok(dataset)
}

fn check_schema(headers: &StringRecord, path: &Path) -> Result<(), LoadError> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h.trim() == **col))
        .map(|col| col.to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(LoadError::Schema {
            path: path.to_path_buf(),
            missing,
        })
    }
}
