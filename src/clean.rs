use crate::error::RecordError;
use crate::loader::{RawDataset, RawRecord};
use crate::types::{RegionSales, SalesRecord};
use crate::util::{clean_text, parse_f64_safe, parse_u32_safe, parse_year};
use tracing::debug;

/// Years with incomplete platform coverage in the source dataset.
pub const EXCLUDED_YEARS: [i32; 2] = [2017, 2020];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanReport {
    pub total_rows: usize,
    pub kept_rows: usize,
    pub malformed_rows: usize,
    pub bad_year_rows: usize,
    pub excluded_rows: usize,
    pub errors: Vec<RecordError>,
}

impl CleanReport {
    pub fn skipped_rows(&self) -> usize {
        self.malformed_rows + self.bad_year_rows
    }
}

/// Turn raw rows into typed sales records, dropping rows whose year cannot
/// be parsed and rows from the excluded reporting years.
pub fn clean(raw: RawDataset) -> (Vec<SalesRecord>, CleanReport) {
    let mut report = CleanReport {
        total_rows: raw.total_rows(),
        malformed_rows: raw.rejected.len(),
        errors: raw.rejected,
        ..CleanReport::default()
    };
    let mut records = Vec::with_capacity(raw.rows.len());

    for entry in raw.rows {
        match clean_row(entry) {
            Ok(rec) if EXCLUDED_YEARS.contains(&rec.year()) => report.excluded_rows += 1,
            Ok(rec) => records.push(rec),
            Err(e) => {
                debug!(error = %e, "skipping row");
                report.bad_year_rows += 1;
                report.errors.push(e);
            }
        }
    }

    report.kept_rows = records.len();
    (records, report)
}

fn clean_row(entry: RawRecord) -> Result<SalesRecord, RecordError> {
    let RawRecord { line, row } = entry;
    let year_text = row.year.unwrap_or_default();
    let released = parse_year(&year_text).ok_or_else(|| RecordError::Year {
        line,
        value: year_text.clone(),
    })?;

    let sales = RegionSales {
        north_america: parse_f64_safe(row.na_sales.as_deref()),
        europe: parse_f64_safe(row.eu_sales.as_deref()),
        japan: parse_f64_safe(row.jp_sales.as_deref()),
        other: parse_f64_safe(row.other_sales.as_deref()),
        global: parse_f64_safe(row.global_sales.as_deref()),
    };

    Ok(SalesRecord {
        rank: parse_u32_safe(row.rank.as_deref()),
        name: clean_text(row.name).unwrap_or_default(),
        platform: clean_text(row.platform).unwrap_or_default(),
        released,
        genre: clean_text(row.genre).unwrap_or_else(|| "Unknown".to_string()),
        publisher: clean_text(row.publisher),
        sales,
    })
}
