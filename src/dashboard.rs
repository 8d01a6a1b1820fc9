use crate::clean::{clean, CleanReport};
use crate::enrich::enrich;
use crate::error::LoadError;
use crate::filter::{filter, FilterSelection};
use crate::loader::{load_raw, RawDataset};
use crate::reports::{genre_breakdown, time_series, top_games};
use crate::types::{EnrichedRecord, GenreSales, Manufacturer, Region, TimeSeriesPoint, TopGame};
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// The cleaned and enriched dataset. Never mutated after load, so clones
/// share the same rows.
#[derive(Debug, Clone)]
pub struct BaseTable {
    records: Arc<[EnrichedRecord]>,
}

impl BaseTable {
    pub fn load(path: impl AsRef<Path>) -> Result<(Self, CleanReport), LoadError> {
        let path = path.as_ref();
        let raw = load_raw(path)?;
        let (table, report) = Self::from_raw(raw);
        info!(
            path = %path.display(),
            total = report.total_rows,
            kept = report.kept_rows,
            skipped = report.skipped_rows(),
            excluded = report.excluded_rows,
            "dataset loaded"
        );
        Ok((table, report))
    }

    pub fn from_raw(raw: RawDataset) -> (Self, CleanReport) {
        let (records, report) = clean(raw);
        (Self::from_records(enrich(records)), report)
    }

    pub fn from_records(records: Vec<EnrichedRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn records(&self) -> &[EnrichedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Everything the presentation surface needs for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub region: Region,
    pub manufacturers: Vec<Manufacturer>,
    pub row_count: usize,
    pub time_series: Vec<TimeSeriesPoint>,
    pub genres: Vec<GenreSales>,
    pub top_games: Vec<TopGame>,
}

/// Computes views over a shared base table, remembering each selection's
/// result.
#[derive(Debug)]
pub struct Dashboard {
    base: BaseTable,
    cache: Mutex<HashMap<FilterSelection, Arc<DashboardView>>>,
}

impl Dashboard {
    pub fn new(base: BaseTable) -> Self {
        Self {
            base,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn base(&self) -> &BaseTable {
        &self.base
    }

    pub fn view(&self, selection: &FilterSelection) -> Arc<DashboardView> {
        // A poisoned cache only means another view panicked; the map itself
        // is still consistent.
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(view) = cache.get(selection) {
            return Arc::clone(view);
        }
        let view = Arc::new(compute_view(&self.base, selection));
        cache.insert(selection.clone(), Arc::clone(&view));
        view
    }
}

pub fn compute_view(base: &BaseTable, selection: &FilterSelection) -> DashboardView {
    let rows = filter(base.records(), selection);
    let region = selection.region;
    debug!(region = %region, selected = selection.manufacturers.len(), rows = rows.len(), "recomputing view");
    DashboardView {
        region,
        manufacturers: selection.manufacturers.iter().copied().collect(),
        row_count: rows.len(),
        time_series: time_series(&rows, region),
        genres: genre_breakdown(&rows, region),
        top_games: top_games(&rows, region),
    }
}
