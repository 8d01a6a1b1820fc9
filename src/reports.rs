use crate::types::{EnrichedRecord, GenreSales, Manufacturer, Region, TimeSeriesPoint, TopGame};
use std::collections::HashMap;

/// Sum of the selected region per (manufacturer, year), ordered by year and
/// then manufacturer label.
pub fn time_series(rows: &[&EnrichedRecord], region: Region) -> Vec<TimeSeriesPoint> {
    let mut map: HashMap<(Manufacturer, i32), f64> = HashMap::new();
    for r in rows {
        let Some(manufacturer) = r.manufacturer else { continue };
        *map.entry((manufacturer, r.record.year())).or_insert(0.0) += r.value(region);
    }
    let mut out: Vec<TimeSeriesPoint> = map
        .into_iter()
        .map(|((manufacturer, year), value)| TimeSeriesPoint { manufacturer, year, value })
        .collect();
    out.sort_by(|a, b| {
        a.year
            .cmp(&b.year)
            .then_with(|| a.manufacturer.label().cmp(b.manufacturer.label()))
    });
    out
}

/// Sum of the selected region per (genre, manufacturer), ordered by genre and
/// then manufacturer label.
pub fn genre_breakdown(rows: &[&EnrichedRecord], region: Region) -> Vec<GenreSales> {
    let mut map: HashMap<(&str, Manufacturer), f64> = HashMap::new();
    for r in rows {
        let Some(manufacturer) = r.manufacturer else { continue };
        *map.entry((r.record.genre.as_str(), manufacturer)).or_insert(0.0) += r.value(region);
    }
    let mut out: Vec<GenreSales> = map
        .into_iter()
        .map(|((genre, manufacturer), value)| GenreSales {
            genre: genre.to_string(),
            manufacturer,
            value,
        })
        .collect();
    out.sort_by(|a, b| {
        a.genre
            .cmp(&b.genre)
            .then_with(|| a.manufacturer.label().cmp(b.manufacturer.label()))
    });
    out
}

/// Best-selling game per manufacturer in the selected region.
///
/// Every manufacturer present in `rows` gets one entry. Rows without a
/// figure for the region never beat a row that has one; on an exact tie the
/// row seen first in `rows` is kept. A manufacturer whose rows all lack the
/// figure keeps its first row with no value.
pub fn top_games(rows: &[&EnrichedRecord], region: Region) -> Vec<TopGame> {
    let mut best: HashMap<Manufacturer, (&EnrichedRecord, Option<f64>)> = HashMap::new();
    for &r in rows {
        let Some(manufacturer) = r.manufacturer else { continue };
        let value = r.record.sales.get(region);
        best.entry(manufacturer)
            .and_modify(|cur| {
                if let Some(v) = value {
                    if cur.1.map_or(true, |c| v > c) {
                        *cur = (r, value);
                    }
                }
            })
            .or_insert((r, value));
    }
    let mut out: Vec<TopGame> = best
        .into_iter()
        .map(|(manufacturer, (r, value))| TopGame {
            manufacturer,
            name: r.record.name.clone(),
            platform: r.record.platform.clone(),
            value,
        })
        .collect();
    out.sort_by(|a, b| a.manufacturer.label().cmp(b.manufacturer.label()));
    out
}
