use crate::clean::{CleanReport, EXCLUDED_YEARS};
use crate::dashboard::DashboardView;
use crate::error::Result;
use crate::types::{Manufacturer, TopGame};
use crate::util::{format_int, format_number};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tabled::{builder::Builder, settings::Style, Table};

pub const TITLE: &str = "Video Game Company Analysis";

pub fn header_text() -> String {
    format!(
        "{TITLE}\n\n\
         Video game sales in North America, the EU and Japan between the years 1980 and 2016.\n\
         Data source: https://www.kaggle.com/datasets/gregorut/videogamesales\n\
         Filter by regional sales and by platform manufacturer to explore the data.\n"
    )
}

/// Startup lines describing what the cleaning stage kept and dropped.
pub fn load_summary(report: &CleanReport) -> String {
    let years: Vec<String> = EXCLUDED_YEARS.iter().map(|y| y.to_string()).collect();
    let mut out = format!(
        "Processing dataset... ({} rows loaded, {} kept after excluding {})\n",
        format_int(report.total_rows),
        format_int(report.kept_rows),
        years.join(" and ")
    );
    if report.skipped_rows() > 0 {
        out.push_str(&format!(
            "Note: {} rows skipped due to parse errors.\n",
            format_int(report.skipped_rows())
        ));
    }
    out
}

/// Write rows under an explicit header row, so the value column can carry
/// the selected region's label.
pub fn write_csv<T: Serialize>(path: &Path, header: &[&str], rows: &[T]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    wtr.write_record(header)?;
    for r in rows {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    std::fs::write(path, s)?;
    Ok(())
}

/// Export every table of a view into `dir`, returning the written paths.
pub fn export_view(view: &DashboardView, dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let value_col = view.region.label();

    let series = dir.join("time_series.csv");
    write_csv(&series, &["Manufacturer", "Year", value_col], &view.time_series)?;
    let genres = dir.join("genre_sales.csv");
    write_csv(&genres, &["Genre", "Manufacturer", value_col], &view.genres)?;
    let top = dir.join("top_games.csv");
    write_csv(&top, &["Manufacturer", "Name", "Platform", value_col], &view.top_games)?;
    let json = dir.join("dashboard.json");
    write_json(&json, view)?;

    Ok(vec![series, genres, top, json])
}

/// Pivot `(row key, manufacturer, value)` triples into a table with one
/// column per manufacturer. Empty cells stay blank.
fn pivot<K: Ord + ToString>(corner: &str, cells: impl Iterator<Item = (K, Manufacturer, f64)>) -> Table {
    let mut grid: BTreeMap<K, BTreeMap<&'static str, f64>> = BTreeMap::new();
    let mut columns: BTreeSet<&'static str> = BTreeSet::new();
    for (key, m, v) in cells {
        columns.insert(m.label());
        *grid.entry(key).or_default().entry(m.label()).or_insert(0.0) += v;
    }

    let mut builder = Builder::default();
    let mut head = vec![corner.to_string()];
    head.extend(columns.iter().map(|c| c.to_string()));
    builder.push_record(head);
    for (key, row) in grid {
        let mut record = vec![key.to_string()];
        record.extend(
            columns
                .iter()
                .map(|c| row.get(c).map(|v| format_number(*v, 2)).unwrap_or_default()),
        );
        builder.push_record(record);
    }
    let mut table = builder.build();
    table.with(Style::markdown());
    table
}

/// Split tiles into two columns: even positions left, odd positions right.
pub fn tile_columns(top: &[TopGame]) -> (Vec<&TopGame>, Vec<&TopGame>) {
    let mut left = Vec::new();
    let mut right = Vec::new();
    for (i, t) in top.iter().enumerate() {
        if i % 2 == 0 {
            left.push(t);
        } else {
            right.push(t);
        }
    }
    (left, right)
}

fn tiles_table(top: &[TopGame]) -> Table {
    let (left, right) = tile_columns(top);
    let tile = |t: Option<&&TopGame>| {
        t.map(|t| format!("{}\n{}", t.manufacturer, t.name))
            .unwrap_or_default()
    };
    let mut builder = Builder::default();
    for i in 0..left.len() {
        builder.push_record(vec![tile(left.get(i)), tile(right.get(i))]);
    }
    let mut table = builder.build();
    table.with(Style::rounded());
    table
}

pub fn render_view(view: &DashboardView) -> String {
    let mut out = String::new();
    let region = view.region.label();
    out.push_str(&format!("Region: {region}\n"));
    if view.manufacturers.is_empty() {
        out.push_str("No manufacturers selected.\n");
    } else {
        let names: Vec<&str> = view.manufacturers.iter().map(|m| m.label()).collect();
        out.push_str(&format!("Manufacturers: {}\n", names.join(", ")));
    }
    out.push('\n');

    out.push_str("### Time Series of Video Game Sales (millions of units sold)\n\n");
    if view.time_series.is_empty() {
        out.push_str("(no rows)\n\n");
    } else {
        let cells = view.time_series.iter().map(|p| (p.year, p.manufacturer, p.value));
        out.push_str(&format!("{}\n\n", pivot("Year", cells)));
    }

    out.push_str("### Game Sales by Genre (millions of units sold)\n\n");
    if view.genres.is_empty() {
        out.push_str("(no rows)\n\n");
    } else {
        let cells = view.genres.iter().map(|g| (g.genre.clone(), g.manufacturer, g.value));
        out.push_str(&format!("{}\n\n", pivot("Genre", cells)));
    }

    out.push_str("### Most Popular Games\n\n");
    if view.top_games.is_empty() {
        out.push_str("(no rows)\n");
    } else {
        out.push_str(&format!("{}\n\n", tiles_table(&view.top_games)));
        let mut details = Table::new(&view.top_games);
        details.with(Style::markdown());
        out.push_str(&format!("{details}\n"));
    }
    out
}
