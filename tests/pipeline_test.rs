use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use vgsales_dashboard::output::export_view;
use vgsales_dashboard::{BaseTable, Dashboard, FilterSelection, LoadError, Manufacturer, Region};

const HEADER: &str =
    "Rank,Name,Platform,Year,Genre,Publisher,NA_Sales,EU_Sales,JP_Sales,Other_Sales,Global_Sales";

fn write_dataset(dir: &TempDir, rows: &[&str]) -> PathBuf {
    let path = dir.path().join("vgsales.csv");
    let mut body = String::from(HEADER);
    body.push('\n');
    for r in rows {
        body.push_str(r);
        body.push('\n');
    }
    fs::write(&path, body).unwrap();
    path
}

fn sample(dir: &TempDir) -> PathBuf {
    write_dataset(
        dir,
        &[
            "1,Wii Sports,Wii,2006,Sports,Nintendo,41.49,29.02,3.77,8.46,82.74",
            "2,Mario Kart Wii,Wii,2008,Racing,Nintendo,15.85,12.88,3.79,3.31,35.82",
            "3,Gran Turismo 4,PS2,2004,Racing,Sony Computer Entertainment,3.01,0.01,1.1,7.53,11.65",
            "4,Ratchet & Clank,PS2,2004,Platform,Sony Computer Entertainment,1.0,0.5,0.2,1.3,3.0",
            "5,Halo 3,X360,2007,Shooter,Microsoft Game Studios,7.97,2.81,0.13,1.21,12.12",
            "6,Horace Goes Skiing,ZX81,1982,Sports,Melbourne House,0.1,0.1,0,0,0.2",
            "7,Phantasy Star Online 2 Episode 4,PS4,2017,Role-Playing,Sega,0,0,0.01,0,0.01",
            "8,Imagine: Makeup Artist,DS,2020,Simulation,Ubisoft,0.27,0,0,0.02,0.29",
            "9,Madden NFL 2004,PS2,N/A,Sports,Electronic Arts,4.26,0.26,0.01,0.71,5.23",
        ],
    )
}

#[test]
fn loads_cleans_and_enriches_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let (base, report) = BaseTable::load(sample(&dir)).unwrap();

    assert_eq!(report.total_rows, 9);
    assert_eq!(report.kept_rows, 6);
    assert_eq!(report.excluded_rows, 2);
    assert_eq!(report.bad_year_rows, 1);

    for r in base.records() {
        assert!(![2017, 2020].contains(&r.record.year()));
        if r.record.platform == "ZX81" {
            assert_eq!(r.manufacturer, None);
        } else {
            assert!(r.manufacturer.is_some());
        }
    }
}

#[test]
fn sony_2004_points_are_summed() {
    let dir = tempfile::tempdir().unwrap();
    let (base, _) = BaseTable::load(sample(&dir)).unwrap();
    let dashboard = Dashboard::new(base);

    let view = dashboard.view(&FilterSelection::new(Region::Global, [Manufacturer::Sony]));
    assert_eq!(view.time_series.len(), 1);
    let point = &view.time_series[0];
    assert_eq!((point.manufacturer, point.year), (Manufacturer::Sony, 2004));
    assert!((point.value - 14.65).abs() < 1e-9);
    assert_eq!(view.top_games[0].name, "Gran Turismo 4");
}

#[test]
fn region_choice_changes_values_not_rows() {
    let dir = tempfile::tempdir().unwrap();
    let (base, _) = BaseTable::load(sample(&dir)).unwrap();
    let dashboard = Dashboard::new(base);
    let selected = [Manufacturer::Sony, Manufacturer::Microsoft];

    let global = dashboard.view(&FilterSelection::new(Region::Global, selected));
    let other = dashboard.view(&FilterSelection::new(Region::Other, selected));
    assert_eq!(global.row_count, other.row_count);

    // "Other Sales" reads the Other_Sales column.
    let sony_other = other
        .time_series
        .iter()
        .find(|p| p.manufacturer == Manufacturer::Sony)
        .unwrap();
    assert!((sony_other.value - 8.83).abs() < 1e-9);
    let sony_top = other
        .top_games
        .iter()
        .find(|t| t.manufacturer == Manufacturer::Sony)
        .unwrap();
    assert_eq!(sony_top.name, "Gran Turismo 4");
}

#[test]
fn no_selection_means_empty_view() {
    let dir = tempfile::tempdir().unwrap();
    let (base, _) = BaseTable::load(sample(&dir)).unwrap();
    let dashboard = Dashboard::new(base);
    for region in Region::ALL {
        let view = dashboard.view(&FilterSelection::new(region, []));
        assert_eq!(view.row_count, 0);
        assert!(view.top_games.is_empty());
    }
}

#[test]
fn every_manufacturer_selected_still_skips_unknown_platforms() {
    let dir = tempfile::tempdir().unwrap();
    let (base, _) = BaseTable::load(sample(&dir)).unwrap();
    let dashboard = Dashboard::new(base);
    let view = dashboard.view(&FilterSelection::new(Region::Global, Manufacturer::ALL));
    assert_eq!(view.row_count, 5);
    assert!(view.top_games.iter().all(|t| t.name != "Horace Goes Skiing"));
    let labels: Vec<&str> = view.top_games.iter().map(|t| t.manufacturer.label()).collect();
    assert_eq!(labels, vec!["Microsoft", "Nintendo", "Sony"]);
}

#[test]
fn manufacturers_without_region_figures_still_get_tiles() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dataset(
        &dir,
        &[
            "1,Wii Sports,Wii,2006,Sports,Nintendo,41.49,29.02,,8.46,82.74",
            "2,Halo 3,X360,2007,Shooter,Microsoft Game Studios,7.97,2.81,,1.21,12.12",
        ],
    );
    let (base, _) = BaseTable::load(path).unwrap();
    let dashboard = Dashboard::new(base);
    let view = dashboard.view(&FilterSelection::new(
        Region::Japan,
        [Manufacturer::Nintendo, Manufacturer::Microsoft],
    ));
    assert_eq!(view.row_count, 2);
    assert_eq!(view.top_games.len(), 2);
    assert!(view.top_games.iter().all(|t| t.value.is_none()));
    let names: Vec<&str> = view.top_games.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Halo 3", "Wii Sports"]);
}

#[test]
fn missing_file_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let err = BaseTable::load(dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, LoadError::Open { .. }));
    assert!(err.to_string().contains("absent.csv"));
}

#[test]
fn wrong_header_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("other.csv");
    fs::write(&path, "Title,Console,Released\nWii Sports,Wii,2006\n").unwrap();
    match BaseTable::load(&path) {
        Err(LoadError::Schema { missing, .. }) => {
            assert!(missing.contains(&"Platform".to_string()));
            assert!(missing.contains(&"Global_Sales".to_string()));
        }
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn export_writes_all_tables() {
    let dir = tempfile::tempdir().unwrap();
    let (base, _) = BaseTable::load(sample(&dir)).unwrap();
    let dashboard = Dashboard::new(base);
    let view = dashboard.view(&FilterSelection::new(Region::Europe, [Manufacturer::Nintendo]));

    let out = dir.path().join("out");
    let written = export_view(&view, &out).unwrap();
    assert!(written.iter().all(|p| p.exists()));

    let genres = fs::read_to_string(out.join("genre_sales.csv")).unwrap();
    let lines: Vec<&str> = genres.lines().collect();
    assert_eq!(
        lines,
        vec!["Genre,Manufacturer,EU Sales", "Racing,Nintendo,12.88", "Sports,Nintendo,29.02"]
    );
}
