use crate::types::{EnrichedRecord, Manufacturer, Region};
use std::collections::BTreeSet;

/// Per-session dashboard state: which sales column drives the charts and
/// which manufacturers are ticked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterSelection {
    pub region: Region,
    pub manufacturers: BTreeSet<Manufacturer>,
}

impl FilterSelection {
    pub fn new(region: Region, manufacturers: impl IntoIterator<Item = Manufacturer>) -> Self {
        Self {
            region,
            manufacturers: manufacturers.into_iter().collect(),
        }
    }

    pub fn set_region(&mut self, region: Region) {
        self.region = region;
    }

    /// Flip one manufacturer checkbox. Returns whether it is now selected.
    pub fn toggle(&mut self, manufacturer: Manufacturer) -> bool {
        if self.manufacturers.remove(&manufacturer) {
            false
        } else {
            self.manufacturers.insert(manufacturer);
            true
        }
    }

    pub fn is_selected(&self, manufacturer: Manufacturer) -> bool {
        self.manufacturers.contains(&manufacturer)
    }
}

/// Rows whose manufacturer is selected. An empty selection yields nothing;
/// the region never removes rows.
pub fn filter<'a>(base: &'a [EnrichedRecord], selection: &FilterSelection) -> Vec<&'a EnrichedRecord> {
    if selection.manufacturers.is_empty() {
        return Vec::new();
    }
    base.iter()
        .filter(|r| r.manufacturer.is_some_and(|m| selection.is_selected(m)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::enrich;
    use crate::types::{RegionSales, SalesRecord};
    use chrono::NaiveDate;

    fn base() -> Vec<EnrichedRecord> {
        let rec = |name: &str, platform: &str| SalesRecord {
            rank: None,
            name: name.to_string(),
            platform: platform.to_string(),
            released: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            genre: "Platform".to_string(),
            publisher: None,
            sales: RegionSales::default(),
        };
        enrich(vec![
            rec("Mario", "NES"),
            rec("Sonic", "GEN"),
            rec("Horace", "ZX81"),
            rec("Doom", "PC"),
        ])
    }

    #[test]
    fn empty_selection_is_empty_for_every_region() {
        let base = base();
        for region in Region::ALL {
            let sel = FilterSelection::new(region, []);
            assert!(filter(&base, &sel).is_empty());
        }
    }

    #[test]
    fn keeps_only_selected_manufacturers() {
        let base = base();
        let sel = FilterSelection::new(Region::Global, [Manufacturer::Sega, Manufacturer::AllPcs]);
        let names: Vec<&str> = filter(&base, &sel).iter().map(|r| r.record.name.as_str()).collect();
        assert_eq!(names, vec!["Sonic", "Doom"]);
    }

    #[test]
    fn unknown_platform_never_matches() {
        let base = base();
        let sel = FilterSelection::new(Region::Japan, Manufacturer::ALL);
        let rows = filter(&base, &sel);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.record.platform != "ZX81"));
    }

    #[test]
    fn region_does_not_change_rows() {
        let base = base();
        let a = filter(&base, &FilterSelection::new(Region::Japan, [Manufacturer::Nintendo]));
        let b = filter(&base, &FilterSelection::new(Region::Other, [Manufacturer::Nintendo]));
        assert_eq!(a, b);
    }

    #[test]
    fn toggle_flips_membership() {
        let mut sel = FilterSelection::default();
        assert!(sel.toggle(Manufacturer::Sony));
        assert!(sel.is_selected(Manufacturer::Sony));
        assert!(!sel.toggle(Manufacturer::Sony));
        assert!(sel.manufacturers.is_empty());
        sel.set_region(Region::Europe);
        assert_eq!(sel.region, Region::Europe);
    }
}
