use crate::types::{EnrichedRecord, Manufacturer, SalesRecord};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Platform code -> manufacturer of that platform.
pub static PLATFORM_MANUFACTURERS: Lazy<HashMap<&'static str, Manufacturer>> = Lazy::new(|| {
    use Manufacturer::*;
    HashMap::from([
        ("Wii", Nintendo),
        ("NES", Nintendo),
        ("GB", Nintendo),
        ("DS", Nintendo),
        ("X360", Microsoft),
        ("PS3", Sony),
        ("PS2", Sony),
        ("SNES", Nintendo),
        ("GBA", Nintendo),
        ("3DS", Nintendo),
        ("PS4", Sony),
        ("N64", Nintendo),
        ("PS", Sony),
        ("XB", Microsoft),
        ("PC", AllPcs),
        ("2600", Atari),
        ("PSP", Sony),
        ("XOne", Microsoft),
        ("GC", Nintendo),
        ("WiiU", Nintendo),
        ("GEN", Sega),
        ("DC", Sega),
        ("PSV", Sony),
        ("SAT", Sega),
        ("SCD", Sega),
        ("WS", Bandai),
        ("NG", Snk),
        ("TG16", Nec),
        ("3DO", Panasonic),
        ("GG", Sega),
        ("PCFX", Nec),
    ])
});

pub fn manufacturer_for(platform: &str) -> Option<Manufacturer> {
    PLATFORM_MANUFACTURERS.get(platform).copied()
}

/// Attach a manufacturer to every record. Unknown platforms get `None`.
pub fn enrich(records: Vec<SalesRecord>) -> Vec<EnrichedRecord> {
    records
        .into_iter()
        .map(|record| EnrichedRecord {
            manufacturer: manufacturer_for(&record.platform),
            record,
        })
        .collect()
}
