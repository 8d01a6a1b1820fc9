use crate::error::DashboardError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tabled::Tabled;

/// One of the five sales columns a user can drive the dashboard with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    #[default]
    NorthAmerica,
    Europe,
    Japan,
    Other,
    Global,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::NorthAmerica,
        Region::Europe,
        Region::Japan,
        Region::Other,
        Region::Global,
    ];

    /// Presentation label the column is renamed to during cleaning.
    pub fn label(self) -> &'static str {
        match self {
            Region::NorthAmerica => "North America Sales",
            Region::Europe => "EU Sales",
            Region::Japan => "Japan Sales",
            Region::Other => "Other Sales",
            Region::Global => "Global Sales",
        }
    }

    /// Header of the column in the source CSV.
    pub fn source_column(self) -> &'static str {
        match self {
            Region::NorthAmerica => "NA_Sales",
            Region::Europe => "EU_Sales",
            Region::Japan => "JP_Sales",
            Region::Other => "Other_Sales",
            Region::Global => "Global_Sales",
        }
    }

    fn short_key(self) -> &'static str {
        match self {
            Region::NorthAmerica => "na",
            Region::Europe => "eu",
            Region::Japan => "jp",
            Region::Other => "other",
            Region::Global => "global",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Region {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Region::ALL
            .into_iter()
            .find(|r| {
                wanted.eq_ignore_ascii_case(r.label())
                    || wanted.eq_ignore_ascii_case(r.source_column())
                    || wanted.eq_ignore_ascii_case(r.short_key())
            })
            .ok_or_else(|| DashboardError::UnknownRegion(s.to_string()))
    }
}

impl Serialize for Region {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Platform vendor a game's platform is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Manufacturer {
    Nintendo,
    Microsoft,
    Sony,
    AllPcs,
    Atari,
    Sega,
    Bandai,
    Snk,
    Nec,
    Panasonic,
}

impl Manufacturer {
    /// Order of the toggles in the selection menu.
    pub const ALL: [Manufacturer; 10] = [
        Manufacturer::Nintendo,
        Manufacturer::Microsoft,
        Manufacturer::Sony,
        Manufacturer::AllPcs,
        Manufacturer::Atari,
        Manufacturer::Sega,
        Manufacturer::Bandai,
        Manufacturer::Snk,
        Manufacturer::Nec,
        Manufacturer::Panasonic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Manufacturer::Nintendo => "Nintendo",
            Manufacturer::Microsoft => "Microsoft",
            Manufacturer::Sony => "Sony",
            Manufacturer::AllPcs => "All PCs",
            Manufacturer::Atari => "Atari",
            Manufacturer::Sega => "Sega",
            Manufacturer::Bandai => "Bandai",
            Manufacturer::Snk => "SNK",
            Manufacturer::Nec => "NEC",
            Manufacturer::Panasonic => "Panasonic",
        }
    }
}

impl fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Manufacturer {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Manufacturer::ALL
            .into_iter()
            .find(|m| wanted.eq_ignore_ascii_case(m.label()))
            .ok_or_else(|| DashboardError::UnknownManufacturer(s.to_string()))
    }
}

impl Serialize for Manufacturer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Row as it appears in the source file. Everything is kept as text so a
/// single bad cell never rejects the whole row at the CSV layer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Rank")]
    pub rank: Option<String>,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Platform")]
    pub platform: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "Publisher")]
    pub publisher: Option<String>,
    #[serde(rename = "NA_Sales")]
    pub na_sales: Option<String>,
    #[serde(rename = "EU_Sales")]
    pub eu_sales: Option<String>,
    #[serde(rename = "JP_Sales")]
    pub jp_sales: Option<String>,
    #[serde(rename = "Other_Sales")]
    pub other_sales: Option<String>,
    #[serde(rename = "Global_Sales")]
    pub global_sales: Option<String>,
}

/// Units sold in millions, per region. `None` means the cell was empty or
/// not a number.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RegionSales {
    pub north_america: Option<f64>,
    pub europe: Option<f64>,
    pub japan: Option<f64>,
    pub other: Option<f64>,
    pub global: Option<f64>,
}

impl RegionSales {
    pub fn get(&self, region: Region) -> Option<f64> {
        match region {
            Region::NorthAmerica => self.north_america,
            Region::Europe => self.europe,
            Region::Japan => self.japan,
            Region::Other => self.other,
            Region::Global => self.global,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    pub rank: Option<u32>,
    pub name: String,
    pub platform: String,
    /// January 1st of the release year.
    pub released: NaiveDate,
    pub genre: String,
    pub publisher: Option<String>,
    pub sales: RegionSales,
}

impl SalesRecord {
    pub fn year(&self) -> i32 {
        self.released.year()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRecord {
    pub record: SalesRecord,
    pub manufacturer: Option<Manufacturer>,
}

impl EnrichedRecord {
    /// Selected sales figure, with a missing value counting as zero.
    pub fn value(&self, region: Region) -> f64 {
        self.record.sales.get(region).unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    #[serde(rename = "Manufacturer")]
    pub manufacturer: Manufacturer,
    #[serde(rename = "Year")]
    pub year: i32,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreSales {
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "Manufacturer")]
    pub manufacturer: Manufacturer,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct TopGame {
    #[serde(rename = "Manufacturer")]
    #[tabled(rename = "Manufacturer")]
    pub manufacturer: Manufacturer,
    #[serde(rename = "Name")]
    #[tabled(rename = "Name")]
    pub name: String,
    #[serde(rename = "Platform")]
    #[tabled(rename = "Platform")]
    pub platform: String,
    /// `None` when no row of the manufacturer has a figure for the region.
    #[tabled(rename = "Sales", display_with = "display_sales")]
    pub value: Option<f64>,
}

fn display_sales(value: &Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
