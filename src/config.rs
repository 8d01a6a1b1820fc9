use crate::error::{DashboardError, Result};
use crate::filter::FilterSelection;
use crate::types::{Manufacturer, Region};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "dashboard.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub data_path: PathBuf,
    pub output_dir: PathBuf,
    /// Region label, source column or short key.
    pub region: String,
    pub manufacturers: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("vgsales.csv"),
            output_dir: PathBuf::from("output"),
            region: Region::default().label().to_string(),
            manufacturers: Vec::new(),
        }
    }
}

impl Config {
    /// Read `path` if given, else `dashboard.toml` when present, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            DashboardError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Initial session selection described by this config.
    pub fn selection(&self) -> Result<FilterSelection> {
        let region: Region = self.region.parse()?;
        let manufacturers = self
            .manufacturers
            .iter()
            .map(|m| m.parse::<Manufacturer>())
            .collect::<Result<Vec<_>>>()?;
        Ok(FilterSelection::new(region, manufacturers))
    }
}
