//! Sales dashboard over the historical video game sales dataset.
//!
//! The pipeline runs load → clean → enrich once to build a [`BaseTable`],
//! then filter → aggregate for every [`FilterSelection`].
pub mod clean;
pub mod config;
pub mod dashboard;
pub mod enrich;
pub mod error;
pub mod filter;
pub mod loader;
pub mod logging;
pub mod output;
pub mod reports;
pub mod types;
pub mod util;

pub use dashboard::{BaseTable, Dashboard, DashboardView};
pub use error::{DashboardError, LoadError, RecordError, Result};
pub use filter::FilterSelection;
pub use types::{Manufacturer, Region};
