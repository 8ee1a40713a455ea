pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::JobConfig;

pub use adapters::{CsvRenderer, HttpCatalog, InMemoryCatalog, JsonCatalog, TextRenderer};
pub use core::comparison::ComparisonEngine;
pub use domain::model::{
    Cell, CellStyle, ComparisonTable, EquipmentRecord, EquipmentView, GroupRef, PageGeometry,
    PropertyRecord,
};
pub use domain::ports::{CatalogProvider, DocumentRenderer};
pub use utils::error::{CompareError, Result};
