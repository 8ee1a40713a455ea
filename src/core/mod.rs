pub mod aggregator;
pub mod comparison;
pub mod layout;
pub mod normalizer;

pub use crate::domain::model::{
    Cell, CellStyle, ComparisonTable, EquipmentRecord, EquipmentView, PageGeometry,
};
pub use crate::domain::ports::{CatalogProvider, DocumentRenderer};
pub use crate::utils::error::Result;
